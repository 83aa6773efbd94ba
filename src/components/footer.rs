use leptos::prelude::*;
use penta_ui::SectionId;

use super::icons::{Facebook, Instagram, Mail};
use crate::data;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-gradient-to-br from-gray-50 to-white py-12">
            <div class="container mx-auto px-4">
                <div class="grid md:grid-cols-3 gap-8">
                    <div>
                        <div class="flex items-center space-x-3 mb-4">
                            <img
                                src="/public/logo.png"
                                alt="Penta Traders Logo"
                                class="w-16 h-16 object-contain"
                            />
                        </div>
                        <p class="text-gray-700 mb-6 max-w-md">
                            "Trusted exporter from Pakistan. Authentic products, professional service, and global reach."
                        </p>
                        <div class="flex space-x-4">
                            <a
                                href=format!("mailto:{}", data::CONTACT_EMAIL)
                                class="w-8 h-8 bg-gray-200 rounded-full flex items-center justify-center hover:bg-gray-300 transition-colors"
                            >
                                <Mail class="w-4 h-4 text-gray-700" />
                            </a>
                            <a
                                href=data::FACEBOOK_URL
                                target="_blank"
                                rel="noopener noreferrer"
                                class="w-8 h-8 bg-gray-200 rounded-full flex items-center justify-center hover:bg-gray-300 transition-colors"
                            >
                                <Facebook class="w-4 h-4 text-gray-700" />
                            </a>
                            <a
                                href=data::INSTAGRAM_URL
                                target="_blank"
                                rel="noopener noreferrer"
                                class="w-8 h-8 bg-gray-200 rounded-full flex items-center justify-center hover:bg-gray-300 transition-colors"
                            >
                                <Instagram class="w-4 h-4 text-gray-700" />
                            </a>
                        </div>
                    </div>

                    <div>
                        <h3 class="text-lg font-semibold mb-4 text-gray-800">"Contact"</h3>
                        <p class="text-gray-700 mb-2">{format!("Address: {}", data::CONTACT_ADDRESS)}</p>
                        <a
                            href=format!("mailto:{}", data::CONTACT_EMAIL)
                            class="text-gray-700 hover:text-gray-900 transition-colors"
                        >
                            {format!("Email: {}", data::CONTACT_EMAIL)}
                        </a>
                    </div>

                    <div>
                        <h3 class="text-lg font-semibold mb-4 text-gray-800">"Navigation"</h3>
                        <ul class="flex flex-wrap gap-4">
                            {SectionId::ALL
                                .iter()
                                .map(|&section| {
                                    view! {
                                        <li>
                                            <a
                                                href=section.href()
                                                class="text-gray-700 hover:text-gray-900 transition-colors"
                                            >
                                                {section.label()}
                                            </a>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>
                </div>

                <div class="border-t border-gray-300 mt-8 pt-8">
                    <p class="text-gray-700 text-sm">"\u{00A9} 2025 Penta Traders. All rights reserved."</p>
                </div>
            </div>
        </footer>
    }
}
