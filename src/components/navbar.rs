use leptos::prelude::*;
use penta_ui::{Message, SectionId};

use super::icons::Menu;
use crate::viewport::ViewportUi;

/// Sections shown as nav links; Contact is reached through the CTA button.
const NAV_SECTIONS: [SectionId; 4] = [
    SectionId::Home,
    SectionId::About,
    SectionId::Products,
    SectionId::Memberships,
];

#[component]
pub fn Navbar() -> impl IntoView {
    let ui = expect_context::<ViewportUi>();

    view! {
        <header class="sticky top-0 left-0 right-0 z-50 bg-white/90 backdrop-blur-md border-b border-gray-200 shadow-sm">
            <div class="max-w-7xl mx-auto px-4 md:px-6 py-3">
                <nav class="flex items-center justify-between">
                    <a href="#home" on:click=move |_| ui.dispatch(Message::MenuClosed)>
                        <img
                            src="/public/logo.png"
                            alt="Penta Traders Logo"
                            class="h-12 md:h-16 w-auto object-contain"
                        />
                    </a>

                    <div class="hidden lg:flex items-center space-x-8 xl:space-x-12">
                        {NAV_SECTIONS
                            .iter()
                            .map(|&section| view! { <NavLink section /> })
                            .collect_view()}
                    </div>

                    <div class="hidden lg:block">
                        <a
                            href="#contact"
                            class="inline-block bg-[#023047] text-white px-4 md:px-6 py-2 md:py-3 rounded-full font-semibold hover:opacity-90 transition-all duration-300 hover:shadow-lg text-sm md:text-base"
                        >
                            "Request a Quote"
                        </a>
                    </div>

                    <button
                        class="lg:hidden p-2 rounded-lg hover:bg-gray-100 transition-colors"
                        aria-label="Toggle mobile menu"
                        aria-expanded=move || if ui.menu_open() { "true" } else { "false" }
                        on:click=move |_| ui.dispatch(Message::MenuToggled)
                    >
                        <Menu class="w-6 h-6 text-gray-700" />
                    </button>
                </nav>

                {move || ui.menu_open().then(|| view! { <MobileMenu /> })}
            </div>
        </header>
    }
}

#[component]
fn NavLink(section: SectionId) -> impl IntoView {
    let ui = expect_context::<ViewportUi>();

    view! {
        <a
            href=section.href()
            class=move || {
                if ui.active_section() == section {
                    "text-gray-900 border-b-2 border-yellow-500 transition-colors font-medium"
                } else {
                    "text-gray-700 hover:text-gray-900 transition-colors font-medium"
                }
            }
        >
            {section.label()}
        </a>
    }
}

#[component]
fn MobileMenu() -> impl IntoView {
    let ui = expect_context::<ViewportUi>();
    let close = move |_| ui.dispatch(Message::MenuClosed);

    view! {
        <div class="lg:hidden mt-4 pb-4 border-t border-gray-200">
            <div class="flex flex-col space-y-4 pt-4">
                {NAV_SECTIONS
                    .iter()
                    .map(|&section| {
                        view! {
                            <a
                                href=section.href()
                                class="text-gray-700 hover:text-gray-900 transition-colors font-medium py-2 px-3 rounded-lg hover:bg-gray-50"
                                on:click=close
                            >
                                {section.label()}
                            </a>
                        }
                    })
                    .collect_view()}
                <a
                    href="#contact"
                    class="bg-[#023047] text-white px-4 py-3 rounded-full font-semibold hover:opacity-90 transition-all duration-300 text-center mt-2"
                    on:click=close
                >
                    "Request a Quote"
                </a>
            </div>
        </div>
    }
}
