use leptos::prelude::*;

use super::icons::{Lamp, Star};
use crate::data;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="py-16 md:py-24 bg-white scroll-mt-20">
            <div class="container mx-auto px-4">
                <div class="max-w-7xl mx-auto">
                    <div class="bg-white rounded-2xl shadow-xl p-8 md:p-12 mb-16 border border-gray-100">
                        <div class="grid lg:grid-cols-2 gap-12 lg:gap-16">
                            <div>
                                <span class="text-sm text-gray-500 uppercase tracking-wide font-medium mb-4 block">
                                    "About Us"
                                </span>
                                <h2 class="text-4xl md:text-5xl font-bold text-gray-800 mb-8 leading-tight">
                                    "Connecting Pakistan to Global Markets Since 2021"
                                </h2>
                                <div class="space-y-6 text-gray-600 leading-relaxed">
                                    <p>
                                        "Penta Traders is a registered export company headquartered in Lahore, Pakistan. Founded in 2021, we are dedicated to delivering authentic Pakistani products to global clients with a focus on quality, transparency, and timely delivery."
                                    </p>
                                    <p>
                                        "Since 2021, Penta Traders has been connecting Pakistan's heritage crafts, natural resources, and sustainable products to buyers worldwide. Based in Lahore, we are officially registered with the FBR and members of the LCCI and PCMEA."
                                    </p>
                                </div>
                                <div class="flex flex-wrap gap-3 mt-8">
                                    {data::trust_chips()
                                        .into_iter()
                                        .map(|chip| {
                                            view! {
                                                <span class="bg-gray-100 text-gray-700 px-4 py-2 rounded-full text-sm font-medium">
                                                    {chip}
                                                </span>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>

                            <div>
                                <span class="text-sm text-gray-500 uppercase tracking-wide font-medium mb-6 block">
                                    "Why Choose Us"
                                </span>
                                <div class="space-y-6">
                                    {data::credentials()
                                        .into_iter()
                                        .map(|credential| {
                                            view! {
                                                <div class="flex items-start space-x-4">
                                                    <div class="w-8 h-8 bg-yellow-500 rounded-full flex items-center justify-center flex-shrink-0 mt-0.5">
                                                        <span class="text-white text-sm font-bold">"\u{2713}"</span>
                                                    </div>
                                                    <p class="text-gray-700 leading-relaxed">{credential}</p>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        </div>
                    </div>

                    <div class="grid lg:grid-cols-2 gap-8 lg:gap-12 items-center">
                        <div class="aspect-[4/3] overflow-hidden rounded-2xl shadow-xl">
                            <img
                                src="/public/rugs/rug-weaving.jpg"
                                alt="Traditional Pakistani rug weaving"
                                class="w-full h-full object-cover hover:scale-105 transition-transform duration-500"
                            />
                        </div>

                        <div class="bg-white rounded-2xl shadow-xl p-8 border border-gray-100">
                            <h3 class="text-3xl font-bold text-gray-800 mb-6">"Our Story"</h3>
                            <p class="text-gray-600 leading-relaxed mb-8">
                                "We partner directly with artisans and certified manufacturers across Pakistan. From the Himalayan ranges to the bustling markets of Lahore, our network enables us to source responsibly and deliver reliably at scale, while preserving the authenticity that buyers value. Every shipment carries a commitment to quality and a promise of professional service."
                            </p>
                            <div class="grid grid-cols-3 gap-4">
                                {data::story_stats()
                                    .into_iter()
                                    .map(|stat| {
                                        view! {
                                            <div class="bg-yellow-50 rounded-xl p-4 text-center hover:bg-yellow-100 transition-colors duration-300">
                                                <div class="text-3xl font-bold text-gray-800 mb-1">{stat.value}</div>
                                                <div class="text-sm text-gray-600">{stat.label}</div>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>

                    <MissionVision />
                </div>
            </div>
        </section>
    }
}

#[component]
fn MissionVision() -> impl IntoView {
    view! {
        <div class="bg-gradient-to-br from-yellow-50 to-yellow-100 rounded-3xl shadow-xl p-8 md:p-12 mt-16">
            <div class="grid md:grid-cols-2 gap-8">
                <div class="bg-white rounded-2xl shadow-lg p-8 hover:shadow-xl transition-all duration-300">
                    <div class="flex items-start space-x-4 mb-6">
                        <div class="w-12 h-12 bg-yellow-100 rounded-full flex items-center justify-center flex-shrink-0">
                            <Lamp class="w-6 h-6 text-yellow-600" />
                        </div>
                        <h3 class="text-2xl font-bold text-gray-800">"Mission"</h3>
                    </div>
                    <p class="text-gray-600 leading-relaxed">
                        "To represent Pakistan's craftsmanship, natural resources, and innovation in the global marketplace while building long-term trade partnerships based on trust."
                    </p>
                </div>

                <div class="bg-white rounded-2xl shadow-lg p-8 hover:shadow-xl transition-all duration-300">
                    <div class="flex items-start space-x-4 mb-6">
                        <div class="w-12 h-12 bg-yellow-100 rounded-full flex items-center justify-center flex-shrink-0">
                            <Star class="w-6 h-6 text-yellow-600" />
                        </div>
                        <h3 class="text-2xl font-bold text-gray-800">"Vision"</h3>
                    </div>
                    <p class="text-gray-600 leading-relaxed">
                        "To become a leading exporter from Pakistan recognized for authentic products, professional services, and global market reach."
                    </p>
                </div>
            </div>
        </div>
    }
}
