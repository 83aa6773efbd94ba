use leptos::prelude::*;

use crate::data::{self, Product};

#[component]
pub fn Products() -> impl IntoView {
    view! {
        <section id="products" class="py-16 md:py-24 bg-gradient-to-br from-white to-gray-50 scroll-mt-20">
            <div class="container mx-auto px-4">
                <div class="max-w-7xl mx-auto">
                    <div class="text-center mb-16">
                        <span class="inline-block px-4 py-2 bg-blue-100 text-blue-800 rounded-full text-sm font-medium mb-4">
                            "Our Products"
                        </span>
                        <h2 class="text-4xl md:text-5xl lg:text-6xl font-bold text-gray-800 mb-6">
                            "Our Export Portfolio"
                        </h2>
                        <p class="text-lg md:text-xl text-gray-600 max-w-4xl mx-auto leading-relaxed">
                            "We source our products directly from local manufacturers and artisans, ensuring authenticity and quality. Each product undergoes rigorous quality checks before export."
                        </p>
                        <div class="w-24 h-1 bg-blue-500 mx-auto rounded-full mt-6"></div>
                    </div>

                    <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6 lg:gap-8 mb-16">
                        {data::products()
                            .into_iter()
                            .map(|product| view! { <ProductCard product /> })
                            .collect_view()}
                    </div>

                    <div class="bg-white rounded-lg shadow-lg p-6">
                        <h3 class="text-xl font-bold text-gray-800 mb-4">"Future Expansion Products"</h3>
                        <div class="flex flex-wrap gap-2">
                            {data::expansion_products()
                                .into_iter()
                                .map(|name| {
                                    view! {
                                        <span class="bg-gray-100 text-gray-700 px-4 py-2 rounded-full">
                                            {name}
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProductCard(product: Product) -> impl IntoView {
    view! {
        <div class="group bg-white rounded-2xl shadow-xl p-6 lg:p-8 border border-gray-100">
            <div class="flex items-center mb-6">
                <div class="w-12 h-12 bg-[#023047] rounded-xl flex items-center justify-center mr-4">
                    {(product.icon)()}
                </div>
                <div>
                    <h3 class="text-xl lg:text-2xl font-bold text-gray-800">{product.name}</h3>
                    <span class="inline-block bg-yellow-100 text-yellow-800 px-3 py-1 rounded-full text-xs font-medium">
                        {product.tag}
                    </span>
                </div>
            </div>

            <p class="text-gray-600 mb-6 leading-relaxed">{product.blurb}</p>

            <div class="grid grid-cols-3 gap-3 mb-6">
                {product
                    .photos
                    .into_iter()
                    .map(|photo| {
                        view! {
                            <div class="aspect-square overflow-hidden rounded-xl group-hover:scale-105 transition-transform duration-300">
                                <img src=photo alt=product.name class="w-full h-full object-cover" />
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="space-y-3">
                {product
                    .points
                    .into_iter()
                    .map(|point| {
                        view! {
                            <div class="flex items-center space-x-3">
                                <div class="w-6 h-6 bg-yellow-100 rounded-full flex items-center justify-center">
                                    <span class="text-gray-700 text-xs font-bold">"\u{2713}"</span>
                                </div>
                                <p class="text-sm text-gray-700">{point}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
