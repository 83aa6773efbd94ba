use leptos::prelude::*;

use crate::data;

#[component]
pub fn Memberships() -> impl IntoView {
    view! {
        <section id="memberships" class="py-16 bg-white scroll-mt-20">
            <div class="container mx-auto px-4">
                <div class="max-w-4xl mx-auto text-center">
                    <h2 class="text-4xl font-bold text-gray-800 mb-6">
                        "Our Recognition & Trade Memberships"
                    </h2>
                    <p class="text-gray-600 mb-12">
                        "We are trusted by Pakistan's leading trade and commerce authorities, ensuring compliance and credibility in all our export operations."
                    </p>

                    <div class="flex flex-row md:grid md:grid-cols-3 gap-2 md:gap-8">
                        {data::memberships()
                            .into_iter()
                            .map(|membership| {
                                view! {
                                    <div class="bg-white rounded-lg shadow-lg p-4 md:p-8 border text-center">
                                        <img
                                            src=membership.logo
                                            alt=membership.alt
                                            class="w-12 h-12 md:w-16 md:h-16 mx-auto mb-2 md:mb-4 object-contain"
                                        />
                                        <h3 class="text-sm md:text-lg font-semibold text-gray-800">
                                            {membership.label}
                                        </h3>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
