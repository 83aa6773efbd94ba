use leptos::prelude::*;

use crate::data;
use crate::viewport::ViewportUi;

#[component]
pub fn Contact() -> impl IntoView {
    let ui = expect_context::<ViewportUi>();

    view! {
        <section id="contact" class="py-16 md:py-24 bg-gradient-to-br from-gray-50 to-white scroll-mt-20">
            <div class="container mx-auto px-4">
                <div class="max-w-3xl mx-auto">
                    <div class="text-center mb-16">
                        <span class="inline-block px-4 py-2 bg-yellow-100 text-yellow-800 rounded-full text-sm font-medium mb-4">
                            "Contact Us"
                        </span>
                        <h2 class="text-4xl md:text-5xl font-bold text-gray-800 mb-6">"Get in Touch"</h2>
                        <p class="text-lg md:text-xl text-gray-600 max-w-2xl mx-auto leading-relaxed">
                            "Ready to start your export journey with us? Let's discuss your requirements and explore opportunities together."
                        </p>
                        <div class="w-24 h-1 bg-yellow-500 mx-auto rounded-full mt-6"></div>
                    </div>

                    <form action=data::FORM_ENDPOINT method="POST" class="space-y-6">
                        {move || {
                            ui.inquiry_submitted()
                                .then(|| {
                                    view! {
                                        <div class="mb-2 rounded-lg border border-green-200 bg-green-50 px-3 py-2 text-sm text-green-800">
                                            "Thank you! Your inquiry has been sent. We'll get back to you soon."
                                        </div>
                                    }
                                })
                        }}

                        <input type="hidden" name="access_key" value=data::FORM_ACCESS_KEY />
                        <input type="hidden" name="subject" value=data::FORM_SUBJECT />
                        <input type="hidden" name="from_name" value=data::FORM_FROM_NAME />
                        <input type="hidden" name="redirect" value=data::FORM_REDIRECT />
                        <input type="checkbox" name="botcheck" class="hidden" tabindex="-1" autocomplete="off" />

                        <Field label="Full Name" name="name" input_type="text" required=true />
                        <Field label="Email Address" name="email" input_type="email" required=true />
                        <Field label="Company / Business Name" name="company" input_type="text" required=false />
                        <Field label="Country" name="country" input_type="text" required=false />

                        <div class="space-y-1">
                            <label class="block text-sm font-medium text-gray-700">
                                "Product Inquiry / Message"
                            </label>
                            <textarea
                                name="message"
                                required=true
                                rows="3"
                                class="w-full py-2 bg-transparent text-gray-900 border-0 border-b border-gray-300 focus:border-gray-500 focus:outline-none transition-colors duration-200 text-base resize-y"
                            ></textarea>
                        </div>

                        <div class="pt-4">
                            <button
                                type="submit"
                                class="w-full bg-[#023047] text-white py-4 px-8 rounded-full text-lg font-semibold transition-all duration-300 hover:opacity-90 shadow-lg hover:shadow-xl"
                            >
                                "Send Inquiry"
                            </button>
                        </div>

                        <div class="text-center pt-4">
                            <p class="text-sm text-gray-500">"We usually respond within 1-2 business days"</p>
                        </div>
                    </form>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Field(
    label: &'static str,
    name: &'static str,
    input_type: &'static str,
    required: bool,
) -> impl IntoView {
    view! {
        <div class="space-y-1">
            <label class="block text-sm font-medium text-gray-700">{label}</label>
            <input
                type=input_type
                name=name
                required=required
                class="w-full py-2 bg-transparent text-gray-900 border-0 border-b border-gray-300 focus:border-gray-500 focus:outline-none transition-colors duration-200 text-base"
            />
        </div>
    }
}
