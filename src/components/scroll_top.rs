use leptos::prelude::*;
use penta_ui::Message;

use super::icons::ChevronUp;
use crate::viewport::ViewportUi;

#[component]
pub fn ScrollTopButton() -> impl IntoView {
    let ui = expect_context::<ViewportUi>();

    view! {
        {move || {
            ui.show_scroll_top()
                .then(|| {
                    view! {
                        <button
                            class="fixed bottom-6 right-6 w-12 h-12 bg-yellow-500 hover:bg-yellow-600 text-gray-800 rounded-full shadow-lg hover:shadow-xl transition-all duration-300 z-50 flex items-center justify-center"
                            aria-label="Scroll to top"
                            on:click=move |_| ui.dispatch(Message::ScrollTopRequested)
                        >
                            <ChevronUp class="w-5 h-5" />
                        </button>
                    }
                })
        }}
    }
}
