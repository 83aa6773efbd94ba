use leptos::prelude::*;
use penta_ui::Message;

use super::icons::Play;
use crate::viewport::ViewportUi;

const BANNER_VIDEO: &str = "/public/banner-video.mp4";
const BANNER_IMAGE: &str = "/public/banner-poster.jpg";

#[component]
pub fn Hero() -> impl IntoView {
    let ui = expect_context::<ViewportUi>();

    view! {
        <section
            id="home"
            class="relative h-[90vh] md:h-screen flex items-center justify-center text-white overflow-hidden"
        >
            <div class="absolute inset-0 z-[2] bg-gradient-to-br from-black/40 via-black/60 to-black/80"></div>
            <div class="absolute inset-0 z-[1]">
                <video
                    node_ref=ui.video
                    class=move || {
                        if ui.video_phase().shows_fallback() {
                            "hidden"
                        } else {
                            "w-full h-full object-cover animate-pulse-slow"
                        }
                    }
                    muted=true
                    loop=true
                    playsinline=true
                    preload=move || if ui.video_gesture_gated() { "none" } else { "auto" }
                    poster=BANNER_IMAGE
                    src=BANNER_VIDEO
                    on:error=move |_| ui.dispatch(Message::VideoFailed)
                ></video>
                {move || {
                    ui.video_phase()
                        .shows_fallback()
                        .then(|| {
                            view! {
                                <img
                                    src=BANNER_IMAGE
                                    alt="Penta Traders Banner"
                                    class="w-full h-full object-cover animate-pulse-slow"
                                />
                            }
                        })
                }}
            </div>

            <div class="relative z-10 text-center max-w-6xl mx-auto px-4 animate-fade-in-up">
                <div class="mb-6">
                    <span class="inline-block px-4 py-2 bg-yellow-500/20 backdrop-blur-sm rounded-full text-yellow-400 text-sm md:text-base font-medium mb-4">
                        "Trusted Pakistani Exporter"
                    </span>
                </div>
                <h1 class="text-5xl sm:text-6xl md:text-7xl lg:text-8xl font-bold mb-6 text-yellow-500 drop-shadow-2xl animate-slide-in-left">
                    "Penta Traders"
                </h1>
                <h2 class="text-3xl sm:text-4xl md:text-5xl lg:text-6xl font-bold mb-8 text-white drop-shadow-2xl animate-slide-in-right">
                    "From Pakistan to the World"
                </h2>
                <p class="text-lg sm:text-xl md:text-2xl mb-12 max-w-5xl mx-auto text-white/95 drop-shadow-lg leading-relaxed">
                    "Delivering Pakistan's finest products to global markets with authenticity, quality, and reliability."
                </p>
                <div class="flex flex-row gap-3 justify-center">
                    <a
                        href="#products"
                        class="bg-yellow-500 text-gray-900 px-6 py-3 rounded-full text-base font-semibold hover:bg-yellow-600 transition-all duration-300 hover:shadow-lg"
                    >
                        "Explore Our Exports"
                    </a>
                    <a
                        href="#contact"
                        class="bg-[#023047] text-white px-6 py-3 rounded-full text-base font-semibold hover:opacity-90 transition-all duration-300 hover:shadow-lg"
                    >
                        "Request a Quote"
                    </a>
                </div>
            </div>

            {move || {
                ui.play_hint_visible()
                    .then(|| {
                        view! {
                            <button
                                class="absolute bottom-6 right-6 z-20 inline-flex items-center space-x-2 bg-black/60 text-white px-4 py-2 rounded-full text-sm backdrop-blur-sm hover:bg-black/75 transition-colors"
                                aria-label="Play banner video"
                                on:click=move |_| ui.dispatch(Message::PlayHintSelected)
                            >
                                <Play class="w-4 h-4" />
                                <span>"Play video"</span>
                            </button>
                        }
                    })
            }}
        </section>
    }
}
