pub mod components;
pub mod data;
pub mod pages;
pub mod viewport;

use components::footer::Footer;
use components::navbar::Navbar;
use components::scroll_top::ScrollTopButton;
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Meta, Title};
use pages::home::Home;
use viewport::ViewportUi;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = ViewportUi::mount();
    provide_context(ui);

    view! {
        <Title text="Penta Traders | From Pakistan to the World" />
        <Meta
            name="description"
            content="Penta Traders is a registered Pakistani export company delivering handmade rugs, Himalayan pink salt, and bamboo products to global markets."
        />
        <div class="min-h-screen bg-white text-gray-800 font-sans">
            <Navbar />
            <Home />
            <Footer />
            <ScrollTopButton />
        </div>
    }
}
