use leptos::prelude::*;

use crate::components::about::About;
use crate::components::contact::Contact;
use crate::components::hero::Hero;
use crate::components::memberships::Memberships;
use crate::components::products::Products;

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <main>
            <Hero />
            <About />
            <Products />
            <Memberships />
            <Contact />
        </main>
    }
}
