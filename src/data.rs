use leptos::prelude::*;

use crate::components::icons::{Basket, Lamp, Rug};

// Contact form relay (Web3Forms). The POST is a plain HTML form submit;
// the relay redirects back with the success flag the UI consumes.
pub const FORM_ENDPOINT: &str = "https://api.web3forms.com/submit";
pub const FORM_ACCESS_KEY: &str = "5a44e3e2-3214-4181-bfd7-bf04447a5e53";
pub const FORM_SUBJECT: &str = "New Inquiry \u{2013} Penta Traders";
pub const FORM_FROM_NAME: &str = "Penta Traders Website";
pub const FORM_REDIRECT: &str = "/?success=1#contact";

pub const CONTACT_EMAIL: &str = "pentatraders@hotmail.com";
pub const CONTACT_ADDRESS: &str = "27/10 Empress Road, Lahore, Pakistan";
pub const FACEBOOK_URL: &str = "https://www.facebook.com/official.pentatraders";
pub const INSTAGRAM_URL: &str = "https://www.instagram.com/pentatraders";

pub struct Product {
    pub icon: fn() -> AnyView,
    pub name: &'static str,
    pub tag: &'static str,
    pub blurb: &'static str,
    pub photos: [&'static str; 3],
    pub points: [&'static str; 3],
}

pub fn products() -> Vec<Product> {
    vec![
        Product {
            icon: || view! { <Rug class="w-6 h-6 text-white" /> }.into_any(),
            name: "Handmade Rugs",
            tag: "Heritage",
            blurb: "Persian inspired, tribal, and modern designs with natural dyes.",
            photos: [
                "/public/rugs/rug-weaving.jpg",
                "/public/rugs/rug-tribal.jpg",
                "/public/rugs/rug-modern.jpg",
            ],
            points: [
                "100% handmade craftsmanship",
                "Heritage designs & patterns",
                "Bulk orders & custom sizes available",
            ],
        },
        Product {
            icon: || view! { <Lamp class="w-6 h-6 text-white" /> }.into_any(),
            name: "Himalayan Pink Salt",
            tag: "Natural",
            blurb: "Lamps, tiles, and edible salt from the purest Himalayan sources.",
            photos: [
                "/public/salt/salt-lamps.jpg",
                "/public/salt/salt-tiles.jpg",
                "/public/salt/salt-edible.jpg",
            ],
            points: [
                "Salt lamps & candle holders",
                "Cooking slabs & salt tiles",
                "Edible salt (fine & coarse)",
            ],
        },
        Product {
            icon: || view! { <Basket class="w-6 h-6 text-white" /> }.into_any(),
            name: "Bamboo Baskets",
            tag: "Sustainable",
            blurb: "Eco-friendly and stylish bamboo products for modern living.",
            photos: [
                "/public/bamboo/basket-storage.jpg",
                "/public/bamboo/basket-utility.jpg",
                "/public/bamboo/basket-decor.jpg",
            ],
            points: [
                "100% natural bamboo",
                "Durable, reusable, and decorative",
                "Storage, utility, and decorative styles",
            ],
        },
    ]
}

pub fn expansion_products() -> Vec<&'static str> {
    vec![
        "Textiles & Apparel",
        "Leather Goods",
        "Sports Goods",
        "Surgical Instruments",
        "Agro Products (Rice, Spices, Dry Fruits)",
    ]
}

pub struct Membership {
    pub logo: &'static str,
    pub alt: &'static str,
    pub label: &'static str,
}

pub fn memberships() -> Vec<Membership> {
    vec![
        Membership {
            logo: "/public/memberships/fbr.jpg",
            alt: "FBR Logo",
            label: "FBR Registered",
        },
        Membership {
            logo: "/public/memberships/lcci.jpg",
            alt: "LCCI Logo",
            label: "Member - LCCI",
        },
        Membership {
            logo: "/public/memberships/pcmea.jpg",
            alt: "PCMEA Logo",
            label: "Member - PCMEA",
        },
    ]
}

pub fn credentials() -> Vec<&'static str> {
    vec![
        "Registered with FBR",
        "Member - Lahore Chamber of Commerce & Industry (LCCI)",
        "Member - Pakistan Carpet Manufacturers & Exporters Association (PCMEA)",
        "Strategic location in Lahore, Pakistan's trade hub",
        "Trusted supplier network: artisans, manufacturers, and exporters",
        "Commitment to ethical sourcing and sustainability",
    ]
}

pub fn trust_chips() -> Vec<&'static str> {
    vec!["On-time Delivery", "Authentic Sourcing", "Global Fulfillment"]
}

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub fn story_stats() -> Vec<Stat> {
    vec![
        Stat { value: "25+", label: "Countries" },
        Stat { value: "150+", label: "Clients" },
        Stat { value: "2021", label: "Since" },
    ]
}
