pub mod about;
pub mod contact;
pub mod footer;
pub mod hero;
pub mod icons;
pub mod memberships;
pub mod navbar;
pub mod products;
pub mod scroll_top;
