//! UI Components
//!
//! Reusable Leptos components shared by the pages.

pub mod loading;
pub mod nav;
pub mod notices;
pub mod product_card;
pub mod product_form;

pub use loading::Loading;
pub use nav::Nav;
pub use notices::NoticeStack;
pub use product_card::ProductCard;
pub use product_form::ProductForm;
