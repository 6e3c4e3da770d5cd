//! FoodApp Web
//!
//! Food-delivery front end built with Leptos (WASM).
//!
//! # Pages
//!
//! - `/` - restaurant listing
//! - `/restaurante` - a restaurant's menu
//! - `/dashboard` - owner menu management and restaurant information
//! - `/cliente` - user profile
//! - `/entrar` - login / register
//!
//! # Architecture
//!
//! Client-side rendered (CSR) Leptos application compiled to WebAssembly.
//! Products go through the product API when `FOODAPP_API_URL` is set at build
//! time; debug builds without it keep products in `localStorage` instead.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
