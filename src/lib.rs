/// Price Watcher - web frontend for the price tracking service
/// Built with Rust + WASM + Yew

mod api;
mod money;
mod notify;
mod platform;
mod product;
mod validate;
pub mod ui;

use wasm_bindgen::prelude::*;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Re-export platform detection for JavaScript access
#[wasm_bindgen]
pub fn platform_for_url(url: &str) -> String {
    platform::detect_platform(url)
        .map(|platform| platform.wire_name().to_string())
        .unwrap_or_default()
}

// Start the Yew app for the add-product page
#[wasm_bindgen]
pub fn start_add_product_page() {
    yew::Renderer::<ui::add_product::AddProductPage>::new().render();
}

// Start the Yew app for the products listing page
#[wasm_bindgen]
pub fn start_products_page() {
    yew::Renderer::<ui::products::ProductsPage>::new().render();
}
