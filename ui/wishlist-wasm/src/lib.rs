//! JD storefront wishlist frontend.
//!
//! Rust + WASM port of the theme's wishlist script. The store itself lives
//! in `wishlist-core`; this crate binds it to the page: delegated clicks,
//! full-page repaint, the modal overlay, and notification banners. The
//! exported functions keep the original JS names so other theme scripts can
//! keep calling them.

pub mod dom;
pub mod events;
pub mod modal;
pub mod notify;
pub mod ops;
pub mod render;
pub mod state;
pub mod storage;

use wasm_bindgen::prelude::*;
use wishlist_core::ProductDetails;

/// Forwards the `log` facade to the browser console, so storage failures
/// logged by the core show up in devtools.
struct ConsoleLogger;

impl log::Log for ConsoleLogger {
    fn enabled(&self, _metadata: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        let msg = format!("{}", record.args());
        match record.level() {
            log::Level::Error => gloo_console::error!(msg),
            log::Level::Warn => gloo_console::warn!(msg),
            _ => gloo_console::log!(msg),
        }
    }

    fn flush(&self) {}
}

static LOGGER: ConsoleLogger = ConsoleLogger;

/// WASM entry point – called automatically when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(log::LevelFilter::Info);

    // First store access loads from localStorage; paint the initial state,
    // then wire the delegated listener.
    render::update_wishlist_ui();
    events::bind_events();
}

// ── Collaborator surface (other theme scripts) ──

#[wasm_bindgen(js_name = toggleWishlist)]
pub fn toggle_wishlist(product_id: String, details: JsValue) -> bool {
    ops::toggle(&product_id, parse_details(details))
}

#[wasm_bindgen(js_name = addToWishlist)]
pub fn add_to_wishlist(product_id: String, details: JsValue) -> bool {
    ops::add(&product_id, parse_details(details))
}

#[wasm_bindgen(js_name = removeFromWishlist)]
pub fn remove_from_wishlist(product_id: String) -> bool {
    ops::remove(&product_id)
}

#[wasm_bindgen(js_name = isInWishlist)]
pub fn is_in_wishlist(product_id: String) -> bool {
    state::with_store(|s| s.contains(&product_id))
}

#[wasm_bindgen(js_name = getWishlistCount)]
pub fn get_wishlist_count() -> usize {
    state::with_store(|s| s.count())
}

#[wasm_bindgen(js_name = getWishlist)]
pub fn get_wishlist() -> JsValue {
    state::with_store(|s| serde_wasm_bindgen::to_value(s.entries()).unwrap_or(JsValue::NULL))
}

#[wasm_bindgen(js_name = getWishlistItems)]
pub fn get_wishlist_items() -> JsValue {
    state::with_store(|s| serde_wasm_bindgen::to_value(&s.items()).unwrap_or(JsValue::NULL))
}

#[wasm_bindgen(js_name = clearWishlist)]
pub fn clear_wishlist() {
    ops::clear();
}

#[wasm_bindgen(js_name = updateWishlistUI)]
pub fn update_wishlist_ui() {
    render::update_wishlist_ui();
}

/// Arbitrary JS object → display fields; anything unusable becomes the
/// empty default, matching the JS `productData = {}` fallback.
fn parse_details(details: JsValue) -> ProductDetails {
    serde_wasm_bindgen::from_value(details).unwrap_or_default()
}
