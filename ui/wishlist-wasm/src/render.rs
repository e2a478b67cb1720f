//! Reflect store state onto the page.
//!
//! Runs once at load and again after every mutation: toggle buttons get
//! their active state from membership, count badges get the live count.

use crate::{dom, state};
use web_sys::Element;

pub const TOGGLE_SELECTOR: &str = "[data-wishlist-toggle]";
const COUNT_SELECTOR: &str = ".wishlist-count";

/// Full repaint of every bound element in the document.
pub fn update_wishlist_ui() {
    for button in dom::query_all(TOGGLE_SELECTOR) {
        let Some(id) = button.get_attribute("data-product-id") else {
            continue;
        };
        let active = state::with_store(|s| s.contains(&id));
        update_wishlist_button(&button, active);
    }
    update_wishlist_count();
}

/// Set one toggle button's visual state from membership. The button class
/// only follows when an icon child exists, matching the storefront markup.
pub fn update_wishlist_button(button: &Element, active: bool) {
    if let Some(icon) = dom::query_within(button, ".wishlist-icon") {
        dom::toggle_class(&icon, "wishlist-active", active);
        dom::toggle_class(button, "wishlist-active", active);
    }
    if let Some(text) = dom::query_within(button, ".wishlist-text") {
        dom::set_text(
            &text,
            if active {
                "Remove from Wishlist"
            } else {
                "Add to Wishlist"
            },
        );
    }
}

fn update_wishlist_count() {
    let count = state::with_store(|s| s.count());
    let label = count.to_string();

    for badge in dom::query_all(COUNT_SELECTOR) {
        dom::set_text(&badge, &label);
        if count > 0 {
            dom::set_style(&badge, "display", "flex");
            dom::set_style(&badge, "background", "#fff");
            dom::set_style(&badge, "color", "#000");
            dom::set_style(&badge, "border", "2px solid #000");
        } else {
            dom::set_style(&badge, "display", "none");
        }
    }
}
