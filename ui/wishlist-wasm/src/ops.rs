//! Wishlist operations as the page sees them.
//!
//! Each entry point bundles mutate → persist → repaint → notify into one
//! unit, so no handler can observe a half-applied state. Repaint and
//! notification only fire when the store actually changed.

use crate::{notify, render, state};
use wishlist_core::ProductDetails;

/// Add or remove based on current membership. Returns the resulting
/// membership.
pub fn toggle(id: &str, details: ProductDetails) -> bool {
    let added = state::with_store(|s| s.toggle(id, details));
    render::update_wishlist_ui();
    if added {
        notify::success("Added to wishlist");
    } else {
        notify::info("Removed from wishlist");
    }
    added
}

pub fn add(id: &str, details: ProductDetails) -> bool {
    let added = state::with_store(|s| s.add(id, details));
    if added {
        render::update_wishlist_ui();
        notify::success("Added to wishlist");
    }
    added
}

pub fn remove(id: &str) -> bool {
    let removed = state::with_store(|s| s.remove(id));
    if removed {
        render::update_wishlist_ui();
        notify::info("Removed from wishlist");
    }
    removed
}

pub fn clear() {
    state::with_store(|s| s.clear());
    render::update_wishlist_ui();
    notify::info("Wishlist cleared");
}
