//! Delegated click handling.
//!
//! One listener at the document root resolves each click to the nearest
//! `[data-wishlist-toggle]` ancestor, so product cards re-rendered after
//! load stay actionable without re-registration.

use crate::{dom, modal, ops, render};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wishlist_core::ProductDetails;

/// The header icon routes to the modal instead of toggling a product.
const HEADER_ICON_ID: &str = "wishlist-icon";

/// Bind the document-level listener. Call once at startup.
pub fn bind_events() {
    let cb = Closure::wrap(Box::new(on_document_click) as Box<dyn FnMut(web_sys::MouseEvent)>);
    dom::document()
        .add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
        .unwrap();
    cb.forget();
}

fn on_document_click(e: web_sys::MouseEvent) {
    let Some(target) = e.target() else {
        return;
    };
    let Ok(el) = target.dyn_into::<web_sys::Element>() else {
        return;
    };
    let Some(button) = dom::closest(&el, render::TOGGLE_SELECTOR) else {
        return;
    };
    e.prevent_default();

    if button.id() == HEADER_ICON_ID {
        modal::show_wishlist_modal();
        return;
    }

    let Some(product_id) = button.get_attribute("data-product-id") else {
        return;
    };
    if product_id.is_empty() {
        return;
    }

    let details = ProductDetails {
        title: button.get_attribute("data-product-title"),
        image: button.get_attribute("data-product-image"),
        price: button.get_attribute("data-product-price"),
        url: button.get_attribute("data-product-url"),
    };
    let added = ops::toggle(&product_id, details);
    render::update_wishlist_button(&button, added);
}
