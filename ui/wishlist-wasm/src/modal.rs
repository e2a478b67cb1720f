//! Wishlist modal overlay.
//!
//! Built on demand from the current entries, torn down on close. Teardown
//! waits for the fade-out via `transitionend`, with a guarded timer fallback
//! for environments where the transition never fires (reduced motion,
//! hidden ancestors).

use crate::{dom, notify, ops, state};
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use wishlist_core::WishlistItem;

const MODAL_ID: &str = "wishlist-modal";
const SHOW_DELAY_MS: u32 = 10;
const ROW_REMOVE_MS: u32 = 300;
const CLOSE_FALLBACK_MS: u32 = 400;

/// Show the modal, or an info notification when the wishlist is empty.
pub fn show_wishlist_modal() {
    let items = state::with_store(|s| s.items());
    if items.is_empty() {
        notify::info("Your wishlist is empty");
        return;
    }

    dom::body()
        .insert_adjacent_html("beforeend", &modal_html(&items))
        .unwrap();
    let Some(modal) = dom::by_id(MODAL_ID) else {
        return;
    };

    {
        let modal = modal.clone();
        Timeout::new(SHOW_DELAY_MS, move || {
            dom::add_class(&modal, "wishlist-modal--show");
        })
        .forget();
    }

    bind_modal_events(&modal);
}

fn modal_html(items: &[WishlistItem]) -> String {
    let rows: String = items
        .iter()
        .map(|item| {
            format!(
                r#"
                <div class="wishlist-item" data-product-id="{id}">
                  <div class="wishlist-item__image">
                    <img src="{image}" alt="{title}" loading="lazy">
                  </div>
                  <div class="wishlist-item__details">
                    <h3 class="wishlist-item__title">{title}</h3>
                    <p class="wishlist-item__price">{price}</p>
                    <div class="wishlist-item__actions">
                      <a href="{url}" class="wishlist-item__view">View Product</a>
                      <button class="wishlist-item__remove" data-product-id="{id}">Remove</button>
                    </div>
                  </div>
                </div>
                "#,
                id = item.id,
                image = item.image,
                title = item.title,
                price = item.price,
                url = item.url,
            )
        })
        .collect();

    format!(
        r#"
        <div class="wishlist-modal" id="{MODAL_ID}">
          <div class="wishlist-modal__overlay"></div>
          <div class="wishlist-modal__content">
            <div class="wishlist-modal__header">
              <h2>Your Wishlist ({count})</h2>
              <button class="wishlist-modal__close" type="button">
                <svg width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                  <line x1="18" y1="6" x2="6" y2="18"></line>
                  <line x1="6" y1="6" x2="18" y2="18"></line>
                </svg>
              </button>
            </div>
            <div class="wishlist-modal__body">
              <div class="wishlist-items">{rows}</div>
            </div>
            <div class="wishlist-modal__footer">
              <button class="wishlist-clear-btn" type="button">Clear Wishlist</button>
            </div>
          </div>
        </div>
        "#,
        count = items.len(),
    )
}

fn bind_modal_events(modal: &Element) {
    if let Some(close_btn) = dom::query_within(modal, ".wishlist-modal__close") {
        let modal2 = modal.clone();
        dom::on_click(&close_btn, move |_| close_modal(&modal2));
    }
    if let Some(overlay) = dom::query_within(modal, ".wishlist-modal__overlay") {
        let modal2 = modal.clone();
        dom::on_click(&overlay, move |_| close_modal(&modal2));
    }

    // Row removal, delegated on the modal so it survives row churn.
    {
        let modal2 = modal.clone();
        let cb = Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
            let Some(target) = e.target() else {
                return;
            };
            let Ok(el) = target.dyn_into::<web_sys::Element>() else {
                return;
            };
            if !dom::has_class(&el, "wishlist-item__remove") {
                return;
            }
            let Some(id) = el.get_attribute("data-product-id") else {
                return;
            };
            ops::remove(&id);

            let Some(row) = dom::closest(&el, ".wishlist-item") else {
                return;
            };
            dom::add_class(&row, "wishlist-item--removing");
            let modal3 = modal2.clone();
            Timeout::new(ROW_REMOVE_MS, move || {
                dom::detach(&row);
                if dom::query_all_within(&modal3, ".wishlist-item").is_empty() {
                    close_modal(&modal3);
                }
            })
            .forget();
        }) as Box<dyn FnMut(web_sys::MouseEvent)>);
        modal
            .add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
            .unwrap();
        cb.forget();
    }

    if let Some(clear_btn) = dom::query_within(modal, ".wishlist-clear-btn") {
        let modal2 = modal.clone();
        dom::on_click(&clear_btn, move |_| {
            ops::clear();
            close_modal(&modal2);
        });
    }
}

/// Fade out, then detach once the transition completes. Detachment is
/// existence-checked, so the fallback timer firing second is harmless.
fn close_modal(modal: &Element) {
    dom::remove_class(modal, "wishlist-modal--show");

    {
        let captured = modal.clone();
        let cb = Closure::once(move |_: web_sys::Event| dom::detach(&captured));
        modal
            .add_event_listener_with_callback("transitionend", cb.as_ref().unchecked_ref())
            .unwrap();
        cb.forget();
    }
    {
        let modal = modal.clone();
        Timeout::new(CLOSE_FALLBACK_MS, move || dom::detach(&modal)).forget();
    }
}
