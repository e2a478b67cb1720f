//! Global wishlist store singleton.
//!
//! Uses `RefCell`-wrapped `thread_local!` storage (WASM is single-threaded).
//! The store loads from `localStorage` on first access and lives for the
//! lifetime of the page.

use crate::storage::LocalStorageSlot;
use std::cell::RefCell;
use wishlist_core::{UtcClock, WishlistStore};

pub type Store = WishlistStore<LocalStorageSlot, UtcClock>;

thread_local! {
    static STORE: RefCell<Option<Store>> = const { RefCell::new(None) };
}

/// Run a closure against the shared store, loading it on first use.
pub fn with_store<F, R>(f: F) -> R
where
    F: FnOnce(&mut Store) -> R,
{
    STORE.with(|cell| {
        let mut slot = cell.borrow_mut();
        let store = slot
            .get_or_insert_with(|| WishlistStore::load(LocalStorageSlot, UtcClock));
        f(store)
    })
}
