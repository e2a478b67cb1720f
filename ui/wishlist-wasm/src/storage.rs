//! `localStorage`-backed persisted slot.
//!
//! Storage can be disabled entirely (private browsing, embedder policy), so
//! reads treat a missing `Storage` object as an empty slot while writes
//! report it as a failure for the store to log and swallow.

use anyhow::{Result, anyhow};
use wishlist_core::{WISHLIST_KEY, WishlistSlot};

#[derive(Clone, Copy, Default)]
pub struct LocalStorageSlot;

fn storage() -> Option<web_sys::Storage> {
    crate::dom::window().local_storage().ok()?
}

impl WishlistSlot for LocalStorageSlot {
    fn read(&self) -> Result<Option<String>> {
        let Some(storage) = storage() else {
            return Ok(None);
        };
        storage
            .get_item(WISHLIST_KEY)
            .map_err(|e| anyhow!("localStorage read failed: {e:?}"))
    }

    fn write(&self, payload: &str) -> Result<()> {
        let storage = storage().ok_or_else(|| anyhow!("localStorage unavailable"))?;
        storage
            .set_item(WISHLIST_KEY, payload)
            .map_err(|e| anyhow!("localStorage write failed: {e:?}"))
    }
}
