//! Wishlist domain logic.
//!
//! Owns the canonical entry list and the persistence contract. Storage is
//! abstracted behind [`WishlistSlot`] and time behind [`Clock`], so the store
//! runs unchanged under native tests and in the browser frontend.

use anyhow::Result;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;

/// Storage key for the serialized wishlist array.
pub const WISHLIST_KEY: &str = "jd_wishlist";

// ── Data model ──

/// One wishlist record, keyed by product id.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WishlistEntry {
    pub id: String,
    /// ISO-8601 creation timestamp. Set once, never mutated.
    #[serde(rename = "addedAt")]
    pub added_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Display fields supplied by the caller at add time. Opaque: not validated
/// or normalized.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ProductDetails {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// Display projection of an entry. Missing fields project to `""`.
#[derive(Clone, Debug, Serialize)]
pub struct WishlistItem {
    pub id: String,
    pub title: String,
    pub image: String,
    pub price: String,
    pub url: String,
    pub added_at: String,
}

// ── Seams ──

/// The persisted slot: one named location holding the serialized array.
pub trait WishlistSlot {
    /// Read the raw payload. `Ok(None)` when the slot has never been written.
    fn read(&self) -> Result<Option<String>>;
    /// Overwrite the slot with a new payload.
    fn write(&self, payload: &str) -> Result<()>;
}

/// Shared-cell slot for tests and native consumers. Clones share the same
/// underlying cell, so a second `WishlistStore::load` over a clone behaves
/// like a fresh page load against the same storage.
#[derive(Clone, Default)]
pub struct InMemorySlot {
    cell: Rc<RefCell<Option<String>>>,
}

impl InMemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the slot with an arbitrary payload (e.g. a corrupt one).
    pub fn with_payload(payload: &str) -> Self {
        Self {
            cell: Rc::new(RefCell::new(Some(payload.to_string()))),
        }
    }

    pub fn payload(&self) -> Option<String> {
        self.cell.borrow().clone()
    }
}

impl WishlistSlot for InMemorySlot {
    fn read(&self) -> Result<Option<String>> {
        Ok(self.cell.borrow().clone())
    }

    fn write(&self, payload: &str) -> Result<()> {
        *self.cell.borrow_mut() = Some(payload.to_string());
        Ok(())
    }
}

/// Source of `addedAt` timestamps.
pub trait Clock {
    fn now_iso(&self) -> String;
}

/// Wall-clock time, formatted like JS `Date.prototype.toISOString()`.
#[derive(Clone, Copy, Default)]
pub struct UtcClock;

impl Clock for UtcClock {
    fn now_iso(&self) -> String {
        Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

// ── Store ──

/// Sole owner of the wishlist state. Every mutation persists synchronously
/// before returning; persistence failures degrade to in-memory-only for the
/// session (logged, never surfaced).
pub struct WishlistStore<S, C> {
    slot: S,
    clock: C,
    entries: Vec<WishlistEntry>,
}

impl<S, C> WishlistStore<S, C>
where
    S: WishlistSlot,
    C: Clock,
{
    /// Load the wishlist from the slot. A missing slot yields an empty list;
    /// an unreadable or unparseable payload is discarded (fail-soft: the
    /// wishlist resets to empty for this session).
    pub fn load(slot: S, clock: C) -> Self {
        let entries = match slot.read() {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<WishlistEntry>>(&raw) {
                Ok(list) => list,
                Err(err) => {
                    log::error!("wishlist: discarding unparseable stored payload: {err}");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(err) => {
                log::error!("wishlist: failed to read storage: {err}");
                Vec::new()
            }
        };
        Self {
            slot,
            clock,
            entries,
        }
    }

    fn persist(&self) {
        let json = match serde_json::to_string(&self.entries) {
            Ok(json) => json,
            Err(err) => {
                log::error!("wishlist: failed to serialize {} entries: {err}", self.entries.len());
                return;
            }
        };
        if let Err(err) = self.slot.write(&json) {
            // In-memory state stays authoritative for the session; it just
            // will not survive a reload.
            log::error!("wishlist: failed to persist {} entries: {err}", self.entries.len());
        }
    }

    /// True iff an entry with this id exists.
    pub fn contains(&self, id: &str) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    /// Append a new entry unless the id is already present. Returns whether
    /// an entry was added.
    pub fn add(&mut self, id: &str, details: ProductDetails) -> bool {
        if self.contains(id) {
            return false;
        }
        self.entries.push(WishlistEntry {
            id: id.to_string(),
            added_at: self.clock.now_iso(),
            title: details.title,
            image: details.image,
            price: details.price,
            url: details.url,
        });
        self.persist();
        true
    }

    /// Remove the entry with this id. Returns whether an entry was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let Some(index) = self.entries.iter().position(|e| e.id == id) else {
            return false;
        };
        self.entries.remove(index);
        self.persist();
        true
    }

    /// Add or remove based on current membership. Returns the resulting
    /// membership: `true` if the id is now present.
    pub fn toggle(&mut self, id: &str, details: ProductDetails) -> bool {
        if self.contains(id) {
            self.remove(id);
            false
        } else {
            self.add(id, details);
            true
        }
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// All entries, insertion order (oldest first).
    pub fn entries(&self) -> &[WishlistEntry] {
        &self.entries
    }

    /// Display projection of all entries.
    pub fn items(&self) -> Vec<WishlistItem> {
        self.entries
            .iter()
            .map(|e| WishlistItem {
                id: e.id.clone(),
                title: e.title.clone().unwrap_or_default(),
                image: e.image.clone().unwrap_or_default(),
                price: e.price.clone().unwrap_or_default(),
                url: e.url.clone().unwrap_or_default(),
                added_at: e.added_at.clone(),
            })
            .collect()
    }

    /// Empty the wishlist unconditionally.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.persist();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use std::cell::Cell;

    /// Clock returning a strictly increasing timestamp per call.
    #[derive(Default)]
    struct CounterClock {
        ticks: Cell<u64>,
    }

    impl Clock for CounterClock {
        fn now_iso(&self) -> String {
            let n = self.ticks.get();
            self.ticks.set(n + 1);
            format!("2025-06-01T00:00:{:02}.000Z", n)
        }
    }

    /// Slot whose writes always fail (quota exceeded / storage disabled).
    struct FailingSlot;

    impl WishlistSlot for FailingSlot {
        fn read(&self) -> Result<Option<String>> {
            Ok(None)
        }

        fn write(&self, _payload: &str) -> Result<()> {
            Err(anyhow!("quota exceeded"))
        }
    }

    fn details(title: &str) -> ProductDetails {
        ProductDetails {
            title: Some(title.to_string()),
            ..ProductDetails::default()
        }
    }

    fn store() -> WishlistStore<InMemorySlot, CounterClock> {
        WishlistStore::load(InMemorySlot::new(), CounterClock::default())
    }

    #[test]
    fn add_is_idempotent_per_id() {
        let mut s = store();
        assert!(s.add("sku-1", details("Ring")));
        assert!(!s.add("sku-1", details("Ring")));
        assert!(!s.add("sku-1", details("Other Ring")));
        assert_eq!(s.count(), 1);
        assert_eq!(s.entries()[0].title.as_deref(), Some("Ring"));
    }

    #[test]
    fn toggle_twice_restores_membership_with_fresh_timestamp() {
        let mut s = store();
        s.add("sku-1", details("Ring"));
        let first_added_at = s.entries()[0].added_at.clone();

        assert!(!s.toggle("sku-1", details("Ring")));
        assert!(!s.contains("sku-1"));
        assert!(s.toggle("sku-1", details("Ring")));
        assert!(s.contains("sku-1"));

        // Remove deletes the entry, so the re-add gets a new timestamp.
        assert_ne!(s.entries()[0].added_at, first_added_at);
    }

    #[test]
    fn round_trip_through_shared_slot() {
        let slot = InMemorySlot::new();
        let mut s = WishlistStore::load(slot.clone(), CounterClock::default());
        s.add(
            "sku-1",
            ProductDetails {
                title: Some("Ring".into()),
                image: Some("/img/ring.jpg".into()),
                price: Some("$120".into()),
                url: Some("/products/ring".into()),
            },
        );
        s.add("sku-2", details("Bracelet"));
        let saved: Vec<WishlistEntry> = s.entries().to_vec();

        // Fresh load over the same slot simulates a page reload.
        let reloaded = WishlistStore::load(slot, CounterClock::default());
        assert_eq!(reloaded.count(), 2);
        for (a, b) in saved.iter().zip(reloaded.entries()) {
            assert_eq!(a.id, b.id);
            assert_eq!(a.added_at, b.added_at);
            assert_eq!(a.title, b.title);
            assert_eq!(a.image, b.image);
            assert_eq!(a.price, b.price);
            assert_eq!(a.url, b.url);
        }
    }

    #[test]
    fn persisted_wire_format_keeps_added_at_camel_case() {
        let slot = InMemorySlot::new();
        let mut s = WishlistStore::load(slot.clone(), CounterClock::default());
        s.add("sku-1", details("Ring"));

        let raw = slot.payload().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let obj = &value.as_array().unwrap()[0];
        assert_eq!(obj["id"], "sku-1");
        assert!(obj["addedAt"].is_string());
        assert_eq!(obj["title"], "Ring");
    }

    #[test]
    fn count_matches_entries_after_every_mutation() {
        let mut s = store();
        assert_eq!(s.count(), s.entries().len());
        s.add("a", details("A"));
        assert_eq!(s.count(), s.entries().len());
        s.add("b", details("B"));
        assert_eq!(s.count(), s.entries().len());
        s.toggle("c", details("C"));
        assert_eq!(s.count(), s.entries().len());
        s.remove("a");
        assert_eq!(s.count(), s.entries().len());
        s.clear();
        assert_eq!(s.count(), s.entries().len());
    }

    #[test]
    fn corrupt_payload_loads_as_empty() {
        for payload in ["{\"not\":\"an array\"}", "42", "not json at all", "\"[]\""] {
            let slot = InMemorySlot::with_payload(payload);
            let s = WishlistStore::load(slot, CounterClock::default());
            assert_eq!(s.count(), 0, "payload {payload:?} should load as empty");
        }
    }

    #[test]
    fn write_failure_keeps_in_memory_state_authoritative() {
        let mut s = WishlistStore::load(FailingSlot, CounterClock::default());
        assert!(s.add("sku-1", details("Ring")));
        assert_eq!(s.count(), 1);
        assert!(s.remove("sku-1"));
        assert_eq!(s.count(), 0);
    }

    #[test]
    fn insertion_order_is_preserved() {
        let mut s = store();
        s.add("c", details("C"));
        s.add("a", details("A"));
        s.add("b", details("B"));
        let ids: Vec<&str> = s.entries().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["c", "a", "b"]);
    }

    #[test]
    fn remove_of_absent_id_is_a_no_op() {
        let mut s = store();
        s.add("sku-1", details("Ring"));
        assert!(!s.remove("sku-2"));
        assert_eq!(s.count(), 1);
    }

    #[test]
    fn items_project_missing_fields_to_empty_strings() {
        let mut s = store();
        s.add("sku-1", ProductDetails::default());
        let items = s.items();
        assert_eq!(items[0].id, "sku-1");
        assert_eq!(items[0].title, "");
        assert_eq!(items[0].image, "");
        assert!(!items[0].added_at.is_empty());
    }

    #[test]
    fn add_toggle_clear_scenario() {
        let slot = InMemorySlot::new();
        let mut s = WishlistStore::load(slot.clone(), CounterClock::default());

        assert!(s.add("sku-1", details("Ring")));
        assert_eq!(s.count(), 1);
        assert!(!s.add("sku-1", details("Ring")));
        assert_eq!(s.count(), 1);

        assert!(!s.toggle("sku-1", details("Ring")));
        assert_eq!(s.count(), 0);
        assert!(s.toggle("sku-1", details("Ring")));
        assert_eq!(s.count(), 1);

        s.clear();
        assert_eq!(s.count(), 0);
        assert_eq!(slot.payload().as_deref(), Some("[]"));
    }

    #[test]
    fn utc_clock_formats_like_js_to_iso_string() {
        let now = UtcClock.now_iso();
        // e.g. 2025-06-01T12:34:56.789Z
        assert!(now.ends_with('Z'));
        assert_eq!(now.len(), 24);
        assert_eq!(&now[4..5], "-");
        assert_eq!(&now[10..11], "T");
        assert_eq!(&now[19..20], ".");
    }
}
