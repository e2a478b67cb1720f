//! Transient notification banners.
//!
//! Each call creates an independent banner; several may stack. Lifecycle is
//! timer-driven: show after a short delay so the CSS transition engages,
//! hide after a fixed duration, detach once the fade-out is over.

use crate::dom;
use gloo_timers::callback::Timeout;

const SHOW_DELAY_MS: u32 = 100;
const VISIBLE_MS: u32 = 3_000;
const FADE_MS: u32 = 300;

#[derive(Clone, Copy)]
pub enum Kind {
    Success,
    Info,
}

impl Kind {
    fn as_str(self) -> &'static str {
        match self {
            Kind::Success => "success",
            Kind::Info => "info",
        }
    }
}

pub fn success(message: &str) {
    show(message, Kind::Success);
}

pub fn info(message: &str) {
    show(message, Kind::Info);
}

pub fn show(message: &str, kind: Kind) {
    let banner = dom::create_element("div");
    banner.set_class_name(&format!(
        "wishlist-notification wishlist-notification--{}",
        kind.as_str()
    ));
    dom::set_text(&banner, message);
    dom::body().append_child(&banner).unwrap();

    {
        let banner = banner.clone();
        Timeout::new(SHOW_DELAY_MS, move || {
            dom::add_class(&banner, "wishlist-notification--show");
        })
        .forget();
    }

    Timeout::new(VISIBLE_MS, move || {
        dom::remove_class(&banner, "wishlist-notification--show");
        Timeout::new(FADE_MS, move || dom::detach(&banner)).forget();
    })
    .forget();
}
