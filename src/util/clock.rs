//! Submission timestamp source for the current build target.
//!
//! In the browser this is `Date.prototype.toLocaleString()`, so the time is
//! formatted in the visitor's own locale and time zone.

use contact::Clock;

/// Clock whose label comes from the browser's `Date`.
#[cfg(feature = "csr")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserClock;

#[cfg(feature = "csr")]
impl Clock for BrowserClock {
    fn now_label(&self) -> String {
        js_sys::Date::new_0()
            .to_locale_string("default", &wasm_bindgen::JsValue::UNDEFINED)
            .into()
    }
}

#[cfg(feature = "csr")]
pub type PageClock = BrowserClock;

#[cfg(not(feature = "csr"))]
pub type PageClock = contact::SystemClock;

/// Clock used by the contact section.
pub fn page_clock() -> impl Clock {
    PageClock::default()
}
