//! Wall-clock seam for submission timestamps.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

/// Source of the human-readable submission time.
pub trait Clock {
    /// Current time as a locale-style string, e.g. `7/4/2025, 3:04:05 PM`.
    fn now_label(&self) -> String;
}

/// Native clock using the local offset when the platform exposes one.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

#[cfg(not(target_arch = "wasm32"))]
impl Clock for SystemClock {
    fn now_label(&self) -> String {
        let now = time::OffsetDateTime::now_local().unwrap_or_else(|_| time::OffsetDateTime::now_utc());
        format_timestamp(now)
    }
}

/// Format like `Date.prototype.toLocaleString` does for `en-US`.
#[cfg(not(target_arch = "wasm32"))]
#[must_use]
pub fn format_timestamp(at: time::OffsetDateTime) -> String {
    let format = time::macros::format_description!(
        "[month padding:none]/[day padding:none]/[year], [hour repr:12 padding:none]:[minute]:[second] [period]"
    );
    at.format(&format).unwrap_or_else(|_| at.to_string())
}
