//! Browser helpers.

pub mod clock;
