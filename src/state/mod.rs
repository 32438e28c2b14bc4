//! Client-side view state.
//!
//! DESIGN
//! ======
//! `contact` maps the shared submission controller onto text and button
//! state; `ui` holds page chrome state such as the scrolled navbar.

pub mod contact;
pub mod ui;
