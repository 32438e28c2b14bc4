//! Page sections, top to bottom.

pub mod about;
pub mod contact_section;
pub mod expertise;
pub mod footer;
pub mod hero;
pub mod navbar;
pub mod projects;
