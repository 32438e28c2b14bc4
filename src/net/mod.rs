//! Outbound HTTP from the browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! `emailjs` posts contact submissions to the EmailJS REST API. It is the
//! only network call the site makes.

pub mod emailjs;
