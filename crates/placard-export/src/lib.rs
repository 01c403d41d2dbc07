//! placard-export
//!
//! HTML rendering (Tera) and PDF printing through headless Chromium.

pub mod error;
pub mod pdf;
pub mod render;
