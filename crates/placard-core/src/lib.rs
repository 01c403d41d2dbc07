//! placard-core
//!
//! Pure domain types and the placeholder content selector.
//! Nothing here talks to a browser or the network.

pub mod models;
pub mod selector;
