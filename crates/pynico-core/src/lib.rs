//! PyNico core: session state, send coordination and persistence.
//!
//! Pure Rust with no platform dependencies; browser adapters plug in
//! through the traits in [`ports`].

pub mod ports;
pub mod event_bus;
pub mod store;
pub mod coordinator;
pub mod persistence;
pub mod view_model;
pub mod controller;
