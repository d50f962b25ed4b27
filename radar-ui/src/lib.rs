//! radar-ui - UI types and components for the artist growth radar
//!
//! Contains display types, stores, and pure view components. Nothing in
//! here talks to the network; data arrives through props and stores.

pub mod components;
pub mod display_types;
pub mod stores;

pub use components::*;
pub use display_types::*;
