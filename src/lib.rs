//! Owner-side client for listing rental vehicles.
//!
//! The [`application::submission::AddCarForm`] holds a draft listing and
//! submits it, together with an optional picture, to the backend's add-car
//! endpoint.

pub mod application;
pub mod config;
pub mod domain;
pub mod infra;

pub use autolist_api_types as api_types;
