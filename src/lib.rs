//! Signed Spaces
//!
//! HTTP service that issues short-lived, signed GET URLs for objects in a
//! private DigitalOcean Spaces bucket.
//! This library exposes modules for integration testing.

pub mod api;
pub mod error;
pub mod models;
pub mod server;
pub mod services;
