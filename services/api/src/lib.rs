//! services/api/src/lib.rs
//!
//! Library entry for the `api` service, exposing the adapter and web layers
//! to the binaries and to the integration tests.

pub mod adapters;
pub mod config;
pub mod error;
pub mod web;
