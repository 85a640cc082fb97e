//! Energy API Library Crate
//!
//! This library hosts the voice skill behind HTTP: it accepts the voice
//! platform's request envelope, drives the `energy-core` speechlet and renders
//! the platform's response envelope. The `api` binary is a thin wrapper around
//! this library.

pub mod config;
pub mod handlers;
pub mod models;
pub mod router;
pub mod state;
