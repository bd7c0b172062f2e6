//! # shopbot_core
//!
//! Chat session, API client and rendering for Shopbot.
//!
//! The product chat service lives behind an external HTTP API. This crate
//! holds the client side of it: a [`session::ChatSession`] that turns user
//! input into `POST /api/chat` round trips, the [`client::ChatApi`] seam with
//! its reqwest implementation, and pure renderers for the transcript and the
//! live API trace.

pub mod client;
pub mod config;
pub mod docs;
pub mod models;
pub mod render;
pub mod session;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
