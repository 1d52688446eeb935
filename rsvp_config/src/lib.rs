#![warn(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

//! Startup configuration for the RSVP board.
//!
//! Resolution order for the API base address: `RSVP_API_URL` environment
//! variable, then `~/rsvpboard/config.json`, then the built-in fallback
//! address. The board must run with zero setup, so a missing config file
//! is not an error.

mod schema;

pub use schema::Config;
