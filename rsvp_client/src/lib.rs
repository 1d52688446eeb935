#![deny(
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

//! HTTP client for the RSVP API.
//!
//! Two read-only JSON endpoints, fetched concurrently through the
//! [`rsvp_core::RsvpApi`] trait. All transport, status, and decode
//! failures collapse into a single retrieval error; the caller decides
//! how to surface it.

mod client;
mod error;

pub use client::{ClientConfig, RsvpClient};
pub use error::ClientError;
