//! transit-relay - a small HTTP relay for real-time transit vehicle positions
//!
//! Serves a browser map client:
//! - `/realtime-buses` forwards a bounding box to the TriMet vehicles API
//! - `/tileserver-url` hands out the map style URL
//! - `/ping` for liveness checks

pub mod api;
pub mod config;
pub mod error;
pub mod types;
pub mod upstream;

pub use error::{Error, Result};
