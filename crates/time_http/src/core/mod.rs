//! # Time Server Core
//!
//! Region resolution and timestamp formatting behind the HTTP endpoints.
//!
//! ## Modules
//! - `error`: Error types and their HTTP representation
//! - `models`: Response bodies
//! - `provider`: Local timezone detection and time formatting
//! - `regions`: The region-to-timezone lookup table
//! - `utils`: Format strings and message helpers

pub mod error;
pub mod models;
pub mod provider;
pub mod regions;
pub mod utils;
