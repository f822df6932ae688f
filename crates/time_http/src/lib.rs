//! HTTP server reporting the current time, optionally localized to a region.

pub mod cli;
pub mod config;
pub mod core;
pub mod server;
pub mod utils;
