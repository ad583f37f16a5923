//! mediascribe - uploads a local media file to the Gemini File API and asks
//! a Gemini model for a description
//!
//! The binary prints two lines: the URI the file was stored under, then the
//! generation response exactly as the service returned it.

pub mod ai;
pub mod app;
pub mod error;
pub mod models;
pub mod output;

pub use error::{Error, Result};
