//! Common utilities module
//!
//! This module contains shared utilities used across the overlay engine.

pub mod error;

pub use error::{OverlayError, Result};
