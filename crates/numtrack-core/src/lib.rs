//! Core types and trait definitions for the numtrack phone-number tracker.
//!
//! This crate is deliberately free of HTTP, database, and numbering-plan
//! dependencies. Every other crate depends on it.

pub mod enrichment;
pub mod error;
pub mod number;
pub mod record;
pub mod store;
pub mod timestamp;

pub use error::{Error, Result};
