//! The numtrack tracker service.
//!
//! [`Tracker`] is the single entry point the HTTP façade uses. It ties the
//! numbering-plan adapter to a [`RecordStore`](numtrack_core::store::RecordStore)
//! and adds the lookup-time extras: synthetic owner profiles
//! ([`enrich`]), geocoded locations ([`geocode`]), store statistics
//! ([`stats`]) and CSV/JSON transfer ([`export`]).

pub mod enrich;
pub mod error;
pub mod export;
pub mod geocode;
pub mod stats;
mod tracker;

pub use error::{Error, GeocodeError, Result};
pub use tracker::{ImportReport, Tracker};
