//! JSON REST façade for numtrack.
//!
//! Exposes an axum [`Router`] over a [`Tracker`] backed by any
//! [`RecordStore`] and [`Geocoder`]. TLS and authentication are the caller's
//! responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let app = numtrack_api::app(AppState::new(tracker, backup_dir));
//! axum::serve(listener, app).await?;
//! ```

pub mod error;
pub mod extract;
pub mod lookup;
pub mod numbers;
pub mod pagination;
pub mod stats;
pub mod transfer;

use std::{any::Any, path::PathBuf, sync::Arc};

use axum::{
  Router,
  response::{IntoResponse, Response},
  routing::{get, post},
};
use numtrack_core::store::RecordStore;
use numtrack_tracker::{
  Tracker,
  geocode::{Geocoder, GeocoderClient},
};
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};

pub use error::ApiError;

// ─── Application state ───────────────────────────────────────────────────────

/// Shared state threaded through all handlers.
pub struct AppState<S, G = GeocoderClient> {
  pub tracker:    Arc<Tracker<S, G>>,
  /// Where `POST /backup` writes its snapshots.
  pub backup_dir: Arc<PathBuf>,
}

impl<S, G> AppState<S, G> {
  pub fn new(tracker: Tracker<S, G>, backup_dir: impl Into<PathBuf>) -> Self {
    Self {
      tracker:    Arc::new(tracker),
      backup_dir: Arc::new(backup_dir.into()),
    }
  }
}

// Manual impl: a derive would demand `S: Clone` and `G: Clone`.
impl<S, G> Clone for AppState<S, G> {
  fn clone(&self) -> Self {
    Self {
      tracker:    Arc::clone(&self.tracker),
      backup_dir: Arc::clone(&self.backup_dir),
    }
  }
}

// ─── Routers ─────────────────────────────────────────────────────────────────

/// The bare API routes, relative to their mount point.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S, G>(state: AppState<S, G>) -> Router<()>
where
  S: RecordStore + 'static,
  G: Geocoder + 'static,
{
  Router::new()
    .route("/health", get(stats::health))
    // Lookups
    .route("/validate", post(lookup::validate::<S, G>))
    .route("/info", post(lookup::info::<S, G>))
    .route("/enhanced-info", post(lookup::enhanced::<S, G>))
    .route("/owner-info", post(lookup::owner::<S, G>))
    .route("/location-info", post(lookup::location::<S, G>))
    // Records
    .route("/track", post(numbers::track::<S, G>))
    .route("/numbers", get(numbers::list::<S, G>))
    .route(
      "/numbers/{phone_number}",
      get(numbers::get_one::<S, G>).delete(numbers::delete_one::<S, G>),
    )
    .route("/search", get(numbers::search::<S, G>))
    .route("/clear", post(numbers::clear::<S, G>))
    // Transfer
    .route("/export/csv", get(transfer::export_csv::<S, G>))
    .route("/export/json", get(transfer::export_json::<S, G>))
    .route("/import/csv", post(transfer::import_csv::<S, G>))
    .route("/backup", post(transfer::backup::<S, G>))
    // Aggregates
    .route("/stats", get(stats::stats::<S, G>))
    .with_state(state)
}

/// The complete application: the API nested under `/api`, with request
/// tracing, permissive CORS and panic recovery.
pub fn app<S, G>(state: AppState<S, G>) -> Router
where
  S: RecordStore + 'static,
  G: Geocoder + 'static,
{
  Router::new()
    .nest("/api", api_router(state))
    .layer(CatchPanicLayer::custom(panic_response))
    .layer(TraceLayer::new_for_http())
    .layer(CorsLayer::permissive())
}

fn panic_response(_: Box<dyn Any + Send + 'static>) -> Response {
  ApiError::Internal("handler panicked".into()).into_response()
}

#[cfg(test)]
mod tests;
