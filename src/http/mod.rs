//! HTTP transport shell over the dispatch engine.
//!
//! Routes mirror the car pooling API: JSON bodies for fleet loads and
//! journey submissions, url-encoded `ID=X` forms for drop-off and
//! locate. Handlers only translate engine outcomes into status codes;
//! malformed payloads are rejected by the extractors before the engine
//! is involved.

mod handlers;

use std::sync::Arc;

use axum::routing::{get, post, put};
use axum::Router;
use parking_lot::Mutex;
use tower_http::trace::TraceLayer;

use crate::core::Dispatcher;

pub use handlers::{AddCarResponse, GroupIdForm, JourneyRequest, LocateResponse};

/// Shared state handed to every handler.
///
/// The engine sits behind a single mutex so each operation, including a
/// full waiting-list reprocessing pass, is one exclusive critical
/// section. Operations are short and never block on I/O, so one lock for
/// the whole engine is sufficient.
#[derive(Clone)]
pub struct AppState {
    /// The single process-wide engine instance.
    pub dispatcher: Arc<Mutex<Dispatcher>>,
}

impl AppState {
    /// Wrap a dispatcher for sharing across handlers.
    #[must_use]
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self {
            dispatcher: Arc::new(Mutex::new(dispatcher)),
        }
    }
}

/// Build the service router over `state`.
#[must_use]
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/status", get(handlers::status))
        .route("/cars", put(handlers::load_cars).post(handlers::add_car))
        .route("/journey", post(handlers::journey))
        .route("/dropoff", post(handlers::drop_off))
        .route("/locate", post(handlers::locate))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
