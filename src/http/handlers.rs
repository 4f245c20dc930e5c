//! Request handlers translating engine outcomes into status codes.

// Handlers are async because axum requires it, even though the engine
// never awaits.
#![allow(clippy::unused_async)]

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Form, Json};
use serde::{Deserialize, Serialize};

use super::AppState;
use crate::core::{Car, CarPoolService, DropOffOutcome, JourneyOutcome, LocateOutcome};
use crate::util::types::{CarId, JourneyId, Seats};

/// Journey submission payload.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct JourneyRequest {
    /// Journey identifier.
    pub id: JourneyId,
    /// Group size requesting seats.
    pub people: Seats,
}

/// Url-encoded `ID=X` form used by drop-off and locate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GroupIdForm {
    /// Journey identifier.
    #[serde(rename = "ID")]
    pub id: JourneyId,
}

/// Body returned by a successful locate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LocateResponse {
    /// Car the journey travels with.
    pub car_id: CarId,
}

/// Body returned by a successful incremental car add.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AddCarResponse {
    /// Identifier of the accepted car.
    pub id: CarId,
}

/// Service banner.
pub async fn root() -> &'static str {
    "Car pooling service"
}

/// Occupancy snapshot; a 200 means the engine is up and consistent.
pub async fn status(State(state): State<AppState>) -> Response {
    let snapshot = state.dispatcher.lock().status();
    (StatusCode::OK, Json(snapshot)).into_response()
}

/// Bulk fleet load: replaces all cars, dropping invalid entries.
pub async fn load_cars(State(state): State<AppState>, Json(cars): Json<Vec<Car>>) -> StatusCode {
    state.dispatcher.lock().load_cars(cars);
    StatusCode::OK
}

/// Incremental car add; the dispatch policy decides whether seat bounds
/// apply on this path.
pub async fn add_car(State(state): State<AppState>, Json(car): Json<Car>) -> Response {
    match state.dispatcher.lock().add_car(car) {
        Ok(id) => (StatusCode::OK, Json(AddCarResponse { id })).into_response(),
        Err(err) => {
            tracing::warn!(error = %err, "car add rejected");
            StatusCode::BAD_REQUEST.into_response()
        }
    }
}

/// Journey submission: 202 whether the group rides now or waits, 400
/// when the request itself is invalid.
pub async fn journey(State(state): State<AppState>, Json(req): Json<JourneyRequest>) -> StatusCode {
    match state.dispatcher.lock().journey(req.id, req.people) {
        JourneyOutcome::Rejected => StatusCode::BAD_REQUEST,
        JourneyOutcome::Queued | JourneyOutcome::Assigned(_) => StatusCode::ACCEPTED,
    }
}

/// Drop-off: 204 when the waiting journey is unregistered, 404 when it
/// is not waiting.
pub async fn drop_off(State(state): State<AppState>, Form(form): Form<GroupIdForm>) -> StatusCode {
    match state.dispatcher.lock().drop_off(form.id) {
        DropOffOutcome::Removed(_) => StatusCode::NO_CONTENT,
        DropOffOutcome::NotFound => StatusCode::NOT_FOUND,
    }
}

/// Locate: 200 with the car, 204 while waiting, 404 for an unknown id.
pub async fn locate(State(state): State<AppState>, Form(form): Form<GroupIdForm>) -> Response {
    match state.dispatcher.lock().locate(form.id) {
        LocateOutcome::Assigned(car_id) => {
            (StatusCode::OK, Json(LocateResponse { car_id })).into_response()
        }
        LocateOutcome::Waiting => StatusCode::NO_CONTENT.into_response(),
        LocateOutcome::NotFound => StatusCode::NOT_FOUND.into_response(),
    }
}
