use crate::domain::model::Receipt;
use crate::http::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

#[derive(Debug, Serialize, Deserialize)]
pub struct ProcessReceiptResponse {
    pub id: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PointsResponse {
    pub points: i64,
}

pub async fn process_receipt_handler(
    State(state): State<AppState>,
    body: Result<Json<Receipt>, JsonRejection>,
) -> Response {
    let Json(receipt) = match body {
        Ok(json) => json,
        Err(rejection) => {
            // Any decode failure is the caller's problem: 400 with the message
            debug!("rejected receipt submission: {}", rejection.body_text());
            return (StatusCode::BAD_REQUEST, rejection.body_text()).into_response();
        }
    };

    match state.store.submit(receipt).await {
        Ok(id) => {
            info!(id = %id, "receipt stored");
            Json(ProcessReceiptResponse { id }).into_response()
        }
        Err(e) => e.into_response(),
    }
}

pub async fn get_points_handler(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.store.get_points(&id).await {
        Ok(points) => {
            info!(id = %id, points, "points served");
            Json(PointsResponse { points }).into_response()
        }
        Err(e) => {
            debug!(id = %id, "points lookup miss");
            e.into_response()
        }
    }
}
