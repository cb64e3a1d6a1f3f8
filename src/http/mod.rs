pub mod handlers;

use crate::domain::ports::ReceiptStore;
use crate::utils::error::ServiceError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ReceiptStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn ReceiptStore>) -> Self {
        Self { store }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/receipts/process", post(handlers::process_receipt_handler))
        .route("/receipts/{id}/points", get(handlers::get_points_handler))
        .with_state(state)
}

// Store errors surface as plain-text bodies; only the not-found case is an
// expected part of the HTTP contract.
impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = match self {
            ServiceError::ReceiptNotFound => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, self.user_friendly_message()).into_response()
    }
}
