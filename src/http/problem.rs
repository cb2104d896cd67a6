//! Mapping of catalog and plumbing failures onto HTTP answers.
//!
//! - Both not-found variants become a bare `404`.
//! - Validation failures become `400` with a model-state body: each offending
//!   field maps to the list of its messages, e.g.
//!   `{"Description": ["The provided description should be different from the name."]}`.
//! - A body that cannot be decoded becomes `400` with the decoder's message
//!   under the empty key.
//! - Anything else is a server fault: `500` with a fixed message, and the
//!   cause goes to the log instead of the client.

use crate::error::CatalogError;
use crate::framework::FrameworkError;
use crate::validation::Violation;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{Map, Value};
use tracing::error;

pub const INTERNAL_ERROR_MESSAGE: &str = "A problem happened while handling your request.";

#[derive(Debug, PartialEq)]
pub enum ApiError {
    NotFound,
    Invalid(Vec<Violation>),
    BadBody(String),
    Internal,
}

impl From<FrameworkError> for ApiError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::Catalog(e) if e.is_not_found() => ApiError::NotFound,
            FrameworkError::Catalog(CatalogError::ValidationFailed(violations)) => {
                ApiError::Invalid(violations)
            }
            other => {
                error!(error = %other, "Request failed");
                ApiError::Internal
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadBody(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND.into_response(),
            ApiError::Invalid(violations) => {
                (StatusCode::BAD_REQUEST, Json(model_state(&violations))).into_response()
            }
            ApiError::BadBody(message) => {
                let body = model_state(&[Violation::new("", message)]);
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
            ApiError::Internal => {
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE).into_response()
            }
        }
    }
}

/// Groups messages by field, keeping the order they were reported in.
fn model_state(violations: &[Violation]) -> Value {
    let mut state = Map::new();
    for v in violations {
        let messages = state
            .entry(v.field.clone())
            .or_insert_with(|| Value::Array(Vec::new()));
        if let Value::Array(list) = messages {
            list.push(Value::String(v.message.clone()));
        }
    }
    Value::Object(state)
}
