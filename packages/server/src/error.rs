//! Request and startup errors.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::response::{IntoResponse, Response};
use axum::Json;
use http::StatusCode;
use serde_json::json;
use treefs_tree::Error as TreeError;

/// A failed request, rendered as `{"detail": "..."}` with a matching status.
#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    /// A path segment or item is missing, or a request body is not a node.
    #[error(transparent)]
    Tree(#[from] TreeError),

    /// The store handed back something that is not a tree.
    #[error("Malformed file system document: {0}")]
    Document(TreeError),

    #[error(transparent)]
    Store(#[from] treefs_doc_store::Error),

    #[error("{message}")]
    Body { status: StatusCode, message: String },

    #[error("{message}")]
    Query { message: String },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Tree(TreeError::NotFound { .. }) => StatusCode::NOT_FOUND,
            ApiError::Tree(TreeError::Decode { .. }) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Document(_) | ApiError::Store(_) => StatusCode::BAD_GATEWAY,
            ApiError::Body { status, .. } => *status,
            ApiError::Query { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Body {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::Query {
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "detail": self.to_string() }))).into_response()
    }
}

/// Errors that stop the server from starting or keep it from running.
#[derive(thiserror::Error, Debug)]
pub enum ServerError {
    #[error("Store error: {0}")]
    Store(#[from] treefs_doc_store::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Logging error: {message}")]
    Logging { message: String },
}
