/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use anyhow::Error as AnyhowError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use litmus_core::graphs::GraphStoreError;
use litmus_core::report::FilterError;
use sea_orm::DbErr;
use std::fmt;

/// Handler failures. Every variant renders as a plain-text body.
#[derive(Debug)]
pub enum WebError {
    MissingField(String),
    BadRequest(String),
    NotFound(String),
    Upstream(String),
    Database(DbErr),
    Internal(AnyhowError),
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WebError::MissingField(field) => write!(f, "{}", field),
            WebError::BadRequest(msg) => write!(f, "{}", msg),
            WebError::NotFound(msg) => write!(f, "{}", msg),
            WebError::Upstream(msg) => write!(f, "{}", msg),
            WebError::Database(err) => write!(f, "Database error: {}", err),
            WebError::Internal(err) => write!(f, "Internal error: {}", err),
        }
    }
}

impl std::error::Error for WebError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WebError::Database(err) => Some(err),
            WebError::Internal(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl From<DbErr> for WebError {
    fn from(err: DbErr) -> Self {
        WebError::Database(err)
    }
}

impl From<AnyhowError> for WebError {
    fn from(err: AnyhowError) -> Self {
        WebError::Internal(err)
    }
}

impl From<FilterError> for WebError {
    fn from(err: FilterError) -> Self {
        WebError::BadRequest(err.to_string())
    }
}

impl From<GraphStoreError> for WebError {
    fn from(err: GraphStoreError) -> Self {
        WebError::Upstream(err.to_string())
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            WebError::MissingField(field) => (StatusCode::BAD_REQUEST, field),
            WebError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            WebError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            WebError::Upstream(msg) => {
                tracing::warn!("Graph store error: {}", msg);
                (StatusCode::BAD_REQUEST, msg)
            }
            WebError::Database(err) => {
                tracing::error!("Database error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database error".to_string(),
                )
            }
            WebError::Internal(err) => {
                tracing::error!("Internal error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, message).into_response()
    }
}

pub type WebResult<T> = Result<T, WebError>;

impl WebError {
    pub fn missing(field: &str) -> Self {
        WebError::MissingField(field.to_string())
    }

    pub fn empty_result_set() -> Self {
        WebError::NotFound(litmus_core::consts::EMPTY_RESULT_SET.to_string())
    }
}
