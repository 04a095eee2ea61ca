//! Error types for the CSRF-authenticated API client.
//!
//! # Design
//! `Forbidden` and `NotFound` get dedicated variants because callers treat
//! them differently: a 403 usually means the page's CSRF token went stale
//! and the page must be reloaded, while a 404 means the resource is gone.
//! All other non-2xx responses land in `HttpError` with the raw status code
//! and body for debugging. Transport failures never appear here; the host
//! executing the request owns those.

use std::fmt;

/// Errors returned by `CsrfClient` build and parse methods.
#[derive(Debug)]
pub enum ApiError {
    /// The server returned 403. The request's CSRF token was missing,
    /// stale, or did not match the session.
    Forbidden { body: String },

    /// The server returned 404. The requested resource does not exist.
    NotFound,

    /// The server returned a non-2xx status other than 403 or 404.
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    SerializationError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Forbidden { body } => {
                write!(f, "request rejected (403): {body}")
            }
            ApiError::NotFound => write!(f, "resource not found"),
            ApiError::HttpError { status, body } => {
                write!(f, "HTTP {status}: {body}")
            }
            ApiError::DeserializationError(msg) => {
                write!(f, "deserialization failed: {msg}")
            }
            ApiError::SerializationError(msg) => {
                write!(f, "serialization failed: {msg}")
            }
        }
    }
}

impl std::error::Error for ApiError {}
