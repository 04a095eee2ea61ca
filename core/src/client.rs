//! Stateless CSRF-authenticated request builder and response parser.
//!
//! # Design
//! `CsrfClient` holds only a `base_url` and the CSRF token and carries no
//! mutable state between calls. The token is an explicit constructor
//! parameter; reading it out of ambient page state is the caller's job.
//! `build_request` is the generic entry point that every other `build_*`
//! method funnels through, so the CSRF header and credential mode are
//! attached in exactly one place. The caller executes the actual HTTP
//! round-trip between `build_*` and `parse_*`.
//!
//! Header precedence is fixed: the client's token always wins. A
//! caller-supplied header matching [`CSRF_HEADER`] case-insensitively is
//! dropped before the token header is appended, so a confused caller cannot
//! send a request carrying a mismatched token.

use crate::error::ApiError;
use crate::http::{Credentials, HttpMethod, HttpRequest, HttpResponse};
use crate::types::{CreateDisplayItem, DisplayItem};

/// Header name the server checks the CSRF token against.
pub const CSRF_HEADER: &str = "x-csrftoken";

/// Stateless client that stamps every built request with a CSRF token
/// header and same-origin credentials.
#[derive(Debug, Clone)]
pub struct CsrfClient {
    base_url: String,
    csrf_token: String,
}

impl CsrfClient {
    pub fn new(base_url: &str, csrf_token: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            csrf_token: csrf_token.to_string(),
        }
    }

    /// Build a request for an arbitrary endpoint.
    ///
    /// `extra_headers` are carried through as supplied, except that any
    /// entry named [`CSRF_HEADER`] (compared case-insensitively) is replaced
    /// by this client's token. The request always uses
    /// `Credentials::SameOrigin`. No retry, timeout, or error translation
    /// happens here or in the parse methods; transport failures stay with
    /// the host.
    pub fn build_request(
        &self,
        method: HttpMethod,
        path: &str,
        extra_headers: &[(String, String)],
        body: Option<String>,
    ) -> HttpRequest {
        let mut headers: Vec<(String, String)> = extra_headers
            .iter()
            .filter(|(name, _)| !name.eq_ignore_ascii_case(CSRF_HEADER))
            .cloned()
            .collect();
        headers.push((CSRF_HEADER.to_string(), self.csrf_token.clone()));
        HttpRequest {
            method,
            path: format!("{}{path}", self.base_url),
            headers,
            credentials: Credentials::SameOrigin,
            body,
        }
    }

    pub fn build_list_items(&self) -> HttpRequest {
        self.build_request(HttpMethod::Get, "/items", &[], None)
    }

    pub fn build_create_item(&self, input: &CreateDisplayItem) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(self.build_request(
            HttpMethod::Post,
            "/items",
            &[("content-type".to_string(), "application/json".to_string())],
            Some(body),
        ))
    }

    pub fn parse_list_items(&self, response: HttpResponse) -> Result<Vec<DisplayItem>, ApiError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    pub fn parse_create_item(&self, response: HttpResponse) -> Result<DisplayItem, ApiError> {
        check_status(&response, 201)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
    }
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    if response.status == 403 {
        return Err(ApiError::Forbidden {
            body: response.body.clone(),
        });
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}
