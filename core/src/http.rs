//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! These types describe HTTP requests and responses as plain data. The core
//! crate builds `HttpRequest` values and parses `HttpResponse` values without
//! ever touching the network; the caller (host) is responsible for executing
//! the actual I/O. This separation keeps the core deterministic and easy to
//! test: header merging and credential-mode selection can be asserted on
//! without a transport in the loop.
//!
//! All fields use owned types (`String`, `Vec`) so values carry no lifetime
//! ties back into the client that built them.

/// HTTP method for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// Credential mode the host must apply when executing a request.
///
/// `SameOrigin` means cookies and other ambient credentials are attached
/// only for requests to the page's own origin, which is the mode every
/// request built by [`crate::CsrfClient`] uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Credentials {
    SameOrigin,
    Omit,
}

/// An HTTP request described as plain data.
///
/// Built by `CsrfClient::build_*` methods. The caller is responsible for
/// executing this request against the network and returning the
/// corresponding `HttpResponse`.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub credentials: Credentials,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// Constructed by the caller after executing an `HttpRequest`, then passed
/// to `CsrfClient::parse_*` methods for status checking and deserialization.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}
