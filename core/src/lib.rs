//! Page-side helper core: class-name toggling and CSRF-authenticated requests.
//!
//! # Overview
//! Two small, stateless facilities that page scripts need:
//! - [`css`]: add, remove, and toggle a single class token on an element's
//!   space-separated class-name string.
//! - [`client::CsrfClient`]: builds `HttpRequest` values with a CSRF token
//!   header merged in and parses `HttpResponse` values, without touching the
//!   network (host-does-IO pattern). The caller executes the actual HTTP
//!   round-trip, making the core fully deterministic and testable.
//!
//! # Design
//! - `CsrfClient` is stateless between calls; it holds only `base_url` and
//!   the CSRF token, which is an explicit constructor parameter rather than
//!   an ambient page lookup.
//! - Each typed operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit.
//! - Types use owned `String` / `Vec` fields; no borrows cross the boundary.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod css;
pub mod error;
pub mod http;
pub mod types;

pub use client::{CsrfClient, CSRF_HEADER};
pub use css::Element;
pub use error::ApiError;
pub use http::{Credentials, HttpMethod, HttpRequest, HttpResponse};
pub use types::{CreateDisplayItem, DisplayItem};
