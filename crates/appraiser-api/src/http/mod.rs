//! HTTP/REST API layer for Appraiser.
//!
//! Axum-based API at `/api/` with CORS, request tracing, and optional static
//! hosting of the frontend bundle.

pub mod error;
pub mod handlers;
pub mod router;
