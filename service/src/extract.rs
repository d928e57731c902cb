//! axum extractors that reject with `abi::Error`, so malformed ids, forms and
//! query strings come back as the same JSON error body as everything else.

use abi::Error;
use axum::extract::{FromRequest, FromRequestParts};

/// form-encoded body (or query string on GET)
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Form), rejection(Error))]
pub struct Form<T>(pub T);

#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(Error))]
pub struct Path<T>(pub T);

#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(Error))]
pub struct Query<T>(pub T);
