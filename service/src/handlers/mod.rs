pub(crate) mod booking;
pub(crate) mod chain;
pub(crate) mod employee;
pub(crate) mod hotel;
pub(crate) mod rental;
pub(crate) mod room;

use abi::Error;
use axum::{
    extract::{OriginalUri, State},
    http::Method,
    Json,
};
use serde_json::{json, Value};

use crate::AppState;

/// liveness plus a round trip through the pool
pub(crate) async fn health(State(svc): State<AppState>) -> Result<Json<Value>, Error> {
    svc.manager().ping().await?;
    Ok(Json(json!({ "status": "ok" })))
}

pub(crate) async fn not_implemented(
    method: Method,
    OriginalUri(uri): OriginalUri,
) -> Error {
    Error::NotImplemented(format!("{} {}", method, uri.path()))
}
