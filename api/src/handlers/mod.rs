//! HTTP handlers
//!
//! Thin translation layer: extract and validate inputs, call a service,
//! shape the JSON the site consumes (camelCase field names).

mod blog;
mod catalog;
mod contact;
mod meta;
mod pages;
mod pricing;

pub use blog::*;
pub use catalog::*;
pub use contact::*;
pub use meta::*;
pub use pages::*;
pub use pricing::*;

use std::net::SocketAddr;

use axum::http::HeaderMap;
use serde::Serialize;

/// Standard `{ "data": ... }` envelope
#[derive(Debug, Serialize)]
pub struct DataResponse<T> {
    pub data: T,
}

/// Session identity: the client-supplied header when present, otherwise
/// the connecting IP. Anonymous visitors without the header still get
/// stable show-once behavior per address.
pub(crate) fn session_id(headers: &HeaderMap, addr: &SocketAddr) -> String {
    headers
        .get("x-session-id")
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| addr.ip().to_string())
}
