//! Client IP extraction from HTTP requests.
//!
//! Forwarded-header aware: proxy headers take precedence over the peer
//! socket address. The result is an opaque string; `"unknown"` when no
//! source yields an address.

use axum::http::HeaderMap;
use std::net::SocketAddr;

/// Fallback value when no client address can be determined.
pub const UNKNOWN_IP: &str = "unknown";

/// Extracts the client IP from proxy headers or the peer address.
///
/// Lookup order:
///
/// 1. First entry of `X-Forwarded-For` (the original client in a proxy chain)
/// 2. `X-Real-IP`
/// 3. The peer socket address
/// 4. `"unknown"`
///
/// The value is not validated or parsed; it is recorded verbatim for
/// analytics.
pub fn extract_client_ip(headers: &HeaderMap, peer: Option<SocketAddr>) -> String {
    if let Some(forwarded) = headers.get("x-forwarded-for")
        && let Ok(value) = forwarded.to_str()
        && let Some(first) = value.split(',').next()
    {
        let first = first.trim();
        if !first.is_empty() {
            return first.to_string();
        }
    }

    if let Some(real_ip) = headers.get("x-real-ip")
        && let Ok(value) = real_ip.to_str()
        && !value.trim().is_empty()
    {
        return value.trim().to_string();
    }

    match peer {
        Some(addr) => addr.ip().to_string(),
        None => UNKNOWN_IP.to_string(),
    }
}
