//! Response construction.
//!
//! # Responsibilities
//! - Convert the resolved header set into wire headers once at startup
//! - Build the identical 200 response served for every request
//!
//! # Design Decisions
//! - Headers that are not legal HTTP field names or values are dropped with
//!   a warning instead of failing startup
//! - The body is a refcounted clone of the captured input, never a copy

use axum::{
    body::{Body, Bytes},
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode},
    response::Response,
};

use crate::headers::HeaderSet;

/// Convert resolved headers into a `HeaderMap`.
pub fn to_header_map(headers: &HeaderSet) -> HeaderMap {
    let mut map = HeaderMap::with_capacity(headers.len());

    for (name, value) in headers.iter() {
        let name_parsed = match HeaderName::from_bytes(name.as_bytes()) {
            Ok(n) => n,
            Err(_) => {
                tracing::warn!(header = %name, "Dropping header with invalid name");
                continue;
            }
        };
        let value_parsed = match HeaderValue::from_str(value) {
            Ok(v) => v,
            Err(_) => {
                tracing::warn!(header = %name, "Dropping header with invalid value");
                continue;
            }
        };
        map.insert(name_parsed, value_parsed);
    }

    map
}

/// The response served for every request: 200, `headers`, `body`.
pub fn replay(headers: &HeaderMap, body: Bytes) -> Response {
    let mut response = Response::new(Body::from(body));
    *response.status_mut() = StatusCode::OK;
    *response.headers_mut() = headers.clone();
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headers::resolve;
    use axum::http::header;

    #[test]
    fn test_default_headers_convert() {
        let map = to_header_map(&HeaderSet::defaults());
        assert_eq!(map.len(), 1);
        assert_eq!(map[header::CONTENT_TYPE], "text/plain; charset=utf-8");
    }

    #[test]
    fn test_invalid_headers_are_dropped() {
        let resolved = resolve([": no name", "bad name: x", "x-ctl: a\u{7}b", "server: in2http"]);
        let map = to_header_map(&resolved);

        assert_eq!(map.len(), 2);
        assert_eq!(map[header::SERVER], "in2http");
        assert!(map.get("x-ctl").is_none());
    }

    #[tokio::test]
    async fn test_replay() {
        let map = to_header_map(&resolve(["server: in2http"]));
        let response = replay(&map, Bytes::from_static(b"Hello there"));

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::SERVER], "in2http");
        assert_eq!(response.headers()[header::CONTENT_TYPE], "text/plain; charset=utf-8");

        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"Hello there");
    }
}
