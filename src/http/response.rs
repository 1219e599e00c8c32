//! HTTP response building module
//!
//! Converts invocation responses to hyper responses, plus the fallbacks used
//! when the handler or the builder fails.

use crate::invocation::InvocationResponse;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};

const GATEWAY_ERROR_BODY: &str = r#"{"message":"Internal server error"}"#;

/// Convert a handler response into an HTTP response.
///
/// An out-of-range status or an invalid header name/value yields a 500.
pub fn from_invocation_response(resp: InvocationResponse) -> Response<Full<Bytes>> {
    let builder = resp
        .headers
        .iter()
        .fold(Response::builder().status(resp.status_code), |b, (name, value)| {
            b.header(name.as_str(), value.as_str())
        });

    builder
        .body(Full::new(Bytes::from(resp.body)))
        .unwrap_or_else(|e| {
            log_build_error(&resp.status_code.to_string(), &e);
            build_500_response()
        })
}

/// Build 502 Bad Gateway response, returned when the handler fails
pub fn build_502_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::BAD_GATEWAY)
        .header("Content-Type", "application/json")
        .body(Full::new(Bytes::from(GATEWAY_ERROR_BODY)))
        .unwrap_or_else(|e| {
            log_build_error("502", &e);
            build_500_response()
        })
}

/// Bare 500 response; built without a builder so it cannot fail
fn build_500_response() -> Response<Full<Bytes>> {
    let mut resp = Response::new(Full::new(Bytes::from(GATEWAY_ERROR_BODY)));
    *resp.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
    resp
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_string(resp: Response<Full<Bytes>>) -> String {
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_from_invocation_response() {
        let inv = InvocationResponse::new(
            404,
            &[
                ("Content-Type", "application/json"),
                ("Access-Control-Allow-Origin", "*"),
            ],
            r#"{"error":"Not Found"}"#.to_string(),
        );
        let resp = from_invocation_response(inv);
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(resp.headers()["content-type"], "application/json");
        assert_eq!(resp.headers()["access-control-allow-origin"], "*");
        assert_eq!(body_string(resp).await, r#"{"error":"Not Found"}"#);
    }

    #[tokio::test]
    async fn test_invalid_status_falls_back_to_500() {
        let inv = InvocationResponse::new(42, &[], String::new());
        let resp = from_invocation_response(inv);
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_invalid_header_falls_back_to_500() {
        let inv = InvocationResponse::new(200, &[("Bad Header", "x")], String::new());
        let resp = from_invocation_response(inv);
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_502_response() {
        let resp = build_502_response();
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(resp.headers()["content-type"], "application/json");
        assert_eq!(body_string(resp).await, GATEWAY_ERROR_BODY);
    }
}
