//! HTTP service module
//!
//! Entry point for every HTTP request: converts it to an invocation, runs the
//! handler, converts the result back and writes the access log line.

use crate::config::AppState;
use crate::handler;
use crate::http::{build_502_response, from_invocation_response, to_invocation_event};
use crate::logger::{self, AccessLogEntry};
use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::{Request, Response, Version};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

/// Main entry point for HTTP request handling
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();
    let event = to_invocation_event(&req);

    let response = match handler::handle(&event, &state.context, state.clock.as_ref()) {
        Ok(inv) => from_invocation_response(inv),
        Err(e) => {
            logger::log_error(&format!(
                "Handler failed for {} {}: {e}",
                event.http_method, event.path
            ));
            build_502_response()
        }
    };

    if state.config.logging.access_log {
        let mut entry = AccessLogEntry::new(peer_addr.to_string(), event.http_method, event.path);
        entry.query = req.uri().query().map(ToString::to_string);
        entry.http_version = version_label(req.version()).to_string();
        entry.status = response.status().as_u16();
        entry.body_bytes = response_body_bytes(&response);
        entry.origin = header_value(&req, "origin");
        entry.user_agent = header_value(&req, "user-agent");
        entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Size of the body actually sent, fallbacks included
fn response_body_bytes(response: &Response<Full<Bytes>>) -> usize {
    response
        .body()
        .size_hint()
        .exact()
        .and_then(|n| usize::try_from(n).ok())
        .unwrap_or(0)
}

fn header_value<B>(req: &Request<B>, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}

fn version_label(version: Version) -> &'static str {
    match version {
        Version::HTTP_09 => "0.9",
        Version::HTTP_10 => "1.0",
        Version::HTTP_2 => "2",
        Version::HTTP_3 => "3",
        _ => "1.1",
    }
}
