//! Request routing dispatch module
//!
//! Entry point for invocation processing: resolves the route in fixed
//! priority order and builds the canned response for it.

use crate::clock::{iso_timestamp, Clock};
use crate::error::HandlerError;
use crate::handler::headers;
use crate::handler::payload::{
    Checks, Endpoints, HealthBody, IndexBody, NotFoundBody, StatusBody, HEALTH_PATH, SERVICE_ID,
    SERVICE_NAME, STATUS_OK, STATUS_PATH, VERSION,
};
use crate::invocation::{InvocationContext, InvocationEvent, InvocationResponse};
use serde::Serialize;

/// Endpoint selected for a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Health,
    Status,
    Index,
    Preflight,
    NotFound,
}

impl Route {
    /// Resolve a route. Path rules win over the method, so `OPTIONS /health`
    /// is a health request; only unmatched paths fall back to the preflight
    /// check before 404.
    pub fn resolve(method: &str, path: &str) -> Self {
        match path {
            "/health" | "/api/health" => Self::Health,
            "/status" | "/api/status" => Self::Status,
            "/" | "/api" => Self::Index,
            _ if method == "OPTIONS" => Self::Preflight,
            _ => Self::NotFound,
        }
    }
}

/// Main entry point for invocation handling
pub fn handle(
    event: &InvocationEvent,
    context: &InvocationContext,
    clock: &dyn Clock,
) -> Result<InvocationResponse, HandlerError> {
    match Route::resolve(&event.http_method, &event.path) {
        Route::Health => health_response(context, clock),
        Route::Status => status_response(clock),
        Route::Index => index_response(clock),
        Route::Preflight => Ok(InvocationResponse::new(
            200,
            headers::PREFLIGHT,
            String::new(),
        )),
        Route::NotFound => json_response(
            404,
            headers::JSON_ORIGIN_ONLY,
            &NotFoundBody::for_path(&event.path),
        ),
    }
}

fn health_response(
    context: &InvocationContext,
    clock: &dyn Clock,
) -> Result<InvocationResponse, HandlerError> {
    let body = HealthBody {
        status: STATUS_OK,
        service: SERVICE_ID,
        timestamp: iso_timestamp(clock.now()),
        version: VERSION,
        region: context.region()?,
        uptime: "healthy",
        checks: Checks::operational(),
    };
    json_response(200, headers::HEALTH, &body)
}

fn status_response(clock: &dyn Clock) -> Result<InvocationResponse, HandlerError> {
    let body = StatusBody {
        status: STATUS_OK,
        service: SERVICE_ID,
        message: "Video conference service is operational",
        timestamp: iso_timestamp(clock.now()),
    };
    json_response(200, headers::STATUS, &body)
}

fn index_response(clock: &dyn Clock) -> Result<InvocationResponse, HandlerError> {
    let body = IndexBody {
        service: SERVICE_NAME,
        version: VERSION,
        endpoints: Endpoints {
            health: HEALTH_PATH,
            status: STATUS_PATH,
        },
        timestamp: iso_timestamp(clock.now()),
    };
    json_response(200, headers::JSON_ORIGIN_ONLY, &body)
}

fn json_response<T: Serialize>(
    status: u16,
    headers: &[(&str, &str)],
    body: &T,
) -> Result<InvocationResponse, HandlerError> {
    let json = serde_json::to_string(body)?;
    Ok(InvocationResponse::new(status, headers, json))
}
