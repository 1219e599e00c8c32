//! JSON response bodies
//!
//! Field declaration order is the order fields appear in the serialized body.

use serde::Serialize;

pub const SERVICE_ID: &str = "visio-conference";
pub const SERVICE_NAME: &str = "Doktolib Video Conference Service";
pub const VERSION: &str = "1.0.0";
pub const STATUS_OK: &str = "OK";
pub const OPERATIONAL: &str = "operational";

/// Endpoints advertised by the index and 404 bodies
pub const HEALTH_PATH: &str = "/health";
pub const STATUS_PATH: &str = "/status";
pub const INDEX_PATH: &str = "/";

#[derive(Debug, Serialize)]
pub struct HealthBody<'a> {
    pub status: &'static str,
    pub service: &'static str,
    pub timestamp: String,
    pub version: &'static str,
    pub region: &'a str,
    pub uptime: &'static str,
    pub checks: Checks,
}

/// Simulated subsystem checks; always operational
#[derive(Debug, Serialize)]
pub struct Checks {
    pub api: &'static str,
    pub video_streaming: &'static str,
    pub audio_streaming: &'static str,
    pub signaling_server: &'static str,
    pub turn_servers: &'static str,
}

impl Checks {
    pub const fn operational() -> Self {
        Self {
            api: OPERATIONAL,
            video_streaming: OPERATIONAL,
            audio_streaming: OPERATIONAL,
            signaling_server: OPERATIONAL,
            turn_servers: OPERATIONAL,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StatusBody {
    pub status: &'static str,
    pub service: &'static str,
    pub message: &'static str,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct IndexBody {
    pub service: &'static str,
    pub version: &'static str,
    pub endpoints: Endpoints,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct Endpoints {
    pub health: &'static str,
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct NotFoundBody {
    pub error: &'static str,
    pub message: String,
    pub available_endpoints: [&'static str; 3],
}

impl NotFoundBody {
    pub fn for_path(path: &str) -> Self {
        Self {
            error: "Not Found",
            message: format!("Path {path} not found"),
            available_endpoints: [HEALTH_PATH, STATUS_PATH, INDEX_PATH],
        }
    }
}
