// Invocation response
// Response descriptor returned to the platform

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Outgoing response descriptor
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct InvocationResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

impl InvocationResponse {
    pub fn new(status_code: u16, headers: &[(&str, &str)], body: String) -> Self {
        Self {
            status_code,
            headers: headers
                .iter()
                .map(|(name, value)| ((*name).to_string(), (*value).to_string()))
                .collect(),
            body,
        }
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }
}
