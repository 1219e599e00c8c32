// Invocation event
// Request descriptor supplied by the platform for every call

use serde::{Deserialize, Deserializer, Serialize};

/// Incoming request descriptor
///
/// Only the method and path are read; any other field of the platform event
/// is ignored on deserialization. A missing field takes its default. A `null`
/// method reads as `GET`; a `null` path reads as the empty path, which matches
/// no endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct InvocationEvent {
    #[serde(
        rename = "httpMethod",
        default = "default_http_method",
        deserialize_with = "http_method_or_default"
    )]
    pub http_method: String,
    #[serde(default = "default_path", deserialize_with = "path_or_empty")]
    pub path: String,
}

fn http_method_or_default<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_http_method))
}

fn path_or_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn default_http_method() -> String {
    "GET".to_string()
}

fn default_path() -> String {
    "/".to_string()
}

impl InvocationEvent {
    pub fn new(http_method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            http_method: http_method.into(),
            path: path.into(),
        }
    }

    /// Parse a platform event from JSON
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

impl Default for InvocationEvent {
    fn default() -> Self {
        Self {
            http_method: default_http_method(),
            path: default_path(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_event_defaults() {
        let event = InvocationEvent::from_json("{}").unwrap();
        assert_eq!(event.http_method, "GET");
        assert_eq!(event.path, "/");
        assert_eq!(event, InvocationEvent::default());
    }

    #[test]
    fn test_proxy_event_extra_fields_ignored() {
        let json = r#"{
            "resource": "/{proxy+}",
            "path": "/api/health",
            "httpMethod": "OPTIONS",
            "headers": {"Origin": "https://example.com"},
            "queryStringParameters": null,
            "body": null,
            "isBase64Encoded": false
        }"#;
        let event = InvocationEvent::from_json(json).unwrap();
        assert_eq!(event, InvocationEvent::new("OPTIONS", "/api/health"));
    }

    #[test]
    fn test_missing_method_only() {
        let event = InvocationEvent::from_json(r#"{"path":"/status"}"#).unwrap();
        assert_eq!(event.http_method, "GET");
        assert_eq!(event.path, "/status");
    }

    #[test]
    fn test_null_fields_take_defaults() {
        let event = InvocationEvent::from_json(r#"{"httpMethod":null,"path":"/health"}"#).unwrap();
        assert_eq!(event, InvocationEvent::new("GET", "/health"));

        let event = InvocationEvent::from_json(r#"{"httpMethod":"GET","path":null}"#).unwrap();
        assert_eq!(event, InvocationEvent::new("GET", ""));
    }

    #[test]
    fn test_invalid_json() {
        assert!(InvocationEvent::from_json("not json").is_err());
        assert!(InvocationEvent::from_json(r#"{"path": 42}"#).is_err());
    }
}
