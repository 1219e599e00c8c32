//! Response header sets

pub const CONTENT_TYPE: &str = "Content-Type";
pub const ALLOW_ORIGIN: &str = "Access-Control-Allow-Origin";
pub const ALLOW_METHODS: &str = "Access-Control-Allow-Methods";
pub const ALLOW_HEADERS: &str = "Access-Control-Allow-Headers";
pub const CACHE_CONTROL: &str = "Cache-Control";

const JSON: &str = "application/json";
const ANY_ORIGIN: &str = "*";
const METHODS: &str = "GET, OPTIONS";
const HEADERS: &str = "Content-Type";
const NO_CACHE: &str = "no-cache, no-store, must-revalidate";

/// Health endpoint: JSON, full CORS, never cached
pub const HEALTH: &[(&str, &str)] = &[
    (CONTENT_TYPE, JSON),
    (ALLOW_ORIGIN, ANY_ORIGIN),
    (ALLOW_METHODS, METHODS),
    (ALLOW_HEADERS, HEADERS),
    (CACHE_CONTROL, NO_CACHE),
];

/// Status endpoint: JSON, full CORS
pub const STATUS: &[(&str, &str)] = &[
    (CONTENT_TYPE, JSON),
    (ALLOW_ORIGIN, ANY_ORIGIN),
    (ALLOW_METHODS, METHODS),
    (ALLOW_HEADERS, HEADERS),
];

/// Index and 404: JSON, origin only
pub const JSON_ORIGIN_ONLY: &[(&str, &str)] = &[(CONTENT_TYPE, JSON), (ALLOW_ORIGIN, ANY_ORIGIN)];

/// CORS preflight, no body
pub const PREFLIGHT: &[(&str, &str)] = &[
    (ALLOW_ORIGIN, ANY_ORIGIN),
    (ALLOW_METHODS, METHODS),
    (ALLOW_HEADERS, HEADERS),
];
