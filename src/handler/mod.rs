//! Request handler module
//!
//! Ordered dispatch over the known endpoints of the visio-conference health
//! service. The handler is pure: it reads the request, the invocation
//! context and a clock, and builds a fresh response.

pub mod headers;
pub mod payload;
pub mod router;

// Re-export main entry point
pub use router::{handle, Route};
