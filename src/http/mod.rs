//! HTTP protocol layer module
//!
//! Bridges hyper requests and responses to the invocation descriptors the
//! handler works with. The handler stays unaware of hyper.

pub mod request;
pub mod response;
pub mod service;

// Re-export commonly used items
pub use request::to_invocation_event;
pub use response::{build_502_response, from_invocation_response};
pub use service::handle_request;
