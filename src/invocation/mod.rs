//! Invocation descriptors module
//!
//! Platform-neutral request, context and response values exchanged with the
//! handler. Field names on the wire follow the function-platform proxy shape
//! (`httpMethod`, `statusCode`, ...).

mod context;
mod event;
mod invoke;
mod response;

pub use context::InvocationContext;
pub use event::InvocationEvent;
pub use invoke::invoke_json;
pub use response::InvocationResponse;
