//! Health and status endpoint of the visio-conference service.
//!
//! [`handler::handle`] is a pure router over canned JSON responses. The
//! [`http`] and [`server`] modules host it behind a plain HTTP/1.1 listener;
//! the binary can also run a single invocation from an event file.

pub mod clock;
pub mod config;
pub mod error;
pub mod handler;
pub mod http;
pub mod invocation;
pub mod logger;
pub mod server;

pub use error::{HandlerError, InvalidContextError, InvokeError};
pub use handler::handle;
pub use invocation::{invoke_json, InvocationContext, InvocationEvent, InvocationResponse};
