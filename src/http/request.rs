//! Request conversion module
//!
//! Turns an HTTP request into the platform event the handler expects.

use crate::invocation::InvocationEvent;
use hyper::Request;

/// Build an invocation event from an HTTP request.
///
/// The method is taken verbatim and the path without its query string.
pub fn to_invocation_event<B>(req: &Request<B>) -> InvocationEvent {
    InvocationEvent::new(req.method().as_str(), req.uri().path())
}
