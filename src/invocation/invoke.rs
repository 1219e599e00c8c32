// One-shot invocation
// Platform event text in, platform response JSON out

use super::{InvocationContext, InvocationEvent};
use crate::clock::Clock;
use crate::error::InvokeError;
use crate::handler;

/// Run the handler on a raw platform event and return the response object
/// (`statusCode`/`headers`/`body`) as pretty-printed JSON.
pub fn invoke_json(
    raw_event: &str,
    function_arn: &str,
    clock: &dyn Clock,
) -> Result<String, InvokeError> {
    let event = InvocationEvent::from_json(raw_event).map_err(InvokeError::Event)?;
    let context = InvocationContext::new(function_arn);
    let response = handler::handle(&event, &context, clock)?;
    serde_json::to_string_pretty(&response).map_err(InvokeError::Response)
}
