// Invocation context
// Platform-provided identity of the running function

use crate::error::InvalidContextError;

/// Index of the region segment in an ARN-like identifier
const REGION_SEGMENT: usize = 3;

/// Runtime context for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationContext {
    /// ARN-like identifier, e.g. `arn:aws:lambda:us-east-1:123:function:foo`
    pub invoked_function_arn: String,
}

impl InvocationContext {
    pub fn new(invoked_function_arn: impl Into<String>) -> Self {
        Self {
            invoked_function_arn: invoked_function_arn.into(),
        }
    }

    /// Region token: fourth `:`-delimited segment of the identifier
    pub fn region(&self) -> Result<&str, InvalidContextError> {
        self.invoked_function_arn
            .split(':')
            .nth(REGION_SEGMENT)
            .ok_or_else(|| InvalidContextError {
                identifier: self.invoked_function_arn.clone(),
                segments: self.invoked_function_arn.split(':').count(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_from_arn() {
        let ctx = InvocationContext::new("arn:aws:lambda:us-east-1:123:function:foo");
        assert_eq!(ctx.region(), Ok("us-east-1"));
    }

    #[test]
    fn test_region_exactly_four_segments() {
        let ctx = InvocationContext::new("a:b:c:eu-west-3");
        assert_eq!(ctx.region(), Ok("eu-west-3"));
    }

    #[test]
    fn test_region_empty_segment() {
        // Present but empty is still a segment
        let ctx = InvocationContext::new("arn:aws:s3:::bucket");
        assert_eq!(ctx.region(), Ok(""));
    }

    #[test]
    fn test_region_too_few_segments() {
        let ctx = InvocationContext::new("arn:aws:lambda");
        let err = ctx.region().unwrap_err();
        assert_eq!(err.identifier, "arn:aws:lambda");
        assert_eq!(err.segments, 3);
    }

    #[test]
    fn test_region_no_colons() {
        let err = InvocationContext::new("not-an-arn").region().unwrap_err();
        assert_eq!(err.segments, 1);
        assert!(err.to_string().contains("not-an-arn"));
    }
}
