//! Per-request values passed explicitly through services and repositories.

/// Request-scoped context carried through every service and store call.
///
/// Holds the correlation id assigned by the transport layer so that log events
/// emitted deep inside the service can be tied back to the originating request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    request_id: Option<String>,
}

impl RequestContext {
    pub fn new(request_id: impl Into<String>) -> Self {
        Self {
            request_id: Some(request_id.into()),
        }
    }

    /// Context for work that did not originate from an HTTP request (CLI, startup).
    pub fn background() -> Self {
        Self::default()
    }

    /// Correlation id, or `"-"` when none was assigned.
    pub fn request_id(&self) -> &str {
        self.request_id.as_deref().unwrap_or("-")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_id_present() {
        let ctx = RequestContext::new("req-42");
        assert_eq!(ctx.request_id(), "req-42");
    }

    #[test]
    fn test_background_has_placeholder_id() {
        assert_eq!(RequestContext::background().request_id(), "-");
    }
}
