/// Logging collaborator supplied by the host renderer.
///
/// The segment never writes to the host's output itself: resolution
/// failures, probe results, and the rate-limit trace all go through
/// whatever sink the host hands in, once per render call.
pub trait SegmentSink {
    fn debug(&self, message: &str);
    fn error(&self, message: &str);
}

/// Sink for hosts without a logging channel of their own; forwards to the
/// `tracing` macros under the `kubeline` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl SegmentSink for TracingSink {
    fn debug(&self, message: &str) {
        tracing::debug!(target: "kubeline", "{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!(target: "kubeline", "{message}");
    }
}
