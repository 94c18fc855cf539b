use std::sync::Arc;

/// A logger type which is called with diagnostic information regarding the work done by
/// the solver, e.g. destinations dropped from a request due to failed resolution.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Creates a logger which writes messages to standard error.
pub fn create_stderr_logger() -> InfoLogger {
    Arc::new(|msg: &str| eprintln!("{msg}"))
}

/// Creates a logger which discards all messages.
pub fn create_noop_logger() -> InfoLogger {
    Arc::new(|_: &str| {})
}
