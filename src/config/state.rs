// Application state module
// Shared, read-only state handed to every connection

use std::sync::atomic::AtomicUsize;
use std::sync::Arc;

use super::types::Config;
use crate::clock::{Clock, SystemClock};
use crate::invocation::InvocationContext;

/// Application state
pub struct AppState {
    pub config: Config,
    /// Context passed to the handler for every request
    pub context: InvocationContext,
    pub clock: Arc<dyn Clock>,
    /// Connections currently being served
    pub active_connections: Arc<AtomicUsize>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    pub fn with_clock(config: &Config, clock: Arc<dyn Clock>) -> Self {
        Self {
            config: config.clone(),
            context: InvocationContext::new(config.function.arn.clone()),
            clock,
            active_connections: Arc::new(AtomicUsize::new(0)),
        }
    }
}
