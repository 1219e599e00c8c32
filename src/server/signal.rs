// Signal handling module
//
// - SIGTERM: graceful shutdown
// - SIGINT:  graceful shutdown (Ctrl+C)
//
// Non-unix targets only get Ctrl+C.

use std::sync::Arc;
use tokio::sync::Notify;

use crate::logger;

/// Shutdown trigger shared between the signal task and the accept loop
#[derive(Clone, Default)]
pub struct ShutdownSignal {
    notify: Arc<Notify>,
}

impl ShutdownSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request shutdown. The permit is stored, so a trigger that lands
    /// before the loop starts waiting is not lost.
    pub fn trigger(&self) {
        self.notify.notify_one();
    }

    /// Wait until shutdown is requested
    pub async fn wait(&self) {
        self.notify.notified().await;
    }
}

/// Register signal handlers and spawn the task that listens for them
#[cfg(unix)]
pub fn start_signal_handler(shutdown: ShutdownSignal) -> std::io::Result<()> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigterm = signal(SignalKind::terminate())?;
    let mut sigint = signal(SignalKind::interrupt())?;

    tokio::spawn(async move {
        let name = tokio::select! {
            _ = sigterm.recv() => "SIGTERM",
            _ = sigint.recv() => "SIGINT",
        };
        logger::log_shutdown(name);
        shutdown.trigger();
    });
    Ok(())
}

/// Windows fallback - only handles Ctrl+C
#[cfg(not(unix))]
pub fn start_signal_handler(shutdown: ShutdownSignal) -> std::io::Result<()> {
    tokio::spawn(async move {
        if let Ok(()) = tokio::signal::ctrl_c().await {
            logger::log_shutdown("Ctrl+C");
            shutdown.trigger();
        }
    });
    Ok(())
}
