// Server loop module
// Accepts connections until shutdown is requested

use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

use super::connection::accept_connection;
use super::signal::ShutdownSignal;
use crate::config::AppState;
use crate::logger;

/// Accept connections on `listener` until `shutdown` fires, then wait up to
/// `performance.shutdown_timeout` seconds for in-flight connections.
#[allow(clippy::ignored_unit_patterns)]
pub async fn run(listener: TcpListener, state: Arc<AppState>, shutdown: ShutdownSignal) {
    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        accept_connection(stream, peer_addr, &state);
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            _ = shutdown.wait() => {
                break;
            }
        }
    }

    // Stop accepting before draining
    drop(listener);
    drain_connections(&state).await;
}

/// Wait until the active connection count drops to zero or the deadline passes
async fn drain_connections(state: &AppState) {
    let timeout = Duration::from_secs(state.config.performance.shutdown_timeout);
    let deadline = tokio::time::Instant::now() + timeout;

    let mut remaining = state.active_connections.load(Ordering::SeqCst);
    if remaining > 0 {
        logger::log_info(&format!(
            "[SHUTDOWN] Waiting up to {}s for {remaining} connection(s)",
            timeout.as_secs()
        ));
    }

    while remaining > 0 {
        if tokio::time::Instant::now() >= deadline {
            logger::log_warning(&format!(
                "Shutdown deadline reached with {remaining} connection(s) still open"
            ));
            return;
        }
        tokio::time::sleep(DRAIN_POLL_INTERVAL).await;
        remaining = state.active_connections.load(Ordering::SeqCst);
    }
}

const DRAIN_POLL_INTERVAL: Duration = Duration::from_millis(20);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::config::Config;
    use crate::server::create_listener;
    use chrono::{TimeZone, Utc};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpStream;

    fn state() -> Arc<AppState> {
        state_with_shutdown_timeout(10)
    }

    fn state_with_shutdown_timeout(secs: u64) -> Arc<AppState> {
        let mut cfg = Config::load_from("does/not/exist/visio-health").unwrap();
        cfg.logging.access_log = false;
        cfg.performance.keep_alive_timeout = 0;
        cfg.performance.shutdown_timeout = secs;
        let clock = FixedClock(Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap());
        Arc::new(AppState::with_clock(&cfg, Arc::new(clock)))
    }

    #[tokio::test]
    async fn test_serves_until_shutdown() {
        let listener = create_listener("127.0.0.1:0".parse().unwrap()).unwrap();
        let addr = listener.local_addr().unwrap();
        let shutdown = ShutdownSignal::new();
        let server = tokio::spawn(run(listener, state(), shutdown.clone()));

        let mut stream = TcpStream::connect(addr).await.unwrap();
        stream
            .write_all(b"GET /status HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
            .await
            .unwrap();
        let mut raw = String::new();
        stream.read_to_string(&mut raw).await.unwrap();

        assert!(raw.starts_with("HTTP/1.1 200 OK"));
        assert!(raw.contains("Video conference service is operational"));
        assert!(!raw.to_ascii_lowercase().contains("cache-control"));

        shutdown.trigger();
        tokio::time::timeout(std::time::Duration::from_secs(5), server)
            .await
            .unwrap()
            .unwrap();
    }

    async fn wait_for_connections(state: &AppState, count: usize) {
        tokio::time::timeout(Duration::from_secs(5), async {
            while state.active_connections.load(Ordering::SeqCst) != count {
                tokio::time::sleep(Duration::from_millis(5)).await;
            }
        })
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn test_request_in_flight_completes_after_shutdown() {
        let listener = create_listener("127.0.0.1:0".parse().unwrap()).unwrap();
        let addr = listener.local_addr().unwrap();
        let st = state();
        let shutdown = ShutdownSignal::new();
        let server = tokio::spawn(run(listener, Arc::clone(&st), shutdown.clone()));

        // Request line and one header only; the head is not finished yet
        let mut stream = TcpStream::connect(addr).await.unwrap();
        stream
            .write_all(b"GET /health HTTP/1.1\r\nHost: localhost\r\n")
            .await
            .unwrap();
        wait_for_connections(&st, 1).await;

        shutdown.trigger();
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(!server.is_finished());

        stream.write_all(b"Connection: close\r\n\r\n").await.unwrap();
        let mut raw = String::new();
        stream.read_to_string(&mut raw).await.unwrap();
        assert!(raw.starts_with("HTTP/1.1 200 OK"));
        assert!(raw.contains("\"checks\""));

        tokio::time::timeout(Duration::from_secs(5), server)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(st.active_connections.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_drain_gives_up_at_deadline() {
        let listener = create_listener("127.0.0.1:0".parse().unwrap()).unwrap();
        let addr = listener.local_addr().unwrap();
        let st = state_with_shutdown_timeout(1);
        let shutdown = ShutdownSignal::new();
        let server = tokio::spawn(run(listener, Arc::clone(&st), shutdown.clone()));

        // Idle connection that never sends a request
        let _idle = TcpStream::connect(addr).await.unwrap();
        wait_for_connections(&st, 1).await;

        shutdown.trigger();
        tokio::time::timeout(Duration::from_secs(5), server)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(st.active_connections.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_connection_refused_after_shutdown() {
        let listener = create_listener("127.0.0.1:0".parse().unwrap()).unwrap();
        let addr = listener.local_addr().unwrap();
        let shutdown = ShutdownSignal::new();
        shutdown.trigger();

        tokio::time::timeout(Duration::from_secs(5), run(listener, state(), shutdown))
            .await
            .unwrap();
        assert!(TcpStream::connect(addr).await.is_err());
    }
}
