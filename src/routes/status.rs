//! Status endpoint for container orchestration.
//!
//! Provides a simple liveness probe that returns 200 OK when the process is
//! running. Used by Kubernetes, ECS, systemd, and load balancers to verify
//! the service is alive.

/// Status probe handler.
///
/// Returns a fixed "OK" response to indicate the service is running. This is
/// a liveness probe - it only checks that the process can respond to HTTP.
/// The response is a pure constant: no request content is consulted and no
/// state is read or written.
pub async fn status() -> &'static str {
    "OK"
}
