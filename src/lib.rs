//! EShop backend HTTP service.
//!
//! The service exposes a single liveness probe endpoint, `GET /status`,
//! which always answers `200 OK` with the body `OK`. Everything else is the
//! operational envelope around it: TOML configuration, structured logging
//! with per-request correlation IDs, and a server with graceful shutdown.

pub mod config;
pub mod http;
pub mod middleware;
pub mod routes;
