//! HTTP server module.
//!
//! Binds the configured listen address, serves the router, and drains
//! in-flight connections on SIGTERM/SIGINT before exiting.

mod server;
mod shutdown;

pub use server::{start_server, ServerError};
