//! Zephyr Connector is a CORS-enabling reverse proxy for the JIRA /
//! Zephyr Scale test management REST API.
//!
//! It accepts browser requests on three registered `/rest/atm/1.0/`
//! prefixes, answers CORS preflights itself, and relays everything else
//! to a single upstream with Basic credentials attached. Request and
//! response bodies are streamed through unmodified.
//!
//! # Architecture
//!
//! - [`cli`] -- Command-line argument parsing with clap derive macros.
//! - [`cmd`] -- Subcommand dispatch and execution (run, check).
//! - [`config`] -- Immutable [`ProxyConfig`](config::ProxyConfig) built
//!   from flags, environment, and `-D key=value` overrides.
//! - [`error`] -- Unified error types using `thiserror`.
//! - [`logging`] -- Structured tracing setup with JSON and pretty-print output.
//! - [`proxy`] -- The forwarding handler: route matching, CORS, header
//!   construction, and the streamed upstream round trip.
//! - [`server`] -- Axum server setup, shared application state, HTTP client,
//!   and graceful shutdown.

// Binary crate — public functions are internal, not consumed by external users.
#![allow(clippy::missing_errors_doc)]

pub mod cli;
pub mod cmd;
pub mod config;
pub mod error;
pub mod logging;
pub mod proxy;
pub mod server;
