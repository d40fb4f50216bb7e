//! monkeysee-server: HTTP backend for the MonkeySee prediction playground
//!
//! Users submit free-text predictions, each carrying a lifecycle status and
//! an ELO score. The server exposes CRUD endpoints plus aggregate summary
//! and per-second creation statistics, and a (stubbed) pairwise ranking
//! question.

pub mod db;
pub mod http;
pub mod models;

pub use http::{run_server, ServerConfig};
