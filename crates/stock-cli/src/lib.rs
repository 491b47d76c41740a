//! # stock-cli
//!
//! Command-line front end for stockroom.
//!
//! This crate provides:
//! - Environment-driven configuration (`STOCKROOM_MANIFEST`, `STOCKROOM_LOG_FORMAT`)
//! - Manifest loading from `config/stock.toml`
//! - A runner that stocks a warehouse and checks out every manifest cart
//!
//! ## Environment
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `STOCKROOM_MANIFEST` | `config/stock.toml` | Path to the stock manifest |
//! | `STOCKROOM_LOG_FORMAT` | `pretty` | `pretty` or `json` |
//! | `RUST_LOG` | `info` | Tracing filter |

pub mod config;
pub mod runner;

pub use config::{AppConfig, LogFormat};
pub use runner::{run, RunSummary};
