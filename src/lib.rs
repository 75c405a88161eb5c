//! `recollfox` - Incremental Firefox history export library
//!
//! This crate provides the core functionality for the `recollfox` CLI
//! tool, which drains newly-recorded browsing-history entries out of a
//! Firefox `places.sqlite` store and into the Recoll web queue as
//! paired metadata/content files.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - [`cli`] - Command-line interface using clap
//! - [`model`] - Data types (HistoryEntry)
//! - [`profile`] - Firefox default-profile discovery
//! - [`history`] - Read-only `SQLite` change reader
//! - [`queue`] - Recoll web-queue publisher
//! - [`checkpoint`] - Durable watermark state
//! - [`export`] - Run coordinator
//! - [`config`] - Configuration management
//! - [`error`] - Error types and handling
//! - [`format`] - Output formatting (text, JSON)
//!
//! # Delivery semantics
//!
//! Execution is at-least-once (cron re-runs, crashes mid-batch), but
//! publication is idempotent: the queue artifacts for a URL are a
//! deterministic function of the record, so re-publishing overwrites
//! the same pair of files byte-for-byte. The watermark is committed
//! only after the whole batch has been written, which makes every
//! interruption recoverable by simply running again.

#![forbid(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod checkpoint;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod format;
pub mod history;
pub mod logging;
pub mod model;
pub mod profile;
pub mod queue;

pub use error::{RecollfoxError, Result};
