//! Structured logging for the coordinator core.
//!
//! The core emits `tracing` events and spans throughout (navigation decisions,
//! session lifecycle, deep-link routing); this module wires up the subscriber
//! for hosts that do not install their own.
//!
//! # Configuration
//!
//! Trace level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` in [`Config`](crate::Config)
//! 3. Default: `"info"`
//!
//! # Modules
//!
//! - [`init`]: Tracing initialization and subscriber setup

mod init;

pub use init::init_tracing;
