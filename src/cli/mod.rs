//! Command Line Interface (CLI) layer for the relay.
//!
//! This module defines positional argument parsing (`args`), CLI error types
//! and exit codes (`errors`), and the single-shot orchestration (`runner`)
//! that wires the daemon's calling convention to `alert_relay::api`.
//!
//! If you are embedding the relay into another application, prefer the
//! library entrypoints in `alert_relay::api` over the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use runner::run;
