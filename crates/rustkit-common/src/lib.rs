//! # RustKit Common
//!
//! Shared logging setup for RustKit hosts and tests.
//!
//! Libraries only emit `tracing` events; installing a subscriber is left
//! to the binary or test harness through [`init_logging`] or
//! [`init_test_logging`].

pub mod logging;

pub use logging::{init_logging, init_test_logging, LogConfig, LogFormat};

use thiserror::Error;

/// Errors that can occur while setting up logging.
#[derive(Error, Debug)]
pub enum LogError {
    #[error("Invalid log directive: {0}")]
    InvalidDirective(String),

    #[error("Failed to install subscriber: {0}")]
    InitFailed(String),
}
