//! Error types for Trellis operations.
//!
//! Layout computation itself never fails: malformed edges degrade to skipped
//! contributions and empty input yields empty output. The error type exists
//! for the fallible edges of the system, configuration loading and output
//! writing.

use std::io;

use thiserror::Error;

/// The main error type for Trellis operations.
#[derive(Debug, Error)]
pub enum TrellisError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Output error: {0}")]
    Output(Box<dyn std::error::Error>),
}
