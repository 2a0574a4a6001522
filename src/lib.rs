//! Docksim - a Docker command simulator for teaching container basics
//!
//! This crate simulates a small subset of Docker CLI behavior by parsing
//! command lines and Dockerfile text, without executing anything. The
//! simulation is exposed as a library, a CLI, and a small HTTP API.

pub mod analyzer;
pub mod cli;
pub mod scaffold;
pub mod server;

use thiserror::Error;

/// Main error type for Docksim operations
#[derive(Error, Debug)]
pub enum DocksimError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed command: {0}")]
    MalformedCommand(String),
}

pub type Result<T> = std::result::Result<T, DocksimError>;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "docksim";
