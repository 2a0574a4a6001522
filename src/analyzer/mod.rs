//! Command and output analysis for simulated Docker sessions

pub mod command;
pub mod dockerfile;
pub mod output;
