//! Dockerfile text scanning for build simulation

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref EXPOSE_PATTERN: Regex = Regex::new(r"EXPOSE\s+(\d+)").unwrap();
}

/// Summary of the Dockerfile details surfaced by a simulated build
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DockerfileSummary {
    /// Number of `FROM` occurrences, counted as build stages
    pub stages: usize,

    /// Ports named by `EXPOSE` instructions, in order of appearance
    pub exposed_ports: Vec<String>,
}

impl DockerfileSummary {
    /// Scan Dockerfile text for stages and exposed ports.
    ///
    /// The scan is purely textual: `FROM` is counted wherever the substring
    /// appears and `EXPOSE` ports are collected by pattern, so occurrences
    /// inside comments count too.
    pub fn scan(content: &str) -> Self {
        let stages = content.matches("FROM").count();

        let exposed_ports = EXPOSE_PATTERN
            .captures_iter(content)
            .map(|caps| caps[1].to_string())
            .collect();

        Self {
            stages,
            exposed_ports,
        }
    }
}
