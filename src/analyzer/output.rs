//! Analysis of captured simulator output
//!
//! Re-scans previously rendered report text and summarizes what happened.
//! The checks are independent, always evaluated in the same fixed order,
//! and keyed on the exact literal substrings the simulator emits.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref TAGGED_PATTERN: Regex = Regex::new(r"Successfully tagged (.+)").unwrap();
    static ref PORTS_PATTERN: Regex = Regex::new(r"Mapped ports: (.*)").unwrap();
    static ref VOLUMES_PATTERN: Regex = Regex::new(r"Mounted volumes: (.*)").unwrap();
}

/// Analyze captured output and produce a human-readable summary.
pub fn analyze(output: &str) -> String {
    let mut analysis = String::from("Output Analysis:\n\n");

    if output.contains("Error") {
        analysis.push_str("An error occurred during command execution.\n");
        let error_lines: Vec<&str> = output
            .split('\n')
            .filter(|line| line.contains("Error"))
            .collect();
        analysis.push_str("Errors found:\n");
        analysis.push_str(&error_lines.join("\n"));
    } else {
        analysis.push_str("Command executed successfully.\n");
    }

    if output.contains("Building") {
        analysis.push_str("A Docker image was built.\n");
        if let Some(caps) = TAGGED_PATTERN.captures(output) {
            analysis.push_str(&format!("Image tagged as: {}\n", &caps[1]));
        }
    }

    if output.contains("Running") {
        analysis.push_str("A Docker container was started.\n");
    }

    if let Some(caps) = PORTS_PATTERN.captures(output) {
        analysis.push_str(&format!("Ports mapped: {}\n", &caps[1]));
    }

    if let Some(caps) = VOLUMES_PATTERN.captures(output) {
        analysis.push_str(&format!("Volumes mounted: {}\n", &caps[1]));
    }

    analysis
}
