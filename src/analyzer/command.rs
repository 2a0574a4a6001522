//! Docker command line parsing and simulation
//!
//! A command line is parsed once into a [`DockerCommand`] and matched
//! exhaustively, so the "too few tokens" case is a checked error instead of
//! a positional-indexing panic. Simulation produces a structured
//! [`SimulationReport`] whose `Display` impl renders the report text.

use crate::analyzer::dockerfile::DockerfileSummary;
use crate::{DocksimError, Result};
use std::fmt;

/// Fixed listing returned for `docker image ls`
const IMAGE_LISTING: &str =
    "REPOSITORY          TAG       IMAGE ID       CREATED         SIZE\n\
     example-image       latest    1234567890ab   2 minutes ago   50MB";

/// A docker command line, parsed into structured form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DockerCommand {
    /// `docker build ...`
    Build { args: Vec<String> },

    /// `docker run ...`
    Run { args: Vec<String> },

    /// `docker image ...`
    Image { args: Vec<String> },

    /// Any other docker subcommand, with the original command line kept verbatim
    Other { command: String },

    /// The first token was not `docker`
    NotDocker,
}

impl DockerCommand {
    /// Parse a raw command line into its structured form.
    ///
    /// Tokens are the whitespace-split words of the input. An empty command
    /// line or a lone `docker` token is rejected as malformed.
    pub fn parse(command: &str) -> Result<Self> {
        let tokens: Vec<&str> = command.split_whitespace().collect();

        let first = tokens.first().ok_or_else(|| {
            DocksimError::MalformedCommand("empty command line".to_string())
        })?;

        if *first != "docker" {
            return Ok(DockerCommand::NotDocker);
        }

        let subcommand = tokens.get(1).ok_or_else(|| {
            DocksimError::MalformedCommand("missing docker subcommand".to_string())
        })?;

        let args: Vec<String> = tokens[2..].iter().map(|s| s.to_string()).collect();

        Ok(match *subcommand {
            "build" => DockerCommand::Build { args },
            "run" => DockerCommand::Run { args },
            "image" => DockerCommand::Image { args },
            _ => DockerCommand::Other {
                command: command.to_string(),
            },
        })
    }
}

/// Report produced by simulating a `docker build`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    /// Image tag from the `-t` flag, `latest` when absent
    pub tag: String,

    /// Number of build stages found in the Dockerfile
    pub stages: usize,

    /// Ports exposed by the Dockerfile, in order of appearance
    pub exposed_ports: Vec<String>,
}

impl fmt::Display for BuildReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Building image with tag: {}\nDockerfile has {} stage(s)\nExposed ports: {}",
            self.tag,
            self.stages,
            self.exposed_ports.join(", ")
        )
    }
}

/// Report produced by simulating a `docker run`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Container name from `--name`, `unnamed` when absent
    pub name: String,

    /// Port mappings from `-p` flags, in order of appearance
    pub ports: Vec<String>,

    /// Volume mounts from `-v` flags, in order of appearance
    pub volumes: Vec<String>,
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Running container: {}\nMapped ports: {}\nMounted volumes: {}",
            self.name,
            self.ports.join(", "),
            self.volumes.join(", ")
        )
    }
}

/// Outcome of simulating a docker command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimulationReport {
    /// A simulated image build
    Build(BuildReport),

    /// A simulated container run
    Run(RunReport),

    /// The fixed `docker image ls` listing
    ImageListing,

    /// An unrecognized `docker image` subcommand, echoed back
    ImagePassthrough { args: Vec<String> },

    /// An unrecognized docker subcommand, echoed back verbatim
    Passthrough { command: String },

    /// The command line did not start with `docker`
    NotDocker,
}

impl fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationReport::Build(report) => write!(f, "{}", report),
            SimulationReport::Run(report) => write!(f, "{}", report),
            SimulationReport::ImageListing => f.write_str(IMAGE_LISTING),
            SimulationReport::ImagePassthrough { args } => {
                write!(
                    f,
                    "Simulating Docker image command: docker image {}",
                    args.join(" ")
                )
            }
            SimulationReport::Passthrough { command } => {
                write!(f, "Simulating Docker command: {}", command)
            }
            SimulationReport::NotDocker => f.write_str("Error: Not a docker command"),
        }
    }
}

/// Simulate a docker command line against the given Dockerfile text.
///
/// The Dockerfile is only consulted for `build` commands; other commands
/// ignore it.
pub fn simulate(command: &str, dockerfile: &str) -> Result<SimulationReport> {
    Ok(match DockerCommand::parse(command)? {
        DockerCommand::Build { args } => {
            SimulationReport::Build(simulate_build(&args, dockerfile))
        }
        DockerCommand::Run { args } => SimulationReport::Run(simulate_run(&args)),
        DockerCommand::Image { args } => simulate_image(args),
        DockerCommand::Other { command } => SimulationReport::Passthrough { command },
        DockerCommand::NotDocker => SimulationReport::NotDocker,
    })
}

fn simulate_build(args: &[String], dockerfile: &str) -> BuildReport {
    let mut tag = "latest".to_string();
    for (i, arg) in args.iter().enumerate() {
        if arg == "-t" {
            if let Some(value) = args.get(i + 1) {
                tag = value.clone();
                break;
            }
        }
    }

    let summary = DockerfileSummary::scan(dockerfile);

    BuildReport {
        tag,
        stages: summary.stages,
        exposed_ports: summary.exposed_ports,
    }
}

fn simulate_run(args: &[String]) -> RunReport {
    let mut name = "unnamed".to_string();
    let mut ports = Vec::new();
    let mut volumes = Vec::new();

    // Positional scan: flag values are read but never consumed, matching
    // docker's lenient treatment of repeated flags in this simulation
    for (i, arg) in args.iter().enumerate() {
        match arg.as_str() {
            "--name" => {
                if let Some(value) = args.get(i + 1) {
                    name = value.clone();
                }
            }
            "-p" => {
                if let Some(value) = args.get(i + 1) {
                    ports.push(value.clone());
                }
            }
            "-v" => {
                if let Some(value) = args.get(i + 1) {
                    volumes.push(value.clone());
                }
            }
            _ => {}
        }
    }

    RunReport {
        name,
        ports,
        volumes,
    }
}

fn simulate_image(args: Vec<String>) -> SimulationReport {
    if args.first().map(String::as_str) == Some("ls") {
        SimulationReport::ImageListing
    } else {
        SimulationReport::ImagePassthrough { args }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_build() {
        let parsed = DockerCommand::parse("docker build -t myapp .").unwrap();
        assert_eq!(
            parsed,
            DockerCommand::Build {
                args: vec!["-t".to_string(), "myapp".to_string(), ".".to_string()],
            }
        );
    }

    #[test]
    fn test_parse_not_docker() {
        let parsed = DockerCommand::parse("kubectl get pods").unwrap();
        assert_eq!(parsed, DockerCommand::NotDocker);

        // A single non-docker token is still just "not docker"
        let parsed = DockerCommand::parse("podman").unwrap();
        assert_eq!(parsed, DockerCommand::NotDocker);
    }

    #[test]
    fn test_parse_malformed() {
        assert!(matches!(
            DockerCommand::parse(""),
            Err(DocksimError::MalformedCommand(_))
        ));
        assert!(matches!(
            DockerCommand::parse("   "),
            Err(DocksimError::MalformedCommand(_))
        ));
        assert!(matches!(
            DockerCommand::parse("docker"),
            Err(DocksimError::MalformedCommand(_))
        ));
    }

    #[test]
    fn test_not_docker_report() {
        let report = simulate("kubectl get pods", "").unwrap();
        assert_eq!(report.to_string(), "Error: Not a docker command");
    }

    #[test]
    fn test_build_report() {
        let dockerfile = "FROM rust:1.75 AS builder\nFROM debian\nEXPOSE 80\n";
        let report = simulate("docker build -t myapp .", dockerfile).unwrap();

        assert_eq!(
            report.to_string(),
            "Building image with tag: myapp\nDockerfile has 2 stage(s)\nExposed ports: 80"
        );
    }

    #[test]
    fn test_build_default_tag() {
        let report = simulate("docker build .", "FROM alpine\n").unwrap();
        assert_eq!(
            report.to_string(),
            "Building image with tag: latest\nDockerfile has 1 stage(s)\nExposed ports: "
        );
    }

    #[test]
    fn test_build_trailing_tag_flag_ignored() {
        // A -t with nothing after it contributes no tag
        let report = simulate("docker build -t", "FROM alpine\n").unwrap();
        let SimulationReport::Build(build) = report else {
            panic!("expected build report");
        };
        assert_eq!(build.tag, "latest");
    }

    #[test]
    fn test_build_first_tag_wins() {
        let report = simulate("docker build -t first -t second .", "").unwrap();
        let SimulationReport::Build(build) = report else {
            panic!("expected build report");
        };
        assert_eq!(build.tag, "first");
    }

    #[test]
    fn test_run_report() {
        let report =
            simulate("docker run --name web -p 8080:80 -v /data:/data nginx", "").unwrap();

        assert_eq!(
            report.to_string(),
            "Running container: web\nMapped ports: 8080:80\nMounted volumes: /data:/data"
        );
    }

    #[test]
    fn test_run_defaults() {
        let report = simulate("docker run nginx", "").unwrap();
        assert_eq!(
            report.to_string(),
            "Running container: unnamed\nMapped ports: \nMounted volumes: "
        );
    }

    #[test]
    fn test_run_last_name_wins() {
        let report = simulate("docker run --name first --name second nginx", "").unwrap();
        let SimulationReport::Run(run) = report else {
            panic!("expected run report");
        };
        assert_eq!(run.name, "second");
    }

    #[test]
    fn test_run_repeated_flags_keep_order() {
        let report = simulate("docker run -p 80:80 -p 443:443 -p 80:80 nginx", "").unwrap();
        let SimulationReport::Run(run) = report else {
            panic!("expected run report");
        };
        assert_eq!(run.ports, vec!["80:80", "443:443", "80:80"]);
    }

    #[test]
    fn test_run_trailing_flag_omitted() {
        let report = simulate("docker run nginx -p", "").unwrap();
        let SimulationReport::Run(run) = report else {
            panic!("expected run report");
        };
        assert!(run.ports.is_empty());
    }

    #[test]
    fn test_image_ls_fixed_listing() {
        let report = simulate("docker image ls", "").unwrap();
        assert_eq!(
            report.to_string(),
            "REPOSITORY          TAG       IMAGE ID       CREATED         SIZE\n\
             example-image       latest    1234567890ab   2 minutes ago   50MB"
        );
    }

    #[test]
    fn test_image_passthrough() {
        let report = simulate("docker image rm old-image", "").unwrap();
        assert_eq!(
            report.to_string(),
            "Simulating Docker image command: docker image rm old-image"
        );
    }

    #[test]
    fn test_image_without_subcommand() {
        let report = simulate("docker image", "").unwrap();
        assert_eq!(
            report.to_string(),
            "Simulating Docker image command: docker image "
        );
    }

    #[test]
    fn test_passthrough_keeps_raw_command() {
        // The original command line is echoed back, spacing included
        let report = simulate("docker   ps  -a", "").unwrap();
        assert_eq!(
            report.to_string(),
            "Simulating Docker command: docker   ps  -a"
        );
    }

    #[test]
    fn test_simulate_is_idempotent() {
        let dockerfile = "FROM alpine\nEXPOSE 8080\n";
        let first = simulate("docker build -t app .", dockerfile).unwrap().to_string();
        let second = simulate("docker build -t app .", dockerfile).unwrap().to_string();
        assert_eq!(first, second);
    }
}
