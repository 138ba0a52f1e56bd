//! Command-line configuration for the shape server.
//!
//! Validation uses Stillwater's `Validation` so that every problem with the
//! configuration is reported at once instead of one per restart.

use clap::Parser;
use std::net::{Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// Port the server binds to when `--bind` is not given.
pub const DEFAULT_PORT: u16 = 3000;

/// Prefix the shape routes are mounted under when `--api-prefix` is not given.
pub const DEFAULT_API_PREFIX: &str = "/api/internal";

#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "shapecycle")]
#[command(about = "Serves the shape alternation state machine over HTTP")]
pub struct Config {
    /// TCP address to bind the web server
    #[arg(long, default_value = "0.0.0.0:3000")]
    pub bind: SocketAddr,

    /// Path prefix for the shape API (empty mounts it at the root)
    #[arg(long, default_value = DEFAULT_API_PREFIX)]
    pub api_prefix: String,

    /// Directory of frontend assets to serve next to the API
    #[arg(long)]
    pub static_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT)),
            api_prefix: DEFAULT_API_PREFIX.to_string(),
            static_dir: None,
        }
    }
}

/// A single problem with the configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigViolation {
    #[error("API prefix '{prefix}' must start with '/'")]
    PrefixNotRooted { prefix: String },

    #[error("API prefix '{prefix}' must not end with '/'")]
    PrefixTrailingSlash { prefix: String },

    #[error("API prefix '{prefix}' must not contain whitespace")]
    PrefixWhitespace { prefix: String },

    #[error("API prefix '{prefix}' must not contain route captures or wildcards")]
    PrefixRouteSyntax { prefix: String },

    #[error("API prefix '{prefix}' must not contain empty segments")]
    PrefixEmptySegment { prefix: String },

    #[error("static directory '{}' is not an existing directory", .path.display())]
    StaticDirMissing { path: PathBuf },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {}", join_violations(.0))]
    Invalid(Vec<ConfigViolation>),
}

fn join_violations(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

type Check = Validation<(), NonEmptyVec<ConfigViolation>>;

fn check(ok: bool, violation: impl FnOnce() -> ConfigViolation) -> Check {
    if ok {
        Validation::success(())
    } else {
        Validation::fail(violation())
    }
}

fn check_prefix(prefix: &str) -> Vec<Check> {
    if prefix.is_empty() {
        return Vec::new();
    }

    vec![
        check(prefix.starts_with('/'), || ConfigViolation::PrefixNotRooted {
            prefix: prefix.to_string(),
        }),
        check(!prefix.ends_with('/'), || {
            ConfigViolation::PrefixTrailingSlash {
                prefix: prefix.to_string(),
            }
        }),
        check(!prefix.chars().any(char::is_whitespace), || {
            ConfigViolation::PrefixWhitespace {
                prefix: prefix.to_string(),
            }
        }),
        check(!has_route_syntax(prefix), || {
            ConfigViolation::PrefixRouteSyntax {
                prefix: prefix.to_string(),
            }
        }),
        check(!prefix.contains("//"), || {
            ConfigViolation::PrefixEmptySegment {
                prefix: prefix.to_string(),
            }
        }),
    ]
}

/// The router would read these as `{capture}`, `{*wildcard}` or a legacy
/// `:capture` segment and refuse to nest under them.
fn has_route_syntax(prefix: &str) -> bool {
    prefix.contains(['{', '}', '*']) || prefix.split('/').any(|segment| segment.starts_with(':'))
}

fn check_static_dir(dir: Option<&Path>) -> Check {
    match dir {
        Some(path) => check(path.is_dir(), || ConfigViolation::StaticDirMissing {
            path: path.to_path_buf(),
        }),
        None => Validation::success(()),
    }
}

impl Config {
    /// Check the configuration, accumulating ALL violations.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut checks = check_prefix(&self.api_prefix);
        checks.push(check_static_dir(self.static_dir.as_deref()));

        match Validation::all_vec(checks) {
            Validation::Success(_) => Ok(()),
            Validation::Failure(violations) => Err(ConfigError::Invalid(
                violations.iter().cloned().collect(),
            )),
        }
    }
}
