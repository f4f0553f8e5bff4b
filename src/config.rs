//! Process configuration.
//!
//! The core only ever sees two values: the address to listen on and the
//! directory that `/files/...` requests are served from. They are
//! assembled here from defaults, an optional YAML file, the `LISTEN`
//! environment variable and the command line, in that order.

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use serde::Deserialize;

pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:4221";
pub const DEFAULT_DIRECTORY: &str = "./";

/// Root directory that file handlers resolve client-supplied names against.
///
/// Resolution is plain string concatenation: `root + name`. Nothing is
/// normalised, so `--directory /tmp/` and `--directory /tmp` behave
/// differently, and `..` segments are passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServeRoot(Arc<str>);

impl ServeRoot {
    pub fn new(root: impl Into<String>) -> Self {
        Self(Arc::from(root.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn resolve(&self, name: &str) -> PathBuf {
        let mut full = String::with_capacity(self.0.len() + name.len());
        full.push_str(&self.0);
        full.push_str(name);
        PathBuf::from(full)
    }
}

impl fmt::Display for ServeRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Command line arguments.
#[derive(Debug, Default, Parser)]
#[command(name = "plainhttp")]
#[command(about = "Minimal HTTP/1.1 server", long_about = None)]
pub struct Cli {
    /// Directory served under /files/
    #[arg(long)]
    pub directory: Option<String>,

    /// Optional YAML configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Shape of the optional YAML configuration file.
#[derive(Debug, Default, Deserialize)]
pub struct FileConfig {
    pub listen_addr: Option<String>,
    pub directory: Option<String>,
}

impl FileConfig {
    pub fn from_yaml(source: &str) -> anyhow::Result<Self> {
        serde_yaml::from_str(source).context("invalid YAML configuration")
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub directory: ServeRoot,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            directory: ServeRoot::new(DEFAULT_DIRECTORY),
        }
    }
}

impl Config {
    /// Builds the configuration from the process arguments and environment.
    pub fn load() -> anyhow::Result<Self> {
        Self::from_cli(Cli::parse())
    }

    pub fn from_cli(cli: Cli) -> anyhow::Result<Self> {
        let file = match &cli.config {
            Some(path) => {
                let source = std::fs::read_to_string(path)
                    .with_context(|| format!("reading config file {}", path.display()))?;
                FileConfig::from_yaml(&source)?
            }
            None => FileConfig::default(),
        };

        Ok(Self::merge(cli, file, std::env::var("LISTEN").ok()))
    }

    fn merge(cli: Cli, file: FileConfig, listen_env: Option<String>) -> Self {
        let defaults = Self::default();

        let listen_addr = listen_env
            .or(file.listen_addr)
            .unwrap_or(defaults.listen_addr);

        let directory = cli
            .directory
            .or(file.directory)
            .map(ServeRoot::new)
            .unwrap_or(defaults.directory);

        Self {
            listen_addr,
            directory,
        }
    }
}
