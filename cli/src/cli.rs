//! Command-line interface definitions.
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::template::DEFAULT_TEMPLATE_FILE;

/// Top-level CLI entry point for the ACL framework.
#[derive(Parser, Debug)]
#[command(
    name = "aclfw",
    about = "Apply POSIX ACLs to a directory tree from a YAML description",
    version
)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write an example configuration
    Template(TemplateOpts),
    /// Apply the ACLs described by a configuration file
    Apply(ApplyOpts),
    /// Run the end-to-end harness in a scratch directory
    Harness(HarnessOpts),
    /// Print version information
    Version,
}

impl Command {
    /// Subcommand name, used to pick the log file.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Template(_) => "template",
            Self::Apply(_) => "apply",
            Self::Harness(_) => "harness",
            Self::Version => "version",
        }
    }
}

/// Options for the `template` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct TemplateOpts {
    /// Where to write the template
    #[arg(short, long, default_value = DEFAULT_TEMPLATE_FILE)]
    pub output: PathBuf,
}

/// Options for the `apply` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct ApplyOpts {
    /// YAML configuration to apply
    pub config: PathBuf,
}

/// Options for the `harness` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct HarnessOpts {
    /// Scratch directory (defaults to $TMPDIR)
    #[arg(long)]
    pub base_dir: Option<PathBuf>,

    /// Test user granted rwx
    #[arg(long, env = "ACLFW_TEST_USER")]
    pub user: String,

    /// Second test user granted rw-
    #[arg(long, env = "ACLFW_TEST_OTHER_USER")]
    pub other_user: String,

    /// Test group granted r-x
    #[arg(long, env = "ACLFW_TEST_GROUP")]
    pub group: String,
}
