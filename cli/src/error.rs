//! Domain-specific error types for the ACL applier.
//!
//! Internal modules return these typed errors while command handlers at the
//! CLI boundary convert them to [`anyhow::Error`] via the standard `?`
//! operator.
//!
//! # Error hierarchy
//!
//! ```text
//! ConfigError   YAML I/O, parsing, target directory resolution
//! AclError      setfacl availability and argument encoding
//! HarnessError  test-harness environment problems
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// Errors that arise from loading, saving and resolving the YAML configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read or written.
    #[error("IO error on config file {path}: {source}")]
    Io {
        /// Path to the file that could not be accessed.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The file is not a valid configuration document.
    #[error("Invalid YAML in {path}: {source}")]
    Parse {
        /// Path to the file that failed to parse.
        path: PathBuf,
        /// Underlying YAML error.
        source: serde_yaml::Error,
    },

    /// The configuration could not be serialised.
    #[error("Failed to serialise configuration: {0}")]
    Serialize(#[source] serde_yaml::Error),

    /// `target_directory` is absent or empty.
    #[error("Invalid or non-existent target directory specified in YAML: target_directory is not set")]
    MissingTarget,

    /// `target_directory` points at a path that does not exist.
    #[error("Invalid or non-existent target directory specified in YAML: {0}")]
    TargetNotFound(PathBuf),
}

/// Errors that arise while turning grants into `setfacl` invocations.
#[derive(Error, Debug)]
pub enum AclError {
    /// A required ACL tool is not installed.
    #[error("'{0}' not found on PATH (install the acl package)")]
    ToolMissing(String),

    /// The target path cannot be passed to an external command.
    #[error("path is not valid UTF-8: {}", .0.display())]
    NonUtf8Path(PathBuf),
}

/// Errors that arise from preparing the test harness environment.
#[derive(Error, Debug)]
pub enum HarnessError {
    /// No base directory was given and `$TMPDIR` is unset.
    #[error("TMPDIR environment variable is not set.")]
    TmpDirUnset,

    /// A file or directory of the test tree could not be created.
    #[error("failed to create {path}: {source}")]
    Create {
        /// Path that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}
