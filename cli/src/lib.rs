//! Declarative POSIX ACL applier.
//!
//! Reads a YAML description of the users and groups that should have access
//! to a directory tree and applies it with `setfacl`, one call per rule and
//! scope. A companion harness builds a scratch tree, applies a test
//! configuration and diffs `getfacl` snapshots taken before and after.
//!
//! The public API is organised into layers:
//!
//! - **[`config`]**: YAML schema, template and validation
//! - **[`acl`]**: compile a configuration into ordered ACL grants
//! - **[`resources`]**: apply a single grant through an [`exec::Executor`]
//! - **[`tasks`]**: named units of work wired to resources
//! - **[`commands`]**: top-level subcommand orchestration
//! - **[`harness`]**: scratch tree creation and snapshot diffing
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod acl;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod exec;
pub mod harness;
pub mod logging;
pub mod resources;
pub mod tasks;
