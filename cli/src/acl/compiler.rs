//! Turns an [`AclConfig`] into the ordered list of [`AclGrant`]s to apply.
//!
//! The walk is a straight mapping: every valid entry yields one grant per
//! selected scope, in configuration order. Entries that cannot become a rule
//! and overrides whose directory is missing are collected as [`SkipReason`]s
//! instead of failing the run.
use std::fmt;
use std::path::{Path, PathBuf};

use super::{AclGrant, AclRule, AclScope};
use crate::config::{AclConfig, ApplyTo, PermissionEntry};

/// Why part of the configuration produced no grants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The entry has no usable principal or permissions.
    InvalidEntry(String),
    /// A per-directory override names a path that does not exist.
    MissingDirectory(PathBuf),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEntry(entry) => write!(f, "skipping invalid permission entry: {entry}"),
            Self::MissingDirectory(path) => write!(
                f,
                "subdirectory {} does not exist, skipping",
                path.display()
            ),
        }
    }
}

/// Output of a compile pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompiledAcls {
    /// Grants in application order.
    pub grants: Vec<AclGrant>,
    /// Parts of the configuration that were left out.
    pub skipped: Vec<SkipReason>,
}

impl CompiledAcls {
    fn push_entry(&mut self, entry: &PermissionEntry, target: &Path, scopes: &[AclScope]) {
        let Some(rule) = AclRule::from_entry(entry) else {
            self.skipped
                .push(SkipReason::InvalidEntry(entry.to_string()));
            return;
        };
        for &scope in scopes {
            self.grants
                .push(AclGrant::new(rule.clone(), target.to_path_buf(), scope));
        }
    }

    /// Append another pass, keeping order.
    fn extend(&mut self, other: Self) {
        self.grants.extend(other.grants);
        self.skipped.extend(other.skipped);
    }
}

impl ApplyTo {
    /// Scopes selected for top-level grants, access first.
    ///
    /// `directories` and `files` both select the recursive access ACL, which
    /// is emitted once when either is set.
    #[must_use]
    pub fn scopes(&self) -> Vec<AclScope> {
        let mut scopes = Vec::with_capacity(2);
        if self.directories || self.files {
            scopes.push(AclScope::Access);
        }
        if self.default {
            scopes.push(AclScope::Default);
        }
        scopes
    }
}

/// Compile the top-level `permissions` against `target`.
#[must_use]
pub fn compile_permissions(config: &AclConfig, target: &Path) -> CompiledAcls {
    let scopes = config.apply_to.scopes();
    let mut out = CompiledAcls::default();
    for entry in &config.permissions {
        out.push_entry(entry, target, &scopes);
    }
    out
}

/// Compile `per_dir_permissions` against subdirectories of `target`.
///
/// Overrides always write both the access and the default ACL of their
/// subdirectory, independent of `apply_to`. An override whose directory does
/// not exist is skipped as a whole.
///
/// Paths are joined onto `target` with [`Path::join`], so an absolute
/// override path replaces the target instead of nesting under it.
#[must_use]
pub fn compile_directory_permissions(config: &AclConfig, target: &Path) -> CompiledAcls {
    const SCOPES: [AclScope; 2] = [AclScope::Access, AclScope::Default];

    let mut out = CompiledAcls::default();
    for dir in &config.per_dir_permissions {
        let subdir = target.join(&dir.path);
        if !subdir.exists() {
            out.skipped.push(SkipReason::MissingDirectory(subdir));
            continue;
        }
        for entry in &dir.permissions {
            out.push_entry(entry, &subdir, &SCOPES);
        }
    }
    out
}

/// Compile the whole configuration: top-level grants, then overrides.
#[must_use]
pub fn compile(config: &AclConfig, target: &Path) -> CompiledAcls {
    let mut out = compile_permissions(config, target);
    out.extend(compile_directory_permissions(config, target));
    out
}
