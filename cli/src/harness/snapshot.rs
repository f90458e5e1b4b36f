use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;

use crate::acl::GETFACL;
use crate::error::HarnessError;
use crate::exec::Executor;
use crate::logging::Log;

/// Text output of `getfacl -R` for a tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AclSnapshot(String);

impl AclSnapshot {
    /// Wrap captured `getfacl` output.
    #[must_use]
    pub const fn new(text: String) -> Self {
        Self(text)
    }

    /// The raw snapshot text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Lines that differ between two snapshots.
///
/// Each side lists distinct lines in the order they first appear.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnapshotDiff {
    /// Lines present only in the updated snapshot.
    pub added: Vec<String>,
    /// Lines present only in the initial snapshot.
    pub removed: Vec<String>,
}

impl SnapshotDiff {
    /// Whether no line was added or removed.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

impl fmt::Display for SnapshotDiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.added {
            writeln!(f, "+ {line}")?;
        }
        for line in &self.removed {
            writeln!(f, "- {line}")?;
        }
        Ok(())
    }
}

/// Capture the ACLs of every entry under `path`.
///
/// Failures are logged and yield `None`; the harness carries on without a
/// snapshot.
#[must_use]
pub fn capture(executor: &dyn Executor, path: &Path, log: &dyn Log) -> Option<AclSnapshot> {
    let Some(arg) = path.to_str() else {
        log.error(&format!(
            "Error retrieving ACL settings for {}: path is not valid UTF-8",
            path.display()
        ));
        return None;
    };

    match executor.run_unchecked(GETFACL, &["-R", arg]) {
        Ok(result) if result.success => Some(AclSnapshot::new(result.stdout)),
        Ok(result) => {
            log.error(&format!(
                "Error retrieving ACL settings for {}: {}",
                path.display(),
                result.stderr.trim()
            ));
            None
        }
        Err(e) => {
            log.error(&format!(
                "Error retrieving ACL settings for {}: {e:#}",
                path.display()
            ));
            None
        }
    }
}

/// Write `snapshot` to `path`; a missing snapshot leaves an empty file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save_snapshot(snapshot: Option<&AclSnapshot>, path: &Path) -> Result<(), HarnessError> {
    let text = snapshot.map_or("", AclSnapshot::as_str);
    fs::write(path, text).map_err(|source| HarnessError::Create {
        path: path.to_path_buf(),
        source,
    })
}

/// Compare two snapshots line by line, ignoring order and repeats.
#[must_use]
pub fn diff(initial: &AclSnapshot, updated: &AclSnapshot) -> SnapshotDiff {
    SnapshotDiff {
        added: only_in(updated, initial),
        removed: only_in(initial, updated),
    }
}

fn only_in(this: &AclSnapshot, other: &AclSnapshot) -> Vec<String> {
    let other: HashSet<&str> = other.0.lines().collect();
    let mut seen = HashSet::new();
    this.0
        .lines()
        .filter(|line| !other.contains(line) && seen.insert(*line))
        .map(String::from)
        .collect()
}
