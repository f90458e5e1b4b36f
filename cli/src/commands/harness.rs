//! Command: exercise `apply` against a scratch tree and diff the ACLs.
use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

use super::apply;
use crate::cli::HarnessOpts;
use crate::config::AclConfig;
use crate::config::template::{self, DEFAULT_TEMPLATE_FILE};
use crate::exec::{Executor, SystemExecutor};
use crate::harness::{self, AclSnapshot, ENVIRONMENT_DIR, TestPrincipals};
use crate::logging::{Log, Logger};

const INITIAL_SNAPSHOT_FILE: &str = "initial_acl.txt";
const UPDATED_SNAPSHOT_FILE: &str = "updated_acl.txt";

/// Run the harness command against the real system.
///
/// # Errors
///
/// Returns an error if no base directory is available, the test tree cannot
/// be created, or applying the ACLs fails.
pub fn run(opts: &HarnessOpts, log: &Arc<Logger>) -> Result<()> {
    let base = harness::resolve_base_dir(opts.base_dir.clone(), std::env::var_os("TMPDIR"))?;
    let principals = TestPrincipals {
        user: opts.user.clone(),
        other_user: opts.other_user.clone(),
        group: opts.group.clone(),
    };
    let executor: Arc<dyn Executor> = Arc::new(SystemExecutor);
    run_in(&base, &principals, &executor, log)
}

/// Build the test tree under `base`, apply the test configuration to it and
/// report how the ACLs changed.
///
/// A failed apply is reported after the updated snapshot has been taken.
///
/// # Errors
///
/// Returns an error if the tree, template or snapshot files cannot be
/// written, or applying the ACLs fails.
pub fn run_in(
    base: &Path,
    principals: &TestPrincipals,
    executor: &Arc<dyn Executor>,
    log: &Arc<Logger>,
) -> Result<()> {
    let root = base.join(ENVIRONMENT_DIR);

    log.stage("Creating test environment");
    harness::create_test_environment(&root, &**log)?;
    log.info(&format!("Test environment created at: {}", root.display()));

    let yaml = root.join(DEFAULT_TEMPLATE_FILE);
    template::write_template(&yaml)?;
    log.info(&format!("Generated YAML template at: {}", yaml.display()));

    log.stage("Initial ACL settings");
    let initial = snapshot(executor.as_ref(), &root, INITIAL_SNAPSHOT_FILE, &**log)?;

    let config = harness::test_config(AclConfig::load(&yaml)?, &root, principals);
    config.save(&yaml)?;
    log.info("Modified YAML configuration for testing.");

    let applied = apply::apply_file(&yaml, Arc::clone(executor), log);
    if let Err(e) = &applied {
        log.error(&format!("{e:#}"));
    }

    log.stage("ACL settings after changes");
    let updated = snapshot(executor.as_ref(), &root, UPDATED_SNAPSHOT_FILE, &**log)?;

    if let (Some(initial), Some(updated)) = (&initial, &updated) {
        report(initial, updated, &**log);
    }

    applied
}

fn snapshot(
    executor: &dyn Executor,
    root: &Path,
    file: &str,
    log: &dyn Log,
) -> Result<Option<AclSnapshot>> {
    let snapshot = harness::capture(executor, root, log);
    if let Some(s) = &snapshot {
        for line in s.as_str().lines() {
            log.debug(line);
        }
    }
    let path = root.join(file);
    harness::save_snapshot(snapshot.as_ref(), &path)?;
    log.info(&format!("ACL settings saved to: {}", path.display()));
    Ok(snapshot)
}

fn report(initial: &AclSnapshot, updated: &AclSnapshot, log: &dyn Log) {
    log.stage("Comparing ACL settings");
    let changes = harness::diff(initial, updated);
    if changes.is_empty() {
        log.info("No changes detected in ACL settings");
        return;
    }
    log.info("Differences in ACL settings detected:");
    for line in changes.to_string().lines() {
        log.info(line);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::logging::isolated_logger;

    fn logged(initial: &str, updated: &str) -> String {
        let (log, tmp, _guard) = isolated_logger();
        report(
            &AclSnapshot::new(initial.to_string()),
            &AclSnapshot::new(updated.to_string()),
            &log,
        );
        std::fs::read_to_string(tmp.path().join("test.log")).unwrap()
    }

    #[test]
    fn identical_snapshots_report_no_changes() {
        let text = "# file: root\nuser::rwx\n";
        let contents = logged(text, text);
        assert!(contents.contains("==> Comparing ACL settings"));
        assert!(contents.contains("No changes detected in ACL settings"));
        assert!(!contents.contains("Differences in ACL settings detected:"));
    }

    #[test]
    fn changed_snapshots_list_added_and_removed_lines() {
        let contents = logged(
            "# file: root\nuser::rwx\nother::r-x\n",
            "# file: root\nuser::rwx\nuser:alice:rwx\nother::rw-\n",
        );
        assert!(contents.contains("Differences in ACL settings detected:"));
        assert!(contents.contains("+ user:alice:rwx"));
        assert!(contents.contains("+ other::rw-"));
        assert!(contents.contains("- other::r-x"));
        assert!(!contents.contains("No changes detected"));
    }

    #[test]
    fn reordered_lines_are_not_a_change() {
        let contents = logged(
            "user::rwx\ngroup::r-x\n",
            "group::r-x\nuser::rwx\nuser::rwx\n",
        );
        assert!(contents.contains("No changes detected in ACL settings"));
        assert!(!contents.contains("Differences in ACL settings detected:"));
    }
}
