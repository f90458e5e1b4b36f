//! Top-level subcommand orchestration.
pub mod apply;
pub mod harness;
pub mod template;
pub mod version;

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::acl::SETFACL;
use crate::config::AclConfig;
use crate::config::validation;
use crate::error::AclError;
use crate::exec::Executor;
use crate::logging::{Log, Logger, TaskStatus};
use crate::tasks::{self, Context, Task};

/// Shared state produced by the common command setup sequence.
#[derive(Debug)]
pub struct CommandSetup {
    /// Loaded configuration.
    pub config: AclConfig,
    /// Existing directory the configuration targets.
    pub target: PathBuf,
}

impl CommandSetup {
    /// Load the configuration at `path` and check it can be applied.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, the target
    /// directory is missing, or `setfacl` is not installed.
    pub fn init(path: &Path, executor: &dyn Executor, log: &dyn Log) -> Result<Self> {
        log.stage("Loading configuration");
        log.info(&format!("config: {}", path.display()));
        let config = AclConfig::load(path)?;

        log.debug(&format!("{} permission entries", config.permissions.len()));
        log.debug(&format!(
            "{} per-directory overrides",
            config.per_dir_permissions.len()
        ));

        let target = config.resolve_target()?;
        log.info(&format!("target: {}", target.display()));

        let warnings = validation::validate(&config);
        if !warnings.is_empty() {
            log.warn(&format!(
                "found {} configuration warning(s):",
                warnings.len()
            ));
            for warning in &warnings {
                log.warn(&format!(
                    "  {} [{}]: {}",
                    warning.source, warning.item, warning.message
                ));
            }
        }

        if !executor.which(SETFACL) {
            return Err(AclError::ToolMissing(SETFACL.to_string()).into());
        }

        Ok(Self { config, target })
    }
}

/// Execute tasks in order, print the summary, and bail if any task failed.
///
/// Once a task fails, the remaining tasks are recorded as skipped without
/// running.
///
/// # Errors
///
/// Returns an error if one or more tasks recorded a failure.
pub fn run_tasks_to_completion<'a>(
    tasks: impl IntoIterator<Item = &'a dyn Task>,
    ctx: &Context,
    log: &Logger,
) -> Result<()> {
    let mut failed = false;
    for task in tasks {
        if failed {
            log.record_task(task.name(), TaskStatus::Skipped, Some("earlier task failed"));
            continue;
        }
        failed = tasks::execute(task, ctx) == TaskStatus::Failed;
    }

    log.print_summary();

    let count = log.failure_count();
    if count > 0 {
        anyhow::bail!("{count} task(s) failed");
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::config::PermissionEntry;
    use crate::resources::test_helpers::RecordingExecutor;
    use std::sync::Arc;

    fn write_config(dir: &Path, target: &Path) -> PathBuf {
        let config = AclConfig {
            target_directory: Some(target.to_path_buf()),
            permissions: vec![PermissionEntry::user("alice", "rwx")],
            ..AclConfig::default()
        };
        let path = dir.join("acl.yaml");
        config.save(&path).unwrap();
        path
    }

    #[test]
    fn setup_resolves_target() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), dir.path());
        let log = Logger::new("test");
        let setup = CommandSetup::init(&path, &RecordingExecutor::new(), &log).unwrap();
        assert_eq!(setup.target, dir.path());
        assert_eq!(setup.config.permissions.len(), 1);
    }

    #[test]
    fn setup_fails_on_missing_target() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), &dir.path().join("absent"));
        let log = Logger::new("test");
        let err = CommandSetup::init(&path, &RecordingExecutor::new(), &log).unwrap_err();
        assert!(
            err.to_string()
                .contains("Invalid or non-existent target directory")
        );
    }

    #[test]
    fn setup_requires_setfacl() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), dir.path());
        let log = Logger::new("test");
        let err = CommandSetup::init(&path, &RecordingExecutor::without_tools(), &log)
            .unwrap_err();
        assert!(err.to_string().contains("'setfacl' not found on PATH"));
    }

    struct FailingTask;

    impl Task for FailingTask {
        fn name(&self) -> &str {
            "failing"
        }
        fn should_run(&self, _ctx: &Context) -> bool {
            true
        }
        fn run(&self, _ctx: &Context) -> Result<tasks::TaskResult> {
            anyhow::bail!("boom")
        }
    }

    #[test]
    fn failure_skips_remaining_tasks() {
        let executor = Arc::new(RecordingExecutor::new());
        let (ctx, log) = tasks::test_helpers::make_context(Arc::clone(&executor));
        let list: Vec<Box<dyn Task>> = vec![
            Box::new(FailingTask),
            Box::new(tasks::permissions::ApplyPermissions),
        ];

        let err = run_tasks_to_completion(list.iter().map(AsRef::as_ref), &ctx, &log)
            .unwrap_err();
        assert_eq!(err.to_string(), "1 task(s) failed");

        let entries = log.task_entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].status, TaskStatus::Failed);
        assert_eq!(entries[1].status, TaskStatus::Skipped);
        assert!(executor.calls().is_empty(), "no setfacl after a failure");
    }
}
