//! Named tasks that turn a loaded configuration into `setfacl` calls.
mod context;
pub mod directories;
pub mod permissions;
mod processing;

pub use context::Context;
pub use processing::{TaskResult, TaskStats, process_compiled};

use anyhow::Result;

use crate::logging::TaskStatus;

/// A named, executable task.
pub trait Task: Send + Sync + 'static {
    /// Human-readable task name.
    fn name(&self) -> &str;

    /// Whether the configuration gives this task anything to do.
    fn should_run(&self, ctx: &Context) -> bool;

    /// Execute the task.
    ///
    /// # Errors
    ///
    /// Returns an error if a `setfacl` invocation cannot be run or exits
    /// non-zero.
    fn run(&self, ctx: &Context) -> Result<TaskResult>;
}

/// The tasks run by the apply command, in application order.
///
/// Top-level permissions go first so per-directory overrides win on the
/// subdirectories they name.
#[must_use]
pub fn all_apply_tasks() -> Vec<Box<dyn Task>> {
    vec![
        Box::new(permissions::ApplyPermissions),
        Box::new(directories::ApplyDirectoryPermissions),
    ]
}

/// Run `task` if it applies and record how it ended.
///
/// Returns the recorded status so callers can stop after a failure.
#[must_use]
pub fn execute(task: &dyn Task, ctx: &Context) -> TaskStatus {
    let name = task.name();
    let (status, message) = if task.should_run(ctx) {
        ctx.log.stage(name);
        match task.run(ctx) {
            Ok(TaskResult::Ok) => (TaskStatus::Ok, None),
            Ok(TaskResult::Skipped(reason)) => {
                ctx.log.info(&format!("skipped: {reason}"));
                (TaskStatus::Skipped, Some(reason))
            }
            Err(e) => {
                let detail = format!("{e:#}");
                ctx.log.error(&format!("{name}: {detail}"));
                (TaskStatus::Failed, Some(detail))
            }
        }
    } else {
        ctx.log.debug(&format!("{name}: nothing configured"));
        (TaskStatus::NotApplicable, None)
    };
    ctx.log.record_task(name, status, message.as_deref());
    status
}
