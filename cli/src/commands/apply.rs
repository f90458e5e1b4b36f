//! Command: apply the ACLs described by a configuration file.
use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

use super::{CommandSetup, run_tasks_to_completion};
use crate::cli::ApplyOpts;
use crate::exec::{Executor, SystemExecutor};
use crate::logging::{Log, Logger};
use crate::tasks::{self, Context};

/// Run the apply command against the real system.
///
/// # Errors
///
/// Returns an error if setup fails or any task fails.
pub fn run(opts: &ApplyOpts, log: &Arc<Logger>) -> Result<()> {
    apply_file(&opts.config, Arc::new(SystemExecutor), log)
}

/// Load `path`, then run every apply task through `executor`.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded, the target is
/// missing, `setfacl` is unavailable, or a task fails.
pub fn apply_file(path: &Path, executor: Arc<dyn Executor>, log: &Arc<Logger>) -> Result<()> {
    let setup = CommandSetup::init(path, executor.as_ref(), &**log)?;
    let ctx = Context::new(
        Arc::new(setup.config),
        setup.target,
        Arc::clone(log) as Arc<dyn Log>,
        executor,
    );

    let all_tasks = tasks::all_apply_tasks();
    run_tasks_to_completion(all_tasks.iter().map(AsRef::as_ref), &ctx, log)?;

    log.info("ACLs applied successfully");
    Ok(())
}
