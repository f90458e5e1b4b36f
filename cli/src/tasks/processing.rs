//! Grant processing loop: log skips, apply grants in order, collect stats.
use anyhow::Result;

use super::Context;
use crate::acl::compiler::CompiledAcls;
use crate::resources::Applicable;
use crate::resources::facl::FaclResource;

/// What a task reports when it returns without error.
///
/// # Examples
///
/// ```
/// use aclfw_cli::tasks::TaskResult;
///
/// let ok = TaskResult::Ok;
/// let skipped = TaskResult::Skipped("no scope selected".into());
///
/// assert!(matches!(ok, TaskResult::Ok));
/// assert!(matches!(skipped, TaskResult::Skipped(_)));
/// ```
#[derive(Debug, Clone)]
pub enum TaskResult {
    /// All grants were applied.
    Ok,
    /// Task decided not to act.
    Skipped(String),
}

/// Counters for tasks that apply many grants.
///
/// # Examples
///
/// ```
/// use aclfw_cli::tasks::TaskStats;
///
/// let stats = TaskStats { applied: 4, skipped: 1 };
/// assert_eq!(stats.summary(), "4 applied, 1 skipped");
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TaskStats {
    /// Number of `setfacl` invocations that succeeded.
    pub applied: u32,
    /// Number of entries or overrides left out.
    pub skipped: u32,
}

impl TaskStats {
    /// All counters at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Format the summary string (e.g. "4 applied, 1 skipped").
    #[must_use]
    pub fn summary(&self) -> String {
        format!("{} applied, {} skipped", self.applied, self.skipped)
    }

    /// Log the counts and report success.
    #[must_use]
    pub fn finish(self, ctx: &Context) -> TaskResult {
        ctx.log.info(&self.summary());
        TaskResult::Ok
    }
}

/// Warn about every skipped part of `compiled`, then apply its grants in
/// order, stopping at the first failure.
///
/// # Errors
///
/// Returns the first `setfacl` failure.
pub fn process_compiled(ctx: &Context, compiled: CompiledAcls) -> Result<TaskResult> {
    let mut stats = TaskStats::new();

    for reason in &compiled.skipped {
        ctx.log.warn(&reason.to_string());
        stats.skipped += 1;
    }

    for grant in compiled.grants {
        let resource = FaclResource::new(grant, ctx.executor.as_ref());
        ctx.log.debug(&resource.grant.to_string());
        resource.apply()?;
        stats.applied += 1;
    }

    Ok(stats.finish(ctx))
}
