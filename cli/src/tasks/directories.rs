//! Per-directory overrides applied to subdirectories of the target.
use anyhow::Result;

use super::{Context, Task, TaskResult, process_compiled};
use crate::acl::compiler;

/// Apply `per_dir_permissions` overrides to their subdirectories.
#[derive(Debug)]
pub struct ApplyDirectoryPermissions;

impl Task for ApplyDirectoryPermissions {
    fn name(&self) -> &str {
        "Apply per-directory permissions"
    }

    fn should_run(&self, ctx: &Context) -> bool {
        !ctx.config.per_dir_permissions.is_empty()
    }

    fn run(&self, ctx: &Context) -> Result<TaskResult> {
        let compiled = compiler::compile_directory_permissions(&ctx.config, &ctx.target);
        process_compiled(ctx, compiled)
    }
}
