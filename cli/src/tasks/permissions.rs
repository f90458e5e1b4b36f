//! Top-level grants applied to the whole target tree.
use anyhow::Result;

use super::{Context, Task, TaskResult, process_compiled};
use crate::acl::compiler;

/// Apply the top-level `permissions` to the whole target tree.
#[derive(Debug)]
pub struct ApplyPermissions;

impl Task for ApplyPermissions {
    fn name(&self) -> &str {
        "Apply permissions"
    }

    fn should_run(&self, ctx: &Context) -> bool {
        !ctx.config.permissions.is_empty()
    }

    fn run(&self, ctx: &Context) -> Result<TaskResult> {
        if !ctx.config.apply_to.any() {
            return Ok(TaskResult::Skipped(
                "apply_to selects no scope".to_string(),
            ));
        }
        let compiled = compiler::compile_permissions(&ctx.config, &ctx.target);
        process_compiled(ctx, compiled)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::{AclConfig, ApplyTo, PermissionEntry};
    use crate::resources::test_helpers::RecordingExecutor;
    use crate::tasks::test_helpers::make_context_for;
    use std::sync::Arc;

    fn config(apply_to: ApplyTo) -> AclConfig {
        AclConfig {
            permissions: vec![
                PermissionEntry::user("alice", "rwx"),
                PermissionEntry::group("staff", "r-x"),
            ],
            apply_to,
            ..AclConfig::default()
        }
    }

    #[test]
    fn not_applicable_without_permissions() {
        let executor = Arc::new(RecordingExecutor::new());
        let (ctx, _log) = make_context_for(AclConfig::default(), "/srv", executor);
        assert!(!ApplyPermissions.should_run(&ctx));
    }

    #[test]
    fn skipped_when_no_scope_selected() {
        let executor = Arc::new(RecordingExecutor::new());
        let (ctx, _log) =
            make_context_for(config(ApplyTo::default()), "/srv", Arc::clone(&executor));
        assert!(ApplyPermissions.should_run(&ctx));
        let result = ApplyPermissions.run(&ctx).unwrap();
        assert!(matches!(result, TaskResult::Skipped(_)));
        assert!(executor.calls().is_empty());
    }

    #[test]
    fn applies_access_then_default_per_entry() {
        let executor = Arc::new(RecordingExecutor::new());
        let apply_to = ApplyTo {
            directories: true,
            files: true,
            default: true,
        };
        let (ctx, _log) = make_context_for(config(apply_to), "/srv", Arc::clone(&executor));
        ApplyPermissions.run(&ctx).unwrap();
        assert_eq!(
            executor.calls(),
            [
                "setfacl -Rm u:alice:rwx /srv",
                "setfacl -Rdm u:alice:rwx /srv",
                "setfacl -Rm g:staff:r-x /srv",
                "setfacl -Rdm g:staff:r-x /srv",
            ]
        );
    }
}
