//! `setfacl` invocation for a single [`AclGrant`].
use anyhow::{Context as _, Result};

use super::Applicable;
use crate::acl::{AclGrant, SETFACL};
use crate::error::AclError;
use crate::exec::Executor;

/// An ACL grant bound to the executor that writes it.
#[derive(Debug)]
pub struct FaclResource<'a> {
    /// The grant to write.
    pub grant: AclGrant,
    executor: &'a dyn Executor,
}

impl<'a> FaclResource<'a> {
    /// Create a new ACL resource.
    #[must_use]
    pub const fn new(grant: AclGrant, executor: &'a dyn Executor) -> Self {
        Self { grant, executor }
    }

    /// Arguments passed to `setfacl`: scope flags, rule, target.
    ///
    /// # Errors
    ///
    /// Returns an error if the target path is not valid UTF-8.
    pub fn args(&self) -> Result<[String; 3], AclError> {
        let target = self
            .grant
            .target
            .to_str()
            .ok_or_else(|| AclError::NonUtf8Path(self.grant.target.clone()))?;
        Ok([
            self.grant.scope.flags().to_string(),
            self.grant.rule.to_string(),
            target.to_string(),
        ])
    }
}

impl Applicable for FaclResource<'_> {
    fn description(&self) -> String {
        format!(
            "{} {} on {}",
            self.grant.scope,
            self.grant.rule,
            self.grant.target.display()
        )
    }

    fn apply(&self) -> Result<()> {
        let args = self.args()?;
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        self.executor
            .run(SETFACL, &args)
            .with_context(|| format!("applying {}", self.description()))?;
        Ok(())
    }
}
