use std::path::PathBuf;
use std::sync::Arc;

use crate::config::AclConfig;
use crate::exec::Executor;
use crate::logging::Log;

/// Everything a task needs to compile and apply its grants.
pub struct Context {
    /// Configuration being applied.
    pub config: Arc<AclConfig>,
    /// Resolved, existing target directory.
    pub target: PathBuf,
    /// Where progress and task outcomes go.
    pub log: Arc<dyn Log>,
    /// Runs `setfacl`.
    pub executor: Arc<dyn Executor>,
}

impl std::fmt::Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("config", &self.config)
            .field("target", &self.target)
            .field("log", &"<dyn Log>")
            .field("executor", &self.executor)
            .finish()
    }
}

impl Context {
    /// Bundle the pieces for one apply run.
    #[must_use]
    pub const fn new(
        config: Arc<AclConfig>,
        target: PathBuf,
        log: Arc<dyn Log>,
        executor: Arc<dyn Executor>,
    ) -> Self {
        Self {
            config,
            target,
            log,
            executor,
        }
    }
}
