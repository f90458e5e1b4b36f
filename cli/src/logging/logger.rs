//! Tracing-backed [`Log`] implementation that also keeps the run summary.
use std::path::PathBuf;
use std::sync::Mutex;

use super::subscriber::STAGE_TARGET;
use super::types::{Log, TaskEntry, TaskStatus};
use super::utils::log_file_path;

const RESET: &str = "\x1b[0m";
const DIM: &str = "\x1b[2m";

/// Logger for one command run.
///
/// Messages become [`tracing`] events, rendered by the subscriber from
/// [`init_subscriber`](super::init_subscriber). Task outcomes are kept in
/// memory for [`Logger::print_summary`].
#[derive(Debug)]
pub struct Logger {
    tasks: Mutex<Vec<TaskEntry>>,
    log_file: Option<PathBuf>,
}

impl Logger {
    /// Logger for `command`; the summary points at that command's log file.
    #[must_use]
    pub fn new(command: &str) -> Self {
        Self::with_log_file(log_file_path(command))
    }

    pub(super) const fn with_log_file(log_file: Option<PathBuf>) -> Self {
        Self {
            tasks: Mutex::new(Vec::new()),
            log_file,
        }
    }

    fn entries(&self) -> Vec<TaskEntry> {
        self.tasks
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    /// Recorded task entries (test-only).
    #[cfg(test)]
    pub(crate) fn task_entries(&self) -> Vec<TaskEntry> {
        self.entries()
    }

    /// Number of tasks recorded as failed.
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.entries()
            .iter()
            .filter(|t| t.status == TaskStatus::Failed)
            .count()
    }

    /// Print one line per recorded task, then the totals.
    pub fn print_summary(&self) {
        let tasks = self.entries();
        if tasks.is_empty() {
            return;
        }

        self.stage("Summary");
        for task in &tasks {
            let (glyph, colour) = task.status.marker();
            let detail = task
                .message
                .as_deref()
                .map(|m| format!(" ({m})"))
                .unwrap_or_default();
            self.info(&format!("{colour}{glyph} {}{detail}{RESET}", task.name));
        }

        let totals: Vec<String> = TaskStatus::ALL
            .iter()
            .map(|&status| {
                let n = tasks.iter().filter(|t| t.status == status).count();
                format!("{}{n} {}{RESET}", status.marker().1, status.label())
            })
            .collect();
        self.info(&format!("{} tasks: {}", tasks.len(), totals.join(", ")));

        if let Some(path) = &self.log_file {
            self.info(&format!("{DIM}log: {}{RESET}", path.display()));
        }
    }
}

impl Log for Logger {
    fn stage(&self, msg: &str) {
        tracing::info!(target: STAGE_TARGET, "{msg}");
    }

    fn info(&self, msg: &str) {
        tracing::info!("{msg}");
    }

    fn debug(&self, msg: &str) {
        tracing::debug!("{msg}");
    }

    fn warn(&self, msg: &str) {
        tracing::warn!("{msg}");
    }

    fn error(&self, msg: &str) {
        tracing::error!("{msg}");
    }

    fn record_task(&self, name: &str, status: TaskStatus, message: Option<&str>) {
        if let Ok(mut guard) = self.tasks.lock() {
            guard.push(TaskEntry {
                name: name.to_string(),
                status,
                message: message.map(String::from),
            });
        }
    }
}
