//! Task outcome records and the [`Log`] sink tasks write to.

/// One line of the run summary.
#[derive(Debug, Clone)]
pub struct TaskEntry {
    /// Task name as shown in the summary.
    pub name: String,
    /// How the task ended.
    pub status: TaskStatus,
    /// Skip reason or error text, if any.
    pub message: Option<String>,
}

/// How a task ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    /// Every grant was applied.
    Ok,
    /// The configuration gave the task nothing to do.
    NotApplicable,
    /// The task chose not to act, or an earlier task failed.
    Skipped,
    /// A `setfacl` call failed.
    Failed,
}

impl TaskStatus {
    /// Every status, in summary order.
    pub(super) const ALL: [Self; 4] = [Self::Ok, Self::NotApplicable, Self::Skipped, Self::Failed];

    /// Summary glyph and the SGR colour it is printed in.
    pub(super) const fn marker(self) -> (&'static str, &'static str) {
        match self {
            Self::Ok => ("✓", "\x1b[32m"),
            Self::NotApplicable => ("·", "\x1b[2m"),
            Self::Skipped => ("○", "\x1b[33m"),
            Self::Failed => ("✗", "\x1b[31m"),
        }
    }

    /// Word used for this status in the summary totals.
    pub(super) const fn label(self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::NotApplicable => "n/a",
            Self::Skipped => "skipped",
            Self::Failed => "failed",
        }
    }
}

/// Where tasks and commands send their output.
pub trait Log: Send + Sync {
    /// Start a new section of output.
    fn stage(&self, msg: &str);
    /// Progress message.
    fn info(&self, msg: &str);
    /// Detail shown only with `--verbose`; always kept in the log file.
    fn debug(&self, msg: &str);
    /// Something was skipped or looks wrong.
    fn warn(&self, msg: &str);
    /// Something failed.
    fn error(&self, msg: &str);
    /// Record how a task ended, for the summary.
    fn record_task(&self, name: &str, status: TaskStatus, message: Option<&str>);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_status_has_a_distinct_marker() {
        let glyphs: Vec<&str> = TaskStatus::ALL.iter().map(|s| s.marker().0).collect();
        for (i, glyph) in glyphs.iter().enumerate() {
            assert!(!glyphs.iter().skip(i + 1).any(|g| g == glyph));
        }
    }

    #[test]
    fn labels_match_summary_words() {
        let labels: Vec<&str> = TaskStatus::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(labels, ["ok", "n/a", "skipped", "failed"]);
    }
}
