//! Resource primitives that change system state.
pub mod facl;

use anyhow::Result;

/// Interface for resources that can be described and applied.
///
/// There is no state check: ACL grants are written unconditionally, the
/// same rule applied twice leaves the same ACL behind.
pub trait Applicable {
    /// Human-readable description of this resource.
    fn description(&self) -> String;

    /// Apply the resource change.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying command cannot be run or fails.
    fn apply(&self) -> Result<()>;
}

/// Shared test helpers for resource unit tests.
#[cfg(test)]
pub mod test_helpers {
    use crate::exec::{ExecResult, Executor};
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// A scripted executor that records every call.
    ///
    /// Responses are consumed in FIFO order; once the queue is empty every
    /// call succeeds with empty output. A failed response makes [`Executor::run`]
    /// bail the same way the system executor does.
    #[derive(Debug, Default)]
    pub struct RecordingExecutor {
        responses: Mutex<VecDeque<(bool, String)>>,
        calls: Mutex<Vec<String>>,
        /// Return value for every [`Executor::which`] call.
        pub which_result: bool,
    }

    impl RecordingExecutor {
        /// Executor where every call succeeds and every tool is present.
        #[must_use]
        pub fn new() -> Self {
            Self {
                which_result: true,
                ..Self::default()
            }
        }

        /// Executor returning the given `(success, stdout)` responses in order.
        #[must_use]
        pub fn with_responses(responses: Vec<(bool, String)>) -> Self {
            Self {
                responses: Mutex::new(responses.into()),
                which_result: true,
                ..Self::default()
            }
        }

        /// Executor where `which` reports every tool as missing.
        #[must_use]
        pub fn without_tools() -> Self {
            Self::default()
        }

        /// Every command issued so far, rendered as `program arg arg`.
        #[must_use]
        pub fn calls(&self) -> Vec<String> {
            self.calls.lock().map_or_else(|_| vec![], |g| g.clone())
        }

        fn next(&self, program: &str, args: &[&str]) -> ExecResult {
            if let Ok(mut calls) = self.calls.lock() {
                let mut line = program.to_string();
                for arg in args {
                    line.push(' ');
                    line.push_str(arg);
                }
                calls.push(line);
            }
            let (success, stdout) = self
                .responses
                .lock()
                .ok()
                .and_then(|mut g| g.pop_front())
                .unwrap_or((true, String::new()));
            ExecResult {
                stdout,
                stderr: if success {
                    String::new()
                } else {
                    "mock failure".to_string()
                },
                success,
                code: Some(i32::from(!success)),
            }
        }
    }

    impl Executor for RecordingExecutor {
        fn run_unchecked(&self, program: &str, args: &[&str]) -> anyhow::Result<ExecResult> {
            Ok(self.next(program, args))
        }

        fn which(&self, _: &str) -> bool {
            self.which_result
        }
    }
}
