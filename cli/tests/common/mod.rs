// Shared helpers for integration tests.
//
// Provides a scripted executor that stands in for `setfacl`/`getfacl` and a
// temporary target tree so each integration test runs in isolation.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use aclfw_cli::config::AclConfig;
use aclfw_cli::exec::{ExecResult, Executor};

/// Executor that records every call and replays per-program responses.
///
/// Each program has its own FIFO of `(success, stdout)` responses; once a
/// queue is empty, calls to that program succeed with empty output.
#[derive(Debug, Default)]
pub struct ScriptedExecutor {
    responses: Mutex<HashMap<String, VecDeque<(bool, String)>>>,
    calls: Mutex<Vec<String>>,
    missing: Vec<String>,
}

impl ScriptedExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response for the next call to `program`.
    pub fn respond(self, program: &str, success: bool, stdout: &str) -> Self {
        self.responses
            .lock()
            .expect("responses lock")
            .entry(program.to_string())
            .or_default()
            .push_back((success, stdout.to_string()));
        self
    }

    /// Make `which(program)` report the tool as absent.
    pub fn without(mut self, program: &str) -> Self {
        self.missing.push(program.to_string());
        self
    }

    /// Every command issued so far, rendered as `program arg arg`.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("calls lock").clone()
    }

    /// Calls made to `program` only.
    pub fn calls_to(&self, program: &str) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter(|c| c.split(' ').next() == Some(program))
            .collect()
    }

    fn next(&self, program: &str, args: &[&str]) -> ExecResult {
        let mut line = program.to_string();
        for arg in args {
            line.push(' ');
            line.push_str(arg);
        }
        self.calls.lock().expect("calls lock").push(line);

        let (success, stdout) = self
            .responses
            .lock()
            .expect("responses lock")
            .get_mut(program)
            .and_then(VecDeque::pop_front)
            .unwrap_or((true, String::new()));
        ExecResult {
            stdout,
            stderr: if success {
                String::new()
            } else {
                format!("{program}: Operation not supported")
            },
            success,
            code: Some(i32::from(!success)),
        }
    }
}

impl Executor for ScriptedExecutor {
    fn run_unchecked(&self, program: &str, args: &[&str]) -> anyhow::Result<ExecResult> {
        Ok(self.next(program, args))
    }

    fn which(&self, program: &str) -> bool {
        !self.missing.iter().any(|m| m == program)
    }
}

/// Temporary directory holding a target tree and its configuration file.
pub struct TargetTree {
    pub dir: tempfile::TempDir,
}

impl TargetTree {
    /// Create a target with `subdir1` and `subdir2/nested_subdir`.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        std::fs::create_dir_all(dir.path().join("subdir1")).expect("create subdir1");
        std::fs::create_dir_all(dir.path().join("subdir2/nested_subdir"))
            .expect("create nested_subdir");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Render `config` into `acl.yaml` inside the tree and return its path.
    pub fn write_config(&self, config: &AclConfig) -> PathBuf {
        let path = self.dir.path().join("acl.yaml");
        config.save(&path).expect("write config");
        path
    }

    /// Write raw YAML into `acl.yaml` inside the tree and return its path.
    pub fn write_yaml(&self, yaml: &str) -> PathBuf {
        let path = self.dir.path().join("acl.yaml");
        std::fs::write(&path, yaml).expect("write yaml");
        path
    }
}
