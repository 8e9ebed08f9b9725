// Shared helpers for integration tests.
//
// Provides a scriptable executor and a temp-directory project fixture so each
// integration test can drive the scaffold pipeline in isolation.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use wpdev_cli::commands::scaffold::{self, Outcome, ScaffoldOptions};
use wpdev_cli::config::prompt::NoPrompt;
use wpdev_cli::config::resolve::Overrides;
use wpdev_cli::exec::{ExecResult, Executor};
use wpdev_cli::logging::{Log, Logger, Palette};

/// Executor that never spawns anything and records every call.
///
/// `which` answers `chmod_available`; `run` answers with `exit_code` and
/// `stderr`.
#[derive(Debug)]
pub struct FakeExecutor {
    pub chmod_available: bool,
    pub exit_code: i32,
    pub stderr: String,
    calls: Mutex<Vec<Vec<String>>>,
}

impl FakeExecutor {
    pub fn ok() -> Self {
        Self {
            chmod_available: true,
            exit_code: 0,
            stderr: String::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn without_chmod() -> Self {
        Self {
            chmod_available: false,
            ..Self::ok()
        }
    }

    pub fn failing(code: i32, stderr: &str) -> Self {
        Self {
            exit_code: code,
            stderr: stderr.to_string(),
            ..Self::ok()
        }
    }

    /// Every `program arg...` invocation seen so far.
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().expect("calls mutex").clone()
    }

    fn record(&self, program: &str, args: &[&str]) -> ExecResult {
        let mut call = vec![program.to_string()];
        call.extend(args.iter().map(|a| (*a).to_string()));
        self.calls.lock().expect("calls mutex").push(call);
        ExecResult {
            stdout: String::new(),
            stderr: self.stderr.clone(),
            success: self.exit_code == 0,
            code: Some(self.exit_code),
        }
    }
}

impl Executor for FakeExecutor {
    fn run(&self, program: &str, args: &[&str]) -> anyhow::Result<ExecResult> {
        Ok(self.record(program, args))
    }

    fn which(&self, _program: &str) -> bool {
        self.chmod_available
    }
}

/// A temporary working directory with a named project subdirectory.
#[derive(Debug)]
pub struct TestProject {
    _tmp: tempfile::TempDir,
    /// Directory the tool is "run from".
    pub cwd: PathBuf,
}

impl TestProject {
    /// Create an empty working directory named `name`.
    pub fn new(name: &str) -> Self {
        let tmp = tempfile::tempdir().expect("create temp dir");
        let cwd = tmp.path().join(name);
        std::fs::create_dir_all(&cwd).expect("create cwd");
        let cwd = dunce::canonicalize(&cwd).expect("canonicalize cwd");
        Self { _tmp: tmp, cwd }
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.cwd.join(relative)
    }

    pub fn read(&self, relative: &str) -> String {
        std::fs::read_to_string(self.path(relative)).expect("read generated file")
    }
}

/// Options equivalent to `-n demo -v 6.4 -p 9090 -e "query-monitor acf"`.
pub fn demo_options() -> ScaffoldOptions {
    ScaffoldOptions {
        overrides: Overrides {
            name: Some("demo".to_string()),
            version: Some("6.4".to_string()),
            port: Some("9090".to_string()),
            plugins: Some("query-monitor acf".to_string()),
            directory: None,
        },
        defaults_file: None,
        dry_run: false,
        parallel: true,
    }
}

/// Run the pipeline non-interactively from `cwd`.
pub fn run(
    opts: &ScaffoldOptions,
    executor: Arc<FakeExecutor>,
    cwd: &Path,
) -> (Outcome, Arc<Logger>) {
    let logger = Arc::new(Logger::new(None, Palette::new(false)));
    let log: Arc<dyn Log> = Arc::clone(&logger) as Arc<dyn Log>;
    let outcome = scaffold::run(opts, &log, &NoPrompt, executor, cwd);
    (outcome, logger)
}
