//! Environment handed to spawned processes.

use std::collections::HashMap;
use std::env as stdenv;
use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

/// Variables and working directory a child process starts with.
///
/// Values are kept as OS strings so nothing the caller inherited is lost or rewritten,
/// including a `PATH` that is not valid UTF-8.
#[derive(Debug, Clone)]
pub struct Environment {
    vars: HashMap<OsString, OsString>,
    /// The working directory for spawned processes and base for relative paths.
    pub current_dir: PathBuf,
}

impl Environment {
    /// Snapshot of the calling process: every variable plus its working directory.
    pub fn new() -> Self {
        let current_dir = stdenv::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self {
            vars: stdenv::vars_os().collect(),
            current_dir,
        }
    }

    /// Environment with no variables at all, rooted at `current_dir`.
    pub fn empty(current_dir: impl Into<PathBuf>) -> Self {
        Self {
            vars: HashMap::new(),
            current_dir: current_dir.into(),
        }
    }

    pub fn get_var(&self, key: impl AsRef<OsStr>) -> Option<&OsStr> {
        self.vars.get(key.as_ref()).map(OsString::as_os_str)
    }

    pub fn set_var(&mut self, key: impl Into<OsString>, val: impl Into<OsString>) {
        self.vars.insert(key.into(), val.into());
    }

    pub fn remove_var(&mut self, key: impl AsRef<OsStr>) -> Option<OsString> {
        self.vars.remove(key.as_ref())
    }

    /// Directories searched for bare command names; empty when `PATH` is unset.
    pub fn search_paths(&self) -> &OsStr {
        self.get_var("PATH").unwrap_or_default()
    }

    /// Variables in the form `Command::envs` takes them.
    pub fn vars(&self) -> impl Iterator<Item = (&OsStr, &OsStr)> {
        self.vars.iter().map(|(k, v)| (k.as_os_str(), v.as_os_str()))
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}
