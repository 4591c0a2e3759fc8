use std::path::PathBuf;

/// Interpreter used for scripts unless configured otherwise.
pub const DEFAULT_INTERPRETER: &str = "/bin/bash";

/// File name prefix of temporary script files.
pub const DEFAULT_TEMP_PREFIX: &str = "cli";

/// Settings of a [`Runner`](crate::Runner).
///
/// `interpreter` goes through the same fragment splitting as any other command, so
/// `"/usr/bin/env bash"` runs `env` with `bash` as its first argument. The script
/// path is always appended as one extra argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerConfig {
    pub interpreter: String,
    pub temp_prefix: String,
    /// Directory for temporary scripts; the platform temp dir when `None`.
    pub temp_dir: Option<PathBuf>,
}

impl RunnerConfig {
    pub fn with_interpreter(mut self, interpreter: impl Into<String>) -> Self {
        self.interpreter = interpreter.into();
        self
    }

    pub fn with_temp_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.temp_prefix = prefix.into();
        self
    }

    pub fn with_temp_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.temp_dir = Some(dir.into());
        self
    }

    /// Directory temporary scripts are created in.
    pub fn script_dir(&self) -> PathBuf {
        self.temp_dir.clone().unwrap_or_else(std::env::temp_dir)
    }
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            interpreter: DEFAULT_INTERPRETER.to_string(),
            temp_prefix: DEFAULT_TEMP_PREFIX.to_string(),
            temp_dir: None,
        }
    }
}
