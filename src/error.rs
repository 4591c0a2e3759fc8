use std::io;
use std::process::ExitStatus;
use thiserror::Error;
use tracing::error;

/// Conventional process exit code type used by this crate.
///
/// A value of 0 indicates success; any non-zero value indicates failure.
/// This mirrors the convention used by POSIX shells and many command-line tools.
pub type ExitCode = i32;

/// Step of the script runner that failed before the interpreter was started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupStage {
    Create,
    Write,
    Close,
}

impl std::fmt::Display for SetupStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            SetupStage::Create => "create",
            SetupStage::Write => "write",
            SetupStage::Close => "close",
        })
    }
}

/// Errors returned when running a command or script.
#[derive(Debug, Error)]
pub enum ExecError {
    /// No tokens were left after splitting the fragments.
    #[error("no command given")]
    EmptyCommand,

    /// The executable could not be found on the search path. No process was spawned.
    #[error("executable file not found: {name}")]
    NotFound { name: String },

    /// The OS refused to start the resolved executable.
    #[error("failed to start {program}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    /// The exit status of the child could not be collected.
    #[error("failed to wait for command")]
    Wait(#[source] io::Error),

    /// The child ran to completion but did not report success.
    #[error("command execution failed ({status})")]
    NonZeroExit { status: ExitStatus },

    /// The temporary script file could not be prepared. Treated as unrecoverable
    /// by the command-line front end.
    #[error("failed to {stage} temporary script file")]
    Setup {
        stage: SetupStage,
        #[source]
        source: io::Error,
    },

    /// The heading presenter failed to write.
    #[error("failed to print heading")]
    Output(#[source] io::Error),
}

impl ExecError {
    /// True for failures that happened before any command could run.
    pub fn is_setup(&self) -> bool {
        matches!(self, ExecError::Setup { .. })
    }

    /// Exit code a shell would report for this failure.
    ///
    /// - not found: 127
    /// - could not start: 126
    /// - non-zero exit: the child's code, or `128 + signal` when it was killed
    /// - anything else: 1
    pub fn exit_code(&self) -> ExitCode {
        match self {
            ExecError::NotFound { .. } => 127,
            ExecError::Spawn { .. } => 126,
            ExecError::NonZeroExit { status } => status_code(*status),
            _ => 1,
        }
    }
}

/// Report a failed run on stderr and pick the exit code for the process.
///
/// A script file that cannot be prepared is fatal: it is logged at error level and
/// always yields 1. A command that ran and failed passes its own code through without
/// extra output, since the child already spoke for itself.
pub fn report_failure(e: &anyhow::Error) -> ExitCode {
    match e.downcast_ref::<ExecError>() {
        Some(exec) if exec.is_setup() => {
            error!("{e:#}");
            1
        }
        Some(exec @ ExecError::NonZeroExit { .. }) => exec.exit_code(),
        Some(exec) => {
            eprintln!("shell_exec: {e:#}");
            exec.exit_code()
        }
        None => {
            eprintln!("shell_exec: {e:#}");
            1
        }
    }
}

/// Map an exit status to a shell-style exit code.
pub fn status_code(status: ExitStatus) -> ExitCode {
    match status.code() {
        Some(x) => x,
        None => terminated_by_signal(status),
    }
}

#[cfg(unix)]
fn terminated_by_signal(exit_status: ExitStatus) -> ExitCode {
    use std::os::unix::process::ExitStatusExt;
    if let Some(signal) = ExitStatusExt::signal(&exit_status) {
        128 + signal
    } else if ExitStatusExt::core_dumped(&exit_status) {
        255
    } else {
        -1
    }
}

#[cfg(not(unix))]
fn terminated_by_signal(_exit_status: ExitStatus) -> ExitCode {
    -1
}
