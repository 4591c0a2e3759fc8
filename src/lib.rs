//! A small helper for launching external programs and ad-hoc shell scripts.
//!
//! Commands run in the foreground with the caller's standard streams, so their output
//! appears live. The building blocks are:
//! - [`build_command_args`], which turns command fragments into an argument vector;
//! - [`Runner`], which resolves the executable through `PATH`, runs it and maps the
//!   exit status to a [`Result`];
//! - [`Runner::execute_bash`], which runs arbitrary text through `/bin/bash` (or a
//!   configured interpreter) from a temporary file;
//! - [`Runner::execute_with_heading`], which announces the command through a
//!   [`Presenter`] first.
//!
//! The free functions [`execute`], [`execute_bash`] and [`execute_with_heading`] use a
//! default [`Runner`] built from the current process environment.

mod args;
pub mod config;
pub mod env;
mod error;
mod heading;
pub mod logging;
mod lookup;
mod repl;
mod runner;
mod script;

pub use args::build_command_args;
pub use config::RunnerConfig;
pub use error::{ExecError, ExitCode, SetupStage, report_failure, status_code};
pub use heading::{ConsolePresenter, Presenter};
pub use lookup::find_command_path;
pub use repl::run_repl;
pub use runner::Runner;

/// Run a command given as fragments, see [`Runner::execute`].
///
/// ```no_run
/// shell_exec::execute(&["git", "commit -m", "\"initial import\""]).unwrap();
/// ```
pub fn execute<S: AsRef<str>>(fragments: &[S]) -> Result<(), ExecError> {
    Runner::default().execute(fragments)
}

/// Run `command` as a bash script, see [`Runner::execute_bash`].
pub fn execute_bash(command: &str) -> Result<(), ExecError> {
    Runner::default().execute_bash(command)
}

/// Print a heading and the command to stdout, then run it as a bash script.
pub fn execute_with_heading(heading: &str, command: &str) -> Result<(), ExecError> {
    Runner::default().execute_with_heading(&mut ConsolePresenter::default(), heading, command)
}
