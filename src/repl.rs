use crate::error::{ExecError, ExitCode};
use crate::runner::Runner;
use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

const PROMPT: &str = "$ ";

/// Read-Eval-Print Loop running every entered line as a script.
///
/// Blank lines are skipped, Ctrl-C discards the current line and Ctrl-D ends the
/// loop. A failing command only prints its exit code; a failure to prepare the
/// script file ends the loop with that error.
pub fn run_repl(runner: &Runner) -> Result<()> {
    let mut rl = DefaultEditor::new()?;
    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                rl.add_history_entry(line.as_str())?;
                let code = run_line(runner, &line)?;
                if code != 0 {
                    eprintln!("exit status {code}");
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}

/// Run one line, turning command failures into an exit code.
fn run_line(runner: &Runner, line: &str) -> Result<ExitCode, ExecError> {
    match runner.execute_bash(line) {
        Ok(()) => Ok(0),
        Err(e) if e.is_setup() => Err(e),
        Err(e) => {
            eprintln!("{e}");
            Ok(e.exit_code())
        }
    }
}
