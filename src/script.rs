//! Running command text through a shell interpreter.
//!
//! The text is written verbatim to a temporary file and the configured interpreter is
//! started with that file as its only extra argument. The file is removed when the
//! call returns, whatever the outcome.

use crate::args::build_command_args;
use crate::error::{ExecError, SetupStage};
use crate::runner::Runner;
use std::ffi::OsString;
use std::io::Write;
use tracing::debug;

impl Runner {
    /// Run `command` as a script with the configured interpreter (`/bin/bash` by default).
    ///
    /// Failures to prepare the temporary file come back as [`ExecError::Setup`]; failures
    /// of the script itself come back like those of [`Runner::execute`].
    pub fn execute_bash(&self, command: &str) -> Result<(), ExecError> {
        let config = self.config();
        let mut file = tempfile::Builder::new()
            .prefix(&config.temp_prefix)
            .tempfile_in(config.script_dir())
            .map_err(|source| ExecError::Setup {
                stage: SetupStage::Create,
                source,
            })?;
        file.write_all(command.as_bytes())
            .and_then(|()| file.flush())
            .map_err(|source| ExecError::Setup {
                stage: SetupStage::Write,
                source,
            })?;
        file.as_file().sync_all().map_err(|source| ExecError::Setup {
            stage: SetupStage::Close,
            source,
        })?;
        // Closes the handle; the path guard still deletes the file on drop.
        let script = file.into_temp_path();
        debug!("Wrote script to {}", script.display());

        let mut argv: Vec<OsString> = build_command_args(&[config.interpreter.as_str()])
            .into_iter()
            .map(OsString::from)
            .collect();
        argv.push(script.as_os_str().to_os_string());
        self.execute_argv(argv)
    }
}
