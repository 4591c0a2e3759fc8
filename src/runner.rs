use crate::args::build_command_args;
use crate::config::RunnerConfig;
use crate::env::Environment;
use crate::error::ExecError;
use crate::lookup::find_command_path;
use std::ffi::OsString;
use std::process::{Command, Stdio};
use tracing::{debug, warn};

/// Runs external programs in the foreground.
///
/// Children inherit stdin, stdout and stderr of the calling process, so their output
/// shows up live and is never captured. Every call blocks until the child exits.
///
/// Example
/// ```no_run
/// use shell_exec::Runner;
/// let runner = Runner::default();
/// runner.execute(&["ls -la", "/tmp"]).unwrap();
/// ```
#[derive(Debug, Clone, Default)]
pub struct Runner {
    env: Environment,
    config: RunnerConfig,
}

impl Runner {
    pub fn new(env: Environment, config: RunnerConfig) -> Self {
        Self { env, config }
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn env_mut(&mut self) -> &mut Environment {
        &mut self.env
    }

    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Split `fragments` into arguments and run them as one command.
    ///
    /// The first argument names the executable and is resolved through `PATH`.
    /// Returns an error if it cannot be found, cannot be started, or does not
    /// exit successfully.
    pub fn execute<S: AsRef<str>>(&self, fragments: &[S]) -> Result<(), ExecError> {
        let argv = build_command_args(fragments)
            .into_iter()
            .map(OsString::from)
            .collect();
        self.execute_argv(argv)
    }

    /// Run an already split argument vector.
    pub fn execute_argv(&self, argv: Vec<OsString>) -> Result<(), ExecError> {
        let (name, args) = argv.split_first().ok_or(ExecError::EmptyCommand)?;
        let name_str = name.to_string_lossy();
        let program =
            find_command_path(self.env.search_paths(), &self.env.current_dir, &name_str)
                .ok_or_else(|| ExecError::NotFound {
                    name: name_str.to_string(),
                })?;

        debug!("Spawning {} {:?}", program.display(), args);
        let mut cmd = Command::new(&program);
        cmd.args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .env_clear()
            .envs(self.env.vars())
            .current_dir(&self.env.current_dir);
        #[cfg(unix)]
        {
            use std::os::unix::process::CommandExt;
            cmd.arg0(name);
        }

        let mut child = cmd.spawn().map_err(|source| ExecError::Spawn {
            program: program.display().to_string(),
            source,
        })?;
        let status = child.wait().map_err(ExecError::Wait)?;
        if status.success() {
            Ok(())
        } else {
            warn!("'{name_str}' failed: {status}");
            Err(ExecError::NonZeroExit { status })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn runner() -> Runner {
        Runner::default()
    }

    #[test]
    #[cfg(unix)]
    fn successful_command_returns_ok() {
        runner().execute(&["true"]).expect("true should succeed");
    }

    #[test]
    #[cfg(unix)]
    fn failing_command_returns_error() {
        let err = runner().execute(&["false"]).unwrap_err();
        assert!(matches!(err, ExecError::NonZeroExit { .. }));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    #[cfg(unix)]
    fn quoted_fragment_reaches_child_as_one_argument() {
        let err = runner().execute(&["sh -c", "\"exit 3\""]).unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    #[cfg(unix)]
    fn missing_executable_is_not_found() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut runner = runner();
        runner.env_mut().set_var("PATH", dir.path());

        let err = runner.execute(&["sh", "-c", "true"]).unwrap_err();
        match err {
            ExecError::NotFound { name } => assert_eq!(name, "sh"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_command_is_rejected() {
        let empty: [&str; 0] = [];
        assert!(matches!(
            runner().execute(&empty),
            Err(ExecError::EmptyCommand)
        ));
        assert!(matches!(
            runner().execute(&[""]),
            Err(ExecError::NotFound { .. })
        ));
    }

    #[test]
    #[cfg(unix)]
    fn child_sees_environment_and_directory() {
        let dir = tempfile::tempdir().expect("tempdir");
        let out = dir.path().join("out");
        let mut runner = runner();
        runner.env_mut().set_var("SHELL_EXEC_GREETING", "hello");
        runner.env_mut().current_dir = dir.path().to_path_buf();

        runner
            .execute(&["sh", "-c", "\"printf %s-%s $SHELL_EXEC_GREETING $(pwd -P) > out\""])
            .expect("script should succeed");
        let written = std::fs::read_to_string(&out).expect("read out");
        let canonical = dir.path().canonicalize().expect("canonicalize");
        assert_eq!(written, format!("hello-{}", canonical.display()));
    }

    #[test]
    #[cfg(unix)]
    fn removed_variable_is_not_inherited() {
        let mut runner = runner();
        runner.env_mut().remove_var("HOME");

        runner
            .execute(&["sh", "-c", "\"test -z ${HOME:-}\""])
            .expect("HOME should be unset in the child");
    }

    #[test]
    #[cfg(unix)]
    fn non_utf8_search_path_still_resolves() {
        use std::os::unix::ffi::OsStringExt;
        let mut runner = runner();
        runner.env_mut().set_var(
            "PATH",
            OsString::from_vec(b"/usr/bin:/bin:/opt/\xff".to_vec()),
        );

        runner.execute(&["true"]).expect("true should resolve");
    }

    #[test]
    #[cfg(unix)]
    fn executable_without_interpreter_fails_to_spawn() {
        use std::os::unix::fs::PermissionsExt;
        let dir = tempfile::tempdir().expect("tempdir");
        let junk = dir.path().join("junk");
        std::fs::write(&junk, b"\x00\x01\x02 not a program").expect("write junk");
        std::fs::set_permissions(&junk, std::fs::Permissions::from_mode(0o755)).expect("chmod");

        let mut runner = runner();
        runner.env_mut().set_var("PATH", dir.path());
        let err = runner.execute(&["junk"]).unwrap_err();

        match &err {
            ExecError::Spawn { program, .. } => assert_eq!(program, &junk.display().to_string()),
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(err.exit_code(), 126);
    }
}
