use shell_exec::{ExecError, execute, execute_bash, execute_with_heading};

#[test]
#[cfg(unix)]
fn execute_reports_success_and_failure() {
    assert!(execute(&["true"]).is_ok());
    assert!(matches!(
        execute(&["false"]),
        Err(ExecError::NonZeroExit { .. })
    ));
}

#[test]
fn execute_unknown_program_is_not_found() {
    let err = execute(&["shell-exec-definitely-missing --flag"]).unwrap_err();
    match err {
        ExecError::NotFound { name } => assert_eq!(name, "shell-exec-definitely-missing"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
#[cfg(unix)]
fn execute_bash_runs_script_text() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("out");

    execute_bash(&format!("for i in 1 2 3; do printf $i; done > '{}'", out.display()))
        .expect("script should succeed");

    assert_eq!(std::fs::read_to_string(out).unwrap(), "123");
}

#[test]
#[cfg(unix)]
fn execute_bash_script_file_is_gone_after_failure() {
    let dir = tempfile::tempdir().expect("tempdir");
    let record = dir.path().join("script-path");

    let err = execute_bash(&format!("printf '%s' \"$0\" > '{}'; exit 1", record.display()))
        .unwrap_err();

    assert!(!err.is_setup());
    let script = std::fs::read_to_string(record).unwrap();
    assert!(!script.is_empty());
    assert!(!std::path::Path::new(&script).exists());
}

#[test]
#[cfg(unix)]
fn execute_with_heading_propagates_failure() {
    let err = execute_with_heading("Failing step", "exit 7").unwrap_err();
    assert_eq!(err.exit_code(), 7);
}
