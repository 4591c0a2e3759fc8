use anyhow::Context;
use argh::FromArgs;
use shell_exec::env::Environment;
use shell_exec::logging::init_logs;
use shell_exec::{ConsolePresenter, ExecError, Runner, RunnerConfig, report_failure, run_repl};

#[derive(FromArgs)]
/// Run a command, or a line of shell script, in the foreground.
/// Without a command an interactive prompt is started.
struct Cli {
    #[argh(option)]
    /// log level filter, e.g. "debug". Falls back to RUST_LOG, then "warn".
    log: Option<String>,

    #[argh(option, default = "shell_exec::config::DEFAULT_INTERPRETER.to_string()")]
    /// interpreter used for scripts. Defaults to /bin/bash.
    interpreter: String,

    #[argh(option)]
    /// print this heading and the command, then run the command as a script.
    heading: Option<String>,

    #[argh(switch, short = 's')]
    /// run the command words, joined by spaces, as a script.
    script: bool,

    #[argh(switch, short = 'i')]
    /// start the interactive prompt.
    interactive: bool,

    #[argh(positional, greedy)]
    /// command fragments; a fragment wrapped in double quotes stays one argument.
    command: Vec<String>,
}

impl Cli {
    /// Reject flags that only make sense together with a command.
    fn check(&self) -> Result<(), String> {
        if self.command.is_empty() {
            if self.heading.is_some() {
                return Err("--heading needs a command to run".to_string());
            }
            if self.script {
                return Err("--script needs a command to run".to_string());
            }
        }
        Ok(())
    }
}

fn main() {
    let cli: Cli = argh::from_env();
    if let Err(msg) = cli.check() {
        eprintln!("Error: {msg}\nRun shell_exec --help for more information.");
        std::process::exit(1);
    }
    init_logs(cli.log.as_deref());

    let runner = Runner::new(
        Environment::new(),
        RunnerConfig::default().with_interpreter(cli.interpreter.as_str()),
    );

    let result = if cli.interactive || cli.command.is_empty() {
        run_repl(&runner)
    } else {
        run(&runner, &cli).context("command failed")
    };

    if let Err(e) = result {
        std::process::exit(report_failure(&e));
    }
}

fn run(runner: &Runner, cli: &Cli) -> Result<(), ExecError> {
    let text = cli.command.join(" ");
    match &cli.heading {
        Some(heading) => {
            runner.execute_with_heading(&mut ConsolePresenter::default(), heading, &text)
        }
        None if cli.script => runner.execute_bash(&text),
        None => runner.execute(cli.command.as_slice()),
    }
}
