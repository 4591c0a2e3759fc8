use crate::error::ExecError;
use crate::runner::Runner;
use std::io::{self, Write};

/// Something that can announce a command before it runs.
pub trait Presenter {
    /// Print a human readable title.
    fn heading(&mut self, text: &str) -> io::Result<()>;

    /// Echo the literal command text.
    fn command(&mut self, text: &str) -> io::Result<()>;
}

/// Plain text presenter writing to any [`Write`], stdout by default.
///
/// ```text
///
/// ==> Listing files
/// $ ls -la
/// ```
pub struct ConsolePresenter<W: Write> {
    out: W,
}

impl<W: Write> ConsolePresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl Default for ConsolePresenter<io::Stdout> {
    fn default() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Presenter for ConsolePresenter<W> {
    fn heading(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "==> {text}")?;
        self.out.flush()
    }

    fn command(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "$ {text}")?;
        self.out.flush()
    }
}

impl Runner {
    /// Print `heading`, echo `command`, then run it with [`Runner::execute_bash`].
    ///
    /// Output is flushed before the script starts so it never interleaves with
    /// the child's output.
    pub fn execute_with_heading(
        &self,
        presenter: &mut dyn Presenter,
        heading: &str,
        command: &str,
    ) -> Result<(), ExecError> {
        presenter.heading(heading).map_err(ExecError::Output)?;
        presenter.command(command).map_err(ExecError::Output)?;
        self.execute_bash(command)
    }
}
