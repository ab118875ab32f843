use crate::builtin::Registry;
use crate::lexer::Tokens;
use anyhow::Result;
use std::io::Write;

/// What the interpreter loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Terminate,
}

/// Streams and shared state handed to a command.
pub struct Context<'a> {
    pub stdout: &'a mut dyn Write,
    pub stderr: &'a mut dyn Write,
    /// The builtins known to the running interpreter.
    pub registry: &'a Registry,
}

/// A command implemented inside the interpreter.
pub trait ShellCommand {
    /// Name the command is invoked by, e.g. "cd".
    fn name(&self) -> &'static str;

    /// Runs the command with the whole token list, command name included.
    ///
    /// An `Err` is reported on the error channel by the caller and the loop
    /// keeps going.
    fn execute(&self, tokens: &Tokens<'_>, ctx: &mut Context<'_>) -> Result<Flow>;
}
