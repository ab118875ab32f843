use crate::lexer::{Tokens, token_os_str};
use anyhow::{Context, Result};
use std::ffi::OsString;
use std::process::{Command, ExitStatus};

/// Command that is not a builtin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalCommand {
    name: OsString,
    args: Vec<OsString>,
}

impl ExternalCommand {
    pub fn new(name: OsString, args: Vec<OsString>) -> Self {
        Self { name, args }
    }

    /// Builds the command from a token list; `None` for a blank line.
    ///
    /// Token bytes are passed through unchanged.
    pub fn from_tokens(tokens: &Tokens<'_>) -> Option<Self> {
        let name = tokens.command()?;
        Some(Self::new(
            token_os_str(name).into_owned(),
            tokens
                .args()
                .iter()
                .map(|arg| token_os_str(arg).into_owned())
                .collect(),
        ))
    }

    /// Spawns the program and blocks until it has exited or been killed.
    ///
    /// The child inherits stdin, stdout, stderr, the environment and the
    /// working directory. `name` is passed as typed and looked up through
    /// `PATH` by the OS. A stopped child keeps us waiting.
    pub fn execute(self) -> Result<ExitStatus> {
        let mut child = Command::new(&self.name)
            .args(&self.args)
            .spawn()
            .with_context(|| self.name.to_string_lossy().into_owned())?;
        let pid = child.id();
        tracing::debug!(pid, program = %self.name.to_string_lossy(), "spawned child");

        let exit_status = child
            .wait()
            .with_context(|| format!("wait for {}", self.name.to_string_lossy()))?;
        tracing::debug!(pid, status = %exit_status, "child finished");
        Ok(exit_status)
    }
}
