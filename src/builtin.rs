use crate::command::{Context, Flow, ShellCommand};
use crate::lexer::{Tokens, token_display, token_os_str};
use anyhow::{Context as _, Result, anyhow};
use std::env;
use std::io::Write;
use std::path::Path;

/// The fixed table of builtins.
///
/// Built once when the interpreter starts and only ever read afterwards.
/// Lookup is a linear scan in registration order.
pub struct Registry {
    commands: Vec<Box<dyn ShellCommand>>,
}

impl Registry {
    pub fn new(commands: Vec<Box<dyn ShellCommand>>) -> Self {
        Self { commands }
    }

    /// Finds the builtin whose name is exactly `name`.
    pub fn lookup(&self, name: &[u8]) -> Option<&dyn ShellCommand> {
        self.commands
            .iter()
            .find(|cmd| cmd.name().as_bytes() == name)
            .map(|cmd| cmd.as_ref())
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.commands.iter().map(|cmd| cmd.name())
    }
}

impl Default for Registry {
    /// `cd`, `help` and `exit`, in that order.
    fn default() -> Self {
        Self::new(vec![Box::new(Cd), Box::new(Help), Box::new(Exit)])
    }
}

/// Change the working directory of the interpreter process.
pub struct Cd;

impl ShellCommand for Cd {
    fn name(&self) -> &'static str {
        "cd"
    }

    fn execute(&self, tokens: &Tokens<'_>, _ctx: &mut Context<'_>) -> Result<Flow> {
        let target = tokens
            .get(1)
            .ok_or_else(|| anyhow!("expected argument to \"cd\""))?;
        let dir = token_os_str(target);
        env::set_current_dir(Path::new(&*dir))
            .with_context(|| format!("cd: {}", token_display(target)))?;
        tracing::debug!(dir = %token_display(target), "changed directory");
        Ok(Flow::Continue)
    }
}

/// Print the usage banner and the builtin names.
pub struct Help;

impl ShellCommand for Help {
    fn name(&self) -> &'static str {
        "help"
    }

    fn execute(&self, _tokens: &Tokens<'_>, ctx: &mut Context<'_>) -> Result<Flow> {
        writeln!(ctx.stdout, "LSH")?;
        writeln!(ctx.stdout, "Type program names and arguments, and hit enter.")?;
        writeln!(ctx.stdout, "The following are built in:")?;
        for name in ctx.registry.names() {
            writeln!(ctx.stdout, "  {name}")?;
        }
        writeln!(ctx.stdout, "Use the man command for information on other programs.")?;
        Ok(Flow::Continue)
    }
}

/// Leave the interpreter. Arguments are ignored.
pub struct Exit;

impl ShellCommand for Exit {
    fn name(&self) -> &'static str {
        "exit"
    }

    fn execute(&self, _tokens: &Tokens<'_>, _ctx: &mut Context<'_>) -> Result<Flow> {
        Ok(Flow::Terminate)
    }
}
