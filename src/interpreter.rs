use crate::builtin::Registry;
use crate::command::{Context, Flow};
use crate::config::Config;
use crate::error::ShellResult;
use crate::external::ExternalCommand;
use crate::lexer::{self, Tokens, token_display};
use crate::reader::LineSource;
use std::io::Write;

/// A minimal interactive interpreter: builtins plus external programs.
///
/// Example
/// ```
/// use lsh::{Flow, Interpreter};
/// let sh = Interpreter::default();
/// let tokens = lsh::split_into_tokens(b"  exit now ").unwrap();
/// let flow = sh.execute(&tokens, &mut std::io::sink(), &mut std::io::sink());
/// assert_eq!(flow, Flow::Terminate);
/// ```
pub struct Interpreter {
    config: Config,
    builtins: Registry,
}

impl Interpreter {
    /// Create an interpreter with the standard builtins.
    pub fn new(config: Config) -> Self {
        Self::with_registry(config, Registry::default())
    }

    /// Create an interpreter with a custom builtin table.
    pub fn with_registry(config: Config, builtins: Registry) -> Self {
        Self { config, builtins }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Runs one tokenized line.
    ///
    /// A blank line does nothing. A builtin name runs the builtin, anything
    /// else is launched as an external program. Errors are written to
    /// `stderr`; only a builtin may ask to terminate.
    pub fn execute(
        &self,
        tokens: &Tokens<'_>,
        stdout: &mut dyn Write,
        stderr: &mut dyn Write,
    ) -> Flow {
        let Some(name) = tokens.command() else {
            return Flow::Continue;
        };

        if let Some(builtin) = self.builtins.lookup(name) {
            tracing::debug!(builtin = %token_display(name), "dispatching builtin");
            let mut ctx = Context {
                stdout: &mut *stdout,
                stderr: &mut *stderr,
                registry: &self.builtins,
            };
            return match builtin.execute(tokens, &mut ctx) {
                Ok(flow) => flow,
                Err(e) => {
                    let _ = writeln!(stderr, "lsh: {e:#}");
                    Flow::Continue
                }
            };
        }

        self.launch(tokens, stdout, stderr)
    }

    fn launch(&self, tokens: &Tokens<'_>, stdout: &mut dyn Write, stderr: &mut dyn Write) -> Flow {
        let Some(cmd) = ExternalCommand::from_tokens(tokens) else {
            return Flow::Continue;
        };
        // The child writes straight to the inherited descriptors.
        let _ = stdout.flush();
        let _ = stderr.flush();
        if let Err(e) = cmd.execute() {
            let _ = writeln!(stderr, "lsh: {e:#}");
        }
        Flow::Continue
    }

    /// Reads, tokenizes and runs lines until a command asks to terminate.
    ///
    /// End of input reads as a blank line unless
    /// [`Config::exit_on_eof`] is set. Only fatal errors are returned.
    pub fn repl(
        &self,
        source: &mut dyn LineSource,
        stdout: &mut dyn Write,
        stderr: &mut dyn Write,
    ) -> ShellResult<()> {
        loop {
            let line = source.read_line(&self.config.prompt, stdout, stderr)?;
            let flow = {
                let tokens = lexer::split_into_tokens(&line.text)?;
                self.execute(&tokens, stdout, stderr)
            };

            if flow == Flow::Terminate {
                break;
            }
            if line.at_eof && self.config.exit_on_eof {
                tracing::debug!("end of input");
                break;
            }
        }
        let _ = stdout.flush();
        let _ = stderr.flush();
        Ok(())
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin::tests::lock_current_dir;
    use crate::reader::StreamReader;
    use std::io::Cursor;

    fn dispatch(line: &str) -> (Flow, String, String) {
        let sh = Interpreter::default();
        let tokens = lexer::split_into_tokens(line.as_bytes()).unwrap();
        let mut out = Vec::new();
        let mut err = Vec::new();
        let flow = sh.execute(&tokens, &mut out, &mut err);
        (
            flow,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    fn session(config: Config, input: &str) -> (String, String) {
        let sh = Interpreter::new(config);
        let mut source = StreamReader::new(Cursor::new(input.as_bytes().to_vec()));
        let mut out = Vec::new();
        let mut err = Vec::new();
        sh.repl(&mut source, &mut out, &mut err).unwrap();
        (String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap())
    }

    #[test]
    fn test_blank_lines_do_nothing() {
        for line in ["", "   ", "\t\r\n", "\x07"] {
            assert_eq!(dispatch(line), (Flow::Continue, String::new(), String::new()));
        }
    }

    #[test]
    fn test_exit_terminates_with_any_arguments() {
        assert_eq!(dispatch("exit").0, Flow::Terminate);
        assert_eq!(dispatch("   exit   ").0, Flow::Terminate);
        assert_eq!(dispatch("exit 1 2 3").0, Flow::Terminate);
    }

    #[test]
    fn test_builtin_names_are_case_sensitive() {
        let (flow, _, err) = dispatch("EXIT");
        assert_eq!(flow, Flow::Continue);
        assert!(err.starts_with("lsh: "));
    }

    #[test]
    fn test_cd_without_argument_writes_one_diagnostic() {
        let _lock = lock_current_dir();
        let before = std::env::current_dir().unwrap();

        let (flow, out, err) = dispatch("cd");

        assert_eq!(flow, Flow::Continue);
        assert!(out.is_empty());
        assert_eq!(err, "lsh: expected argument to \"cd\"\n");
        assert_eq!(std::env::current_dir().unwrap(), before);
    }

    #[test]
    fn test_cd_failure_is_reported() {
        let _lock = lock_current_dir();
        let (flow, _, err) = dispatch("cd /definitely/not/a/dir/for/lsh");
        assert_eq!(flow, Flow::Continue);
        assert!(err.starts_with("lsh: cd: /definitely/not/a/dir/for/lsh: "), "got {err}");
        assert_eq!(err.lines().count(), 1);
    }

    #[test]
    fn test_help_goes_to_stdout() {
        let (flow, out, err) = dispatch("help");
        assert_eq!(flow, Flow::Continue);
        assert!(err.is_empty());
        for name in ["cd", "help", "exit"] {
            assert!(out.lines().any(|l| l.trim() == name), "missing {name}");
        }
    }

    #[test]
    fn test_missing_program_continues() {
        let (flow, out, err) = dispatch("this-program-does-not-exist-xyz --flag");
        assert_eq!(flow, Flow::Continue);
        assert!(out.is_empty());
        assert!(err.starts_with("lsh: this-program-does-not-exist-xyz: "), "got {err}");
    }

    #[test]
    #[cfg(unix)]
    fn test_failing_program_continues() {
        assert_eq!(dispatch("false").0, Flow::Continue);
        assert_eq!(dispatch("sh -c exit").0, Flow::Continue);
    }

    #[test]
    fn test_repl_stops_at_exit() {
        let (out, err) = session(
            Config::default(),
            "\nthis-program-does-not-exist-xyz\n   \nexit\nhelp\n",
        );
        // One prompt per line read up to and including `exit`.
        assert_eq!(out, "> > > > ");
        assert_eq!(err.lines().count(), 1);
    }

    #[test]
    fn test_repl_runs_help_between_prompts() {
        let (out, _) = session(Config::default(), "help\nexit\n");
        assert!(out.starts_with("> LSH\n"));
        assert!(out.ends_with("> "));
    }

    #[test]
    fn test_repl_custom_prompt() {
        let config = Config {
            prompt: "$ ".to_string(),
            ..Config::default()
        };
        let (out, _) = session(config, "exit\n");
        assert_eq!(out, "$ ");
    }

    #[test]
    fn test_repl_runs_last_line_without_newline() {
        let (out, _) = session(Config::default(), "exit");
        assert_eq!(out, "> ");
    }

    #[test]
    fn test_repl_exit_on_eof() {
        let config = Config {
            exit_on_eof: true,
            ..Config::default()
        };
        let (out, err) = session(config, "help\n");
        assert!(out.contains("  exit\n"));
        assert!(out.ends_with("> "));
        assert!(err.is_empty());
    }

    #[test]
    fn test_repl_dispatches_partial_line_before_eof_exit() {
        let config = Config {
            exit_on_eof: true,
            ..Config::default()
        };
        let (out, _) = session(config, "help");
        assert!(out.contains("The following are built in:"));
    }
}
