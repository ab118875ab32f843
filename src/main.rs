use argh::FromArgs;
use lsh::{Config, DEFAULT_PROMPT, EditorReader, Interpreter, LineSource, ShellResult};
use std::io;
use std::process::ExitCode;

#[derive(FromArgs)]
/// A minimal interactive command interpreter.
struct Args {
    #[argh(option, default = "DEFAULT_PROMPT.to_string()")]
    /// prompt written before each line
    prompt: String,

    #[argh(switch)]
    /// stop at end of input instead of reading blank lines
    exit_on_eof: bool,

    #[argh(switch)]
    /// read lines through an interactive line editor
    editor: bool,

    #[argh(switch, short = 'v')]
    /// log debug events to stderr
    verbose: bool,
}

impl Args {
    fn config(&self) -> Config {
        Config {
            prompt: self.prompt.clone(),
            exit_on_eof: self.exit_on_eof,
            editor: self.editor,
        }
    }
}

fn run(sh: &Interpreter) -> ShellResult<()> {
    let mut stdout = io::stdout();
    let mut stderr = io::stderr();
    let mut source: Box<dyn LineSource> = if sh.config().editor {
        Box::new(EditorReader::new()?)
    } else {
        Box::new(lsh::stdin_reader())
    };
    sh.repl(source.as_mut(), &mut stdout, &mut stderr)
}

fn main() -> ExitCode {
    let args: Args = argh::from_env();

    let log_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(io::stderr)
        .init();

    let sh = Interpreter::new(args.config());
    match run(&sh) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("lsh: {e}");
            ExitCode::FAILURE
        }
    }
}
