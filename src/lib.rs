//! A minimal interactive command interpreter.
//!
//! Each line read from the input is split on whitespace. The first token names
//! either a builtin (`cd`, `help`, `exit`) or an external program, which is run
//! with the remaining tokens as its arguments while the interpreter waits.
//! There is no quoting, expansion, redirection or job control.
//!
//! The main entry point is [`Interpreter`]; [`Interpreter::repl`] drives a
//! [`LineSource`] until `exit`, and [`Interpreter::execute`] runs a single
//! tokenized line.

mod builtin;
mod command;
mod config;
mod error;
mod external;
mod interpreter;
mod lexer;
mod reader;

pub use builtin::{Cd, Exit, Help, Registry};
pub use command::{Context, Flow, ShellCommand};
pub use config::{Config, DEFAULT_PROMPT};
pub use error::{ShellError, ShellResult};
pub use external::ExternalCommand;
pub use interpreter::Interpreter;
pub use lexer::{DELIMITERS, Tokens, split_into_tokens, token_display, token_os_str};
pub use reader::{EditorReader, LINE_CAPACITY, Line, LineSource, StreamReader, stdin_reader};
