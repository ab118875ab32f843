//! Errors that stop the interpreter.
//!
//! Everything a user can cause by typing (a bad `cd`, a missing program) is
//! reported on the error channel and swallowed by the dispatcher. Only the
//! variants below unwind out of [`Interpreter::repl`](crate::Interpreter::repl).

use std::collections::TryReserveError;
use thiserror::Error;

/// Result alias for operations that can only fail fatally.
pub type ShellResult<T> = Result<T, ShellError>;

#[derive(Error, Debug)]
pub enum ShellError {
    /// Growing the line or token storage failed.
    #[error("allocation error")]
    Allocation(#[from] TryReserveError),

    /// The line editor could not be set up.
    #[error("line editor: {0}")]
    Editor(#[from] rustyline::error::ReadlineError),
}
