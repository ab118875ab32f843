use crate::error::ShellResult;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::io::{self, ErrorKind, Read, Write};

/// Initial line capacity, and the step by which it grows.
pub const LINE_CAPACITY: usize = 1024;

/// One line of input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    /// Bytes read, without the terminating newline.
    pub text: Vec<u8>,
    /// Set when the input ended while reading this line.
    pub at_eof: bool,
}

/// Where the interpreter gets its lines from.
pub trait LineSource {
    /// Shows `prompt` and reads the next line.
    ///
    /// End of input is not an error: it produces an empty (or partial) line
    /// with [`Line::at_eof`] set, and every later call does the same.
    fn read_line(
        &mut self,
        prompt: &str,
        stdout: &mut dyn Write,
        stderr: &mut dyn Write,
    ) -> ShellResult<Line>;
}

/// Reads lines byte by byte from any stream.
pub struct StreamReader<R> {
    input: R,
}

impl<R: Read> StreamReader<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }

    fn next_byte(&mut self) -> Option<u8> {
        let mut byte = [0u8; 1];
        loop {
            match self.input.read(&mut byte) {
                Ok(0) => return None,
                Ok(_) => return Some(byte[0]),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => {
                    tracing::warn!(error = %e, "read failed, treating as end of input");
                    return None;
                }
            }
        }
    }

    /// Reads up to the next `\n` or end of input.
    ///
    /// The buffer starts at [`LINE_CAPACITY`] bytes and grows by the same
    /// amount whenever it fills up.
    pub fn read_raw_line(&mut self) -> ShellResult<Line> {
        let mut buf: Vec<u8> = Vec::new();
        buf.try_reserve_exact(LINE_CAPACITY)?;

        let at_eof = loop {
            match self.next_byte() {
                None => break true,
                Some(b'\n') => break false,
                Some(byte) => {
                    if buf.len() == buf.capacity() {
                        buf.try_reserve_exact(LINE_CAPACITY)?;
                    }
                    buf.push(byte);
                }
            }
        };

        Ok(Line {
            text: buf,
            at_eof,
        })
    }
}

impl<R: Read> LineSource for StreamReader<R> {
    fn read_line(
        &mut self,
        prompt: &str,
        stdout: &mut dyn Write,
        stderr: &mut dyn Write,
    ) -> ShellResult<Line> {
        // A closed output channel must not stop us from reading.
        let _ = stdout.write_all(prompt.as_bytes());
        let _ = stdout.flush();
        let _ = stderr.flush();
        self.read_raw_line()
    }
}

/// Reads lines through `rustyline`, for use on a terminal.
///
/// Nothing is added to the editor's history.
pub struct EditorReader {
    editor: DefaultEditor,
}

impl EditorReader {
    pub fn new() -> ShellResult<Self> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl LineSource for EditorReader {
    fn read_line(
        &mut self,
        prompt: &str,
        stdout: &mut dyn Write,
        stderr: &mut dyn Write,
    ) -> ShellResult<Line> {
        let _ = stdout.flush();
        let _ = stderr.flush();
        match self.editor.readline(prompt) {
            Ok(text) => Ok(Line {
                text: text.into_bytes(),
                at_eof: false,
            }),
            Err(ReadlineError::Interrupted) => Ok(Line::default()),
            Err(ReadlineError::Eof) => Ok(Line {
                text: Vec::new(),
                at_eof: true,
            }),
            Err(e) => {
                tracing::warn!(error = %e, "line editor failed, treating as end of input");
                Ok(Line {
                    text: Vec::new(),
                    at_eof: true,
                })
            }
        }
    }
}

/// Stream reader over the process's standard input.
pub fn stdin_reader() -> StreamReader<io::StdinLock<'static>> {
    StreamReader::new(io::stdin().lock())
}
