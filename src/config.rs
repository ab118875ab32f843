/// Prompt shown before each line when nothing else is configured.
pub const DEFAULT_PROMPT: &str = "> ";

/// Runtime settings of an [`Interpreter`](crate::Interpreter).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Written before every read.
    pub prompt: String,
    /// Stop the loop at end of input instead of reading blank lines forever.
    pub exit_on_eof: bool,
    /// Read through the `rustyline` editor rather than straight from stdin.
    pub editor: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            exit_on_eof: false,
            editor: false,
        }
    }
}
