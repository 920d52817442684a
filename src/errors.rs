//! Error types with rich diagnostics using miette
//!
//! Parse errors carry source spans and abort the run. Command errors are
//! recoverable: the interpreter records them and moves on to the next line.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Source context for error reporting
#[derive(Debug, Clone)]
pub struct SourceContext {
    /// Name of the source (filename or "<input>")
    pub name: String,
    /// The full source text
    pub source: String,
}

impl SourceContext {
    /// Create a new source context
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
        }
    }

    /// Create a NamedSource for miette
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.name, self.source.clone())
    }
}

// ============================================================================
// Parse Errors
// ============================================================================

/// Errors that stop a whole program from being parsed.
///
/// Bad arguments on a single line are not among them: those lines become
/// `CommandError` rejections and the rest of the program still runs.
#[derive(Error, Diagnostic, Debug)]
pub enum ParseError {
    #[error("syntax error: {message}")]
    #[diagnostic(code(turtlegrid::parse::syntax))]
    Syntax {
        message: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: SourceSpan,
    },
}

// ============================================================================
// Command Errors
// ============================================================================

/// Why a single line was skipped. None of them is fatal.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("target position ({x}, {y}) is out of bounds")]
    #[diagnostic(
        code(turtlegrid::command::out_of_bounds),
        help("the grid is {size}x{size}, coordinates must lie in 0..{size}")
    )]
    OutOfBounds { x: i32, y: i32, size: usize },

    #[error("unknown command: {keyword}")]
    #[diagnostic(
        code(turtlegrid::command::unknown_command),
        help("expected one of DIMENSION, MOVE_TO, LINE_TO, CIRCLE_TO")
    )]
    UnknownCommand { keyword: String },

    #[error("invalid arguments for {keyword}")]
    #[diagnostic(code(turtlegrid::command::invalid_arguments), help("usage: {usage}"))]
    InvalidArguments {
        keyword: String,
        usage: &'static str,
    },

    #[error("invalid number: {text}")]
    #[diagnostic(
        code(turtlegrid::command::invalid_number),
        help("coordinates, sizes and radii must fit in a signed 32-bit integer")
    )]
    InvalidNumber { text: String },
}

/// A rejected command located in its source, for terminal reporting
#[derive(Error, Diagnostic, Debug)]
#[error("{message}")]
#[diagnostic(code(turtlegrid::command::skipped), severity(Warning))]
pub struct CommandWarning {
    pub message: String,
    #[source_code]
    pub src: NamedSource<String>,
    #[label("this command was skipped")]
    pub span: SourceSpan,
    #[help]
    pub help: Option<String>,
}

impl CommandWarning {
    pub fn new(error: &CommandError, source: &SourceContext, span: SourceSpan) -> Self {
        Self {
            message: error.to_string(),
            src: source.named_source(),
            span,
            help: error.help().map(|h| h.to_string()),
        }
    }
}
