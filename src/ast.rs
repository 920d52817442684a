//! Parsed program structure
//!
//! The parser produces one `Statement` per non-blank source line, in order.

use miette::SourceSpan;

use crate::command::Command;
use crate::errors::CommandError;

/// A complete command program
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    /// Build a program from bare commands, with empty spans and line numbers
    /// counted from 1. Handy when commands come from code rather than text.
    pub fn from_commands(commands: impl IntoIterator<Item = Command>) -> Self {
        let statements = commands
            .into_iter()
            .enumerate()
            .map(|(i, command)| Statement {
                kind: StatementKind::Command(command),
                line: i + 1,
                span: (0, 0).into(),
            })
            .collect();
        Self { statements }
    }

    /// Iterate over the recognized commands, skipping unknown and
    /// malformed lines
    pub fn commands(&self) -> impl Iterator<Item = &Command> {
        self.statements.iter().filter_map(|s| match &s.kind {
            StatementKind::Command(cmd) => Some(cmd),
            StatementKind::Unknown { .. } | StatementKind::Malformed(_) => None,
        })
    }
}

/// One source line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub kind: StatementKind,
    /// 1-based line number
    pub line: usize,
    pub span: SourceSpan,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatementKind {
    /// A recognized drawing command
    Command(Command),
    /// A line starting with a word that is not a command keyword
    Unknown { keyword: String },
    /// A command keyword whose arguments did not parse. The statement span
    /// covers the offending arguments.
    Malformed(CommandError),
}
