//! Core types for turtlegrid rendering

use std::fmt;

use glam::IVec2;
use miette::SourceSpan;

use crate::errors::{CommandError, CommandWarning, SourceContext};
use crate::grid::Grid;

use super::defaults;

/// Knobs for a render pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Symbol written by LINE_TO and CIRCLE_TO
    pub mark_symbol: char,
    /// Largest side length DIMENSION may request; larger requests are clamped
    pub max_dimension: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            mark_symbol: defaults::MARK_SYMBOL,
            max_dimension: defaults::MAX_DIMENSION,
        }
    }
}

impl RenderOptions {
    pub fn with_mark_symbol(mut self, symbol: char) -> Self {
        self.mark_symbol = symbol;
        self
    }

    pub fn with_max_dimension(mut self, max: usize) -> Self {
        self.max_dimension = max;
        self
    }
}

/// Confirmation emitted by a successful command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Moved(IVec2),
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Moved(to) => write!(f, "Moved cursor to ({}, {})", to.x, to.y),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoticeKind {
    Status(Status),
    Rejected(CommandError),
}

/// Something worth telling the user about one source line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// 1-based source line
    pub line: usize,
    pub span: SourceSpan,
    pub kind: NoticeKind,
}

impl Notice {
    pub fn is_rejection(&self) -> bool {
        matches!(self.kind, NoticeKind::Rejected(_))
    }

    /// Build a source-annotated warning for a rejected command.
    /// Returns None for plain status notices.
    pub fn to_report(&self, source: &SourceContext) -> Option<miette::Report> {
        match &self.kind {
            NoticeKind::Rejected(err) => {
                Some(miette::Report::new(CommandWarning::new(err, source, self.span)))
            }
            NoticeKind::Status(_) => None,
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            NoticeKind::Status(status) => write!(f, "{status}"),
            NoticeKind::Rejected(err) => write!(f, "Error: {err}"),
        }
    }
}

/// Result of running a program: the final grid and what happened on the way
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub grid: Grid,
    pub notices: Vec<Notice>,
}

impl Rendered {
    /// Notices for commands that were skipped
    pub fn rejections(&self) -> impl Iterator<Item = &Notice> {
        self.notices.iter().filter(|n| n.is_rejection())
    }

    /// Notices followed by the grid, one line each
    pub fn transcript(&self) -> String {
        let mut out = String::new();
        for notice in &self.notices {
            out.push_str(&notice.to_string());
            out.push('\n');
        }
        out.push_str(&self.grid.to_string());
        out
    }
}

impl fmt::Display for Rendered {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.grid)
    }
}
