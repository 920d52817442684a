//! Program execution against a character grid
//!
//! This module is organized into submodules:
//! - `defaults`: Symbols, table size and limits
//! - `types`: RenderOptions, Notice, Status, Rendered
//! - `context`: RenderContext, the explicitly passed session state
//! - `geometry`: Line and circle rasterization

pub mod context;
pub mod defaults;
pub mod geometry;
pub mod types;

// Re-export commonly used items
pub use context::RenderContext;
pub use types::*;

use crate::ast::{Program, Statement, StatementKind};
use crate::errors::CommandError;
use crate::log;

/// Run every statement of `program` in order against a fresh grid.
///
/// Rejected commands never stop the run; they show up in `notices`.
pub fn render(program: &Program, options: &RenderOptions) -> Rendered {
    let mut ctx = RenderContext::new(options.clone());
    let mut notices = Vec::new();

    for stmt in &program.statements {
        if let Some(notice) = render_statement(&mut ctx, stmt) {
            notices.push(notice);
        }
    }

    log::debug!(
        size = ctx.grid.size(),
        marked = ctx.grid.marked_count(),
        notices = notices.len(),
        "program finished"
    );

    Rendered {
        grid: ctx.grid,
        notices,
    }
}

fn render_statement(ctx: &mut RenderContext, stmt: &Statement) -> Option<Notice> {
    let result = match &stmt.kind {
        StatementKind::Command(command) => ctx.execute(command),
        StatementKind::Unknown { keyword } => Err(CommandError::UnknownCommand {
            keyword: keyword.clone(),
        }),
        StatementKind::Malformed(err) => Err(err.clone()),
    };

    let kind = match result {
        Ok(None) => return None,
        Ok(Some(status)) => NoticeKind::Status(status),
        Err(err) => {
            log::debug!(line = stmt.line, %err, "command skipped");
            NoticeKind::Rejected(err)
        }
    };

    Some(Notice {
        line: stmt.line,
        span: stmt.span,
        kind,
    })
}
