//! Drawing commands and their effect on the grid.
//!
//! `Command` is a closed set; `enum_dispatch` turns `Execute` calls on it
//! into a plain match over the four record types.

use enum_dispatch::enum_dispatch;
use glam::IVec2;

use crate::errors::CommandError;
use crate::log;
use crate::render::{RenderContext, Status};
use crate::types::Dimension;

/// Apply one command to the session state
#[enum_dispatch]
pub trait Execute {
    /// Run against `ctx`. An `Err` means the command was skipped and left
    /// the grid and cursor untouched.
    fn execute(&self, ctx: &mut RenderContext) -> Result<Option<Status>, CommandError>;
}

#[enum_dispatch(Execute)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    SetDimension(SetDimension),
    MoveTo(MoveTo),
    LineTo(LineTo),
    CircleTo(CircleTo),
}

impl Command {
    pub fn set_dimension(size: i32) -> Self {
        Command::SetDimension(SetDimension { size })
    }

    pub fn move_to(x: i32, y: i32) -> Self {
        Command::MoveTo(MoveTo {
            target: IVec2::new(x, y),
        })
    }

    pub fn line_to(x: i32, y: i32) -> Self {
        Command::LineTo(LineTo {
            target: IVec2::new(x, y),
        })
    }

    pub fn circle_to(radius: i32) -> Self {
        Command::CircleTo(CircleTo { radius })
    }

    /// Source keyword for this command
    pub fn keyword(&self) -> &'static str {
        match self {
            Command::SetDimension(_) => "DIMENSION",
            Command::MoveTo(_) => "MOVE_TO",
            Command::LineTo(_) => "LINE_TO",
            Command::CircleTo(_) => "CIRCLE_TO",
        }
    }
}

/// `DIMENSION n`: replace the grid with a blank n x n one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetDimension {
    pub size: i32,
}

/// `MOVE_TO x y`: move the cursor without drawing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveTo {
    pub target: IVec2,
}

/// `LINE_TO x y`: draw from the cursor to the target, then move there
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineTo {
    pub target: IVec2,
}

/// `CIRCLE_TO r`: draw a circle around the cursor; the cursor stays put
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CircleTo {
    pub radius: i32,
}

/// Reject targets outside the current grid
fn check_bounds(ctx: &RenderContext, target: IVec2) -> Result<(), CommandError> {
    if ctx.grid.contains(target) {
        Ok(())
    } else {
        Err(CommandError::OutOfBounds {
            x: target.x,
            y: target.y,
            size: ctx.grid.size(),
        })
    }
}

impl Execute for SetDimension {
    fn execute(&self, ctx: &mut RenderContext) -> Result<Option<Status>, CommandError> {
        let (dimension, adjusted) = Dimension::clamped(self.size, ctx.options.max_dimension);
        if let Some(_reason) = adjusted {
            log::warn!(reason = %_reason, size = dimension.get(), "adjusted grid dimension");
        }
        ctx.grid.set_dimension(dimension.get());
        log::debug!(size = dimension.get(), "grid dimensioned");
        Ok(None)
    }
}

impl Execute for MoveTo {
    fn execute(&self, ctx: &mut RenderContext) -> Result<Option<Status>, CommandError> {
        check_bounds(ctx, self.target)?;
        ctx.grid.set_current_position(self.target);
        Ok(Some(Status::Moved(self.target)))
    }
}

impl Execute for LineTo {
    fn execute(&self, ctx: &mut RenderContext) -> Result<Option<Status>, CommandError> {
        check_bounds(ctx, self.target)?;
        let start = ctx.grid.current_position();
        let _marked = ctx.draw_line(start, self.target);
        log::debug!(?start, target = ?self.target, marked = _marked, "line drawn");
        ctx.grid.set_current_position(self.target);
        Ok(None)
    }
}

impl Execute for CircleTo {
    fn execute(&self, ctx: &mut RenderContext) -> Result<Option<Status>, CommandError> {
        let center = ctx.grid.current_position();
        let _marked = ctx.draw_circle(center, self.radius);
        log::debug!(?center, radius = self.radius, marked = _marked, "circle drawn");
        Ok(None)
    }
}
