//! Rendering context - the state a program runs against

use std::collections::HashMap;

use glam::IVec2;

use crate::command::{Command, Execute};
use crate::errors::CommandError;
use crate::grid::Grid;
use crate::log;

use super::geometry::{CircleTable, line_points};
use super::types::{RenderOptions, Status};

/// Everything a command may read or change.
///
/// Passed explicitly to each command, so independent contexts never share
/// state.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    /// The drawing surface and cursor
    pub grid: Grid,
    pub options: RenderOptions,
    /// Circle tables by radius, built on first use
    circle_tables: HashMap<i32, CircleTable>,
}

impl RenderContext {
    /// A context with a zero-size grid; nothing can be drawn until a
    /// `DIMENSION` command runs.
    pub fn new(options: RenderOptions) -> Self {
        Self {
            grid: Grid::new(),
            options,
            circle_tables: HashMap::new(),
        }
    }

    /// Run one command
    pub fn execute(&mut self, command: &Command) -> Result<Option<Status>, CommandError> {
        log::trace!(?command, "execute");
        command.execute(self)
    }

    /// Mark every cell on the line from `start` to `target`. Returns how
    /// many cells changed.
    pub fn draw_line(&mut self, start: IVec2, target: IVec2) -> usize {
        let symbol = self.options.mark_symbol;
        line_points(start, target)
            .filter(|&p| self.grid.mark(p, symbol))
            .count()
    }

    /// Mark the 360 circle samples around `center`. Returns how many cells
    /// changed.
    pub fn draw_circle(&mut self, center: IVec2, radius: i32) -> usize {
        let symbol = self.options.mark_symbol;
        let table = self.circle_tables.entry(radius).or_insert_with(|| {
            log::debug!(radius, "building circle table");
            CircleTable::new(radius)
        });
        let grid = &mut self.grid;
        table.points(center).filter(|&p| grid.mark(p, symbol)).count()
    }

    /// Number of distinct radii with a cached table
    pub fn cached_tables(&self) -> usize {
        self.circle_tables.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_are_cached_by_radius() {
        let mut ctx = RenderContext::new(RenderOptions::default());
        ctx.grid.set_dimension(20);
        ctx.draw_circle(IVec2::new(10, 10), 4);
        ctx.draw_circle(IVec2::new(5, 5), 4);
        ctx.draw_circle(IVec2::new(10, 10), 6);
        assert_eq!(ctx.cached_tables(), 2);
    }

    #[test]
    fn draw_counts_only_new_marks() {
        let mut ctx = RenderContext::new(RenderOptions::default());
        ctx.grid.set_dimension(8);
        assert_eq!(ctx.draw_line(IVec2::ZERO, IVec2::new(0, 7)), 8);
        assert_eq!(ctx.draw_line(IVec2::new(0, 7), IVec2::ZERO), 0);
        assert_eq!(ctx.draw_line(IVec2::new(0, 3), IVec2::new(3, 3)), 3);
    }

    #[test]
    fn contexts_are_independent() {
        let mut a = RenderContext::new(RenderOptions::default());
        let mut b = RenderContext::new(RenderOptions::default());
        a.execute(&Command::set_dimension(3)).unwrap();
        a.execute(&Command::line_to(2, 2)).unwrap();
        b.execute(&Command::set_dimension(3)).unwrap();
        assert_eq!(a.grid.marked_count(), 3);
        assert_eq!(b.grid.marked_count(), 0);
    }
}
