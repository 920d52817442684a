//! The drawing surface: a square grid of cells plus the shared cursor.
//!
//! Cells live in a flat vector indexed `x * size + y`, so the first
//! coordinate selects the rendered row and the second the column.
//! All coordinate arguments are signed; anything outside `0..size` is
//! silently ignored by `mark` and reported unmarked by `is_marked`.

use std::fmt;

use glam::IVec2;

use crate::render::defaults::{CELL_SEPARATOR, EMPTY_SYMBOL};

/// One character cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub symbol: char,
    pub marked: bool,
}

impl Cell {
    pub const BLANK: Cell = Cell {
        symbol: EMPTY_SYMBOL,
        marked: false,
    };
}

impl Default for Cell {
    fn default() -> Self {
        Cell::BLANK
    }
}

/// Square character grid with a drawing cursor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
    cursor: IVec2,
}

impl Grid {
    /// A zero-size grid with the cursor at the origin.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dimension(n: usize) -> Self {
        let mut grid = Self::new();
        grid.set_dimension(n);
        grid
    }

    /// Side length of the grid
    pub fn size(&self) -> usize {
        self.size
    }

    /// Reallocate to `n`x`n` blank cells, discarding every previous mark.
    /// The cursor is left where it was.
    pub fn set_dimension(&mut self, n: usize) {
        self.size = n;
        self.cells.clear();
        self.cells.resize(n * n, Cell::BLANK);
    }

    #[inline]
    fn index(&self, p: IVec2) -> Option<usize> {
        if p.x < 0 || p.y < 0 {
            return None;
        }
        let (x, y) = (p.x as usize, p.y as usize);
        if x >= self.size || y >= self.size {
            return None;
        }
        Some(x * self.size + y)
    }

    /// Whether `p` lies inside `0..size` on both axes
    pub fn contains(&self, p: IVec2) -> bool {
        self.index(p).is_some()
    }

    /// Mark the cell at `p` with `symbol`.
    ///
    /// Out-of-range points and already-marked cells are left alone: the
    /// first symbol written to a cell wins. Returns whether the cell changed.
    pub fn mark(&mut self, p: IVec2, symbol: char) -> bool {
        let Some(idx) = self.index(p) else {
            return false;
        };
        let cell = &mut self.cells[idx];
        if cell.marked {
            return false;
        }
        cell.symbol = symbol;
        cell.marked = true;
        true
    }

    pub fn is_marked(&self, p: IVec2) -> bool {
        self.cell(p).is_some_and(|c| c.marked)
    }

    /// Get the cell at `p`, or None if out of bounds
    pub fn cell(&self, p: IVec2) -> Option<Cell> {
        self.index(p).map(|idx| self.cells[idx])
    }

    /// Number of marked cells
    pub fn marked_count(&self) -> usize {
        self.cells.iter().filter(|c| c.marked).count()
    }

    /// All marked points, in row order
    pub fn marked_points(&self) -> impl Iterator<Item = IVec2> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.marked)
            .map(move |(idx, _)| IVec2::new((idx / size) as i32, (idx % size) as i32))
    }

    pub fn current_position(&self) -> IVec2 {
        self.cursor
    }

    /// Move the cursor. No bounds check: callers validate first.
    pub fn set_current_position(&mut self, p: IVec2) {
        self.cursor = p;
    }

    /// Rendered rows, `|c|c|...|c|` each. Calling again starts over.
    pub fn rows(&self) -> Rows<'_> {
        Rows {
            chunks: self.cells.chunks(self.size.max(1)),
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}

/// Lazy iterator over rendered grid rows
#[derive(Debug, Clone)]
pub struct Rows<'a> {
    chunks: std::slice::Chunks<'a, Cell>,
}

impl Iterator for Rows<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let row = self.chunks.next()?;
        let mut line = String::with_capacity(row.len() * 2 + 1);
        for cell in row {
            line.push(CELL_SEPARATOR);
            line.push(cell.symbol);
        }
        line.push(CELL_SEPARATOR);
        Some(line)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl ExactSizeIterator for Rows<'_> {}
