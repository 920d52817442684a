//! Default symbols and limits

/// Number of angular samples taken around a circle, one per degree.
pub const TABLE_SIZE: usize = 360;

/// Symbol written by line and circle rasterization.
pub const MARK_SYMBOL: char = '+';

/// Symbol of a cell that has never been marked.
pub const EMPTY_SYMBOL: char = ' ';

/// Largest grid side accepted by `DIMENSION` before clamping.
pub const MAX_DIMENSION: usize = 1024;

/// Cell separator used when rendering rows.
pub const CELL_SEPARATOR: char = '|';
