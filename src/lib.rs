//! A turtle-graphics interpreter for square character grids.
//!
//! ```
//! let rendered = turtlegrid::turtlegrid("DIMENSION 3\nLINE_TO 2 2\n").unwrap();
//! assert_eq!(rendered.to_string(), "|+| | |\n| |+| |\n| | |+|\n");
//! ```

use pest_derive::Parser;

pub mod ast;
pub mod command;
pub mod errors;
pub mod grid;
pub mod log;
pub mod parse;
pub mod render;
pub mod types;

pub use command::{Command, Execute};
pub use errors::{CommandError, ParseError, SourceContext};
pub use grid::{Cell, Grid};
pub use render::{Notice, NoticeKind, RenderContext, RenderOptions, Rendered, Status};

#[derive(Parser)]
#[grammar = "turtle.pest"]
pub struct TurtleParser;

/// Run command text against a fresh grid with default options.
///
/// Fails only if the grammar cannot read the text at all. Unknown commands,
/// bad arguments and out-of-bounds targets are listed in `Rendered::notices`.
pub fn turtlegrid(source: &str) -> Result<Rendered, miette::Report> {
    turtlegrid_with_options(
        &SourceContext::new("<input>", source),
        &RenderOptions::default(),
    )
}

/// Like [`turtlegrid`], with a named source for diagnostics and explicit options.
pub fn turtlegrid_with_options(
    source: &SourceContext,
    options: &RenderOptions,
) -> Result<Rendered, miette::Report> {
    let program = parse::parse(source)?;
    Ok(render::render(&program, options))
}
