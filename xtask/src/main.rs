use camino::{Utf8Path, Utf8PathBuf};
use rayon::prelude::*;
use std::fs;
use turtlegrid::{RenderOptions, Rendered, SourceContext};

const DEFAULT_INPUT: &str = "commands.txt";

fn main() {
    // Diagnostics go to stderr; stdout carries the rendered grid.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        usage();
        std::process::exit(1);
    }

    let code = match args[1].as_str() {
        "run" => run(Utf8Path::new(args.get(2).map_or(DEFAULT_INPUT, String::as_str))),
        "render-all" => match args.get(2) {
            Some(dir) => render_all(Utf8Path::new(dir)),
            None => {
                usage();
                1
            }
        },
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            usage();
            1
        }
    };
    std::process::exit(code);
}

fn usage() {
    eprintln!("Usage: cargo xtask <command>");
    eprintln!("Commands:");
    eprintln!("  run [FILE]        Render FILE (default {DEFAULT_INPUT}) to stdout");
    eprintln!("  render-all DIR    Render every .turtle file in DIR next to its source");
}

fn load(path: &Utf8Path) -> Result<SourceContext, miette::Report> {
    let source = fs::read_to_string(path)
        .map_err(|e| miette::miette!("failed to read {path}: {e}"))?;
    Ok(SourceContext::new(path.as_str(), source))
}

fn render_file(path: &Utf8Path) -> Result<(SourceContext, Rendered), miette::Report> {
    let source = load(path)?;
    let rendered = turtlegrid::turtlegrid_with_options(&source, &RenderOptions::default())?;
    Ok((source, rendered))
}

fn run(path: &Utf8Path) -> i32 {
    match render_file(path) {
        Ok((source, rendered)) => {
            for notice in &rendered.notices {
                match notice.to_report(&source) {
                    Some(report) => eprintln!("{report:?}"),
                    None => println!("{notice}"),
                }
            }
            print!("{}", rendered.grid);
            0
        }
        Err(report) => {
            eprintln!("{report:?}");
            1
        }
    }
}

/// Outcome for one file of a batch
struct Outcome {
    path: Utf8PathBuf,
    result: Result<usize, String>,
}

fn render_all(dir: &Utf8Path) -> i32 {
    let entries = match dir.read_dir_utf8() {
        Ok(entries) => entries,
        Err(e) => {
            eprintln!("failed to read {dir}: {e}");
            return 1;
        }
    };

    let mut inputs: Vec<Utf8PathBuf> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.into_path())
        .filter(|p| p.extension() == Some("turtle"))
        .collect();
    inputs.sort();

    let outcomes: Vec<Outcome> = inputs
        .par_iter()
        .map(|path| {
            let result = render_file(path)
                .map_err(|report| format!("{report:?}"))
                .and_then(|(_, rendered)| {
                    let output = path.with_extension("txt");
                    fs::write(&output, rendered.transcript())
                        .map_err(|e| format!("failed to write {output}: {e}"))?;
                    Ok(rendered.rejections().count())
                });
            Outcome {
                path: path.clone(),
                result,
            }
        })
        .collect();

    let mut failed = 0;
    for outcome in &outcomes {
        match &outcome.result {
            Ok(0) => eprintln!("ok      {}", outcome.path),
            Ok(n) => eprintln!("ok      {} ({n} rejected)", outcome.path),
            Err(message) => {
                failed += 1;
                eprintln!("FAILED  {}\n{message}", outcome.path);
            }
        }
    }
    eprintln!(
        "{} rendered, {} failed",
        outcomes.len() - failed,
        failed
    );

    if failed > 0 { 1 } else { 0 }
}
