//! Parse pest pairs into statements

use miette::SourceSpan;
use pest::Parser;
use pest::error::InputLocation;
use pest::iterators::Pair;

use crate::ast::{Program, Statement, StatementKind};
use crate::command::Command;
use crate::errors::{CommandError, ParseError, SourceContext};
use crate::log;
use crate::{Rule, TurtleParser};

/// Parse command text into a program.
///
/// Lines with a bad argument list are kept as `StatementKind::Malformed`;
/// only text the grammar cannot read at all is an error.
pub fn parse(source: &SourceContext) -> Result<Program, ParseError> {
    let pairs = TurtleParser::parse(Rule::program, &source.source)
        .map_err(|e| syntax_error(source, e))?;

    let mut statements = Vec::new();
    for pair in pairs {
        if pair.as_rule() == Rule::program {
            for inner in pair.into_inner() {
                if inner.as_rule() == Rule::EOI {
                    continue;
                }
                statements.push(parse_statement(source, inner)?);
            }
        }
    }

    log::debug!(statements = statements.len(), "parsed program");
    Ok(Program { statements })
}

/// A line that names a command but cannot build it
struct Rejected {
    error: CommandError,
    span: SourceSpan,
}

fn span_of(pair: &Pair<Rule>) -> SourceSpan {
    let span = pair.as_span();
    (span.start(), span.end() - span.start()).into()
}

fn parse_statement(source: &SourceContext, pair: Pair<Rule>) -> Result<Statement, ParseError> {
    let span = span_of(&pair);
    let line = pair.line_col().0;

    let parsed = match pair.as_rule() {
        Rule::dimension => parse_integers::<1>(pair).map(|[size]| Command::set_dimension(size)),
        Rule::move_to => parse_integers::<2>(pair).map(|[x, y]| Command::move_to(x, y)),
        Rule::line_to => parse_integers::<2>(pair).map(|[x, y]| Command::line_to(x, y)),
        Rule::circle_to => parse_integers::<1>(pair).map(|[radius]| Command::circle_to(radius)),
        Rule::malformed => Err(malformed(pair)),
        Rule::unknown => {
            let keyword = pair
                .into_inner()
                .find(|p| p.as_rule() == Rule::word)
                .map(|p| p.as_str().to_string())
                .unwrap_or_default();
            log::debug!(line, %keyword, "unknown command");
            return Ok(Statement {
                kind: StatementKind::Unknown { keyword },
                line,
                span,
            });
        }
        other => {
            return Err(ParseError::Syntax {
                message: format!("unexpected rule {other:?}"),
                src: source.named_source(),
                span,
            });
        }
    };

    Ok(match parsed {
        Ok(command) => Statement {
            kind: StatementKind::Command(command),
            line,
            span,
        },
        Err(rejected) => {
            log::debug!(line, error = %rejected.error, "malformed command");
            Statement {
                kind: StatementKind::Malformed(rejected.error),
                line,
                span: rejected.span,
            }
        }
    })
}

/// Read the `N` integer arguments of a command pair
fn parse_integers<const N: usize>(pair: Pair<Rule>) -> Result<[i32; N], Rejected> {
    let whole = span_of(&pair);
    let keyword = pair.as_str().split_whitespace().next().unwrap_or_default();
    let mut values = [0; N];
    let mut count = 0;
    for inner in pair.into_inner().filter(|p| p.as_rule() == Rule::integer) {
        if count == N {
            break;
        }
        values[count] = parse_integer(&inner)?;
        count += 1;
    }
    if count != N {
        return Err(Rejected {
            error: invalid_arguments(keyword),
            span: whole,
        });
    }
    Ok(values)
}

fn parse_integer(pair: &Pair<Rule>) -> Result<i32, Rejected> {
    let text = pair.as_str();
    // i32 parsing accepts a leading '+' as well as '-'.
    text.parse::<i32>().map_err(|_| Rejected {
        error: CommandError::InvalidNumber {
            text: text.to_string(),
        },
        span: span_of(pair),
    })
}

fn usage(keyword: &str) -> &'static str {
    match keyword {
        "DIMENSION" => "DIMENSION <size>",
        "MOVE_TO" => "MOVE_TO <x> <y>",
        "LINE_TO" => "LINE_TO <x> <y>",
        "CIRCLE_TO" => "CIRCLE_TO <radius>",
        _ => "DIMENSION <size> | MOVE_TO <x> <y> | LINE_TO <x> <y> | CIRCLE_TO <radius>",
    }
}

fn invalid_arguments(keyword: &str) -> CommandError {
    CommandError::InvalidArguments {
        keyword: keyword.to_string(),
        usage: usage(keyword),
    }
}

fn malformed(pair: Pair<Rule>) -> Rejected {
    let mut keyword = "";
    let mut span = span_of(&pair);
    for inner in pair.into_inner() {
        match inner.as_rule() {
            Rule::keyword => keyword = inner.as_str(),
            Rule::rest if !inner.as_str().trim().is_empty() => span = span_of(&inner),
            _ => {}
        }
    }
    Rejected {
        error: invalid_arguments(keyword),
        span,
    }
}

fn syntax_error(source: &SourceContext, err: pest::error::Error<Rule>) -> ParseError {
    let span: SourceSpan = match err.location {
        InputLocation::Pos(pos) => (pos, 0).into(),
        InputLocation::Span((start, end)) => (start, end - start).into(),
    };
    ParseError::Syntax {
        message: err.variant.message().into_owned(),
        src: source.named_source(),
        span,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_str(input: &str) -> Result<Program, ParseError> {
        parse(&SourceContext::new("<input>", input))
    }

    fn commands(input: &str) -> Vec<Command> {
        parse_str(input).unwrap().commands().copied().collect()
    }

    #[test]
    fn parse_each_command() {
        assert_eq!(
            commands("DIMENSION 10\nMOVE_TO 1 2\nLINE_TO 3 4\nCIRCLE_TO 5"),
            vec![
                Command::set_dimension(10),
                Command::move_to(1, 2),
                Command::line_to(3, 4),
                Command::circle_to(5),
            ]
        );
    }

    #[test]
    fn parse_signed_numbers() {
        assert_eq!(
            commands("MOVE_TO -1 +2\nDIMENSION -3"),
            vec![Command::move_to(-1, 2), Command::set_dimension(-3)]
        );
    }

    #[test]
    fn parse_blank_lines_and_padding() {
        let program = parse_str("\n  DIMENSION 3  \n\n\tLINE_TO 1 1\t\n").unwrap();
        assert_eq!(program.statements.len(), 2);
        assert_eq!(program.statements[0].line, 2);
        assert_eq!(program.statements[1].line, 4);
    }

    #[test]
    fn parse_crlf() {
        assert_eq!(
            commands("DIMENSION 3\r\nCIRCLE_TO 1\r\n"),
            vec![Command::set_dimension(3), Command::circle_to(1)]
        );
    }

    #[test]
    fn parse_empty_input() {
        assert!(parse_str("").unwrap().statements.is_empty());
    }

    #[test]
    fn statement_spans_cover_the_command() {
        let program = parse_str("DIMENSION 3\nMOVE_TO 1 2").unwrap();
        let span = program.statements[1].span;
        assert_eq!(span.offset(), 12);
        assert_eq!(span.len(), "MOVE_TO 1 2".len());
    }

    #[test]
    fn unknown_keyword_is_kept() {
        let program = parse_str("DIMENSION 3\nJUMP 1 2\nLINE_TO 2 2").unwrap();
        assert_eq!(program.statements.len(), 3);
        assert_eq!(
            program.statements[1].kind,
            StatementKind::Unknown {
                keyword: "JUMP".to_string()
            }
        );
        assert_eq!(program.commands().count(), 2);
    }

    #[test]
    fn keyword_prefix_is_unknown() {
        let program = parse_str("DIMENSIONS 4\nmove_to 1 1").unwrap();
        let keywords: Vec<_> = program
            .statements
            .iter()
            .map(|s| match &s.kind {
                StatementKind::Unknown { keyword } => keyword.as_str(),
                StatementKind::Command(_) | StatementKind::Malformed(_) => "",
            })
            .collect();
        assert_eq!(keywords, vec!["DIMENSIONS", "move_to"]);
    }

    fn only_statement(input: &str) -> Statement {
        let mut program = parse_str(input).unwrap();
        assert_eq!(program.statements.len(), 1, "{input}");
        program.statements.remove(0)
    }

    #[test]
    fn malformed_arguments_are_kept_as_statements() {
        for input in [
            "DIMENSION",
            "DIMENSION abc",
            "MOVE_TO 1",
            "LINE_TO 1 2 3",
            "CIRCLE_TO 2x",
        ] {
            match only_statement(input).kind {
                StatementKind::Malformed(CommandError::InvalidArguments { keyword, usage }) => {
                    assert!(input.starts_with(&keyword), "{input}: {keyword}");
                    assert!(usage.starts_with(&keyword));
                }
                other => panic!("{input}: expected InvalidArguments, got {other:?}"),
            }
        }
    }

    #[test]
    fn malformed_line_does_not_hide_its_neighbours() {
        let program = parse_str("DIMENSION 3\nMOVE_TO 1\nLINE_TO 0 2").unwrap();
        assert_eq!(program.statements.len(), 3);
        assert_eq!(
            program.commands().copied().collect::<Vec<_>>(),
            vec![Command::set_dimension(3), Command::line_to(0, 2)]
        );
        assert_eq!(program.statements[1].line, 2);
    }

    #[test]
    fn malformed_span_points_at_arguments() {
        let program = parse_str("DIMENSION 3\nMOVE_TO 1 y").unwrap();
        let stmt = &program.statements[1];
        assert!(matches!(stmt.kind, StatementKind::Malformed(_)));
        assert_eq!(stmt.span.offset(), "DIMENSION 3\nMOVE_TO ".len());
        assert_eq!(stmt.span.len(), "1 y".len());
    }

    #[test]
    fn overflowing_number_is_rejected() {
        let stmt = only_statement("DIMENSION 99999999999");
        assert_eq!(
            stmt.kind,
            StatementKind::Malformed(CommandError::InvalidNumber {
                text: "99999999999".to_string()
            })
        );
        assert_eq!(stmt.span.offset(), 10);
        assert_eq!(stmt.span.len(), 11);
    }
}
