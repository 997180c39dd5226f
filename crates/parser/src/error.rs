// Error reporting with Ariadne
//
// Syntax errors in descriptor text, rendered against the text itself.

use ariadne::{Color, Config, Label, Report, ReportKind, Source};
use chumsky::error::{Simple, SimpleReason};
use lexer::token::Token;
use std::io;

/// Type alias for Chumsky parser errors
pub type ParseError = Simple<Token>;

/// Print parse errors to stderr as Ariadne reports
pub fn report_errors(filename: &str, source: &str, errors: &[ParseError]) -> io::Result<()> {
    for error in errors {
        build_report(filename, error)
            .finish()
            .eprint((filename, Source::from(source)))?;
    }
    Ok(())
}

/// Render parse errors to a plain (uncolored) string
pub fn render_errors(filename: &str, source: &str, errors: &[ParseError]) -> String {
    let mut out = Vec::new();
    for error in errors {
        let written = build_report(filename, error)
            .with_config(Config::default().with_color(false))
            .finish()
            .write((filename, Source::from(source)), &mut out);
        if written.is_err() {
            break;
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn build_report<'a>(
    filename: &'a str,
    error: &ParseError,
) -> ariadne::ReportBuilder<'static, (&'a str, std::ops::Range<usize>)> {
    let span = error.span();

    let report = Report::build(ReportKind::Error, filename, span.start)
        .with_code("E001")
        .with_message("Invalid type descriptor")
        .with_label(
            Label::new((filename, span))
                .with_message(label_message(error))
                .with_color(Color::Red),
        );

    // Limit to 5 expected tokens to avoid overwhelming output
    if error.expected().len() > 0 {
        let mut expected: Vec<String> = error.expected().map(format_expected).collect();
        expected.sort();
        expected.dedup();

        let help_msg = if expected.len() > 5 {
            format!("Expected one of: {}, ...", expected[..5].join(", "))
        } else {
            format!("Expected: {}", expected.join(", "))
        };
        report.with_help(help_msg)
    } else {
        report
    }
}

fn label_message(error: &ParseError) -> String {
    match error.reason() {
        SimpleReason::Custom(msg) => msg.clone(),
        SimpleReason::Unclosed { delimiter, .. } => format!("unclosed {}", delimiter),
        SimpleReason::Unexpected => match error.found() {
            Some(Token::Error) => "unrecognized character".to_string(),
            Some(Token::Int(_)) => "a type descriptor cannot start with a number".to_string(),
            Some(token) => format!("unexpected '{}'", token),
            None => "unexpected end of input".to_string(),
        },
    }
}

/// Format expected token for human-readable output
fn format_expected(token: &Option<Token>) -> String {
    match token {
        Some(Token::Identifier(_)) => "type name".to_string(),
        Some(Token::Int(_)) => "integer".to_string(),
        Some(Token::Quote) => "quote".to_string(),
        Some(Token::Lt) => "'<'".to_string(),
        Some(Token::Gt) => "'>'".to_string(),
        Some(Token::Eq) => "'='".to_string(),
        Some(Token::Pipe) => "'|'".to_string(),
        Some(Token::Question) => "'?'".to_string(),
        Some(Token::Dot) => "'.'".to_string(),
        Some(Token::Comma) => "','".to_string(),
        Some(Token::LParen) => "'('".to_string(),
        Some(Token::RParen) => "')'".to_string(),
        Some(Token::Error) => "valid character".to_string(),
        None => "end of input".to_string(),
    }
}
