// Error reporting with Ariadne for codegen
//
// Renders CodegenError against the descriptor text it came from.

use crate::CodegenError;
use ariadne::{Color, Config, Label, Report, ReportKind, Source};
use std::io;
use std::ops::Range;

type ReportBuilder<'a> = ariadne::ReportBuilder<'static, (&'a str, Range<usize>)>;

/// Print a CodegenError to stderr as an Ariadne report
pub fn report_codegen_error(filename: &str, source: &str, error: &CodegenError) -> io::Result<()> {
    build_report(filename, error)
        .finish()
        .eprint((filename, Source::from(source)))
}

/// Render a CodegenError to a plain (uncolored) string
pub fn render_codegen_error(filename: &str, source: &str, error: &CodegenError) -> String {
    let mut out = Vec::new();
    let _ = build_report(filename, error)
        .with_config(Config::default().with_color(false))
        .finish()
        .write((filename, Source::from(source)), &mut out);
    String::from_utf8_lossy(&out).into_owned()
}

fn build_report<'a>(filename: &'a str, error: &CodegenError) -> ReportBuilder<'a> {
    match error {
        CodegenError::UnsupportedType {
            descriptor,
            span,
            requirement,
        } => {
            let offset = span.as_ref().map(|s| s.start).unwrap_or(0);
            let report = Report::build(ReportKind::Error, filename, offset)
                .with_code("E110")
                .with_message(format!("Unsupported type descriptor '{}'", descriptor))
                .with_help(match requirement {
                    Some(requirement) => requirement.to_string(),
                    None => "Supported: float32, float64, longdouble, complex64, complex128, intc"
                        .to_string(),
                });

            let label = match requirement {
                Some(_) => "not allowed here",
                None => "no C scalar type for this descriptor",
            };
            if let Some(span) = span {
                report.with_label(
                    Label::new((filename, span.clone()))
                        .with_message(label)
                        .with_color(Color::Red),
                )
            } else {
                report
            }
        }

        CodegenError::DependencyUnavailable {
            component,
            capability,
        } => Report::build(ReportKind::Error, filename, 0)
            .with_code("E111")
            .with_message(format!("{} is unavailable", capability))
            .with_help(format!(
                "{} was not compiled in; rebuild with `--features jit`",
                component
            )),

        CodegenError::InvalidOptions {
            source_name,
            details,
        } => Report::build(ReportKind::Error, filename, 0)
            .with_code("E112")
            .with_message(format!("Invalid options in {}", source_name))
            .with_help(details.clone()),

        CodegenError::Backend { operation, details } => {
            Report::build(ReportKind::Error, filename, 0)
                .with_code("E113")
                .with_message(format!("Backend error in {}", operation))
                .with_help(details.clone())
        }
    }
}
