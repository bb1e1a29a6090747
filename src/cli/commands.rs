//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;

use gosp_syntax::diagnostics::SyntaxError;
use gosp_syntax::options::ParseOptions;
use gosp_syntax::{parser, reader};
use miette::{GraphicalReportHandler, GraphicalTheme, NamedSource, Report};

use super::{CliError, CliResult, ExitCode};

/// Maximum source file size (100 MB)
const MAX_SOURCE_SIZE: u64 = 100 * 1024 * 1024;

/// Terminal width used when rendering reports.
const REPORT_WIDTH: usize = 120;

/// Read a source file, refusing anything larger than `MAX_SOURCE_SIZE`.
///
/// ## Errors
/// - The file cannot be read (I/O error)
/// - The file exceeds `MAX_SOURCE_SIZE`
pub fn read_source(file_path: &str) -> CliResult<String> {
    let metadata =
        fs::metadata(file_path).map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", file_path, e)))?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "Source file '{}' is too large ({} bytes, max {} bytes)",
            file_path,
            metadata.len(),
            MAX_SOURCE_SIZE
        )));
    }

    fs::read_to_string(file_path).map_err(|e| CliError::failure(format!("Error reading file '{}': {}", file_path, e)))
}

/// Render a syntax error against its source with miette's graphical handler.
pub fn format_error(file_path: &str, source: &str, err: &SyntaxError) -> String {
    let report = Report::new(err.clone()).with_source_code(NamedSource::new(file_path, source.to_string()));
    let handler = GraphicalReportHandler::new_themed(GraphicalTheme::unicode_nocolor()).with_width(REPORT_WIDTH);

    let mut out = String::new();
    match handler.render_report(&mut out, &*report) {
        Ok(()) => out,
        Err(_) => format!("{file_path}: {err}\n"),
    }
}

fn report_errors(file_path: &str, source: &str, errors: &[SyntaxError]) -> CliError {
    let mut msg = String::new();
    for err in errors {
        msg.push_str(&format_error(file_path, source, err));
    }
    CliError::failure(msg.trim_end())
}

/// Read and display the datum tree.
#[tracing::instrument(skip_all, fields(file = %file_path))]
pub fn read_file(file_path: &str) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let datums = reader::read(&source).map_err(|errs| report_errors(file_path, &source, &errs))?;

    for datum in &datums {
        println!("{datum}");
    }
    Ok(ExitCode::SUCCESS)
}

/// Analyze and display every top-level form.
#[tracing::instrument(skip_all, fields(file = %file_path))]
pub fn parse_file(file_path: &str, options: &ParseOptions) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let nodes = parser::parse_str_with(file_path, &source, options)
        .map_err(|errs| report_errors(file_path, &source, &errs))?;

    for node in &nodes {
        println!("{node}");
    }
    Ok(ExitCode::SUCCESS)
}

/// Analyze a file and report only the outcome.
#[tracing::instrument(skip_all, fields(file = %file_path))]
pub fn check_file(file_path: &str, options: &ParseOptions) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let nodes = parser::parse_str_with(file_path, &source, options)
        .map_err(|errs| report_errors(file_path, &source, &errs))?;

    tracing::info!(forms = nodes.len(), "check passed");
    println!("✓ {} form(s) analyzed", nodes.len());
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use gosp_syntax::options::BatchPolicy;
    use std::path::PathBuf;

    fn write_temp(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("gosp_cli_{}_{}", std::process::id(), name));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_format_error_mentions_file_and_code() {
        let source = "(define x 1)\n(if 1)\n";
        let errors = parser::parse_str("prog.gsp", source).unwrap_err();
        let rendered = format_error("prog.gsp", source, &errors[0]);
        assert!(rendered.contains("gosp::syntax::arity"), "{rendered}");
        assert!(rendered.contains("prog.gsp"), "{rendered}");
    }

    #[test]
    fn test_check_and_parse_succeed_on_valid_file() {
        let path = write_temp("ok.gsp", "(define (f x) x)\n(f 1)\n");
        let file = path.to_string_lossy();
        assert_eq!(check_file(&file, &ParseOptions::default()).unwrap(), ExitCode::SUCCESS);
        assert_eq!(parse_file(&file, &ParseOptions::default()).unwrap(), ExitCode::SUCCESS);
        assert_eq!(read_file(&file).unwrap(), ExitCode::SUCCESS);
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_check_reports_every_error_when_collecting() {
        let path = write_temp("bad.gsp", "(go)\n(if)\n");
        let file = path.to_string_lossy();

        let atomic = check_file(&file, &ParseOptions::default()).unwrap_err();
        assert_eq!(atomic.exit_code, ExitCode::FAILURE);
        assert!(atomic.message.contains("go: bad syntax"), "{}", atomic.message);
        assert!(!atomic.message.contains("if: bad syntax"), "{}", atomic.message);

        let options = ParseOptions::new().with_batch(BatchPolicy::Collect);
        let collected = check_file(&file, &options).unwrap_err();
        assert!(collected.message.contains("if: bad syntax"), "{}", collected.message);
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_missing_file_is_a_failure() {
        let err = read_source("/definitely/not/here.gsp").unwrap_err();
        assert!(err.message.starts_with("Cannot access file"));
    }
}
