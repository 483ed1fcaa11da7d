//! Per-file literal extraction.
//!
//! Every literal the scanner finds is validated, named after the variable it
//! is assigned to, and run through the [`Formatter`]. Problems with a single
//! literal become [`Diagnostic`]s; they never stop the rest of the file.

use std::{
    fs,
    path::{Component, MAIN_SEPARATOR, Path, PathBuf},
};

use anyhow::{Context, Result};

use super::{
    results::{Diagnostic, ExtractedQuery, Extraction, SkipReason},
    scanner::{LiteralScanner, RawLiteral},
};
use crate::formatter::Formatter;

/// Read `file` and extract its query literals.
///
/// An unreadable file is reported as a single [`Diagnostic::Failed`].
pub fn extract_from_file(
    file: &Path,
    path_delimiter: &str,
    url: &str,
    formatter: &dyn Formatter,
) -> Extraction {
    match fs::read_to_string(file) {
        Ok(source) => extract_from_source(&source, file, path_delimiter, url, formatter),
        Err(err) => Extraction {
            queries: Vec::new(),
            diagnostics: vec![Diagnostic::Failed {
                file: file.to_path_buf(),
                literal: None,
                message: format!("Failed to read file: {err}"),
            }],
        },
    }
}

/// Extract the query literals of `source`, which was read from `file`.
pub fn extract_from_source(
    source: &str,
    file: &Path,
    path_delimiter: &str,
    url: &str,
    formatter: &dyn Formatter,
) -> Extraction {
    let mut extraction = Extraction::default();

    for literal in LiteralScanner::new(source) {
        if let Some(reason) = check_literal(&literal) {
            extraction.diagnostics.push(Diagnostic::Skipped {
                file: file.to_path_buf(),
                literal: literal.index,
                reason,
            });
            continue;
        }

        match build_query(&literal, file, path_delimiter, url, formatter) {
            Ok(query) => extraction.queries.push(query),
            Err(err) => extraction.diagnostics.push(Diagnostic::Failed {
                file: file.to_path_buf(),
                literal: Some(literal.index),
                message: format!("{err:#}"),
            }),
        }
    }

    extraction
}

/// Decide whether a literal has to be skipped.
pub fn check_literal(literal: &RawLiteral<'_>) -> Option<SkipReason> {
    if literal.body.starts_with("//") {
        Some(SkipReason::CommentedOut)
    } else if literal.context_line.contains('?') {
        Some(SkipReason::Conditional)
    } else if literal.context_line.trim().is_empty() {
        Some(SkipReason::MissingContext)
    } else {
        None
    }
}

fn build_query(
    literal: &RawLiteral<'_>,
    file: &Path,
    path_delimiter: &str,
    url: &str,
    formatter: &dyn Formatter,
) -> Result<ExtractedQuery> {
    let file_name = display_file_name(file, path_delimiter)?;
    let name = format!("{} ({})", method_name(literal.context_line), file_name);
    let text = formatter
        .format(literal.body)
        .with_context(|| format!("Failed to format query `{name}`"))?;

    Ok(ExtractedQuery {
        name,
        text,
        source: literal.body.to_owned(),
        url: url.to_owned(),
    })
}

/// The last word before ` = ` on the context line.
///
/// `export const getUser = ` gives `getUser`.
pub fn method_name(context_line: &str) -> &str {
    context_line
        .split(" = ")
        .next()
        .unwrap_or_default()
        .split(' ')
        .next_back()
        .unwrap_or_default()
}

/// Path of `file` after the last `<path_delimiter>/` component, or the whole
/// resolved path when the delimiter does not occur.
pub fn display_file_name(file: &Path, path_delimiter: &str) -> Result<String> {
    let resolved = resolve_path(file)?;
    let resolved = resolved.to_string_lossy();
    let marker = format!("{path_delimiter}{MAIN_SEPARATOR}");

    Ok(resolved
        .rsplit(marker.as_str())
        .next()
        .unwrap_or_default()
        .to_owned())
}

/// Make `path` absolute and drop `.` and `..` components.
///
/// Purely lexical: the filesystem is not consulted and symlinks keep the
/// name they were reached by.
pub fn resolve_path(path: &Path) -> Result<PathBuf> {
    let absolute = std::path::absolute(path)
        .with_context(|| format!("Failed to resolve path: {}", path.display()))?;

    let mut resolved = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            other => resolved.push(other),
        }
    }
    Ok(resolved)
}
