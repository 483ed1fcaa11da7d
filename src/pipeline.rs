//! End-to-end export run.
//!
//! Files are discovered under the project directory, every query literal
//! is extracted, converted to a request resource and written out as one
//! sorted export document. Only an unreadable project directory or an
//! unwritable output file abort the run; everything else ends up in
//! [`RunSummary::diagnostics`].

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use glob::Pattern;

use crate::{
    export::{ExportDocument, build_export, to_pretty_json, to_resource},
    extraction::{Diagnostic, ExtractedQuery, extract_from_file, resolve_path},
    formatter::Formatter,
    walker::source_files,
};

/// Inputs of a single export run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Project directory to scan.
    pub directory: PathBuf,
    /// Endpoint written into every request.
    pub url: String,
    /// Export file, relative to the current directory unless absolute.
    pub output: PathBuf,
    /// Extensions of the files to scan.
    pub extensions: Vec<String>,
    /// Paths matching any of these are not scanned.
    pub ignores: Vec<Pattern>,
}

/// Everything extracted from a project, before conversion to resources.
#[derive(Debug, Default)]
pub struct CollectedQueries {
    /// Scanned files, in discovery order.
    pub files: Vec<PathBuf>,
    /// Queries in discovery order, file by file.
    pub queries: Vec<ExtractedQuery>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Outcome of [`run`].
#[derive(Debug)]
pub struct RunSummary {
    pub output: PathBuf,
    pub files: Vec<PathBuf>,
    /// Names of the written resources, in document order.
    pub resource_names: Vec<String>,
    pub diagnostics: Vec<Diagnostic>,
}

impl RunSummary {
    pub fn resource_count(&self) -> usize {
        self.resource_names.len()
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| !d.is_error()).count()
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_error()).count()
    }
}

/// Scan the project, write the export document and report what happened.
pub fn run(options: &RunOptions, formatter: &dyn Formatter) -> Result<RunSummary> {
    let CollectedQueries {
        files,
        queries,
        diagnostics,
    } = collect_queries(options, formatter)?;

    let document = build_export(queries.iter().map(to_resource).collect());
    write_export(&document, &options.output)?;

    Ok(RunSummary {
        output: options.output.clone(),
        files,
        resource_names: document
            .resources
            .iter()
            .map(|resource| resource.name.clone())
            .collect(),
        diagnostics,
    })
}

/// Extract the queries of every source file under `options.directory`.
pub fn collect_queries(
    options: &RunOptions,
    formatter: &dyn Formatter,
) -> Result<CollectedQueries> {
    let delimiter = path_delimiter(&options.directory)?;
    let files = source_files(&options.directory, &options.extensions, &options.ignores)?;

    let mut collected = CollectedQueries::default();
    for file in &files {
        let extraction = extract_from_file(file, &delimiter, &options.url, formatter);
        collected.queries.extend(extraction.queries);
        collected.diagnostics.extend(extraction.diagnostics);
    }
    collected.files = files;

    Ok(collected)
}

/// Final component of the lexically resolved project directory.
///
/// Query names show file paths relative to the last occurrence of this
/// component. Files are resolved the same way, see
/// [`crate::extraction::extractor::display_file_name`].
pub fn path_delimiter(directory: &Path) -> Result<String> {
    let resolved = resolve_path(directory)?;

    Ok(resolved
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default())
}

/// Write `document` to `path`, replacing any existing file.
pub fn write_export(document: &ExportDocument, path: &Path) -> Result<()> {
    let json = to_pretty_json(document).context("Failed to serialize export document")?;
    fs::write(path, json)
        .with_context(|| format!("Failed to write export file: {}", path.display()))
}
