//! Query extraction result types.
//!
//! Contains the result types for literal extraction:
//! - `ExtractedQuery`: a literal that passed validation and formatting
//! - `Extraction`: everything produced for one file
//! - `Diagnostic`: a literal (or file) that was left out, and why
//! - `SkipReason`: why a literal was rejected before formatting

use std::{
    fmt,
    path::{Path, PathBuf},
};

/// A query literal ready to become a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedQuery {
    /// Display name, e.g. "getUser (pages/users.js)".
    pub name: String,
    /// Formatted query text.
    pub text: String,
    /// Trimmed literal body as written in the file. Variables are read from this.
    pub source: String,
    /// Endpoint the request is sent to.
    pub url: String,
}

/// Reason why a literal is not exported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Body starts with `//`.
    CommentedOut,
    /// Context line contains `?`, so the literal is a ternary branch.
    Conditional,
    /// Nothing precedes the literal on its line.
    MissingContext,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            SkipReason::CommentedOut => "commented-out gql statements are not supported",
            SkipReason::Conditional => "gql statements within ternary expressions are not supported",
            SkipReason::MissingContext => "gql statements without a preceding declaration are not supported",
        };
        f.write_str(text)
    }
}

/// Something the operator should hear about. Never aborts the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A literal failed validation.
    Skipped {
        file: PathBuf,
        /// 1-based literal position within the file.
        literal: usize,
        reason: SkipReason,
    },
    /// Reading the file or building a literal failed.
    Failed {
        file: PathBuf,
        /// `None` when the whole file could not be processed.
        literal: Option<usize>,
        message: String,
    },
}

impl Diagnostic {
    pub fn is_error(&self) -> bool {
        matches!(self, Diagnostic::Failed { .. })
    }

    pub fn file(&self) -> &Path {
        match self {
            Diagnostic::Skipped { file, .. } | Diagnostic::Failed { file, .. } => file,
        }
    }
}

/// Result of extracting query literals from a single file.
#[derive(Debug, Default)]
pub struct Extraction {
    /// Exported literals, in file order.
    pub queries: Vec<ExtractedQuery>,
    pub diagnostics: Vec<Diagnostic>,
}
