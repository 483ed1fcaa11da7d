//! Query literal extraction.
//!
//! ## Module Structure
//!
//! - `scanner`: splits a source file at every `gql`` tag and tracks context lines
//! - `extractor`: validates, names and formats each literal of a file
//! - `variables`: reads the variable signature of a query
//! - `results`: result and diagnostic types
//!
//! A file goes through the scanner once. Each literal it yields is either
//! turned into an [`ExtractedQuery`] or recorded as a [`Diagnostic`]; no
//! literal is allowed to fail the file.

pub mod extractor;
pub mod results;
pub mod scanner;
pub mod variables;

pub use extractor::{extract_from_file, extract_from_source, resolve_path};
pub use results::{Diagnostic, ExtractedQuery, Extraction, SkipReason};
pub use variables::{VariableMap, parse_variables};
