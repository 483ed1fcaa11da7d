//! Query text normalization.

use anyhow::{Result, anyhow};
use apollo_compiler::ast::Document;

/// Normalizes the text of a query literal before it is exported.
pub trait Formatter {
    fn format(&self, source: &str) -> Result<String>;
}

/// Reprints a literal as a canonical GraphQL document.
///
/// The literal is parsed with apollo-compiler and serialized back with its
/// default style (two-space indentation), followed by a single newline.
/// An empty literal stays empty. Anything else that is not a well-formed
/// document, such as a literal with `${...}` interpolations, is rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphqlFormatter;

impl Formatter for GraphqlFormatter {
    fn format(&self, source: &str) -> Result<String> {
        if source.trim().is_empty() {
            return Ok(String::new());
        }

        let document = Document::parse(source, "literal.graphql")
            .map_err(|with_errors| anyhow!("{}", with_errors.errors))?;

        let mut text = document.to_string();
        let trimmed_len = text.trim_end().len();
        text.truncate(trimmed_len);
        text.push('\n');
        Ok(text)
    }
}

/// Leaves literals exactly as written.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughFormatter;

impl Formatter for PassthroughFormatter {
    fn format(&self, source: &str) -> Result<String> {
        Ok(source.to_owned())
    }
}
