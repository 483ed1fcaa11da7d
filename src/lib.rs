//! insomnia-gql - turn inline GraphQL literals into an Insomnia import file
//!
//! Scans a JavaScript project for gql`` tagged template literals, names each
//! query after the variable it is assigned to, and writes every query as a
//! POST request into a single Insomnia (export format 4) document.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `walker`: Recursive source file discovery
//! - `extraction`: Literal scanning, validation, naming and variable parsing
//! - `formatter`: Query text normalization
//! - `export`: Request resources and the export document
//! - `pipeline`: The end-to-end export run

pub mod cli;
pub mod config;
pub mod export;
pub mod extraction;
pub mod formatter;
pub mod pipeline;
pub mod walker;
