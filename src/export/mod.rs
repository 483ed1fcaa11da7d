//! Export document construction.
//!
//! - `resource`: one request per extracted query
//! - `document`: the sorted envelope written to disk

pub mod document;
pub mod resource;

pub use document::{EXPORT_FORMAT, ExportDocument, build_export, to_pretty_json};
pub use resource::{ResourceBody, ResourceRecord, new_request_id, to_resource};
