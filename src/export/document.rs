//! The export document envelope.

use serde::Serialize;

use super::resource::ResourceRecord;

/// Export format version understood by the API client's importer.
pub const EXPORT_FORMAT: u32 = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportDocument {
    #[serde(rename = "_type")]
    pub kind: String,
    #[serde(rename = "__export_format")]
    pub export_format: u32,
    pub resources: Vec<ResourceRecord>,
}

/// Wrap `resources` in an export document, sorted by case-insensitive name.
///
/// Resources with equal names keep their relative order.
pub fn build_export(mut resources: Vec<ResourceRecord>) -> ExportDocument {
    resources.sort_by_cached_key(|resource| resource.name.to_uppercase());

    ExportDocument {
        kind: "export".to_owned(),
        export_format: EXPORT_FORMAT,
        resources,
    }
}

/// Render the document as two-space indented JSON.
pub fn to_pretty_json(document: &ExportDocument) -> serde_json::Result<String> {
    serde_json::to_string_pretty(document)
}
