//! Request resources.

use serde::Serialize;
use uuid::Uuid;

use crate::extraction::{ExtractedQuery, VariableMap, parse_variables};

/// Body mime type the API client uses for GraphQL requests.
pub const GRAPHQL_MIME_TYPE: &str = "application/graphql";

/// HTTP method of every exported request.
pub const REQUEST_METHOD: &str = "POST";

/// One importable request.
///
/// Field names and order follow the API client's export format, version 4.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub body: ResourceBody,
    #[serde(rename = "isPrivate")]
    pub is_private: bool,
    pub method: String,
    pub name: String,
    pub url: String,
    #[serde(rename = "_type")]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceBody {
    #[serde(rename = "mimeType")]
    pub mime_type: String,
    /// JSON encoded [`RequestBody`].
    pub text: String,
}

/// Payload stored, already encoded, in [`ResourceBody::text`].
#[derive(Debug, Serialize)]
pub struct RequestBody<'a> {
    pub query: &'a str,
    pub variables: &'a VariableMap,
}

/// Turn an extracted query into a request resource with a fresh id.
pub fn to_resource(query: &ExtractedQuery) -> ResourceRecord {
    let variables = parse_variables(&query.source);
    let body = RequestBody {
        query: &query.text,
        variables: &variables,
    };

    ResourceRecord {
        id: new_request_id(),
        body: ResourceBody {
            mime_type: GRAPHQL_MIME_TYPE.to_owned(),
            text: encode_body(&body),
        },
        is_private: false,
        method: REQUEST_METHOD.to_owned(),
        name: query.name.clone(),
        url: query.url.clone(),
        kind: "request".to_owned(),
    }
}

/// `reg_` followed by a hyphen-free random UUID.
pub fn new_request_id() -> String {
    format!("reg_{}", Uuid::new_v4().simple())
}

fn encode_body(body: &RequestBody<'_>) -> String {
    // Only string keys and string values: serialization cannot fail.
    serde_json::to_string(body).unwrap_or_default()
}
