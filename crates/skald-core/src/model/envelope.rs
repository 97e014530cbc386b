//! Response envelopes.

use serde::Deserialize;

/// Success envelope: `{ "data": T, "meta": { ... } }`.
///
/// The gateway validates this shape at the boundary; a success-coded body
/// that does not parse into it is reported as a malformed response instead
/// of surfacing as a field-access failure later.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
    #[serde(default)]
    pub meta: Option<ResponseMeta>,
}

/// Pagination metadata the API attaches to list responses. Single-object
/// responses carry an empty `meta`, so every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseMeta {
    #[serde(default)]
    pub is_first_page: Option<bool>,
    #[serde(default)]
    pub is_last_page: Option<bool>,
    #[serde(default)]
    pub current_page: Option<u32>,
    #[serde(default)]
    pub previous_page: Option<u32>,
    #[serde(default)]
    pub next_page: Option<u32>,
    #[serde(default)]
    pub page_count: Option<u32>,
    #[serde(default)]
    pub total_count: Option<u64>,
}

/// Error envelope: `{ "errors": [{ "message": ... }], "status": ..., "statusCode": ... }`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorEnvelope {
    #[serde(default)]
    pub errors: Vec<ApiErrorBody>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub status_code: Option<u16>,
}

/// A single structured error from the API.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub message: String,
    #[serde(default)]
    pub code: Option<String>,
}
