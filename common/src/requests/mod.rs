use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Request payload for `POST /validate-sql-query`.
pub struct ValidateQueryRequest {
    pub query: String,
    pub db_name: String,
}

/// Request payload for `POST /create-report`.
///
/// `stages` is only serialized for the staged flow; the interactive flow
/// sends no `stages` key at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReportRequest {
    pub report_name: String,
    pub sql_script: String,
    pub columns: Vec<ColumnPayload>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stages: Option<Vec<StagePayload>>,
}

/// A report column and the role ids allowed to write it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnPayload {
    pub name: String,
    #[serde(rename = "type")]
    pub data_type: String,
    #[serde(rename = "writableBy")]
    pub writable_by: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StagePayload {
    pub name: String,
    pub description: String,
    pub roles: Vec<String>,
}
