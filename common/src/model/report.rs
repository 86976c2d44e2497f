use serde::{Deserialize, Serialize};

/// One entry of `GET /reports`, listed on the reports page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub name: String,
    pub url: String,
    pub id: String,
}
