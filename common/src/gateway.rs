//! Boundary to the report service.
//!
//! The service is an opaque REST collaborator. [`ReportGateway`] names the
//! five calls the app makes; the browser implementation lives in the
//! frontend crate, tests use in-memory fakes.
//!
//! Calls are single-shot: no retry, no timeout tuning, no cancellation. A
//! failed call is reported and the operator re-triggers the action.

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use crate::model::database::DatabaseDescriptor;
use crate::model::query::ValidateQueryResponse;
use crate::model::report::ReportSummary;
use crate::model::role::RoleDescriptor;
use crate::requests::{CreateReportRequest, ValidateQueryRequest};

/// Shown when the service fails without saying why.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong, please try again later";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// The request never produced a response (offline, CORS, DNS...).
    #[error("network error: {0}")]
    Transport(String),
    /// Non-success status with an `{"error": "..."}` body.
    #[error("{message}")]
    Rejected { status: u16, message: String },
    /// Non-success status without a usable message.
    #[error("request failed with status {0}")]
    Status(u16),
    /// Success status but the body did not have the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

impl GatewayError {
    /// Classifies a non-success response from its status and raw body.
    pub fn from_response(status: u16, body: &str) -> Self {
        match parse_error_message(body) {
            Some(message) => GatewayError::Rejected { status, message },
            None => GatewayError::Status(status),
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            GatewayError::Transport(_) => {
                "Unable to reach the report service, please try again later".to_string()
            }
            GatewayError::Rejected { message, .. } => message.clone(),
            GatewayError::Status(_) | GatewayError::Decode(_) => {
                GENERIC_FAILURE_MESSAGE.to_string()
            }
        }
    }
}

/// Extracts a non-blank `error` field from a JSON error body.
pub fn parse_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .map(|b| b.error.trim().to_string())
        .filter(|m| !m.is_empty())
}

/// The report service as seen by the wizard.
///
/// Futures are not `Send`: the browser polls them on its only thread.
#[async_trait(?Send)]
pub trait ReportGateway {
    async fn fetch_databases(&self) -> Result<Vec<DatabaseDescriptor>, GatewayError>;

    async fn fetch_roles(&self) -> Result<Vec<RoleDescriptor>, GatewayError>;

    async fn fetch_reports(&self) -> Result<Vec<ReportSummary>, GatewayError>;

    async fn validate_query(
        &self,
        request: &ValidateQueryRequest,
    ) -> Result<ValidateQueryResponse, GatewayError>;

    async fn create_report(&self, request: &CreateReportRequest) -> Result<(), GatewayError>;
}
