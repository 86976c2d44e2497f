use async_trait::async_trait;
use gloo_console::{log, warn};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use common::config::{normalize_base_url, AppConfig, APP_CONFIG_PATH};
use common::gateway::{GatewayError, ReportGateway};
use common::model::database::{DatabaseDescriptor, DatabaseNamesResponse};
use common::model::query::ValidateQueryResponse;
use common::model::report::ReportSummary;
use common::model::role::{RoleDescriptor, RolesResponse};
use common::requests::{CreateReportRequest, ValidateQueryRequest};

const DB_NAMES_PATH: &str = "/dbnames";
const ROLES_PATH: &str = "/roles";
const REPORTS_PATH: &str = "/reports";
const VALIDATE_QUERY_PATH: &str = "/validate-sql-query";
const CREATE_REPORT_PATH: &str = "/create-report";

/// `fetch`-backed gateway rooted at the report service base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpGateway {
    base_url: String,
}

impl HttpGateway {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: normalize_base_url(base_url),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, GatewayError> {
        let response = Request::get(&self.url(path))
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;
        read_json(response).await
    }
}

/// Turns a non-2xx response into its `GatewayError`.
async fn check_status(response: Response) -> Result<Response, GatewayError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(GatewayError::from_response(status, &body))
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, GatewayError> {
    check_status(response)
        .await?
        .json::<T>()
        .await
        .map_err(|e| GatewayError::Decode(e.to_string()))
}

#[async_trait(?Send)]
impl ReportGateway for HttpGateway {
    async fn fetch_databases(&self) -> Result<Vec<DatabaseDescriptor>, GatewayError> {
        let names: DatabaseNamesResponse = self.get_json(DB_NAMES_PATH).await?;
        Ok(names.into_descriptors())
    }

    async fn fetch_roles(&self) -> Result<Vec<RoleDescriptor>, GatewayError> {
        let roles: RolesResponse = self.get_json(ROLES_PATH).await?;
        Ok(roles.roles)
    }

    async fn fetch_reports(&self) -> Result<Vec<ReportSummary>, GatewayError> {
        self.get_json(REPORTS_PATH).await
    }

    async fn validate_query(
        &self,
        request: &ValidateQueryRequest,
    ) -> Result<ValidateQueryResponse, GatewayError> {
        let response = Request::post(&self.url(VALIDATE_QUERY_PATH))
            .json(request)
            .map_err(|e| GatewayError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;
        read_json(response).await
    }

    async fn create_report(&self, request: &CreateReportRequest) -> Result<(), GatewayError> {
        log!(format!(
            "creating report \"{}\" with {} columns",
            request.report_name,
            request.columns.len()
        ));
        let response = Request::post(&self.url(CREATE_REPORT_PATH))
            .json(request)
            .map_err(|e| GatewayError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;
        check_status(response).await.map(|_| ())
    }
}

/// Reads the host's `/app-config`, falling back to the built-in default.
///
/// Running the app from a plain static server (no host) is expected to land
/// in the fallback.
pub async fn load_app_config() -> AppConfig {
    let response = match Request::get(APP_CONFIG_PATH).send().await {
        Ok(response) => response,
        Err(err) => {
            warn!("app config unavailable, using default:", err.to_string());
            return AppConfig::default();
        }
    };
    match read_json::<AppConfig>(response).await {
        Ok(config) => AppConfig::new(config.api_base_url),
        Err(err) => {
            warn!("app config unreadable, using default:", err.to_string());
            AppConfig::default()
        }
    }
}
