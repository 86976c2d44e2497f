use common::gateway::GatewayError;
use common::model::query::ValidateQueryResponse;
use common::stages::StageField;
use common::wizard::{Flow, RequestTicket};

use crate::components::dialogs::add_column::NewColumn;

pub enum Msg {
    SelectFlow(Flow),
    Start,
    Cancel,
    SetReportName(String),
    SetDatabase(String),
    SetQuery(String),
    Next,
    Previous,
    Validate,
    ValidationFinished(RequestTicket, Result<ValidateQueryResponse, GatewayError>),
    SubmissionFinished(RequestTicket, Result<(), GatewayError>),
    TogglePermission { row: usize, role_id: String },
    DeleteColumn(usize),
    OpenAddColumn,
    CloseAddColumn,
    AddColumn(NewColumn),
    SetStageField { index: usize, field: StageField, value: String },
    AddStageRole { index: usize, role_id: String },
    RemoveStageRole { index: usize, role_id: String },
    AddStage,
    RemoveStage(usize),
}
