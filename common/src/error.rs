use thiserror::Error;

use crate::gateway::GatewayError;
use crate::wizard::Step;

/// Everything that can stop a wizard action.
///
/// None of these leave the wizard in a partially updated state: an action
/// either applies completely or returns one of these and changes nothing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error("choose a report flow first")]
    FlowNotSelected,
    #[error("the flow cannot change once the wizard has started")]
    FlowLocked,
    #[error("the wizard has not been started")]
    NotStarted,
    #[error("step \"{0}\" has missing fields")]
    StepIncomplete(Step),
    #[error("the query can only be validated on step \"{0}\"")]
    NotOnStep(Step),
    #[error("another request is still in progress")]
    Busy,
    #[error("Column already exist: {0}")]
    DuplicateColumn(String),
    #[error("column name must not be empty")]
    EmptyColumnName,
    #[error("column data type must not be empty")]
    EmptyDataType,
    #[error("no column at row {index} (matrix has {len} rows)")]
    RowOutOfBounds { index: usize, len: usize },
    #[error("unknown role: {0}")]
    UnknownRole(String),
    #[error("no stage at position {index} (list has {len} stages)")]
    StageOutOfBounds { index: usize, len: usize },
    #[error("stage {} cannot be removed", .0 + 1)]
    ProtectedStage(usize),
    #[error("stages are only available in the staged flow")]
    NotStaged,
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

impl WizardError {
    /// Text shown to the operator in a toast.
    pub fn user_message(&self) -> String {
        match self {
            WizardError::Gateway(err) => err.user_message(),
            other => other.to_string(),
        }
    }
}
