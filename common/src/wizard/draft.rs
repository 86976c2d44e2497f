use crate::stages::StageList;

/// The report being composed. Owned by the wizard for one session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportDraft {
    pub report_name: String,
    /// `value` of the chosen database.
    pub database: String,
    pub query: String,
    /// Present only under the staged flow.
    pub stages: Option<StageList>,
}

impl ReportDraft {
    pub fn has_report_name(&self) -> bool {
        !self.report_name.trim().is_empty()
    }

    pub fn has_database(&self) -> bool {
        !self.database.trim().is_empty()
    }

    pub fn has_query(&self) -> bool {
        !self.query.trim().is_empty()
    }
}
