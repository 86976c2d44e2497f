//! Step sequencing and form state of the "create report" wizard.
//!
//! [`WizardController`] owns the chosen [`Flow`], the current position in
//! that flow's step list, the [`ReportDraft`] and the [`PermissionMatrix`].
//! The presentation layer renders from it and calls back into it; nothing
//! else mutates wizard state.
//!
//! Network-bound actions are split in two halves so the single-threaded UI
//! never holds the controller across an `await`:
//!
//! - `begin_*` checks preconditions, marks the controller busy and returns a
//!   [`RequestTicket`] with the request body to send;
//! - `finish_*` takes that ticket and the gateway result and applies it.
//!
//! Only the ticket of the request in flight is honored. After [`reset`]
//! (session teardown, or a new wizard run) a late response is reported as
//! [`Completion::Stale`] and touches nothing.
//!
//! [`reset`]: WizardController::reset

mod draft;
mod flow;

use log::{debug, info, warn};

pub use draft::ReportDraft;
pub use flow::{Flow, Step};

use crate::error::WizardError;
use crate::gateway::{GatewayError, ReportGateway};
use crate::model::query::ValidateQueryResponse;
use crate::model::role::RoleDescriptor;
use crate::permissions::PermissionMatrix;
use crate::requests::{CreateReportRequest, ValidateQueryRequest};
use crate::stages::StageList;

/// Identifies the one request the controller is waiting for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestTicket(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingValidation {
    pub ticket: RequestTicket,
    pub request: ValidateQueryRequest,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSubmission {
    pub ticket: RequestTicket,
    pub payload: CreateReportRequest,
}

/// Result of [`WizardController::advance`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// Moved forward to this step.
    Moved(Step),
    /// The current step was the last one; the payload must now be sent.
    Submit(PendingSubmission),
}

/// Whether a `finish_*` call changed anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    /// The response belonged to a request that is no longer awaited.
    Stale,
}

/// What the primary button of the current step does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForwardAction {
    Next,
    Validate,
    Submit,
}

impl ForwardAction {
    pub fn label(self) -> &'static str {
        match self {
            ForwardAction::Next => "Next",
            ForwardAction::Validate => "Validate",
            ForwardAction::Submit => "Submit",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct WizardController {
    flow: Flow,
    /// Index into `flow.steps()`; `None` while the flow screen shows.
    position: Option<usize>,
    draft: ReportDraft,
    matrix: PermissionMatrix,
    in_flight: Option<RequestTicket>,
    issued: u64,
}

impl WizardController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn flow(&self) -> Flow {
        self.flow
    }

    /// Steps of the active flow, in order.
    pub fn steps(&self) -> &'static [Step] {
        self.flow.steps()
    }

    pub fn current_step(&self) -> Option<Step> {
        self.position.and_then(|p| self.steps().get(p).copied())
    }

    /// 1-based number of the current step, `None` on the flow screen.
    pub fn current_step_number(&self) -> Option<usize> {
        self.position.map(|p| p + 1)
    }

    pub fn is_on_flow_screen(&self) -> bool {
        self.position.is_none()
    }

    /// `true` while a validation or submission is in flight.
    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn draft(&self) -> &ReportDraft {
        &self.draft
    }

    pub fn matrix(&self) -> &PermissionMatrix {
        &self.matrix
    }

    pub fn matrix_mut(&mut self) -> &mut PermissionMatrix {
        &mut self.matrix
    }

    pub fn stages(&self) -> Option<&StageList> {
        self.draft.stages.as_ref()
    }

    pub fn stages_mut(&mut self) -> Result<&mut StageList, WizardError> {
        self.draft.stages.as_mut().ok_or(WizardError::NotStaged)
    }

    /// Installs the role catalog, backfilling rows that already exist.
    pub fn set_roles(&mut self, roles: Vec<RoleDescriptor>) {
        self.matrix.set_roles(roles);
    }

    pub fn set_report_name(&mut self, value: impl Into<String>) {
        self.draft.report_name = value.into();
    }

    pub fn set_database(&mut self, value: impl Into<String>) {
        self.draft.database = value.into();
    }

    pub fn set_query(&mut self, value: impl Into<String>) {
        self.draft.query = value.into();
    }

    pub fn select_flow(&mut self, flow: Flow) -> Result<(), WizardError> {
        if !self.is_on_flow_screen() {
            return Err(WizardError::FlowLocked);
        }
        self.flow = flow;
        Ok(())
    }

    /// Leaves the flow screen for the first step of the selected flow.
    pub fn start(&mut self) -> Result<Step, WizardError> {
        if self.flow == Flow::Unselected {
            return Err(WizardError::FlowNotSelected);
        }
        if !self.is_on_flow_screen() {
            return Err(WizardError::FlowLocked);
        }

        self.draft.stages = match self.flow {
            Flow::Staged => Some(StageList::initialize_default()),
            _ => None,
        };
        self.position = Some(0);
        info!("report wizard started ({})", self.flow.label());
        Ok(self.steps()[0])
    }

    pub fn is_step_valid(&self, step: Step) -> bool {
        match step {
            Step::SelectDatabase => self.draft.has_report_name() && self.draft.has_database(),
            Step::EnterQuery => self.draft.has_query(),
            Step::ConfigureAccess => true,
            Step::CreateStages => self.stages().is_some_and(StageList::is_complete),
        }
    }

    pub fn is_current_step_valid(&self) -> bool {
        self.current_step().is_some_and(|s| self.is_step_valid(s))
    }

    fn is_last_step(&self) -> bool {
        self.position
            .is_some_and(|p| p + 1 == self.flow.step_count())
    }

    pub fn forward_action(&self) -> Option<ForwardAction> {
        let step = self.current_step()?;
        Some(if self.is_last_step() {
            ForwardAction::Submit
        } else if step == Step::EnterQuery {
            ForwardAction::Validate
        } else {
            ForwardAction::Next
        })
    }

    /// Whether the "Previous" control is shown at all.
    pub fn can_retreat(&self) -> bool {
        self.position.is_some_and(|p| p > 0)
    }

    fn ensure_idle(&self) -> Result<usize, WizardError> {
        if self.is_busy() {
            return Err(WizardError::Busy);
        }
        self.position.ok_or(WizardError::NotStarted)
    }

    /// Moves forward, or hands back the submission when already on the last step.
    pub fn advance(&mut self) -> Result<Advance, WizardError> {
        let position = self.ensure_idle()?;
        let step = self.steps()[position];
        if !self.is_step_valid(step) {
            return Err(WizardError::StepIncomplete(step));
        }

        if self.is_last_step() {
            return self.begin_submission().map(Advance::Submit);
        }
        Ok(Advance::Moved(self.step_forward()))
    }

    fn step_forward(&mut self) -> Step {
        if let Some(p) = self.position.filter(|_| !self.is_last_step()) {
            self.position = Some(p + 1);
        }
        let step = self.current_step().unwrap_or(Step::SelectDatabase);
        debug!("wizard moved to step {:?}", step);
        step
    }

    pub fn retreat(&mut self) -> Result<Step, WizardError> {
        let position = self.ensure_idle()?;
        self.position = Some(position.saturating_sub(1));
        Ok(self.steps()[position.saturating_sub(1)])
    }

    fn issue_ticket(&mut self) -> RequestTicket {
        self.issued += 1;
        let ticket = RequestTicket(self.issued);
        self.in_flight = Some(ticket);
        ticket
    }

    /// Releases the in-flight slot if `ticket` owns it.
    fn settle(&mut self, ticket: RequestTicket) -> bool {
        if self.in_flight == Some(ticket) {
            self.in_flight = None;
            true
        } else {
            warn!("ignoring response for request {:?}: no longer awaited", ticket);
            false
        }
    }

    pub fn begin_validation(&mut self) -> Result<PendingValidation, WizardError> {
        self.ensure_idle()?;
        if self.current_step() != Some(Step::EnterQuery) {
            return Err(WizardError::NotOnStep(Step::EnterQuery));
        }
        if !self.is_step_valid(Step::SelectDatabase) {
            return Err(WizardError::StepIncomplete(Step::SelectDatabase));
        }
        if !self.is_step_valid(Step::EnterQuery) {
            return Err(WizardError::StepIncomplete(Step::EnterQuery));
        }

        let request = ValidateQueryRequest {
            query: self.draft.query.clone(),
            db_name: self.draft.database.clone(),
        };
        Ok(PendingValidation {
            ticket: self.issue_ticket(),
            request,
        })
    }

    /// Applies a validation result: the matrix is rebuilt and the wizard
    /// moves on, or the error is returned with the step unchanged.
    pub fn finish_validation(
        &mut self,
        ticket: RequestTicket,
        result: Result<ValidateQueryResponse, GatewayError>,
    ) -> Result<Completion, WizardError> {
        if !self.settle(ticket) {
            return Ok(Completion::Stale);
        }
        let response = result?;
        info!("query validated with {} columns", response.columns.len());
        self.matrix.initialize(&response);
        self.step_forward();
        Ok(Completion::Applied)
    }

    /// The create-report payload for the current draft.
    pub fn build_payload(&self) -> CreateReportRequest {
        CreateReportRequest {
            report_name: self.draft.report_name.trim().to_string(),
            sql_script: self.draft.query.clone(),
            columns: self.matrix.to_payload_columns(),
            stages: match self.flow {
                Flow::Staged => Some(
                    self.stages()
                        .map(StageList::to_payload)
                        .unwrap_or_default(),
                ),
                _ => None,
            },
        }
    }

    pub fn begin_submission(&mut self) -> Result<PendingSubmission, WizardError> {
        self.ensure_idle()?;
        if let Some(step) = self.steps().iter().find(|s| !self.is_step_valid(**s)) {
            return Err(WizardError::StepIncomplete(*step));
        }

        let payload = self.build_payload();
        Ok(PendingSubmission {
            ticket: self.issue_ticket(),
            payload,
        })
    }

    /// On success the wizard returns to its initial state; on failure
    /// nothing but the busy flag changes.
    pub fn finish_submission(
        &mut self,
        ticket: RequestTicket,
        result: Result<(), GatewayError>,
    ) -> Result<Completion, WizardError> {
        if !self.settle(ticket) {
            return Ok(Completion::Stale);
        }
        result?;
        info!("report \"{}\" created", self.draft.report_name.trim());
        self.reset();
        Ok(Completion::Applied)
    }

    /// Back to the flow screen with an empty draft and matrix. Any request
    /// in flight is abandoned.
    pub fn reset(&mut self) {
        if let Some(ticket) = self.in_flight.take() {
            debug!("abandoning request {:?}", ticket);
        }
        self.flow = Flow::Unselected;
        self.position = None;
        self.draft = ReportDraft::default();
        self.matrix.clear();
    }

    /// Validates the query through `gateway` and applies the result.
    pub async fn validate_query<G>(&mut self, gateway: &G) -> Result<Completion, WizardError>
    where
        G: ReportGateway + ?Sized,
    {
        let pending = self.begin_validation()?;
        let result = gateway.validate_query(&pending.request).await;
        self.finish_validation(pending.ticket, result)
    }

    /// Sends the assembled report through `gateway` and applies the result.
    pub async fn submit<G>(&mut self, gateway: &G) -> Result<Completion, WizardError>
    where
        G: ReportGateway + ?Sized,
    {
        let pending = self.begin_submission()?;
        let result = gateway.create_report(&pending.payload).await;
        self.finish_submission(pending.ticket, result)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use async_trait::async_trait;

    use super::*;
    use crate::model::database::DatabaseDescriptor;
    use crate::model::report::ReportSummary;
    use crate::stages::StageField;

    #[derive(Default)]
    struct FakeGateway {
        validation: RefCell<Option<Result<ValidateQueryResponse, GatewayError>>>,
        creation: RefCell<Option<Result<(), GatewayError>>>,
        validated: RefCell<Vec<ValidateQueryRequest>>,
        created: RefCell<Vec<CreateReportRequest>>,
    }

    impl FakeGateway {
        fn validating(response: ValidateQueryResponse) -> Self {
            let gateway = Self::default();
            *gateway.validation.borrow_mut() = Some(Ok(response));
            gateway
        }

        fn create_result(&self, result: Result<(), GatewayError>) {
            *self.creation.borrow_mut() = Some(result);
        }
    }

    #[async_trait(?Send)]
    impl ReportGateway for FakeGateway {
        async fn fetch_databases(&self) -> Result<Vec<DatabaseDescriptor>, GatewayError> {
            Ok(vec![DatabaseDescriptor::from_name("db1")])
        }

        async fn fetch_roles(&self) -> Result<Vec<RoleDescriptor>, GatewayError> {
            Ok(roles())
        }

        async fn fetch_reports(&self) -> Result<Vec<ReportSummary>, GatewayError> {
            Ok(Vec::new())
        }

        async fn validate_query(
            &self,
            request: &ValidateQueryRequest,
        ) -> Result<ValidateQueryResponse, GatewayError> {
            self.validated.borrow_mut().push(request.clone());
            self.validation
                .borrow()
                .clone()
                .unwrap_or(Err(GatewayError::Status(500)))
        }

        async fn create_report(&self, request: &CreateReportRequest) -> Result<(), GatewayError> {
            self.created.borrow_mut().push(request.clone());
            self.creation.borrow().clone().unwrap_or(Ok(()))
        }
    }

    fn roles() -> Vec<RoleDescriptor> {
        vec![RoleDescriptor::new("r1", "admin")]
    }

    fn two_columns() -> ValidateQueryResponse {
        ValidateQueryResponse::new([("a", "INTEGER"), ("b", "TEXT")])
    }

    fn started(flow: Flow) -> WizardController {
        let mut wizard = WizardController::new();
        wizard.set_roles(roles());
        wizard.select_flow(flow).unwrap();
        wizard.start().unwrap();
        wizard.set_report_name("Sales");
        wizard.set_database("db1");
        wizard.set_query("SELECT a,b FROM t");
        wizard
    }

    async fn on_access_step(flow: Flow, gateway: &FakeGateway) -> WizardController {
        let mut wizard = started(flow);
        assert_eq!(wizard.advance(), Ok(Advance::Moved(Step::EnterQuery)));
        assert_eq!(wizard.validate_query(gateway).await, Ok(Completion::Applied));
        assert_eq!(wizard.current_step(), Some(Step::ConfigureAccess));
        wizard
    }

    fn complete_stages(wizard: &mut WizardController) {
        let stages = wizard.stages_mut().unwrap();
        for (i, name) in ["Review", "Publish"].into_iter().enumerate() {
            stages.update_field(i, StageField::Name, name).unwrap();
            stages
                .update_field(i, StageField::Description, format!("{name} the data"))
                .unwrap();
            stages.update_roles(i, vec!["r1".to_string()]).unwrap();
        }
    }

    #[test]
    fn start_requires_a_flow() {
        let mut wizard = WizardController::new();
        assert!(wizard.is_on_flow_screen());
        assert_eq!(wizard.start(), Err(WizardError::FlowNotSelected));
        assert_eq!(wizard.current_step_number(), None);

        wizard.select_flow(Flow::Interactive).unwrap();
        assert!(wizard.is_on_flow_screen());
        assert_eq!(wizard.start(), Ok(Step::SelectDatabase));
        assert_eq!(wizard.current_step_number(), Some(1));
        assert_eq!(wizard.select_flow(Flow::Staged), Err(WizardError::FlowLocked));
    }

    #[test]
    fn staged_flow_seeds_two_stages() {
        let wizard = started(Flow::Staged);
        assert_eq!(wizard.steps().len(), 4);
        assert_eq!(wizard.stages().map(StageList::len), Some(2));

        let interactive = started(Flow::Interactive);
        assert_eq!(interactive.steps().len(), 3);
        assert!(interactive.stages().is_none());
    }

    #[test]
    fn first_step_needs_name_and_database() {
        let mut wizard = started(Flow::Interactive);
        wizard.set_report_name("");
        for database in ["", "db1"] {
            wizard.set_database(database);
            assert!(!wizard.is_step_valid(Step::SelectDatabase));
        }
        assert_eq!(
            wizard.advance(),
            Err(WizardError::StepIncomplete(Step::SelectDatabase))
        );
        assert_eq!(wizard.current_step_number(), Some(1));

        wizard.set_report_name("Sales");
        assert!(wizard.is_step_valid(Step::SelectDatabase));
    }

    #[test]
    fn query_and_access_rules() {
        let mut wizard = started(Flow::Interactive);
        wizard.set_query("  ");
        assert!(!wizard.is_step_valid(Step::EnterQuery));
        assert!(wizard.is_step_valid(Step::ConfigureAccess));
        wizard.advance().unwrap();
        assert_eq!(
            wizard.begin_validation(),
            Err(WizardError::StepIncomplete(Step::EnterQuery))
        );
    }

    #[test]
    fn forward_action_follows_the_flow() {
        let mut wizard = started(Flow::Staged);
        assert_eq!(wizard.forward_action(), Some(ForwardAction::Next));
        wizard.advance().unwrap();
        assert_eq!(wizard.forward_action(), Some(ForwardAction::Validate));
        wizard.advance().unwrap();
        assert_eq!(wizard.forward_action(), Some(ForwardAction::Next));
        wizard.advance().unwrap();
        assert_eq!(wizard.current_step(), Some(Step::CreateStages));
        assert_eq!(wizard.forward_action(), Some(ForwardAction::Submit));
    }

    #[test]
    fn retreat_stops_at_first_step() {
        let mut wizard = started(Flow::Interactive);
        assert!(!wizard.can_retreat());
        wizard.advance().unwrap();
        assert!(wizard.can_retreat());
        assert_eq!(wizard.retreat(), Ok(Step::SelectDatabase));
        assert_eq!(wizard.retreat(), Ok(Step::SelectDatabase));
        assert_eq!(wizard.current_step_number(), Some(1));
    }

    #[tokio::test]
    async fn validation_builds_matrix_and_advances() {
        let gateway = FakeGateway::validating(two_columns());
        let mut wizard = started(Flow::Interactive);
        wizard.advance().unwrap();

        assert_eq!(wizard.validate_query(&gateway).await, Ok(Completion::Applied));

        assert_eq!(
            gateway.validated.borrow().as_slice(),
            [ValidateQueryRequest {
                query: "SELECT a,b FROM t".to_string(),
                db_name: "db1".to_string(),
            }]
        );
        assert_eq!(wizard.current_step(), Some(Step::ConfigureAccess));
        let rows = wizard.matrix().rows();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.permission.len() == 1 && !r.is_writable_by("r1")));
        assert!(!wizard.is_busy());
    }

    #[tokio::test]
    async fn failed_validation_keeps_the_step() {
        let gateway = FakeGateway::default();
        *gateway.validation.borrow_mut() = Some(Err(GatewayError::Rejected {
            status: 400,
            message: "relation \"t\" does not exist".to_string(),
        }));
        let mut wizard = started(Flow::Interactive);
        wizard.advance().unwrap();

        let err = wizard.validate_query(&gateway).await.unwrap_err();
        assert_eq!(err.user_message(), "relation \"t\" does not exist");
        assert_eq!(wizard.current_step(), Some(Step::EnterQuery));
        assert!(wizard.matrix().is_empty());
        assert!(!wizard.is_busy());
    }

    #[test]
    fn busy_wizard_rejects_navigation() {
        let mut wizard = started(Flow::Interactive);
        wizard.advance().unwrap();
        let pending = wizard.begin_validation().unwrap();

        assert!(wizard.is_busy());
        assert_eq!(wizard.advance(), Err(WizardError::Busy));
        assert_eq!(wizard.retreat(), Err(WizardError::Busy));
        assert_eq!(wizard.begin_validation(), Err(WizardError::Busy));

        wizard
            .finish_validation(pending.ticket, Ok(two_columns()))
            .unwrap();
        assert!(!wizard.is_busy());
    }

    #[tokio::test]
    async fn last_step_submits_instead_of_moving() {
        let gateway = FakeGateway::validating(two_columns());
        let mut wizard = on_access_step(Flow::Interactive, &gateway).await;

        let pending = match wizard.advance() {
            Ok(Advance::Submit(pending)) => pending,
            other => panic!("expected submission, got {other:?}"),
        };
        assert_eq!(wizard.current_step_number(), Some(3));
        assert!(wizard.is_busy());
        assert_eq!(pending.payload.stages, None);

        assert_eq!(
            wizard.finish_submission(pending.ticket, Ok(())),
            Ok(Completion::Applied)
        );
        assert!(wizard.is_on_flow_screen());
        assert_eq!(wizard.flow(), Flow::Unselected);
        assert_eq!(wizard.draft(), &ReportDraft::default());
        assert!(wizard.matrix().is_empty());
    }

    #[tokio::test]
    async fn staged_last_step_submits_instead_of_moving() {
        let gateway = FakeGateway::validating(two_columns());
        let mut wizard = on_access_step(Flow::Staged, &gateway).await;
        wizard.advance().unwrap();
        complete_stages(&mut wizard);

        let pending = match wizard.advance() {
            Ok(Advance::Submit(pending)) => pending,
            other => panic!("expected submission, got {other:?}"),
        };
        assert_eq!(wizard.current_step(), Some(Step::CreateStages));
        assert_eq!(wizard.current_step_number(), Some(4));
        assert_eq!(pending.payload.stages.as_ref().map(Vec::len), Some(2));

        assert_eq!(
            wizard.finish_submission(pending.ticket, Ok(())),
            Ok(Completion::Applied)
        );
        assert_eq!(wizard.flow(), Flow::Unselected);
        assert!(wizard.stages().is_none());
    }

    #[test]
    fn validation_only_starts_on_the_query_step() {
        let mut wizard = started(Flow::Interactive);
        assert_eq!(
            wizard.begin_validation(),
            Err(WizardError::NotOnStep(Step::EnterQuery))
        );
        assert!(!wizard.is_busy());
        assert!(wizard.matrix().is_empty());

        wizard.advance().unwrap();
        let pending = wizard.begin_validation().unwrap();
        wizard
            .finish_validation(pending.ticket, Ok(two_columns()))
            .unwrap();
        assert_eq!(
            wizard.begin_validation(),
            Err(WizardError::NotOnStep(Step::EnterQuery))
        );
    }

    #[test]
    fn repeated_column_names_stay_separate_rows() {
        let mut wizard = started(Flow::Interactive);
        wizard.advance().unwrap();
        let pending = wizard.begin_validation().unwrap();
        let self_join = ValidateQueryResponse::new([("id", "INTEGER"), ("id", "INTEGER")]);
        wizard.finish_validation(pending.ticket, Ok(self_join)).unwrap();
        assert_eq!(wizard.matrix().len(), 2);

        assert!(wizard.matrix_mut().toggle(1, "r1").unwrap());
        let rows = wizard.matrix().rows();
        assert!(!rows[0].is_writable_by("r1"));
        assert!(rows[1].is_writable_by("r1"));

        let removed = wizard.matrix_mut().delete_column(0).unwrap();
        assert!(!removed.is_writable_by("r1"));
        let rows = wizard.matrix().rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].column_name, "id");
        assert!(rows[0].is_writable_by("r1"));
    }

    #[tokio::test]
    async fn interactive_payload_has_no_stages() {
        let gateway = FakeGateway::validating(two_columns());
        let mut wizard = on_access_step(Flow::Interactive, &gateway).await;
        wizard.matrix_mut().toggle(1, "r1").unwrap();
        wizard.matrix_mut().add_column("notes", "TEXT").unwrap();

        assert_eq!(wizard.submit(&gateway).await, Ok(Completion::Applied));

        let created = gateway.created.borrow();
        let payload = &created[0];
        assert_eq!(payload.report_name, "Sales");
        assert_eq!(payload.sql_script, "SELECT a,b FROM t");
        assert!(payload.stages.is_none());
        assert_eq!(payload.columns.len(), 3);
        assert!(payload.columns[0].writable_by.is_empty());
        assert_eq!(payload.columns[1].writable_by, vec!["r1".to_string()]);
        let json = serde_json::to_value(payload).unwrap();
        assert!(json.get("stages").is_none());
    }

    #[tokio::test]
    async fn staged_payload_carries_stages() {
        let gateway = FakeGateway::validating(two_columns());
        let mut wizard = on_access_step(Flow::Staged, &gateway).await;
        assert_eq!(wizard.advance(), Ok(Advance::Moved(Step::CreateStages)));

        assert_eq!(
            wizard.advance(),
            Err(WizardError::StepIncomplete(Step::CreateStages))
        );
        complete_stages(&mut wizard);
        assert!(wizard.is_current_step_valid());

        assert_eq!(wizard.submit(&gateway).await, Ok(Completion::Applied));
        let created = gateway.created.borrow();
        let stages = created[0].stages.as_ref().unwrap();
        assert_eq!(stages.len(), 2);
        assert_eq!(stages[0].name, "Review");
        assert_eq!(stages[1].roles, vec!["r1".to_string()]);
    }

    #[tokio::test]
    async fn failed_submission_changes_nothing() {
        let gateway = FakeGateway::validating(two_columns());
        let mut wizard = on_access_step(Flow::Interactive, &gateway).await;
        wizard.matrix_mut().toggle(0, "r1").unwrap();
        gateway.create_result(Err(GatewayError::Transport("offline".to_string())));
        let before = (
            wizard.flow(),
            wizard.current_step_number(),
            wizard.draft().clone(),
            wizard.matrix().clone(),
        );

        let err = wizard.submit(&gateway).await.unwrap_err();
        assert!(matches!(err, WizardError::Gateway(GatewayError::Transport(_))));

        let after = (
            wizard.flow(),
            wizard.current_step_number(),
            wizard.draft().clone(),
            wizard.matrix().clone(),
        );
        assert_eq!(before, after);
        assert!(!wizard.is_busy());

        gateway.create_result(Ok(()));
        assert_eq!(wizard.submit(&gateway).await, Ok(Completion::Applied));
        assert_eq!(gateway.created.borrow().len(), 2);
    }

    #[test]
    fn removed_stage_is_no_longer_validated() {
        let mut wizard = started(Flow::Staged);
        complete_stages(&mut wizard);
        let stages = wizard.stages_mut().unwrap();
        stages.update_field(1, StageField::Name, "").unwrap();
        assert!(!wizard.is_step_valid(Step::CreateStages));

        let mut unprotected = StageList::unprotected();
        unprotected
            .update_field(0, StageField::Name, "Review")
            .unwrap();
        unprotected
            .update_field(0, StageField::Description, "Check totals")
            .unwrap();
        unprotected.update_roles(0, vec!["r1".to_string()]).unwrap();
        unprotected.remove_stage(1).unwrap();
        wizard.draft.stages = Some(unprotected);

        assert_eq!(wizard.stages().map(StageList::len), Some(1));
        assert!(wizard.is_step_valid(Step::CreateStages));
    }

    #[test]
    fn stages_are_unavailable_in_interactive_flow() {
        let mut wizard = started(Flow::Interactive);
        assert_eq!(wizard.stages_mut().err(), Some(WizardError::NotStaged));
    }

    #[test]
    fn roles_arriving_after_validation_are_backfilled() {
        let mut wizard = WizardController::new();
        wizard.select_flow(Flow::Interactive).unwrap();
        wizard.start().unwrap();
        wizard.set_report_name("Sales");
        wizard.set_database("db1");
        wizard.set_query("SELECT a,b FROM t");
        wizard.advance().unwrap();

        let pending = wizard.begin_validation().unwrap();
        wizard
            .finish_validation(pending.ticket, Ok(two_columns()))
            .unwrap();
        assert!(wizard.matrix().rows()[0].permission.is_empty());

        wizard.set_roles(roles());
        assert!(wizard
            .matrix()
            .rows()
            .iter()
            .all(|r| r.permission.get("r1") == Some(&false)));
    }

    #[test]
    fn late_response_after_reset_is_ignored() {
        let mut wizard = started(Flow::Interactive);
        wizard.advance().unwrap();
        let pending = wizard.begin_validation().unwrap();

        wizard.reset();
        assert!(!wizard.is_busy());

        assert_eq!(
            wizard.finish_validation(pending.ticket, Ok(two_columns())),
            Ok(Completion::Stale)
        );
        assert!(wizard.is_on_flow_screen());
        assert!(wizard.matrix().is_empty());
        assert_eq!(wizard.draft(), &ReportDraft::default());
    }

    #[test]
    fn stale_ticket_does_not_settle_a_newer_request() {
        let mut wizard = started(Flow::Interactive);
        wizard.advance().unwrap();
        let old = wizard.begin_validation().unwrap();
        wizard.reset();

        wizard.select_flow(Flow::Interactive).unwrap();
        wizard.start().unwrap();
        wizard.set_report_name("Sales");
        wizard.set_database("db1");
        wizard.set_query("SELECT 1");
        wizard.advance().unwrap();
        let current = wizard.begin_validation().unwrap();
        assert_ne!(old.ticket, current.ticket);

        assert_eq!(
            wizard.finish_validation(old.ticket, Err(GatewayError::Status(500))),
            Ok(Completion::Stale)
        );
        assert!(wizard.is_busy());
        assert_eq!(
            wizard.finish_validation(current.ticket, Ok(two_columns())),
            Ok(Completion::Applied)
        );
    }

    #[test]
    fn reset_keeps_role_catalog() {
        let mut wizard = started(Flow::Staged);
        wizard.reset();
        assert_eq!(wizard.flow(), Flow::Unselected);
        assert!(wizard.stages().is_none());
        assert_eq!(wizard.matrix().roles(), roles().as_slice());
    }
}
