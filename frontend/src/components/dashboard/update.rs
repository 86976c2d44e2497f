//! Update function for the report wizard page.
//!
//! Every message is translated into a `WizardController` call. Network-bound
//! actions use the controller's begin/finish split: the `begin_*` result is
//! sent from a `spawn_local` task and comes back as a `*Finished` message
//! carrying the request ticket.
//!
//! Rejected actions never change state; they only raise a toast.

use common::gateway::ReportGateway;
use common::wizard::{Advance, Completion, PendingSubmission};
use common::WizardError;
use gloo_console::warn;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::helpers::{show_error_toast, show_toast};
use crate::tops_sheet::modal_sheet::{close_sheet, open_sheet};

use super::messages::Msg;
use super::state::DashboardComponent;

pub fn update(component: &mut DashboardComponent, ctx: &Context<DashboardComponent>, msg: Msg) -> bool {
    match msg {
        Msg::SelectFlow(flow) => report(component.wizard.select_flow(flow)),
        Msg::Start => report(component.wizard.start()),
        Msg::Cancel => {
            component.wizard.reset();
            true
        }
        Msg::SetReportName(value) => {
            component.wizard.set_report_name(value);
            true
        }
        Msg::SetDatabase(value) => {
            component.wizard.set_database(value);
            true
        }
        Msg::SetQuery(value) => {
            component.wizard.set_query(value);
            true
        }
        Msg::Previous => report(component.wizard.retreat()),
        Msg::Next => match component.wizard.advance() {
            Ok(Advance::Moved(_)) => true,
            Ok(Advance::Submit(pending)) => {
                send_submission(ctx, pending);
                true
            }
            Err(err) => report::<()>(Err(err)),
        },
        Msg::Validate => match component.wizard.begin_validation() {
            Ok(pending) => {
                let gateway = ctx.props().gateway.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = gateway.validate_query(&pending.request).await;
                    link.send_message(Msg::ValidationFinished(pending.ticket, result));
                });
                true
            }
            Err(err) => report::<()>(Err(err)),
        },
        Msg::ValidationFinished(ticket, result) => {
            match component.wizard.finish_validation(ticket, result) {
                Ok(Completion::Applied) => show_toast("Query validated Successfully"),
                Ok(Completion::Stale) => warn!("dropped a stale validation response"),
                Err(err) => show_error_toast(&err.user_message()),
            }
            true
        }
        Msg::SubmissionFinished(ticket, result) => {
            match component.wizard.finish_submission(ticket, result) {
                Ok(Completion::Applied) => {
                    show_toast("Report created successfully");
                    component.add_column_token += 1;
                    ctx.props().on_report_created.emit(());
                }
                Ok(Completion::Stale) => warn!("dropped a stale create-report response"),
                Err(err) => show_error_toast(&err.user_message()),
            }
            true
        }
        Msg::TogglePermission { row, role_id } => {
            report(component.wizard.matrix_mut().toggle(row, &role_id))
        }
        Msg::DeleteColumn(row) => report(component.wizard.matrix_mut().delete_column(row)),
        Msg::OpenAddColumn => {
            open_sheet(&component.add_column_ref);
            false
        }
        Msg::CloseAddColumn => {
            close_sheet(&component.add_column_ref);
            component.add_column_token += 1;
            true
        }
        Msg::AddColumn(column) => {
            match component
                .wizard
                .matrix_mut()
                .add_column(&column.name, &column.data_type)
            {
                Ok(()) => {
                    close_sheet(&component.add_column_ref);
                    component.add_column_token += 1;
                }
                Err(err) => show_error_toast(&err.user_message()),
            }
            true
        }
        Msg::SetStageField { index, field, value } => report(
            component
                .wizard
                .stages_mut()
                .and_then(|stages| stages.update_field(index, field, value)),
        ),
        Msg::AddStageRole { index, role_id } => report(
            component
                .wizard
                .stages_mut()
                .and_then(|stages| stages.add_role(index, &role_id)),
        ),
        Msg::RemoveStageRole { index, role_id } => report(
            component
                .wizard
                .stages_mut()
                .and_then(|stages| stages.remove_role(index, &role_id)),
        ),
        Msg::AddStage => report(component.wizard.stages_mut().map(|stages| stages.add_stage())),
        Msg::RemoveStage(index) => report(
            component
                .wizard
                .stages_mut()
                .and_then(|stages| stages.remove_stage(index)),
        ),
    }
}

/// Re-renders on success, toasts the error otherwise.
fn report<T>(result: Result<T, WizardError>) -> bool {
    match result {
        Ok(_) => true,
        Err(err) => {
            show_error_toast(&err.user_message());
            false
        }
    }
}

fn send_submission(ctx: &Context<DashboardComponent>, pending: PendingSubmission) {
    let gateway = ctx.props().gateway.clone();
    let link = ctx.link().clone();
    spawn_local(async move {
        let result = gateway.create_report(&pending.payload).await;
        link.send_message(Msg::SubmissionFinished(pending.ticket, result));
    });
}
