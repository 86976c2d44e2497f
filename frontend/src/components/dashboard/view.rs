//! View rendering for the report wizard page.
//!
//! Before a flow is started the page shows the flow picker. Afterwards it
//! shows the progress indicator, the form of the current step and a footer
//! with "Cancel", "Previous" and the primary action of the step
//! ("Next", "Validate" or "Submit").

use common::wizard::{ForwardAction, Step};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::DashboardComponent;
use super::steps;
use crate::components::common::loader::loader;
use crate::components::common::step_progress::StepProgress;
use crate::components::dialogs::add_column::{AddColumnDialog, NewColumn};

pub fn view(component: &DashboardComponent, ctx: &Context<DashboardComponent>) -> Html {
    let link = ctx.link();
    let wizard = &component.wizard;

    html! {
        <div class="form-container">
            <h2>{"Create Report"}</h2>
            {
                match wizard.current_step() {
                    None => steps::flow_selection::view(wizard, link),
                    Some(step) => build_step_page(component, ctx, step),
                }
            }
            <AddColumnDialog
                node_ref={component.add_column_ref.clone()}
                reset_token={component.add_column_token}
                on_add={link.callback(|column: NewColumn| Msg::AddColumn(column))}
                on_cancel={link.callback(|_: ()| Msg::CloseAddColumn)}
            />
            if wizard.is_busy() {
                { loader("Please wait...") }
            }
        </div>
    }
}

fn build_step_page(
    component: &DashboardComponent,
    ctx: &Context<DashboardComponent>,
    step: Step,
) -> Html {
    let link = ctx.link();
    let wizard = &component.wizard;
    let labels: Vec<&'static str> = wizard.steps().iter().map(|s| s.label()).collect();
    let current = wizard.current_step_number().unwrap_or(1) - 1;

    let body = match step {
        Step::SelectDatabase => steps::select_database::view(wizard, &ctx.props().databases, link),
        Step::EnterQuery => steps::enter_query::view(wizard, link),
        Step::ConfigureAccess => steps::configure_access::view(wizard, link),
        Step::CreateStages => steps::create_stages::view(wizard, link),
    };

    html! {
        <>
            <StepProgress steps={labels} current={current} />
            <h3>{ format!("Step {}: {}", current + 1, step.label()) }</h3>
            { body }
            { build_footer(component, link) }
        </>
    }
}

fn build_footer(component: &DashboardComponent, link: &Scope<DashboardComponent>) -> Html {
    let wizard = &component.wizard;
    let busy = wizard.is_busy();
    let primary = wizard.forward_action().map(|action| {
        let onclick = match action {
            ForwardAction::Validate => link.callback(|_: MouseEvent| Msg::Validate),
            ForwardAction::Next | ForwardAction::Submit => link.callback(|_: MouseEvent| Msg::Next),
        };
        html! {
            <button
                class="btn"
                disabled={busy || !wizard.is_current_step_valid()}
                onclick={onclick}
            >
                { action.label() }
            </button>
        }
    });

    html! {
        <div class="footer">
            <button class="btn outlined" disabled={busy} onclick={link.callback(|_| Msg::Cancel)}>
                {"Cancel"}
            </button>
            <div style="flex:1;" />
            if wizard.can_retreat() {
                <button class="btn outlined" disabled={busy} onclick={link.callback(|_| Msg::Previous)}>
                    {"Previous"}
                </button>
            }
            { for primary }
        </div>
    }
}
