//! Stage editor of the staged flow.
//!
//! Stages missing a name, description or role are outlined so the operator
//! can see why "Submit" is disabled. The first stages cannot be removed; their
//! delete control is rendered disabled.

use common::model::role::RoleDescriptor;
use common::stages::{StageDraft, StageField};
use common::wizard::WizardController;
use yew::html::Scope;
use yew::prelude::*;

use crate::components::dashboard::{DashboardComponent, Msg};
use crate::helpers::{input_value, select_value};

pub fn view(wizard: &WizardController, link: &Scope<DashboardComponent>) -> Html {
    let Some(stages) = wizard.stages() else {
        return html! {};
    };
    let roles = wizard.matrix().roles();
    let incomplete = stages.incomplete_stages();

    html! {
        <>
            { for stages.stages().iter().enumerate().map(|(index, stage)| {
                build_stage(
                    index,
                    stage,
                    roles,
                    incomplete.contains(&index),
                    stages.is_removable(index),
                    link,
                )
            }) }
            <button class="btn outlined" onclick={link.callback(|_| Msg::AddStage)}>
                {"Add Stage"}
            </button>
        </>
    }
}

fn build_stage(
    index: usize,
    stage: &StageDraft,
    roles: &[RoleDescriptor],
    incomplete: bool,
    removable: bool,
    link: &Scope<DashboardComponent>,
) -> Html {
    let available: Vec<&RoleDescriptor> = roles
        .iter()
        .filter(|r| !stage.assigned_role_ids.contains(&r.id))
        .collect();

    html! {
        <div key={index} class={classes!("stage-row", incomplete.then_some("incomplete"))}>
            <div class="stage-title">
                <strong>{ format!("Stage {}", index + 1) }</strong>
                <span
                    class={classes!("delete", (!removable).then_some("disabled"))}
                    title={if removable { "Delete stage" } else { "This stage cannot be removed" }}
                    onclick={link.batch_callback(move |_: MouseEvent| removable.then_some(Msg::RemoveStage(index)))}
                >
                    {"✕"}
                </span>
            </div>
            <div class="field">
                <input
                    type="text"
                    placeholder="Stage name"
                    value={stage.name.clone()}
                    oninput={link.callback(move |e: InputEvent| Msg::SetStageField {
                        index,
                        field: StageField::Name,
                        value: input_value(&e),
                    })}
                />
            </div>
            <div class="field">
                <input
                    type="text"
                    placeholder="Stage description"
                    value={stage.description.clone()}
                    oninput={link.callback(move |e: InputEvent| Msg::SetStageField {
                        index,
                        field: StageField::Description,
                        value: input_value(&e),
                    })}
                />
            </div>
            <div class="field">
                <div>
                    { for stage.assigned_role_ids.iter().map(|role_id| {
                        let name = roles
                            .iter()
                            .find(|r| &r.id == role_id)
                            .map_or_else(|| role_id.clone(), |r| r.name.clone());
                        let role_id = role_id.clone();
                        html! {
                            <span key={role_id.clone()} class="chip">
                                { name }
                                <span
                                    class="delete"
                                    onclick={link.callback(move |_: MouseEvent| Msg::RemoveStageRole {
                                        index,
                                        role_id: role_id.clone(),
                                    })}
                                >
                                    {" ✕"}
                                </span>
                            </span>
                        }
                    }) }
                </div>
                <select
                    disabled={available.is_empty()}
                    onchange={link.batch_callback(move |e: Event| {
                        let role_id = select_value(&e);
                        (!role_id.is_empty()).then_some(Msg::AddStageRole { index, role_id })
                    })}
                >
                    <option value="" selected={true}>{"Assign role"}</option>
                    { for available.iter().map(|role| html! {
                        <option value={role.id.clone()}>{ role.name.clone() }</option>
                    }) }
                </select>
            </div>
        </div>
    }
}
