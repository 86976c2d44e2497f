use common::model::database::DatabaseDescriptor;
use common::wizard::WizardController;
use yew::html::Scope;
use yew::prelude::*;

use crate::components::dashboard::{DashboardComponent, Msg};
use crate::helpers::{input_value, select_value};

pub fn view(
    wizard: &WizardController,
    databases: &[DatabaseDescriptor],
    link: &Scope<DashboardComponent>,
) -> Html {
    let draft = wizard.draft();

    html! {
        <>
            <div class="field">
                <label for="report-name">{"Report name"}</label>
                <input
                    id="report-name"
                    type="text"
                    placeholder="Enter report name"
                    value={draft.report_name.clone()}
                    oninput={link.callback(|e: InputEvent| Msg::SetReportName(input_value(&e)))}
                />
            </div>
            <div class="field">
                <label for="database">{"Database"}</label>
                <select
                    id="database"
                    onchange={link.callback(|e: Event| Msg::SetDatabase(select_value(&e)))}
                >
                    <option value="" selected={draft.database.is_empty()} disabled={true}>
                        {"Select database"}
                    </option>
                    { for databases.iter().map(|db| html! {
                        <option value={db.value.clone()} selected={draft.database == db.value}>
                            { db.label.clone() }
                        </option>
                    }) }
                </select>
                if databases.is_empty() {
                    <small>{"No databases available yet."}</small>
                }
            </div>
        </>
    }
}
