//! Column-by-role grid. Each checkbox flips one cell; every row can be
//! deleted; "+ Add Column" opens the dialog sheet.
//!
//! Rows are keyed by position: a query may return the same column name twice.

use common::wizard::WizardController;
use yew::html::Scope;
use yew::prelude::*;

use crate::components::dashboard::{DashboardComponent, Msg};

pub fn view(wizard: &WizardController, link: &Scope<DashboardComponent>) -> Html {
    let matrix = wizard.matrix();
    let roles = matrix.roles();

    html! {
        <>
            <table class="table">
                <thead>
                    <tr>
                        <th>{"Column"}</th>
                        <th>{"Type"}</th>
                        { for roles.iter().map(|role| html! { <th key={role.id.clone()}>{ role.name.clone() }</th> }) }
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    { for matrix.rows().iter().enumerate().map(|(index, row)| html! {
                        <tr key={index}>
                            <td>
                                { row.column_name.clone() }
                                if row.is_user_added {
                                    <span class="chip">{"added"}</span>
                                }
                            </td>
                            <td>{ row.data_type.clone() }</td>
                            { for roles.iter().map(|role| {
                                let role_id = role.id.clone();
                                html! {
                                    <td key={role.id.clone()}>
                                        <input
                                            type="checkbox"
                                            checked={row.is_writable_by(&role.id)}
                                            onchange={link.callback(move |_: Event| Msg::TogglePermission {
                                                row: index,
                                                role_id: role_id.clone(),
                                            })}
                                        />
                                    </td>
                                }
                            }) }
                            <td>
                                <span
                                    class="delete"
                                    title="Delete column"
                                    onclick={link.callback(move |_: MouseEvent| Msg::DeleteColumn(index))}
                                >
                                    {"✕"}
                                </span>
                            </td>
                        </tr>
                    }) }
                </tbody>
            </table>
            if matrix.is_empty() {
                <p>{"The query returned no columns."}</p>
            }
            <button class="btn outlined" onclick={link.callback(|_| Msg::OpenAddColumn)}>
                {"+ Add Column"}
            </button>
        </>
    }
}
