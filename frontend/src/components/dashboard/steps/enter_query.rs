use common::wizard::WizardController;
use yew::html::Scope;
use yew::prelude::*;

use crate::components::dashboard::{DashboardComponent, Msg};
use crate::helpers::textarea_value;

/// SQL editor. The query is sent as typed; the service validates it.
pub fn view(wizard: &WizardController, link: &Scope<DashboardComponent>) -> Html {
    html! {
        <div class="field">
            <label for="sql-query">{ format!("Query on {}", wizard.draft().database) }</label>
            <textarea
                id="sql-query"
                rows="12"
                spellcheck="false"
                placeholder="SELECT ..."
                value={wizard.draft().query.clone()}
                oninput={link.callback(|e: InputEvent| Msg::SetQuery(textarea_value(&e)))}
            />
        </div>
    }
}
