use common::wizard::{Flow, WizardController};
use yew::html::Scope;
use yew::prelude::*;

use crate::components::dashboard::{DashboardComponent, Msg};

/// The two flow cards and the "Start" button.
pub fn view(wizard: &WizardController, link: &Scope<DashboardComponent>) -> Html {
    html! {
        <>
            <p>{"Choose the kind of report to create."}</p>
            <div class="flow-options">
                { for Flow::SELECTABLE.into_iter().map(|flow| html! {
                    <div
                        key={flow.label()}
                        class={classes!("flow-card", (wizard.flow() == flow).then_some("selected"))}
                        onclick={link.callback(move |_: MouseEvent| Msg::SelectFlow(flow))}
                    >
                        <h4>{ flow.label() }</h4>
                        <p>{ flow.description() }</p>
                        <small>{ format!("{} steps", flow.step_count()) }</small>
                    </div>
                }) }
            </div>
            <div class="footer">
                <div style="flex:1;" />
                <button
                    class="btn"
                    disabled={wizard.flow() == Flow::Unselected}
                    onclick={link.callback(|_| Msg::Start)}
                >
                    {"Start"}
                </button>
            </div>
        </>
    }
}
