//! Report creation wizard page ("/").
//!
//! Responsibilities
//! - Own one `WizardController` for the lifetime of the page (one session).
//! - Provide the `Component` implementation that delegates to `update::update` and `view::view`.
//! - Keep the controller's role catalog in sync with the roles fetched by the app,
//!   whichever arrives first.
//! - Reset the wizard when the page is left so late responses find nothing to mutate.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod steps;
mod update;
mod view;

pub use messages::Msg;
pub use props::DashboardProps;
pub use state::DashboardComponent;

impl Component for DashboardComponent {
    type Message = Msg;
    type Properties = DashboardProps;

    fn create(ctx: &Context<Self>) -> Self {
        DashboardComponent::new(ctx.props())
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().roles != old_props.roles {
            self.wizard.set_roles(ctx.props().roles.as_ref().clone());
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.wizard.reset();
    }
}
