//! Component state for the report wizard page.

use common::wizard::WizardController;
use yew::prelude::*;

use super::props::DashboardProps;

pub struct DashboardComponent {
    /// All wizard state: flow, step, draft, permission matrix, busy flag.
    pub wizard: WizardController,

    /// Sheet hosting the "Add column" dialog.
    pub add_column_ref: NodeRef,

    /// Bumped whenever the dialog should forget its input.
    pub add_column_token: u32,
}

impl DashboardComponent {
    pub fn new(props: &DashboardProps) -> Self {
        let mut wizard = WizardController::new();
        wizard.set_roles(props.roles.as_ref().clone());
        Self {
            wizard,
            add_column_ref: NodeRef::default(),
            add_column_token: 0,
        }
    }
}
