//! Properties of the `DashboardComponent`.

use std::rc::Rc;

use common::model::database::DatabaseDescriptor;
use common::model::role::RoleDescriptor;
use yew::prelude::*;

use crate::gateway::HttpGateway;

#[derive(Properties, PartialEq, Clone)]
pub struct DashboardProps {
    /// Report service used for validation and submission.
    pub gateway: HttpGateway,

    /// Databases offered on the first step. Empty until `GET /dbnames` resolves.
    pub databases: Rc<Vec<DatabaseDescriptor>>,

    /// Role catalog. May arrive after the permission matrix was built; the
    /// wizard backfills existing rows when it does.
    pub roles: Rc<Vec<RoleDescriptor>>,

    /// Fired after a report was created, so the reports list can refresh.
    #[prop_or_default]
    pub on_report_created: Callback<()>,
}
