//! Reports page: the list returned by `GET /reports`.

use std::rc::Rc;

use common::model::report::ReportSummary;
use yew::prelude::*;

use crate::components::common::loader::loader;

#[derive(Properties, PartialEq)]
pub struct ReportsProps {
    pub reports: Rc<Vec<ReportSummary>>,
    pub loading: bool,
    pub on_create_new: Callback<()>,
    pub on_refresh: Callback<()>,
}

pub struct ReportsComponent;

impl Component for ReportsComponent {
    type Message = ();
    type Properties = ReportsProps;

    fn create(_ctx: &Context<Self>) -> Self {
        ReportsComponent
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let on_create_new = props.on_create_new.reform(|_: MouseEvent| ());
        let on_refresh = props.on_refresh.reform(|_: MouseEvent| ());

        html! {
            <div>
                <div style="display:flex;justify-content:space-between;align-items:center;margin:16px 0 32px;">
                    <h3>{"Reports"}</h3>
                    <div style="display:flex;gap:8px;">
                        <button class="btn outlined" onclick={on_refresh}>{"Refresh"}</button>
                        <button class="btn outlined" onclick={on_create_new}>{"Create new report"}</button>
                    </div>
                </div>
                if props.reports.is_empty() {
                    <div>{"No reports found"}</div>
                } else {
                    { report_table(&props.reports) }
                }
                if props.loading {
                    { loader("Loading reports...") }
                }
            </div>
        }
    }
}

fn report_table(reports: &[ReportSummary]) -> Html {
    html! {
        <table>
            <thead>
                <tr>
                    <th>{"Report name"}</th>
                    <th>{"Report URL"}</th>
                </tr>
            </thead>
            <tbody>
                { for reports.iter().map(|report| html! {
                    <tr key={report.id.clone()}>
                        <td><span class="reportName">{ report.name.clone() }</span></td>
                        <td>
                            <a target="_blank" rel="noopener noreferrer" href={report.url.clone()}>
                                { report.url.clone() }
                            </a>
                        </td>
                    </tr>
                }) }
            </tbody>
        </table>
    }
}
