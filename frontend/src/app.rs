//! Application shell: sidebar, routing and session reference data.
//!
//! On first render the shell reads the host's app config, builds the
//! [`HttpGateway`] and fetches databases, roles and reports together. Each
//! list lands in its own field, so the order of arrival does not matter; the
//! wizard backfills its permission matrix if roles come in late.

use std::rc::Rc;

use common::gateway::{GatewayError, ReportGateway};
use common::model::database::DatabaseDescriptor;
use common::model::report::ReportSummary;
use common::model::role::RoleDescriptor;
use gloo_console::{error, log};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::html::Scope;
use yew::platform::spawn_local;
use yew::{html, Component, Context, Html};

use crate::components::common::loader::loader;
use crate::components::common::sidebar::Sidebar;
use crate::components::dashboard::DashboardComponent;
use crate::components::reports::ReportsComponent;
use crate::gateway::{load_app_config, HttpGateway};
use crate::helpers::show_error_toast;
use crate::router::{current_route, push_route, Route};

pub enum Msg {
    ConfigLoaded(HttpGateway),
    DatabasesLoaded(Result<Vec<DatabaseDescriptor>, GatewayError>),
    RolesLoaded(Result<Vec<RoleDescriptor>, GatewayError>),
    ReportsLoaded(Result<Vec<ReportSummary>, GatewayError>),
    Navigate(Route),
    PathChanged,
    RefreshReports,
}

pub struct App {
    gateway: Option<HttpGateway>,
    route: Route,
    databases: Rc<Vec<DatabaseDescriptor>>,
    roles: Rc<Vec<RoleDescriptor>>,
    reports: Rc<Vec<ReportSummary>>,
    reports_loading: bool,
    /// Back/forward button listener, detached on destroy.
    popstate: Option<Closure<dyn FnMut(web_sys::Event)>>,
}

impl App {
    fn load_reference_data(&mut self, link: &Scope<Self>) {
        let Some(gateway) = self.gateway.clone() else {
            return;
        };

        let (g, l) = (gateway.clone(), link.clone());
        spawn_local(async move {
            l.send_message(Msg::DatabasesLoaded(g.fetch_databases().await));
        });
        let (g, l) = (gateway, link.clone());
        spawn_local(async move {
            l.send_message(Msg::RolesLoaded(g.fetch_roles().await));
        });
        self.load_reports(link);
    }

    fn load_reports(&mut self, link: &Scope<Self>) {
        let Some(gateway) = self.gateway.clone() else {
            return;
        };
        self.reports_loading = true;
        let link = link.clone();
        spawn_local(async move {
            link.send_message(Msg::ReportsLoaded(gateway.fetch_reports().await));
        });
    }

    fn listen_popstate(link: &Scope<Self>) -> Option<Closure<dyn FnMut(web_sys::Event)>> {
        let window = web_sys::window()?;
        let link = link.clone();
        let closure =
            Closure::<dyn FnMut(web_sys::Event)>::new(move |_| link.send_message(Msg::PathChanged));
        window
            .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())
            .ok()?;
        Some(closure)
    }

    fn view_page(&self, link: &Scope<Self>) -> Html {
        let Some(gateway) = self.gateway.clone() else {
            return loader("Loading configuration...");
        };

        match self.route {
            Route::Dashboard => html! {
                <DashboardComponent
                    gateway={gateway}
                    databases={self.databases.clone()}
                    roles={self.roles.clone()}
                    on_report_created={link.callback(|_: ()| Msg::RefreshReports)}
                />
            },
            Route::Reports => html! {
                <ReportsComponent
                    reports={self.reports.clone()}
                    loading={self.reports_loading}
                    on_create_new={link.callback(|_: ()| Msg::Navigate(Route::Dashboard))}
                    on_refresh={link.callback(|_: ()| Msg::RefreshReports)}
                />
            },
        }
    }
}

/// Logs a failed reference fetch and tells the operator.
fn report_failure(what: &str, err: &GatewayError) {
    error!(format!("failed to load {what}: {err}"));
    show_error_toast(&err.user_message());
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            gateway: None,
            route: current_route(),
            databases: Rc::default(),
            roles: Rc::default(),
            reports: Rc::default(),
            reports_loading: false,
            popstate: Self::listen_popstate(ctx.link()),
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            let link = ctx.link().clone();
            spawn_local(async move {
                let config = load_app_config().await;
                link.send_message(Msg::ConfigLoaded(HttpGateway::new(&config.api_base_url)));
            });
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ConfigLoaded(gateway) => {
                log!("report service:", gateway.base_url());
                self.gateway = Some(gateway);
                self.load_reference_data(ctx.link());
            }
            Msg::DatabasesLoaded(result) => match result {
                Ok(databases) => self.databases = Rc::new(databases),
                Err(err) => report_failure("databases", &err),
            },
            Msg::RolesLoaded(result) => match result {
                Ok(roles) => self.roles = Rc::new(roles),
                Err(err) => report_failure("roles", &err),
            },
            Msg::ReportsLoaded(result) => {
                self.reports_loading = false;
                match result {
                    Ok(reports) => self.reports = Rc::new(reports),
                    Err(err) => report_failure("reports", &err),
                }
            }
            Msg::Navigate(route) => {
                if route == self.route {
                    return false;
                }
                push_route(route);
                self.route = route;
                if route == Route::Reports {
                    self.load_reports(ctx.link());
                }
            }
            Msg::PathChanged => {
                self.route = current_route();
                if self.route == Route::Reports {
                    self.load_reports(ctx.link());
                }
            }
            Msg::RefreshReports => self.load_reports(ctx.link()),
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        html! {
            <div class="container">
                <Sidebar active={self.route} on_navigate={link.callback(Msg::Navigate)} />
                <main class="content">
                    { self.view_page(link) }
                </main>
            </div>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if let (Some(window), Some(closure)) = (web_sys::window(), self.popstate.take()) {
            window
                .remove_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())
                .ok();
        }
    }
}
