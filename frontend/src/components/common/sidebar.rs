use yew::{classes, html, Callback, Component, Context, Html, MouseEvent, Properties};

use crate::router::Route;

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub active: Route,
    pub on_navigate: Callback<Route>,
}

pub struct Sidebar;

impl Component for Sidebar {
    type Message = ();
    type Properties = SidebarProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Sidebar
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        html! {
            <nav class="sidebar">
                <ul>
                    { for Route::ALL.into_iter().map(|route| {
                        let on_navigate = props.on_navigate.clone();
                        html! {
                            <li
                                key={route.path()}
                                class={classes!((route == props.active).then_some("selected"))}
                                onclick={Callback::from(move |_: MouseEvent| on_navigate.emit(route))}
                            >
                                { route.label() }
                            </li>
                        }
                    }) }
                </ul>
            </nav>
        }
    }
}
