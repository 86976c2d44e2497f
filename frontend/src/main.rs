use crate::app::App;

mod app;
mod components;
mod gateway;
mod helpers;
mod router;
mod tops_sheet;

fn main() {
    yew::Renderer::<App>::new().render();
}
