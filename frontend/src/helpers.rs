//! Small DOM helpers shared by the pages.
//!
//! - **User Feedback**: transient "toast" notifications for the outcome of
//!   gateway calls and for rejected edits (e.g. a duplicate column name).
//! - **Input extraction**: reading the current value out of form events.

use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

const TOAST_MILLIS: u32 = 3000;
const SUCCESS_BACKGROUND: &str = "rgba(46, 125, 50, 0.9)";
const ERROR_BACKGROUND: &str = "rgba(198, 40, 40, 0.9)";

/// Shows a confirmation toast at the top-left corner for a few seconds.
pub fn show_toast(message: &str) {
    toast(message, SUCCESS_BACKGROUND);
}

/// Same as [`show_toast`] with error styling.
pub fn show_error_toast(message: &str) {
    toast(message, ERROR_BACKGROUND);
}

fn toast(message: &str, background: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) else {
        return;
    };

    toast.set_text_content(Some(message));
    let html_toast: HtmlElement = toast.unchecked_into();
    let style = html_toast.style();
    style.set_property("position", "fixed").ok();
    style.set_property("top", "20px").ok();
    style.set_property("left", "20px").ok();
    style.set_property("background", background).ok();
    style.set_property("color", "#fff").ok();
    style.set_property("padding", "10px 20px").ok();
    style.set_property("border-radius", "4px").ok();
    style.set_property("z-index", "10000").ok();
    style.set_property("max-width", "420px").ok();

    if body.append_child(&html_toast).is_ok() {
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_MILLIS).await;
            if let Some(parent) = html_toast.parent_node() {
                parent.remove_child(&html_toast).ok();
            }
        });
    }
}

pub fn input_value(e: &InputEvent) -> String {
    e.target_unchecked_into::<HtmlInputElement>().value()
}

pub fn textarea_value(e: &InputEvent) -> String {
    e.target_unchecked_into::<HtmlTextAreaElement>().value()
}

pub fn select_value(e: &Event) -> String {
    e.target_unchecked_into::<HtmlSelectElement>().value()
}
