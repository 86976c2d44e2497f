use yew::prelude::*;

/// Full-page overlay that blocks input while a request is in flight.
pub fn loader(label: &str) -> Html {
    html! {
        <div class="loader-overlay">
            <div style="display:flex;flex-direction:column;align-items:center;">
                <div class="spin"></div>
                <div style="margin-top:12px;">{ label.to_string() }</div>
            </div>
        </div>
    }
}
