use gloo_timers::callback::Timeout;
use uuid::Uuid;
use yew::{html, Callback, Component, Context, Html, MouseEvent, NodeRef, Properties};

const SHOW_CLASS: &str = "show";
const OPEN_DELAY_MILLIS: u32 = 50;

/// Hidden-by-default overlay whose visibility is toggled through its
/// `node_ref` with [`open_sheet`] and [`close_sheet`].
pub struct ModalSheet {
    pub id: String,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
    pub node_ref: NodeRef,
    /// Fired when the backdrop itself (not the content) is clicked.
    #[prop_or_default]
    pub on_backdrop: Option<Callback<()>>,
}

impl Component for ModalSheet {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id: format!("sheet-{}", Uuid::new_v4()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let on_backdrop = props.on_backdrop.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            if e.target() == e.current_target() {
                if let Some(cb) = &on_backdrop {
                    cb.emit(());
                }
            }
        });

        html! {
            <div class="top-sheet" id={self.id.clone()} ref={props.node_ref.clone()}>
                <div class="modal-backdrop" {onclick}>
                    <div class="modal">
                        { props.children.clone() }
                    </div>
                </div>
            </div>
        }
    }
}

/// Shows the sheet on the next tick so CSS transitions see the class change.
pub fn open_sheet(sheet_ref: &NodeRef) {
    if let Some(sheet) = sheet_ref.cast::<web_sys::HtmlElement>() {
        Timeout::new(OPEN_DELAY_MILLIS, move || {
            sheet.class_list().add_1(SHOW_CLASS).ok();
        })
        .forget();
    }
}

pub fn close_sheet(sheet_ref: &NodeRef) {
    if let Some(sheet) = sheet_ref.cast::<web_sys::HtmlElement>() {
        sheet.class_list().remove_1(SHOW_CLASS).ok();
    }
}
