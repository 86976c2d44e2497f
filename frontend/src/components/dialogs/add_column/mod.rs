//! "Add column" dialog of the Configure Access step.
//!
//! The dialog only collects input. It hands a [`NewColumn`] to `on_add` and
//! lets the parent decide: on success the parent closes the sheet and bumps
//! `reset_token`, on a rejected name (duplicate) the dialog stays open with
//! the input intact so it can be corrected.

use common::model::column_type::ColumnDataType;
use yew::prelude::*;

use crate::helpers::{input_value, select_value};
use crate::tops_sheet::modal_sheet::ModalSheet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewColumn {
    pub name: String,
    pub data_type: String,
}

#[derive(Properties, PartialEq)]
pub struct AddColumnProps {
    pub node_ref: NodeRef,
    /// Changing this value clears the form.
    pub reset_token: u32,
    pub on_add: Callback<NewColumn>,
    pub on_cancel: Callback<()>,
}

pub enum Msg {
    SetName(String),
    SetDataType(String),
    Submit,
    Cancel,
}

#[derive(Default)]
pub struct AddColumnDialog {
    name: String,
    data_type: String,
}

impl AddColumnDialog {
    fn can_submit(&self) -> bool {
        !self.name.trim().is_empty() && !self.data_type.is_empty()
    }
}

impl Component for AddColumnDialog {
    type Message = Msg;
    type Properties = AddColumnProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self::default()
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().reset_token != old_props.reset_token {
            *self = Self::default();
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetName(name) => self.name = name,
            Msg::SetDataType(data_type) => self.data_type = data_type,
            Msg::Submit => {
                if self.can_submit() {
                    ctx.props().on_add.emit(NewColumn {
                        name: self.name.trim().to_string(),
                        data_type: self.data_type.clone(),
                    });
                }
                return false;
            }
            Msg::Cancel => {
                *self = Self::default();
                ctx.props().on_cancel.emit(());
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        html! {
            <ModalSheet node_ref={ctx.props().node_ref.clone()} on_backdrop={link.callback(|_: ()| Msg::Cancel)}>
                <div class="field">
                    <label for="new-column-name">{"Add new column"}</label>
                    <input
                        id="new-column-name"
                        type="text"
                        placeholder="Enter column name"
                        value={self.name.clone()}
                        oninput={link.callback(|e: InputEvent| Msg::SetName(input_value(&e)))}
                    />
                </div>
                <div class="field">
                    <label for="new-column-type">{"Column data type"}</label>
                    <select
                        id="new-column-type"
                        onchange={link.callback(|e: Event| Msg::SetDataType(select_value(&e)))}
                    >
                        <option value="" selected={self.data_type.is_empty()} disabled={true}>
                            {"Enter Data Type"}
                        </option>
                        { for ColumnDataType::ALL.into_iter().map(|t| html! {
                            <option value={t.value()} selected={self.data_type == t.value()}>
                                { t.label() }
                            </option>
                        }) }
                    </select>
                </div>
                <div style="display:flex;gap:8px;">
                    <button
                        class="btn"
                        style="flex:1;"
                        disabled={!self.can_submit()}
                        onclick={link.callback(|_| Msg::Submit)}
                    >
                        {"Add"}
                    </button>
                    <button class="btn outlined" style="flex:1;" onclick={link.callback(|_| Msg::Cancel)}>
                        {"Cancel"}
                    </button>
                </div>
            </ModalSheet>
        }
    }
}
