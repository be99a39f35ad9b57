use otui_core::dropdown::DropdownItem;
use otui_core::ids::next_id;
use yew::prelude::*;

use crate::defaults::use_ui_defaults;

/// Dropdown entry with markup label and a click callback.
pub type MenuItem = DropdownItem<Html, Callback<()>>;

/// Props for [`Dropdown`].
#[derive(Properties, PartialEq)]
pub struct DropdownProps {
    /// Menu entries in display order.
    #[prop_or_default]
    pub items: Vec<MenuItem>,
    /// Trigger content; falls back to the configured label.
    #[prop_or_default]
    pub label: Option<Html>,
    /// Trigger class; falls back to the configured variant.
    #[prop_or_default]
    pub variant: Option<AttrValue>,
    /// Draw the chevron icon; falls back to the configured default.
    #[prop_or_default]
    pub show_icon: Option<bool>,
    /// Extra classes on the root element.
    #[prop_or_default]
    pub class: Classes,
}

fn chevron() -> Html {
    html! {
        <svg
            width="16"
            height="16"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            style="margin-left: 6px"
        >
            <path d="m6 9 6 6 6-6" />
        </svg>
    }
}

fn entry(index: usize, item: &MenuItem) -> Html {
    match item {
        DropdownItem::Divider => html! { <hr key={index} /> },
        DropdownItem::Action {
            label, disabled, ..
        } => {
            let onclick = item.activate().cloned().map(|action| {
                Callback::from(move |_: MouseEvent| action.emit(()))
            });
            html! {
                <button key={index} role="menuitem" disabled={*disabled} onclick={onclick}>
                    {label.clone()}
                </button>
            }
        }
    }
}

/// Popover menu opened by a trigger button.
#[function_component(Dropdown)]
pub fn dropdown(props: &DropdownProps) -> Html {
    let defaults = use_ui_defaults();
    let menu_id = use_state(|| next_id("ot-menu"));

    let label = props
        .label
        .clone()
        .unwrap_or_else(|| html! { {defaults.dropdown.label.clone()} });
    let variant = props
        .variant
        .clone()
        .unwrap_or_else(|| AttrValue::from(defaults.dropdown.variant.clone()));
    let show_icon = props.show_icon.unwrap_or(defaults.dropdown.show_icon);

    html! {
        <@{"ot-dropdown"} class={props.class.clone()}>
            <button popovertarget={(*menu_id).clone()} class={variant}>
                {label}
                {show_icon.then(chevron).unwrap_or_default()}
            </button>
            <menu popover="auto" id={(*menu_id).clone()}>
                {for props.items.iter().enumerate().map(|(index, item)| entry(index, item))}
            </menu>
        </@>
    }
}
