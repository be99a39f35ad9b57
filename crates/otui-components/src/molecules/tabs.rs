use gloo::console;
use gloo::utils::document;
use otui_core::ids::next_id;
use otui_core::tabs::{TabsState, panel_id, tab_id};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use yew::prelude::*;

/// One tab and its panel content.
#[derive(Clone, PartialEq)]
pub struct TabItem {
    /// Tab button label.
    pub label: AttrValue,
    /// Panel content shown while the tab is selected.
    pub content: Html,
}

/// Props for [`Tabs`].
#[derive(Properties, PartialEq)]
pub struct TabsProps {
    /// Tabs in display order.
    #[prop_or_default]
    pub items: Vec<TabItem>,
    /// Extra classes on the root element.
    #[prop_or_default]
    pub class: Classes,
}

fn focus_tab(id: &str) {
    let Some(tab) = document()
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };
    if let Err(err) = tab.focus() {
        console::error!("tab focus failed", err);
    }
}

/// Tab list with a single visible panel, wired with WAI-ARIA tab roles.
///
/// Selection is internal. Arrow keys move between tabs with wrap-around;
/// `Home` and `End` jump to the first and last tab.
#[function_component(Tabs)]
pub fn tabs(props: &TabsProps) -> Html {
    let prefix = use_state(|| next_id("tabs"));
    let state = use_state(|| TabsState::new(props.items.len()));
    let current = state.resize(props.items.len());

    let onkeydown = {
        let state = state.clone();
        let prefix = prefix.clone();
        Callback::from(move |event: KeyboardEvent| {
            if let Some(target) = current.key_target(&event.key()) {
                event.prevent_default();
                state.set(current.select(target));
                focus_tab(&tab_id(&prefix, target));
            }
        })
    };

    html! {
        <div class={props.class.clone()}>
            <div role="tablist" onkeydown={onkeydown}>
                {for props.items.iter().enumerate().map(|(index, item)| {
                    let active = current.is_active(index);
                    let onclick = {
                        let state = state.clone();
                        Callback::from(move |_: MouseEvent| state.set(current.select(index)))
                    };
                    html! {
                        <button
                            key={item.label.to_string()}
                            id={tab_id(&prefix, index)}
                            role="tab"
                            aria-selected={active.to_string()}
                            aria-controls={panel_id(&prefix, index)}
                            tabindex={if active { "0" } else { "-1" }}
                            onclick={onclick}
                        >
                            {item.label.clone()}
                        </button>
                    }
                })}
            </div>
            {props.items.get(current.active()).map(|item| html! {
                <div
                    role="tabpanel"
                    id={panel_id(&prefix, current.active())}
                    aria-labelledby={tab_id(&prefix, current.active())}
                >
                    {item.content.clone()}
                </div>
            }).unwrap_or_default()}
        </div>
    }
}
