use otui_core::switch::SwitchModel;
use yew::prelude::*;

/// Props for [`Switch`].
#[derive(Properties, PartialEq)]
pub struct SwitchProps {
    /// Text next to the switch.
    #[prop_or_default]
    pub label: Option<AttrValue>,
    /// Caller-owned checked state. Leave unset for an uncontrolled switch.
    #[prop_or_default]
    pub checked: Option<bool>,
    /// Initial state of an uncontrolled switch.
    #[prop_or_default]
    pub default_checked: bool,
    /// Whether the switch ignores input.
    #[prop_or_default]
    pub disabled: bool,
    /// Form field name.
    #[prop_or_default]
    pub name: Option<AttrValue>,
    /// Input element id.
    #[prop_or_default]
    pub id: Option<AttrValue>,
    /// Extra classes on the wrapping label.
    #[prop_or_default]
    pub class: Classes,
    /// Receives the new checked value.
    #[prop_or_default]
    pub onchange: Callback<bool>,
}

/// Checkbox rendered with `role="switch"`.
#[function_component(Switch)]
pub fn switch(props: &SwitchProps) -> Html {
    let internal = use_state(|| props.default_checked);
    let model = SwitchModel::new(props.checked, *internal, props.disabled);

    let onchange = {
        let internal = internal.clone();
        let onchange = props.onchange.clone();
        Callback::from(move |event: Event| {
            let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() else {
                return;
            };
            if let Some((next, reported)) = model.toggle(input.checked()) {
                internal.set(next.internal_checked());
                onchange.emit(reported);
            }
        })
    };

    html! {
        <label class={props.class.clone()}>
            <input
                type="checkbox"
                role="switch"
                id={props.id.clone()}
                name={props.name.clone()}
                checked={model.checked()}
                disabled={props.disabled}
                onchange={onchange}
            />
            {props.label.clone().map(|text| html! { <span>{text}</span> }).unwrap_or_default()}
        </label>
    }
}
