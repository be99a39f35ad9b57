use otui_core::button::{ButtonStyle, ButtonVariant};
use yew::prelude::*;

/// Props for [`Button`].
#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    /// Button content.
    #[prop_or_default]
    pub children: Children,
    /// Color variant, exposed as `data-variant`.
    #[prop_or_default]
    pub variant: ButtonVariant,
    /// Fill style, exposed as `data-style`.
    #[prop_or_default]
    pub style_type: ButtonStyle,
    /// Native `type` attribute.
    #[prop_or_default]
    pub r#type: Option<AttrValue>,
    /// Native `value` attribute.
    #[prop_or_default]
    pub value: Option<AttrValue>,
    /// Whether the button is disabled.
    #[prop_or_default]
    pub disabled: bool,
    /// Extra classes.
    #[prop_or_default]
    pub class: Classes,
    /// Click handler.
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
}

/// Native button tagged with variant and style data attributes.
#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    html! {
        <button
            class={props.class.clone()}
            data-variant={props.variant.as_str()}
            data-style={props.style_type.as_str()}
            disabled={props.disabled}
            type={props.r#type.clone()}
            value={props.value.clone()}
            onclick={props.onclick.clone()}
        >
            { for props.children.iter() }
        </button>
    }
}
