//! Context carrying [`UiDefaults`] to every component below the provider.

use otui_config::UiDefaults;
use yew::prelude::*;

/// Props for [`UiDefaultsProvider`].
#[derive(Properties, PartialEq)]
pub struct UiDefaultsProviderProps {
    /// Defaults applied to descendants.
    pub defaults: UiDefaults,
    /// Subtree receiving the defaults.
    #[prop_or_default]
    pub children: Children,
}

/// Provide component defaults to a subtree.
#[function_component(UiDefaultsProvider)]
pub fn ui_defaults_provider(props: &UiDefaultsProviderProps) -> Html {
    html! {
        <ContextProvider<UiDefaults> context={props.defaults.clone()}>
            { for props.children.iter() }
        </ContextProvider<UiDefaults>>
    }
}

/// Defaults from the nearest provider, or the built-in defaults.
#[hook]
pub fn use_ui_defaults() -> UiDefaults {
    use_context::<UiDefaults>().unwrap_or_default()
}
