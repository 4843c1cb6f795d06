//! Loading indicator shown while a request or guard check is pending

use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct SpinnerProps {
    #[prop_or_default]
    pub label: Option<AttrValue>,
    /// Fill the viewport instead of the surrounding block
    #[prop_or_default]
    pub full_screen: bool,
}

#[function_component(LoadingSpinner)]
pub fn loading_spinner(props: &SpinnerProps) -> Html {
    let wrapper = if props.full_screen {
        "flex flex-col items-center justify-center min-h-screen"
    } else {
        "text-center p-10"
    };

    html! {
        <div class={wrapper} role="status">
            <div class="w-10 h-10 border-4 border-gray-200 border-t-emerald-500 rounded-full animate-spin mx-auto mb-4"></div>
            if let Some(label) = &props.label {
                <p class="text-gray-600 text-sm m-0">{label.clone()}</p>
            }
        </div>
    }
}
