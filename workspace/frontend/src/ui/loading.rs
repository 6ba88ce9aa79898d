use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadingSpinnerProps {
    /// Optional caption under the spinner, e.g. "Loading districts...".
    #[prop_or_default]
    pub message: Option<String>,
}

#[function_component(LoadingSpinner)]
pub fn loading_spinner(props: &LoadingSpinnerProps) -> Html {
    html! {
        <div class="flex flex-col justify-center items-center py-12 gap-4">
            <span class="loading loading-spinner loading-lg"></span>
            {if let Some(message) = &props.message {
                html! { <p class="text-sm text-gray-500">{message}</p> }
            } else {
                html! {}
            }}
        </div>
    }
}
