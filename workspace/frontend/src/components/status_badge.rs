use common::Status;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatusBadgeProps {
    pub status: Status,
    #[prop_or(true)]
    pub show_label: bool,
    #[prop_or_default]
    pub small: bool,
}

/// Color-coded status indicator matching the backend classification.
#[function_component(StatusBadge)]
pub fn status_badge(props: &StatusBadgeProps) -> Html {
    let dot_size = if props.small { "w-2 h-2" } else { "w-3 h-3" };

    html! {
        <span class="inline-flex items-center gap-1">
            <span
                class={classes!("rounded-full", "inline-block", dot_size)}
                style={format!("background-color: {};", props.status.color())}
            ></span>
            {if props.show_label {
                html! { <span class="text-sm">{props.status.label()}</span> }
            } else {
                html! {}
            }}
        </span>
    }
}
