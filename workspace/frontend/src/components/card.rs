use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CardProps {
    #[prop_or_default]
    pub title: Option<String>,
    #[prop_or_default]
    pub subtitle: Option<String>,
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

/// Reusable card container with an optional header.
#[function_component(Card)]
pub fn card(props: &CardProps) -> Html {
    html! {
        <div class={classes!("card", "bg-base-100", "shadow", props.class.clone())}>
            <div class="card-body">
                {if let Some(title) = &props.title {
                    html! { <h2 class="card-title">{title}</h2> }
                } else {
                    html! {}
                }}
                {if let Some(subtitle) = &props.subtitle {
                    html! { <p class="text-sm text-gray-500">{subtitle}</p> }
                } else {
                    html! {}
                }}
                { for props.children.iter() }
            </div>
        </div>
    }
}
