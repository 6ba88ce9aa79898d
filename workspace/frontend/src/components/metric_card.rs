use common::Status;
use yew::prelude::*;

use super::status_badge::StatusBadge;

#[derive(Properties, PartialEq)]
pub struct MetricCardProps {
    pub title: String,
    pub value: String,
    pub icon: String,
    #[prop_or_default]
    pub status: Status,
    /// Month-over-month change in percent, when the backend has a baseline.
    #[prop_or_default]
    pub change: Option<f64>,
}

#[function_component(MetricCard)]
pub fn metric_card(props: &MetricCardProps) -> Html {
    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body flex-row items-start gap-4">
                <div class="text-3xl" style={format!("color: {};", props.status.color())}>
                    <i class={props.icon.clone()}></i>
                </div>
                <div class="flex flex-col gap-1">
                    <h4 class="text-sm text-gray-500">{&props.title}</h4>
                    <p class="text-2xl font-bold">{&props.value}</p>
                    <div class="flex items-center gap-2">
                        <StatusBadge status={props.status} small={true} />
                        {if let Some(change) = props.change {
                            let class = if change > 0.0 {
                                "text-success"
                            } else if change < 0.0 {
                                "text-error"
                            } else {
                                "text-gray-500"
                            };
                            html! {
                                <span class={classes!("text-xs", class)}>
                                    {format!("{change:+.1}% vs last month")}
                                </span>
                            }
                        } else {
                            html! {}
                        }}
                    </div>
                </div>
            </div>
        </div>
    }
}
