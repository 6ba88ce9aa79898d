use std::rc::Rc;

use common::{District, Metric};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::api_client::{ApiClient, DistrictQuery};
use crate::components::card::Card;
use crate::components::charts::TrendChart;
use crate::format::format_month_year;
use crate::hooks::FetchState;
use crate::ui::error::ErrorMessage;
use crate::ui::fetch_hook::{use_dependent_fetch, use_fetch_with_refetch};
use crate::ui::loading::LoadingSpinner;

const PERIOD_OPTIONS: [u32; 4] = [6, 12, 24, 36];

/// Performance trends over time for one district, charted per metric.
#[function_component(Historical)]
pub fn historical() -> Html {
    let client = use_context::<Rc<ApiClient>>().unwrap();

    let (districts_state, refetch_districts) = {
        let client = client.clone();
        use_fetch_with_refetch(move || {
            let client = client.clone();
            async move { client.get_districts(&DistrictQuery::default()).await }
        })
    };

    let selected_district = use_state(|| Option::<District>::None);
    let metric = use_state(Metric::default);
    let period_months = use_state(|| 12u32);

    // Auto-select the first district once the list arrives.
    {
        let selected_district = selected_district.clone();
        use_effect_with(districts_state.clone(), move |districts_state| {
            if selected_district.is_none() {
                if let FetchState::Success(districts) = &**districts_state {
                    if let Some(first) = districts.first() {
                        selected_district.set(Some(first.clone()));
                    }
                }
            }
            || ()
        });
    }

    // History tracks the (district, window) pair; the metric only changes
    // which series of the already-fetched data is charted.
    let history_state = {
        let client = client.clone();
        use_dependent_fetch(
            selected_district
                .as_ref()
                .map(|district| (district.id, *period_months)),
            move |(district_id, months)| {
                let client = client.clone();
                async move { client.get_history(district_id, months).await }
            },
        )
    };

    let on_district_change = {
        let selected_district = selected_district.clone();
        let districts_state = districts_state.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
            if let (Ok(id), FetchState::Success(districts)) =
                (value.parse::<i64>(), &*districts_state)
            {
                selected_district.set(districts.iter().find(|d| d.id == id).cloned());
            }
        })
    };

    let on_metric_change = {
        let metric = metric.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
            metric.set(Metric::from_ui_key(&value));
        })
    };

    let on_period_change = {
        let period_months = period_months.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
            if let Ok(months) = value.parse::<u32>() {
                period_months.set(months);
            }
        })
    };

    match &*districts_state {
        FetchState::NotStarted | FetchState::Loading => html! {
            <LoadingSpinner message="Loading districts..." />
        },
        FetchState::Error(err) => html! {
            <ErrorMessage message={err.to_string()} on_retry={refetch_districts} />
        },
        FetchState::Success(districts) => html! {
            <div class="flex flex-col gap-6">
                <div>
                    <h1 class="text-3xl font-bold">{"Performance Trends"}</h1>
                    <p class="text-gray-500">
                        {"Track performance metrics over time for selected district"}
                    </p>
                </div>

                <Card title="Select District and Metrics">
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                        <label class="form-control">
                            <span class="label-text">{"District:"}</span>
                            <select class="select select-bordered" onchange={on_district_change}>
                                {for districts.iter().map(|district| {
                                    let selected = selected_district
                                        .as_ref()
                                        .is_some_and(|s| s.id == district.id);
                                    html! {
                                        <option value={district.id.to_string()} {selected}>
                                            {format!("{}, {}", district.name, district.state)}
                                        </option>
                                    }
                                })}
                            </select>
                        </label>
                        <label class="form-control">
                            <span class="label-text">{"Metric:"}</span>
                            <select class="select select-bordered" onchange={on_metric_change}>
                                {for Metric::ALL.iter().map(|m| html! {
                                    <option value={m.ui_key()} selected={*m == *metric}>
                                        {m.label()}
                                    </option>
                                })}
                            </select>
                        </label>
                        <label class="form-control">
                            <span class="label-text">{"Time Period:"}</span>
                            <select class="select select-bordered" onchange={on_period_change}>
                                {for PERIOD_OPTIONS.iter().map(|months| html! {
                                    <option
                                        value={months.to_string()}
                                        selected={*months == *period_months}
                                    >
                                        {format!("Last {months} Months")}
                                    </option>
                                })}
                            </select>
                        </label>
                    </div>
                </Card>

                {match &*history_state {
                    FetchState::NotStarted => html! {},
                    FetchState::Loading => html! {
                        <LoadingSpinner message="Loading trend data..." />
                    },
                    FetchState::Success(series) if !series.data.is_empty() => {
                        let labels: Vec<String> = series
                            .data
                            .iter()
                            .map(|point| format_month_year(point.year, point.month))
                            .collect();
                        let values: Vec<f64> = series
                            .data
                            .iter()
                            .map(|point| point.value_of(*metric))
                            .collect();
                        html! {
                            <Card title={format!("{} Trend", metric.label())}>
                                <TrendChart {labels} {values} metric={*metric} />
                            </Card>
                        }
                    }
                    FetchState::Success(_) | FetchState::Error(_) => html! {
                        <Card>
                            <p class="text-gray-500">
                                {"No historical data available for this district."}
                            </p>
                        </Card>
                    },
                }}
            </div>
        },
    }
}
