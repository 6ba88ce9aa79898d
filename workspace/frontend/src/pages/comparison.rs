use std::rc::Rc;

use chrono::{Datelike, Local};
use common::{
    ComparisonResult, ComparisonSelection, Metric, MAX_COMPARE_DISTRICTS, MIN_COMPARE_DISTRICTS,
};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::api_client::{ApiClient, CompareParams, DistrictQuery};
use crate::components::card::Card;
use crate::components::charts::ComparisonChart;
use crate::format::{format_currency, format_indian_number, month_name};
use crate::hooks::FetchState;
use crate::ui::error::ErrorMessage;
use crate::ui::fetch_hook::use_fetch_with_refetch;
use crate::ui::loading::LoadingSpinner;
use crate::ui::toast::ToastContext;

const YEAR_OPTIONS: [i32; 4] = [2025, 2024, 2023, 2022];

/// Compare performance across 2-5 districts on a single metric.
#[function_component(Comparison)]
pub fn comparison() -> Html {
    let client = use_context::<Rc<ApiClient>>().unwrap();
    let toast_ctx = use_context::<ToastContext>().unwrap();

    let (districts_state, refetch_districts) = {
        let client = client.clone();
        use_fetch_with_refetch(move || {
            let client = client.clone();
            async move { client.get_districts(&DistrictQuery::default()).await }
        })
    };

    let now = Local::now().date_naive();
    let selection = use_state(ComparisonSelection::new);
    let metric = use_state(Metric::default);
    let year = use_state(|| now.year());
    let month = use_state(|| now.month());
    let compare_state = use_state(FetchState::<ComparisonResult>::default);
    let generation = use_mut_ref(|| 0u64);

    let run_compare = {
        let client = client.clone();
        let toast_ctx = toast_ctx.clone();
        let selection = selection.clone();
        let metric = metric.clone();
        let year = year.clone();
        let month = month.clone();
        let compare_state = compare_state.clone();
        let generation = generation.clone();

        Callback::from(move |_: ()| {
            if !selection.can_compare() {
                toast_ctx.show_warning(format!(
                    "Please select at least {MIN_COMPARE_DISTRICTS} districts to compare"
                ));
                return;
            }

            *generation.borrow_mut() += 1;
            let current = *generation.borrow();
            compare_state.set(FetchState::Loading);

            let params = CompareParams {
                district_ids: selection.ids().to_vec(),
                metric: *metric,
                year: *year,
                month: *month,
            };
            let client = client.clone();
            let toast_ctx = toast_ctx.clone();
            let compare_state = compare_state.clone();
            let generation = generation.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let result = client.compare(&params).await;
                if *generation.borrow() != current {
                    log::debug!("Discarding stale comparison response");
                    return;
                }
                match result {
                    Ok(data) => compare_state.set(FetchState::Success(data)),
                    Err(err) => {
                        toast_ctx.show_error(format!("Failed to compare districts: {err}"));
                        compare_state.set(FetchState::Error(err));
                    }
                }
            });
        })
    };

    // Changing metric or period after a comparison ran re-runs it, so the
    // chart never relabels stale data.
    {
        let run_compare = run_compare.clone();
        let compare_state = compare_state.clone();
        use_effect_with((*metric, *year, *month), move |_| {
            if !matches!(&*compare_state, FetchState::NotStarted) {
                run_compare.emit(());
            }
            || ()
        });
    }

    let on_toggle = {
        let selection = selection.clone();
        Callback::from(move |id: i64| {
            let mut next = (*selection).clone();
            next.toggle(id);
            selection.set(next);
        })
    };

    let on_month_change = {
        let month = month.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
            if let Ok(parsed) = value.parse::<u32>() {
                month.set(parsed);
            }
        })
    };

    let on_year_change = {
        let year = year.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
            if let Ok(parsed) = value.parse::<i32>() {
                year.set(parsed);
            }
        })
    };

    let on_compare_click = {
        let run_compare = run_compare.clone();
        Callback::from(move |_: MouseEvent| run_compare.emit(()))
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
                    <h1 class="text-3xl font-bold">{"District Comparison"}</h1>
                    <p class="text-gray-500">
                        {format!(
                            "Compare performance metrics across multiple districts (select {MIN_COMPARE_DISTRICTS}-{MAX_COMPARE_DISTRICTS} districts)"
                        )}
                    </p>
                </div>

                <Card title="Select Districts to Compare">
                    <p class="text-sm text-gray-500">
                        {format!("Selected: {} / {}", selection.len(), MAX_COMPARE_DISTRICTS)}
                    </p>

                    <div class="flex gap-4">
                        <label class="form-control">
                            <span class="label-text">{"Month:"}</span>
                            <select class="select select-bordered" onchange={on_month_change}>
                                {for (1..=12u32).map(|m| html! {
                                    <option value={m.to_string()} selected={m == *month}>
                                        {month_name(m).unwrap_or_default()}
                                    </option>
                                })}
                            </select>
                        </label>
                        <label class="form-control">
                            <span class="label-text">{"Year:"}</span>
                            <select class="select select-bordered" onchange={on_year_change}>
                                {for YEAR_OPTIONS.iter().map(|y| html! {
                                    <option value={y.to_string()} selected={*y == *year}>
                                        {y.to_string()}
                                    </option>
                                })}
                            </select>
                        </label>
                    </div>

                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-2 mt-4">
                        {for districts.iter().map(|district| {
                            let checked = selection.contains(district.id);
                            let disabled = !checked && selection.is_full();
                            let onchange = {
                                let on_toggle = on_toggle.clone();
                                let id = district.id;
                                Callback::from(move |_: Event| on_toggle.emit(id))
                            };
                            html! {
                                <label class="label cursor-pointer justify-start gap-2">
                                    <input
                                        type="checkbox"
                                        class="checkbox"
                                        {checked}
                                        {disabled}
                                        {onchange}
                                    />
                                    <span>{format!("{}, {}", district.name, district.state)}</span>
                                </label>
                            }
                        })}
                    </div>

                    <button
                        class="btn btn-primary mt-4"
                        onclick={on_compare_click}
                        disabled={!selection.can_compare() || compare_state.is_loading()}
                    >
                        {if compare_state.is_loading() { "Comparing..." } else { "Compare Districts" }}
                    </button>
                </Card>

                {match &*compare_state {
                    FetchState::NotStarted => html! {},
                    FetchState::Loading => html! {
                        <LoadingSpinner message="Comparing districts..." />
                    },
                    FetchState::Error(_) => html! {
                        <Card>
                            <p class="text-gray-500">
                                {"No comparison data available for the selected period."}
                            </p>
                        </Card>
                    },
                    FetchState::Success(result) => html! {
                        <ComparisonResults
                            result={result.clone()}
                            metric={*metric}
                            on_metric_change={
                                let metric = metric.clone();
                                Callback::from(move |m: Metric| metric.set(m))
                            }
                        />
                    },
                }}
            </div>
        },
    }
}

#[derive(Properties, PartialEq)]
struct ComparisonResultsProps {
    result: ComparisonResult,
    metric: Metric,
    on_metric_change: Callback<Metric>,
}

#[function_component(ComparisonResults)]
fn comparison_results(props: &ComparisonResultsProps) -> Html {
    let result = &props.result;
    let metric = props.metric;

    let period = result
        .period
        .display
        .clone()
        .unwrap_or_else(|| "Latest available data".to_string());
    let labels: Vec<String> = result.districts.iter().map(|d| d.name.clone()).collect();
    let values: Vec<f64> = result.districts.iter().map(|d| d.value).collect();

    let format_value = |value: f64| {
        if metric.is_currency() {
            format_currency(Some(value))
        } else {
            format_indian_number(Some(value))
        }
    };

    html! {
        <>
            <Card title="Comparison Details">
                <p class="text-sm text-gray-500">{format!("Period: {period}")}</p>
            </Card>

            <Card title="Select Metric">
                <div class="flex flex-wrap gap-2">
                    {for Metric::ALL.iter().map(|m| {
                        let active = *m == metric;
                        let onclick = {
                            let on_metric_change = props.on_metric_change.clone();
                            let m = *m;
                            Callback::from(move |_: MouseEvent| on_metric_change.emit(m))
                        };
                        let style = if active {
                            format!("border-color: {0}; color: {0};", m.chart_color())
                        } else {
                            String::new()
                        };
                        html! {
                            <button
                                class={classes!("btn", "btn-outline", "btn-sm", active.then_some("btn-active"))}
                                {style}
                                {onclick}
                            >
                                {m.label()}
                            </button>
                        }
                    })}
                </div>
            </Card>

            <Card title={format!("{} Comparison", metric.label())}>
                <ComparisonChart {labels} {values} {metric} />
            </Card>

            <Card title="Detailed Comparison">
                <div class="overflow-x-auto">
                    <table class="table">
                        <thead>
                            <tr>
                                <th>{"Rank"}</th>
                                <th>{"District"}</th>
                                <th>{"State"}</th>
                                <th>{metric.label()}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {for result.districts.iter().map(|district| html! {
                                <tr key={district.id}>
                                    <td>{format!("#{}", district.rank)}</td>
                                    <td>{&district.name}</td>
                                    <td>{&district.state}</td>
                                    <td>{format_value(district.value)}</td>
                                </tr>
                            })}
                        </tbody>
                    </table>
                </div>
            </Card>
        </>
    }
}
