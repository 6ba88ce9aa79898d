use std::collections::BTreeSet;
use std::rc::Rc;

use common::{District, Metric, PerformanceSummary, Status};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::api_client::{ApiClient, DistrictQuery};
use crate::components::card::Card;
use crate::components::metric_card::MetricCard;
use crate::components::status_badge::StatusBadge;
use crate::format::{format_currency, format_indian_number, format_month_year};
use crate::hooks::FetchState;
use crate::settings;
use crate::ui::debounce::Debouncer;
use crate::ui::error::ErrorMessage;
use crate::ui::fetch_hook::{use_dependent_fetch, use_fetch_with_refetch};
use crate::ui::loading::LoadingSpinner;

/// Main landing page: district selector plus the current-month performance
/// summary for the selected district.
#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let client = use_context::<Rc<ApiClient>>().unwrap();

    let (districts_state, refetch_districts) = {
        let client = client.clone();
        use_fetch_with_refetch(move || {
            let client = client.clone();
            async move { client.get_districts(&DistrictQuery::default()).await }
        })
    };

    let selected_district = use_state(|| Option::<District>::None);
    let search_term = use_state(String::new);
    let search_filter = use_state(String::new);
    let state_filter = use_state(String::new);
    let debouncer = use_mut_ref(|| Debouncer::new(settings::get_settings().search_debounce_ms));

    // Auto-select the first district once the list arrives.
    {
        let selected_district = selected_district.clone();
        use_effect_with(districts_state.clone(), move |districts_state| {
            if selected_district.is_none() {
                if let FetchState::Success(districts) = &**districts_state {
                    if let Some(first) = districts.first() {
                        log::debug!("Auto-selecting first district: {}", first.name);
                        selected_district.set(Some(first.clone()));
                    }
                }
            }
            || ()
        });
    }

    // Summary follows the selected district; its failures stay non-fatal.
    let summary_state = {
        let client = client.clone();
        use_dependent_fetch(
            selected_district.as_ref().map(|district| district.id),
            move |district_id| {
                let client = client.clone();
                async move { client.get_summary(district_id, None).await }
            },
        )
    };

    let on_state_change = {
        let state_filter = state_filter.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
            state_filter.set(value);
        })
    };

    let on_search_input = {
        let search_term = search_term.clone();
        let search_filter = search_filter.clone();
        let debouncer = debouncer.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            search_term.set(value.clone());

            // Only re-filter once typing pauses.
            let search_filter = search_filter.clone();
            debouncer
                .borrow_mut()
                .schedule(move || search_filter.set(value));
        })
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

    match &*districts_state {
        FetchState::NotStarted | FetchState::Loading => html! {
            <LoadingSpinner message="Loading districts..." />
        },
        FetchState::Error(err) => html! {
            <ErrorMessage message={err.to_string()} on_retry={refetch_districts} />
        },
        FetchState::Success(districts) => {
            let states: Vec<String> = districts
                .iter()
                .map(|d| d.state.clone())
                .collect::<BTreeSet<_>>()
                .into_iter()
                .collect();
            let filtered: Vec<&District> = districts
                .iter()
                .filter(|d| matches_filters(d, &search_filter, &state_filter))
                .collect();

            html! {
                <div class="flex flex-col gap-6">
                    <div>
                        <h1 class="text-3xl font-bold">{"MGNREGA Performance Dashboard"}</h1>
                        <p class="text-gray-500">
                            {"Track and analyze MGNREGA implementation across Indian districts"}
                        </p>
                    </div>

                    <Card title="Select District">
                        <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                            <label class="form-control">
                                <span class="label-text">{"Filter by State:"}</span>
                                <select class="select select-bordered" onchange={on_state_change}>
                                    <option value="" selected={state_filter.is_empty()}>
                                        {"All States"}
                                    </option>
                                    {for states.iter().map(|state| html! {
                                        <option value={state.clone()} selected={*state == *state_filter}>
                                            {state}
                                        </option>
                                    })}
                                </select>
                            </label>
                            <label class="form-control">
                                <span class="label-text">{"Search District:"}</span>
                                <input
                                    class="input input-bordered"
                                    type="text"
                                    placeholder="Search by name or code..."
                                    value={(*search_term).clone()}
                                    oninput={on_search_input}
                                />
                            </label>
                            <label class="form-control">
                                <span class="label-text">{"District:"}</span>
                                <select class="select select-bordered" onchange={on_district_change}>
                                    {for filtered.iter().map(|district| {
                                        let selected = selected_district
                                            .as_ref()
                                            .is_some_and(|s| s.id == district.id);
                                        html! {
                                            <option value={district.id.to_string()} {selected}>
                                                {format!("{}, {} ({})", district.name, district.state, district.code)}
                                            </option>
                                        }
                                    })}
                                </select>
                            </label>
                        </div>
                    </Card>

                    {match &*summary_state {
                        FetchState::NotStarted => html! {},
                        FetchState::Loading => html! {
                            <LoadingSpinner message="Loading performance data..." />
                        },
                        FetchState::Success(summary) => html! {
                            <SummarySection summary={summary.clone()} />
                        },
                        FetchState::Error(_) => html! {
                            <Card>
                                <p class="text-gray-500">
                                    {"No performance data available for this district."}
                                </p>
                            </Card>
                        },
                    }}
                </div>
            }
        }
    }
}

#[derive(Properties, PartialEq)]
struct SummarySectionProps {
    summary: PerformanceSummary,
}

#[function_component(SummarySection)]
fn summary_section(props: &SummarySectionProps) -> Html {
    let summary = &props.summary;
    let period = summary
        .period
        .display
        .clone()
        .unwrap_or_else(|| format_month_year(summary.period.year, summary.period.month));

    html! {
        <div class="flex flex-col gap-4">
            <div>
                <h2 class="text-2xl font-bold">{&summary.district.name}</h2>
                <p class="text-gray-500">
                    {format!("{} \u{2022} {}", summary.district.state, period)}
                </p>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-4">
                {for Metric::ALL.iter().map(|metric| {
                    let value = summary.metrics.value_of(*metric);
                    let display = if metric.is_currency() {
                        format_currency(Some(value))
                    } else {
                        format_indian_number(Some(value))
                    };
                    html! {
                        <MetricCard
                            title={metric.label()}
                            value={display}
                            icon={metric_icon(*metric)}
                            status={summary.status.status_of(*metric)}
                            change={summary
                                .comparison_to_previous_month
                                .as_ref()
                                .and_then(|changes| changes.change_of(*metric))}
                        />
                    }
                })}
            </div>

            <Card>
                <div class="flex flex-wrap items-center gap-2 text-sm">
                    <strong>{"Performance Indicators:"}</strong>
                    <StatusBadge status={Status::Good} />
                    {"\u{2265}80% of state avg \u{2022}"}
                    <StatusBadge status={Status::Average} />
                    {"50-79% \u{2022}"}
                    <StatusBadge status={Status::Poor} />
                    {"<50%"}
                </div>
            </Card>
        </div>
    }
}

fn metric_icon(metric: Metric) -> &'static str {
    match metric {
        Metric::PersonDays => "fas fa-users",
        Metric::HouseholdsWorked => "fas fa-briefcase",
        Metric::TotalWages => "fas fa-rupee-sign",
        Metric::MaterialExpenditure => "fas fa-chart-line",
    }
}

/// Case-insensitive name/code search combined with an exact state filter.
fn matches_filters(district: &District, search: &str, state: &str) -> bool {
    let search = search.to_lowercase();
    let matches_search = search.is_empty()
        || district.name.to_lowercase().contains(&search)
        || district.code.to_lowercase().contains(&search);
    let matches_state = state.is_empty() || district.state == state;
    matches_search && matches_state
}

#[cfg(test)]
mod tests {
    use super::*;

    fn district(name: &str, code: &str, state: &str) -> District {
        District {
            id: 1,
            name: name.to_string(),
            code: code.to_string(),
            state: state.to_string(),
            population: None,
        }
    }

    #[test]
    fn test_empty_filters_match_everything() {
        assert!(matches_filters(
            &district("Ballari", "KA-BL", "Karnataka"),
            "",
            ""
        ));
    }

    #[test]
    fn test_search_matches_name_case_insensitively() {
        let d = district("Ballari", "KA-BL", "Karnataka");
        assert!(matches_filters(&d, "balla", ""));
        assert!(matches_filters(&d, "BALLARI", ""));
        assert!(!matches_filters(&d, "mysuru", ""));
    }

    #[test]
    fn test_search_matches_code() {
        let d = district("Ballari", "KA-BL", "Karnataka");
        assert!(matches_filters(&d, "ka-bl", ""));
    }

    #[test]
    fn test_state_filter_is_exact() {
        let d = district("Ballari", "KA-BL", "Karnataka");
        assert!(matches_filters(&d, "", "Karnataka"));
        assert!(!matches_filters(&d, "", "Kerala"));
    }

    #[test]
    fn test_filters_combine() {
        let d = district("Ballari", "KA-BL", "Karnataka");
        assert!(matches_filters(&d, "ball", "Karnataka"));
        assert!(!matches_filters(&d, "ball", "Kerala"));
    }
}
