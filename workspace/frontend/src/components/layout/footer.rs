use std::rc::Rc;

use chrono::{Datelike, Local};
use common::HealthStatus;
use yew::prelude::*;

use crate::api_client::ApiClient;
use crate::hooks::FetchState;

#[function_component(Footer)]
pub fn footer() -> Html {
    let client = use_context::<Rc<ApiClient>>().unwrap();
    let health = use_state(|| FetchState::<HealthStatus>::NotStarted);

    // One liveness ping per mount; failures only dim the indicator.
    {
        let health = health.clone();
        use_effect_with((), move |_| {
            health.set(FetchState::Loading);
            wasm_bindgen_futures::spawn_local(async move {
                match client.health().await {
                    Ok(status) => health.set(FetchState::Success(status)),
                    Err(err) => health.set(FetchState::Error(err)),
                }
            });
            || ()
        });
    }

    let (indicator_color, indicator_text) = match &*health {
        FetchState::Success(status) if status.is_ok() => ("#10b981", "Data service online"),
        FetchState::Success(_) => ("#f59e0b", "Data service degraded"),
        FetchState::Error(_) => ("#ef4444", "Data service unreachable"),
        FetchState::NotStarted | FetchState::Loading => ("#6b7280", "Checking data service..."),
    };

    let year = Local::now().year();

    html! {
        <footer class="footer footer-center bg-base-100 text-sm p-6 gap-2">
            <p>
                {format!("\u{a9} {year} CivicView. Data sourced from ")}
                <a
                    href="https://data.gov.in"
                    target="_blank"
                    rel="noopener noreferrer"
                    class="link"
                >
                    {"data.gov.in"}
                </a>
                {" and official MGNREGA records."}
            </p>
            <p class="text-gray-500">
                {"This is a public transparency initiative. For official information, visit "}
                <a
                    href="https://nrega.nic.in"
                    target="_blank"
                    rel="noopener noreferrer"
                    class="link"
                >
                    {"nrega.nic.in"}
                </a>
            </p>
            <p class="flex items-center gap-2">
                <span
                    class="w-2 h-2 rounded-full inline-block"
                    style={format!("background-color: {indicator_color};")}
                ></span>
                <span class="text-xs text-gray-500">{indicator_text}</span>
            </p>
        </footer>
    }
}
