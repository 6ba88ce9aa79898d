use std::rc::Rc;

use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod pages;
pub mod api_client;
pub mod format;
pub mod hooks;
pub mod settings;
pub mod ui;

use api_client::ApiClient;
use components::layout::Layout;
use pages::comparison::Comparison;
use pages::dashboard::Dashboard;
use pages::historical::Historical;
use ui::toast::ToastProvider;

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Dashboard,
    #[at("/historical")]
    Historical,
    #[at("/compare")]
    Comparison,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    log::debug!("Routing to: {:?}", route);
    match route {
        Route::Dashboard => {
            html! { <Layout><Dashboard /></Layout> }
        }
        Route::Historical => {
            html! { <Layout><Historical /></Layout> }
        }
        Route::Comparison => {
            html! { <Layout><Comparison /></Layout> }
        }
        Route::NotFound => {
            log::warn!("404 - Route not found");
            html! { <Layout><h1 class="text-2xl font-bold">{"404 Not Found"}</h1></Layout> }
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    // One client for the whole app, built from settings at startup and handed
    // to pages through context instead of a module-level singleton.
    let client = use_memo((), |_| ApiClient::new(&settings::get_settings()));

    html! {
        <ContextProvider<Rc<ApiClient>> context={Rc::clone(&client)}>
            <ToastProvider>
                <BrowserRouter>
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </ToastProvider>
        </ContextProvider<Rc<ApiClient>>>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    settings::init_settings();

    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== CivicView Dashboard Starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("API base URL: {}", settings.api_base_url());

    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
