use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

struct NavItem {
    route: Route,
    label: &'static str,
    icon: &'static str,
}

const NAV_ITEMS: [NavItem; 3] = [
    NavItem {
        route: Route::Dashboard,
        label: "Dashboard",
        icon: "fas fa-chart-line",
    },
    NavItem {
        route: Route::Historical,
        label: "Trends",
        icon: "fas fa-history",
    },
    NavItem {
        route: Route::Comparison,
        label: "Compare",
        icon: "fas fa-balance-scale",
    },
];

#[function_component(Header)]
pub fn header() -> Html {
    let current = use_route::<Route>();

    html! {
        <header class="navbar bg-base-100 shadow px-6">
            <div class="flex-1">
                <Link<Route> to={Route::Dashboard} classes="flex flex-col">
                    <span class="text-xl font-bold">{"CivicView"}</span>
                    <span class="text-xs text-gray-500">{"MGNREGA Performance Dashboard"}</span>
                </Link<Route>>
            </div>
            <nav class="flex-none">
                <ul class="menu menu-horizontal gap-1">
                    {for NAV_ITEMS.iter().map(|item| {
                        let active = current.as_ref() == Some(&item.route);
                        html! {
                            <li>
                                <Link<Route>
                                    to={item.route.clone()}
                                    classes={classes!(active.then_some("active"))}
                                >
                                    <i class={item.icon}></i>
                                    <span>{item.label}</span>
                                </Link<Route>>
                            </li>
                        }
                    })}
                </ul>
            </nav>
        </header>
    }
}
