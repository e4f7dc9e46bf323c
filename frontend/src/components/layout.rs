use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

const NAV_ITEMS: [(&str, Route); 5] = [
    ("Dashboard", Route::Dashboard),
    ("Workouts", Route::Workouts),
    ("Nutrition", Route::Nutrition),
    ("Progress", Route::Progress),
    ("Settings", Route::Settings),
];

#[derive(PartialEq, Properties)]
pub struct LayoutProps {
    pub children: Html,
}

/// Sidebar shell around every routed page.
#[function_component]
pub fn Layout(props: &LayoutProps) -> Html {
    html! {
        <div class="app-shell">
            <nav class="sidebar">
                <span class="app-title">{ "Fit Tracker" }</span>
                { for NAV_ITEMS.iter().map(|(title, route)| html! {
                    <Link<Route> to={route.clone()} classes="nav-link">{ *title }</Link<Route>>
                }) }
            </nav>
            <main class="page">
                { props.children.clone() }
            </main>
        </div>
    }
}
