use components::{
    dashboard::Dashboard, layout::Layout, nutrition::Nutrition, progress::Progress,
    settings::Settings, workouts::Workouts,
};
use yew::prelude::*;
use yew_router::prelude::*;

mod api;
mod components;
mod query;

#[derive(Clone, Debug, PartialEq, Routable)]
pub enum Route {
    #[at("/")]
    Dashboard,
    #[at("/workouts")]
    Workouts,
    #[at("/nutrition")]
    Nutrition,
    #[at("/progress")]
    Progress,
    #[at("/settings")]
    Settings,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Dashboard => html! { <Dashboard /> },
        Route::Workouts => html! { <Workouts /> },
        Route::Nutrition => html! { <Nutrition /> },
        Route::Progress => html! { <Progress /> },
        Route::Settings => html! { <Settings /> },
        Route::NotFound => html! {
            <div class="page-stub">
                <h1>{ "404" }</h1>
                <p>{ "This page does not exist." }</p>
            </div>
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Layout>
                <Switch<Route> render={switch} />
            </Layout>
        </BrowserRouter>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
