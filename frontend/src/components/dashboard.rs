use yew::prelude::*;

#[function_component]
pub fn Dashboard() -> Html {
    html! {
        <div class="page-stub">
            <h1>{ "Dashboard" }</h1>
            <p>{ "Your training at a glance." }</p>
        </div>
    }
}
