use yew::prelude::*;

#[function_component]
pub fn Nutrition() -> Html {
    html! {
        <div class="page-stub">
            <h1>{ "Nutrition" }</h1>
            <p>{ "Track your meals and calories." }</p>
        </div>
    }
}
