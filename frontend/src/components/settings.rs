use yew::prelude::*;

#[function_component]
pub fn Settings() -> Html {
    html! {
        <div class="page-stub">
            <h1>{ "Settings" }</h1>
            <p>{ "Manage your account and preferences." }</p>
        </div>
    }
}
