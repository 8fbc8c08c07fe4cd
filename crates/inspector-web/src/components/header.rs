use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"Model Change Inspector"</h1>
            <span class="subtitle">"Compare two models side by side"</span>
        </header>
    }
}
