use leptos::prelude::*;

use crate::components::header::Header;
use crate::pages::inspector::InspectorPage;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <div class="app">
            <Header />
            <main class="content">
                <InspectorPage />
            </main>
        </div>
    }
}
