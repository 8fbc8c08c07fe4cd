use inspector_core::{ComparisonSubmitter, Side};
use leptos::prelude::*;

#[component]
pub fn CompareForm(submitter: RwSignal<ComparisonSubmitter>, on_submit: Callback<()>) -> impl IntoView {
    view! {
        <div class="card compare-card">
            <h2>"Compare Models"</h2>
            <div class="compare-columns">
                <ModelColumn submitter=submitter side=Side::A placeholder="Model name (e.g., gpt-4)" />
                <ModelColumn submitter=submitter side=Side::B placeholder="Model name (e.g., gpt-3.5-turbo)" />
            </div>

            <button
                class="run-btn"
                disabled=move || submitter.with(|s| !s.can_submit())
                on:click=move |_| on_submit.run(())
            >
                {move || {
                    let label = submitter.with(|s| s.button_label());
                    if submitter.with(|s| s.is_submitting()) {
                        view! { <span class="loading"><span class="spinner"></span>" "{label}</span> }.into_any()
                    } else {
                        view! { <span>{label}</span> }.into_any()
                    }
                }}
            </button>

            {move || submitter.with(|s| s.error().map(str::to_string)).map(|e| view! {
                <div class="error-panel">
                    <p style="color: var(--error);">{e}</p>
                </div>
            })}
        </div>
    }
}

#[component]
fn ModelColumn(
    submitter: RwSignal<ComparisonSubmitter>,
    side: Side,
    placeholder: &'static str,
) -> impl IntoView {
    let prompt_placeholder = format!("Enter prompt for {}", side.label());

    view! {
        <div class="form-group">
            <h3>{side.label()}</h3>
            <input
                type="text"
                placeholder=placeholder
                prop:value=move || submitter.with(|s| s.form.model(side).to_string())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    submitter.update(|s| s.form.set_model(side, value));
                }
            />
            <textarea
                rows="4"
                placeholder=prompt_placeholder
                prop:value=move || submitter.with(|s| s.form.prompt(side).to_string())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    submitter.update(|s| s.form.set_prompt(side, value));
                }
            ></textarea>
        </div>
    }
}
