use inspector_core::{Comparison, ComparisonHistory, ComparisonSubmitter};
use leptos::prelude::*;
use web_sys::console;

use crate::api;
use crate::components::compare_form::CompareForm;
use crate::components::history_list::HistoryList;
use crate::components::result_card::ResultCard;

/// Latest successful record; notifies only when the submit outcome changes
pub fn current_result(submitter: RwSignal<ComparisonSubmitter>) -> Memo<Option<Comparison>> {
    Memo::new(move |_| submitter.with(|s| s.result().cloned()))
}

#[component]
pub fn InspectorPage() -> impl IntoView {
    let submitter = RwSignal::new(ComparisonSubmitter::new());
    let history = RwSignal::new(ComparisonHistory::new());
    let result = current_result(submitter);

    // Responses are applied in arrival order
    let refresh = Callback::new(move |_: ()| {
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = api::fetch_comparisons().await;
            if let Err(e) = &outcome {
                console::error_1(&format!("Failed to load comparisons: {}", e).into());
            }
            history.update(|h| {
                h.apply(outcome);
            });
        });
    });

    // Load the list on mount
    Effect::new(move || refresh.run(()));

    let submit = Callback::new(move |_: ()| {
        let Some(request) = submitter.try_update(|s| s.begin()).flatten() else {
            return;
        };

        wasm_bindgen_futures::spawn_local(async move {
            let outcome = api::create_comparison(request).await;
            let should_refresh = submitter.try_update(|s| s.finish(outcome)).unwrap_or(false);
            if should_refresh {
                refresh.run(());
            }
        });
    });

    view! {
        <div class="page inspector-page">
            <CompareForm submitter=submitter on_submit=submit />

            {move || result.get().map(|comparison| view! {
                <ResultCard comparison=comparison />
            })}

            <HistoryList history=history on_refresh=refresh />
        </div>
    }
}
