use inspector_core::format::{display_date, similarity_label, NO_COMPARISONS};
use inspector_core::{Comparison, ComparisonHistory};
use leptos::prelude::*;

#[component]
pub fn HistoryList(history: RwSignal<ComparisonHistory>, on_refresh: Callback<()>) -> impl IntoView {
    view! {
        <div class="card history-panel">
            <div class="history-header">
                <h2>"Recent Comparisons"</h2>
                <button class="refresh-btn" on:click=move |_| on_refresh.run(())>"Refresh"</button>
            </div>
            {move || history.with(|h| {
                if h.is_empty() {
                    view! { <p class="placeholder">{NO_COMPARISONS}</p> }.into_any()
                } else {
                    view! {
                        <div class="history-entries">
                            {h.entries().iter().cloned().map(|c| view! { <HistoryEntry comparison=c /> }).collect::<Vec<_>>()}
                        </div>
                    }.into_any()
                }
            })}
        </div>
    }
}

#[component]
fn HistoryEntry(comparison: Comparison) -> impl IntoView {
    let date = display_date(&comparison.created_at);
    let similarity = comparison
        .similarity_score
        .map(|score| format!("Similarity: {}", similarity_label(Some(score))));

    view! {
        <div class="history-entry">
            <div class="history-entry-header">
                <div class="matchup">
                    <span class="badge">{comparison.model_a}</span>
                    <span class="versus">"vs"</span>
                    <span class="badge">{comparison.model_b}</span>
                </div>
                <span class="date">{date}</span>
            </div>
            {similarity.map(|s| view! { <p class="similarity">{s}</p> })}
        </div>
    }
}
