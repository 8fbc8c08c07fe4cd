use inspector_core::format::{analysis_summary, output_heading, similarity_label};
use inspector_core::Comparison;
use leptos::prelude::*;

#[component]
pub fn ResultCard(comparison: Comparison) -> impl IntoView {
    let similarity = similarity_label(comparison.similarity_score);
    let analysis = comparison.analysis.as_ref().map(analysis_summary);

    view! {
        <div class="card results-panel">
            <h2>"Comparison Results"</h2>
            <div class="result-summary">
                <p>
                    <strong>"Similarity Score:"</strong>
                    " "
                    {similarity}
                </p>
                {analysis.map(|summary| view! {
                    <p class="analysis">
                        <strong>"Analysis:"</strong>
                        " "
                        {summary}
                    </p>
                })}
            </div>
            <div class="outputs">
                <OutputPanel model=comparison.model_a output=comparison.output_a />
                <OutputPanel model=comparison.model_b output=comparison.output_b />
            </div>
        </div>
    }
}

#[component]
fn OutputPanel(model: String, output: String) -> impl IntoView {
    view! {
        <div class="output-panel">
            <h3>{output_heading(&model)}</h3>
            <pre class="live-output">{output}</pre>
        </div>
    }
}
