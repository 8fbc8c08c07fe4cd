//! Plain-text rendering of comparison records

use inspector_core::format::{
    analysis_summary, display_date, matchup, output_heading, similarity_label, NO_COMPARISONS,
};
use inspector_core::Comparison;

/// Result view: similarity, analysis and both outputs verbatim
pub fn comparison_detail(c: &Comparison) -> String {
    let rule = format!("{:-<60}\n", "");
    let mut out = format!(
        "Comparison #{} ({})\n{}  Similarity Score: {}\n",
        c.id,
        display_date(&c.created_at),
        rule,
        similarity_label(c.similarity_score)
    );
    if let Some(analysis) = &c.analysis {
        out.push_str(&format!("  Analysis: {}\n", analysis_summary(analysis)));
    }
    for (model, prompt, output) in [
        (&c.model_a, &c.prompt_a, &c.output_a),
        (&c.model_b, &c.prompt_b, &c.output_b),
    ] {
        out.push_str(&format!(
            "\n{}\n  Prompt: {}\n{}{}\n",
            output_heading(model),
            prompt,
            rule,
            output
        ));
    }
    out
}

/// Recent comparisons table, in the order given
pub fn comparison_table(entries: &[Comparison]) -> String {
    if entries.is_empty() {
        return format!("{}\n", NO_COMPARISONS);
    }

    let rule = format!("{:-<78}\n", "");
    let mut out = rule.clone();
    out.push_str(&format!(
        "  {:<5} {:<44} {:<12} {}\n",
        "#", "Models", "Date", "Similarity"
    ));
    out.push_str(&rule);
    for c in entries {
        let similarity = match c.similarity_score {
            Some(_) => similarity_label(c.similarity_score),
            None => "-".to_string(),
        };
        out.push_str(&format!(
            "  {:<5} {:<44} {:<12} {}\n",
            c.id,
            matchup(c),
            display_date(&c.created_at),
            similarity
        ));
    }
    out
}
