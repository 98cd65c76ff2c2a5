//! `appraiser appraise` - run one appraisal without starting the server.

use appraiser_core::service::appraisal::appraise;
use appraiser_types::appraisal::{AppraisalRequest, AppraisalResult};

use crate::state::AppState;

/// Appraise `content` and print the result.
///
/// With `json`, prints exactly the body the HTTP endpoint would return.
pub fn appraise_content(state: &AppState, content: String, json: bool) -> anyhow::Result<()> {
    let request = AppraisalRequest::new(content);
    let result = appraise(&request, state.score_source.as_ref())?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_styled(request.content.as_deref().unwrap_or_default(), &result);
    }

    Ok(())
}

fn print_styled(content: &str, result: &AppraisalResult) {
    let scores = result
        .dimension_scores
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join("  ");

    println!();
    println!(
        "  {} Appraisal for '{}'",
        console::style("◆").bold(),
        console::style(content).cyan()
    );
    println!();
    println!("  {}  {}", console::style("Scores ").dim(), scores);
    println!(
        "  {}  {}",
        console::style("Overall").dim(),
        console::style(result.overall_score).green().bold()
    );
    println!();
    println!("  {}", console::style(result.rationale).dim());
    println!();
}
