use crate::listing::JobListing;

pub const CLARIFY_MESSAGE: &str = "I'm missing some details. Can you specify a role or location?";
pub const NO_RESULTS_MESSAGE: &str = "No matching jobs found. Try broadening your search.";
pub const REFINE_PROMPT: &str = "Anything else I can refine?";

/// Numbered Markdown list of the first `limit` listings plus a closing prompt.
pub fn format_listings(jobs: &[JobListing], limit: usize) -> String {
    let mut lines: Vec<String> = jobs
        .iter()
        .take(limit)
        .enumerate()
        .map(|(i, job)| {
            format!(
                "{}. **{}** at {} ({})\nApply: {}",
                i + 1,
                job.display_title(),
                job.display_company(),
                job.display_location(),
                job.identifying_url().unwrap_or_default()
            )
        })
        .collect();
    lines.push(format!("\n{REFINE_PROMPT}"));
    lines.join("\n\n")
}
