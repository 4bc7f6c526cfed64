use crate::session::HistoryEntry;

pub const SLOT_EXTRACTION_SYSTEM: &str = "You are JobGPT, a job-search assistant. \
    You have access to the last 5 interactions as history. \
    Each entry is {\"user\": string, \"slots\": object}. \
    Given this history plus a new user message, extract the search slots: \
    \"keywords\" (list of strings: role or skills), \
    \"location\" (string: city or country), \
    \"remote\" (boolean), \
    \"days\" (integer: only jobs posted within this many days). \
    Omit any slot the user did not express. \
    Respond with a single JSON object only. Do NOT use markdown code fences. \
    Do NOT include explanations.";

pub fn build_slot_prompt(history: &[HistoryEntry], utterance: &str) -> String {
    let history_json = serde_json::to_string(history).unwrap_or_else(|_| "[]".to_string());
    format!("History: {history_json}\nUser: \"{utterance}\"")
}
