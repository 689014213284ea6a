//! Effective-filter derivation for user queries.

/// Substring that opts a query out of the default trash exclusion.
const TRASH_OPT_IN: &str = "trashed = true";

/// Derive the effective filter query from the user's free-text query.
///
/// Unless the trimmed query already mentions `trashed = true`, it is wrapped
/// as `(<query>) and trashed = false` so trashed files stay out of results by
/// default; otherwise the trimmed query is used verbatim, trusting the caller
/// to have specified trash inclusion themselves.
///
/// This is a plain substring check, not a parse of the backend query grammar:
/// a query that happens to contain the literal text `trashed = true` inside
/// an unrelated term also suppresses the default exclusion. Known limitation,
/// kept as a best-effort default.
pub fn derive_filter(user_query: &str) -> String {
    let trimmed = user_query.trim();
    if trimmed.contains(TRASH_OPT_IN) {
        trimmed.to_string()
    } else {
        format!("({}) and trashed = false", trimmed)
    }
}
