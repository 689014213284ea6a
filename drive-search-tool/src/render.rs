//! Text rendering of a listing page.

use drive_search_repository::FileListPage;

/// Render one result page as the tool's text block.
///
/// Layout: a `Found N files:` count line, one `<id> <name> (<mimeType>)`
/// line per file, a trailing line echoing the effective filter, and a
/// next-page instruction only when the backend returned a cursor. Zero
/// matches still render the count line with an empty file list.
pub fn render_page(page: &FileListPage, filter: &str) -> String {
    let file_lines: Vec<String> = page
        .files
        .iter()
        .map(|file| format!("{} {} ({})", file.id, file.name, file.mime_type))
        .collect();

    let mut text = format!("Found {} files:\n{}", page.files.len(), file_lines.join("\n"));

    let shown_filter = if filter.is_empty() { "All files" } else { filter };
    text.push_str(&format!("\n\nSearch query: '{}'", shown_filter));

    if let Some(token) = &page.next_page_token {
        text.push_str(&format!(
            "\n\nMore results available. Use pageToken: '{}' to fetch the next page.",
            token
        ));
    }

    text
}
