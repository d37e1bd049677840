//! Search helpers shared by the list pages.

use leptos::prelude::*;

/// Shortest query that triggers highlighting
const MIN_HIGHLIGHT_LEN: usize = 2;

/// Byte ranges of case-insensitive matches of `query` in `text`.
pub fn match_ranges(text: &str, query: &str) -> Vec<(usize, usize)> {
    let query = query.trim();
    if query.chars().count() < MIN_HIGHLIGHT_LEN {
        return Vec::new();
    }
    let text_lower = text.to_lowercase();
    let query_lower = query.to_lowercase();
    // Lower-casing can change byte lengths outside ASCII
    if text_lower.len() != text.len() {
        return Vec::new();
    }

    let mut ranges = Vec::new();
    let mut from = 0;
    while let Some(pos) = text_lower[from..].find(&query_lower) {
        let start = from + pos;
        let end = start + query_lower.len();
        ranges.push((start, end));
        from = end;
    }
    ranges
}

/// Text with every match of `query` wrapped in a highlight span.
pub fn highlight_matches(text: &str, query: &str) -> AnyView {
    let ranges = match_ranges(text, query);
    if ranges.is_empty() {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last = 0;
    for (start, end) in ranges {
        if start > last {
            parts.push(view! { <span>{text[last..start].to_string()}</span> }.into_any());
        }
        parts.push(view! { <mark class="search-highlight">{text[start..end].to_string()}</mark> }.into_any());
        last = end;
    }
    if last < text.len() {
        parts.push(view! { <span>{text[last..].to_string()}</span> }.into_any());
    }

    view! { <>{parts}</> }.into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_ranges_case_insensitive() {
        assert_eq!(match_ranges("Jane Doe and JANE", "jane"), vec![(0, 4), (13, 17)]);
    }

    #[test]
    fn test_short_query_is_ignored() {
        assert!(match_ranges("John Smith", "j").is_empty());
        assert!(match_ranges("John Smith", "  ").is_empty());
    }
}
