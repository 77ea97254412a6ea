//! Extract the first result snippet from a search results page.

use crate::domain::DomainError;
use scraper::{Html, Selector};

/// Snippet region of the lightweight (non-JS) results page.
const SNIPPET_SELECTOR: &str = "div.BNeawe.vvjwJb.AP7Wnd";

/// Text of the first snippet, or `None` if the page has no snippet region.
pub fn extract_top_snippet(html: &str) -> Result<Option<String>, DomainError> {
    let selector =
        Selector::parse(SNIPPET_SELECTOR).map_err(|e| DomainError::Parse(e.to_string()))?;
    let document = Html::parse_document(html);
    Ok(document
        .select(&selector)
        .next()
        .map(|el| el.text().collect::<String>()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_match_text() {
        let html = r#"<div class="g"><div class="BNeawe vvjwJb AP7Wnd">Top <b>hit</b></div></div>
            <div class="BNeawe vvjwJb AP7Wnd">Other</div>"#;
        assert_eq!(extract_top_snippet(html).unwrap().as_deref(), Some("Top hit"));
    }

    #[test]
    fn test_requires_all_classes() {
        let html = r#"<div class="BNeawe vvjwJb">partial</div><span class="BNeawe vvjwJb AP7Wnd">span</span>"#;
        assert_eq!(extract_top_snippet(html).unwrap(), None);
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(extract_top_snippet("").unwrap(), None);
    }
}
