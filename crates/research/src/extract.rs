//! Page text extraction.

use scraper::{ElementRef, Html, Node};

/// Elements dropped together with all of their text.
pub const SKIPPED_TAGS: [&str; 6] = ["script", "style", "nav", "footer", "header", "iframe"];

/// Visible text of an HTML document, one trimmed text node per line.
///
/// Comments and the contents of [`SKIPPED_TAGS`] are ignored. Never fails:
/// the parser recovers from any malformed input.
pub fn extract_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut pieces = Vec::new();
    collect_text(document.root_element(), &mut pieces);
    pieces.join("\n")
}

fn collect_text(element: ElementRef<'_>, pieces: &mut Vec<String>) {
    if SKIPPED_TAGS.contains(&element.value().name()) {
        return;
    }
    for child in element.children() {
        match child.value() {
            Node::Text(text) => {
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    pieces.push(trimmed.to_string());
                }
            }
            Node::Element(_) => {
                if let Some(child) = ElementRef::wrap(child) {
                    collect_text(child, pieces);
                }
            }
            _ => {}
        }
    }
}

/// The first `limit` characters of `text`. May cut mid-word.
pub fn truncate_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_chrome_and_code() {
        let html = r#"<!DOCTYPE html>
<html>
  <head><title>Water Lilies</title><style>p { color: red; }</style></head>
  <body>
    <header>Site header</header>
    <nav><a href="/">Home</a></nav>
    <script>var tracking = true;</script>
    <main>
      <h1>  Water Lilies  </h1>
      <p>Monet painted the pond at <em>Giverny</em>.</p>
      <!-- a comment -->
      <iframe src="https://ads.example.com">ad text</iframe>
    </main>
    <footer>Copyright</footer>
  </body>
</html>"#;

        let text = extract_text(html);
        assert_eq!(
            text,
            "Water Lilies\nWater Lilies\nMonet painted the pond at\nGiverny\n."
        );
        for dropped in ["Site header", "Home", "tracking", "color", "ad text", "Copyright", "comment"] {
            assert!(!text.contains(dropped), "{dropped} leaked into {text:?}");
        }
    }

    #[test]
    fn nested_skipped_tags_are_dropped() {
        let html = "<div><p>kept</p><nav><ul><li>menu</li></ul></nav></div>";
        assert_eq!(extract_text(html), "kept");
    }

    #[test]
    fn malformed_html_still_yields_text() {
        assert_eq!(extract_text("<p>unclosed <b>bold"), "unclosed\nbold");
        assert_eq!(extract_text(""), "");
    }

    #[test]
    fn truncation_keeps_exact_prefix() {
        let text = "a".repeat(5000);
        let cut = truncate_chars(&text, 1500);
        assert_eq!(cut.chars().count(), 1500);
        assert!(text.starts_with(cut));
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let text = "é".repeat(10);
        assert_eq!(truncate_chars(&text, 3), "ééé");
    }

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(truncate_chars("short", 1500), "short");
    }
}
