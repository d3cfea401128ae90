//! Text cleanup for display.

/// Remove HTML tags from a description string.
///
/// This is plain tag stripping (every `<...>` span is dropped), not
/// HTML sanitization. A `<` with no closing `>` is left in place. The
/// catalog API is a fixed, trusted source; do not reuse this for
/// untrusted input.
pub fn strip_html_tags(html: Option<&str>) -> String {
    let Some(mut rest) = html else {
        return String::new();
    };

    let mut out = String::with_capacity(rest.len());
    while let Some(open) = rest.find('<') {
        out.push_str(&rest[..open]);
        match rest[open..].find('>') {
            Some(close) => rest = &rest[open + close + 1..],
            None => {
                // Unterminated tag: keep the text verbatim.
                out.push_str(&rest[open..]);
                return out;
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_simple_tags() {
        assert_eq!(
            strip_html_tags(Some("<p>Hello <b>world</b></p>")),
            "Hello world"
        );
    }

    #[test]
    fn missing_input_is_empty() {
        assert_eq!(strip_html_tags(None), "");
    }

    #[test]
    fn tags_with_attributes() {
        assert_eq!(
            strip_html_tags(Some("<a href=\"https://example.com\">link</a> text")),
            "link text"
        );
    }

    #[test]
    fn unterminated_tag_left_in_place() {
        assert_eq!(strip_html_tags(Some("3 < 4 and 5 > 2")), "3  2");
        assert_eq!(strip_html_tags(Some("tail <unclosed")), "tail <unclosed");
    }

    #[test]
    fn plain_text_unchanged() {
        assert_eq!(strip_html_tags(Some("no markup here")), "no markup here");
    }
}
