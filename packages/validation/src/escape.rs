/// Replaces the characters that are significant in HTML markup with their
/// entities. `&` is replaced first so existing entities are escaped too.
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escapes_markup_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">&</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_leaves_plain_text_alone() {
        assert_eq!(escape_html("Spring Fair 2021"), "Spring Fair 2021");
        assert_eq!(escape_html("it's"), "it's");
        assert_eq!(escape_html(""), "");
    }

    #[test]
    fn test_escapes_existing_entities() {
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
    }
}
