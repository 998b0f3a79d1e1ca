/// Escape text so that it can be embedded in HTML element contents or in a
/// quoted attribute value without ever being read as markup
pub fn escape_html(s: &str) -> String {
    let mut res = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => res.push_str("&amp;"),
            '<' => res.push_str("&lt;"),
            '>' => res.push_str("&gt;"),
            '"' => res.push_str("&quot;"),
            '\'' => res.push_str("&#39;"),
            c => res.push(c),
        }
    }
    res
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unescape(s: &str) -> String {
        s.replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&#39;", "'")
            .replace("&amp;", "&")
    }

    #[test]
    fn script_tag_is_neutralized() {
        assert_eq!(
            escape_html("<script>alert('hi')</script>"),
            "&lt;script&gt;alert(&#39;hi&#39;)&lt;/script&gt;"
        );
    }

    #[test]
    fn ampersand_is_escaped_first() {
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
        assert_eq!(escape_html("fish & chips"), "fish &amp; chips");
    }

    #[test]
    fn plain_text_is_untouched() {
        assert_eq!(escape_html("Hello, world"), "Hello, world");
        assert_eq!(escape_html("Привет"), "Привет");
        assert_eq!(escape_html(""), "");
    }

    #[test]
    fn never_contains_markup() {
        bolero::check!()
            .with_type::<String>()
            .cloned()
            .for_each(|s: String| {
                let escaped = escape_html(&s);
                assert!(!escaped.contains(['<', '>', '"', '\'']), "{escaped:?}");
                assert_eq!(unescape(&escaped), s);
            })
    }
}
