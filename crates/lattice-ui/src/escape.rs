//! HTML escaping for text content and attribute values.

/// Escape a string for use as element text content.
pub fn text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            other => out.push(other),
        }
    }
    out
}

/// Escape a string for use inside a double-quoted attribute value.
pub fn attr(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("hello world", "hello world"; "plain text passes through")]
    #[test_case("a & b", "a &amp; b"; "ampersand")]
    #[test_case("<b>bold</b>", "&lt;b&gt;bold&lt;/b&gt;"; "tags")]
    #[test_case("&lt;", "&amp;lt;"; "already escaped input is re-escaped")]
    fn text_escaping(input: &str, expected: &str) {
        assert_eq!(text(input), expected);
    }

    #[test_case("a\"b", "a&quot;b"; "double quote")]
    #[test_case("a'b", "a&#39;b"; "single quote")]
    #[test_case("<&>", "&lt;&amp;&gt;"; "markup characters")]
    fn attr_escaping(input: &str, expected: &str) {
        assert_eq!(attr(input), expected);
    }
}
