/// Replaces typographic punctuation with plain ASCII equivalents.
///
/// Every replacement is ASCII, so running the result through again is a no-op.
pub fn sanitize(text: &str) -> String {
    let mut result = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '\u{2018}' | '\u{2019}' | '\u{201A}' | '\u{201B}' => result.push('\''),
            '\u{201C}' | '\u{201D}' | '\u{201E}' | '\u{201F}' => result.push('"'),
            '\u{00AB}' | '\u{00BB}' => result.push('"'),
            '\u{2039}' | '\u{203A}' => result.push('\''),
            '\u{2013}' | '\u{2014}' => result.push('-'),
            '\u{2026}' => result.push_str("..."),
            '\u{00A0}' => result.push(' '),
            other => result.push(other),
        }
    }

    result
}

/// Sanitizes an optional provider field, treating a missing value as empty.
pub fn sanitize_opt(text: Option<&str>) -> String {
    sanitize(text.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_mixed_punctuation() {
        let input = "\u{201C}Hello\u{201D} \u{2014} it\u{2019}s a test\u{2026} café";
        assert_eq!(sanitize(input), "\"Hello\" - it's a test... café");
    }

    #[test]
    fn sanitizing_twice_is_a_no_op() {
        let once = sanitize("\u{201C}Hello\u{201D} \u{2014} it's a test\u{2026} café");
        assert_eq!(sanitize(&once), once);
    }

    #[test]
    fn single_quotes_and_guillemets() {
        assert_eq!(sanitize("\u{2018}a\u{2019} \u{201A}b\u{201B}"), "'a' 'b'");
        assert_eq!(sanitize("\u{2039}x\u{203A}"), "'x'");
        assert_eq!(sanitize("\u{00AB}Bonjour\u{00BB}"), "\"Bonjour\"");
        assert_eq!(sanitize("\u{201E}Hallo\u{201F}"), "\"Hallo\"");
    }

    #[test]
    fn dashes_and_spaces() {
        assert_eq!(sanitize("1\u{2013}2\u{00A0}pages"), "1-2 pages");
    }

    #[test]
    fn leaves_other_text_alone() {
        let input = "Plain ASCII, naïve résumé, 日本語, and emoji 🦀";
        assert_eq!(sanitize(input), input);
    }

    #[test]
    fn missing_fields_become_empty() {
        assert_eq!(sanitize_opt(None), "");
        assert_eq!(sanitize_opt(Some("\u{2026}")), "...");
    }
}
