//! Line splitting for text read from disk

/// Characters that end a line. `\r\n` counts as one break.
const LINE_BREAKS: &[char] = &[
    '\n', '\r', '\u{0b}', '\u{0c}', '\u{1c}', '\u{1d}', '\u{1e}', '\u{85}', '\u{2028}', '\u{2029}',
];

/// Split `text` into lines without their terminators.
///
/// Unlike [`str::lines`], a lone `\r` and the Unicode line and paragraph
/// separators also end a line. A trailing terminator does not produce an
/// empty final line, and empty text has no lines.
pub(crate) fn split_lines(text: &str) -> SplitLines<'_> {
    SplitLines { rest: text }
}

pub(crate) struct SplitLines<'a> {
    rest: &'a str,
}

impl<'a> Iterator for SplitLines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }
        let Some(idx) = self.rest.find(LINE_BREAKS) else {
            let line = self.rest;
            self.rest = "";
            return Some(line);
        };

        let line = &self.rest[..idx];
        let after = &self.rest[idx..];
        let skip = if after.starts_with("\r\n") {
            2
        } else {
            after.chars().next().map_or(1, char::len_utf8)
        };
        self.rest = &after[skip..];
        Some(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", &[])]
    #[case("one", &["one"])]
    #[case("one\n", &["one"])]
    #[case("\n", &[""])]
    #[case("a\n\nb", &["a", "", "b"])]
    #[case("a\r\nb\r\n", &["a", "b"])]
    #[case("a\rb\rc\r", &["a", "b", "c"])]
    #[case("a\r\rb", &["a", "", "b"])]
    #[case("a\n\rb", &["a", "", "b"])]
    #[case("a\u{2028}b\u{85}c", &["a", "b", "c"])]
    #[case("a\u{0c}b", &["a", "b"])]
    fn test_split_lines(#[case] input: &str, #[case] expected: &[&str]) {
        assert_eq!(split_lines(input).collect::<Vec<_>>(), expected);
    }
}
