//! Word tokenization and token counting

use std::collections::HashMap;

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

/// Split `text` into lower-cased word tokens.
///
/// A token is a maximal run of ASCII letters, digits, `_` and `-`.
/// Every other character separates tokens. Single-character tokens are kept.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !is_word_char(c))
        .filter(|token| !token.is_empty())
        .map(str::to_ascii_lowercase)
        .collect()
}

/// Multiset of tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenCounts {
    counts: HashMap<String, usize>,
    total: usize,
}

impl TokenCounts {
    pub fn from_text(text: &str) -> Self {
        tokenize(text).into_iter().collect()
    }

    /// Multiplicity of `token`, zero when absent.
    pub fn get(&self, token: &str) -> usize {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Sum of all multiplicities.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Capped multiset intersection with `other`.
    ///
    /// Each distinct token of `self` contributes the smaller of its two
    /// multiplicities, so repeating a query term only earns credit while
    /// the document repeats it too.
    pub fn overlap(&self, other: &TokenCounts) -> usize {
        self.counts
            .iter()
            .map(|(token, &count)| count.min(other.get(token)))
            .sum()
    }

    pub fn distinct(&self) -> impl Iterator<Item = &str> {
        self.counts.keys().map(String::as_str)
    }
}

impl FromIterator<String> for TokenCounts {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut counts = HashMap::new();
        let mut total = 0;
        for token in iter {
            *counts.entry(token).or_insert(0) += 1;
            total += 1;
        }
        Self { counts, total }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", &[])]
    #[case("   \t\n ", &[])]
    #[case("Use read-only access", &["use", "read-only", "access"])]
    #[case("snake_case and CamelCase", &["snake_case", "and", "camelcase"])]
    #[case("a b  c", &["a", "b", "c"])]
    #[case("redshift,postgres;none", &["redshift", "postgres", "none"])]
    #[case("## Heading: v2.1", &["heading", "v2", "1"])]
    #[case("naïve café", &["na", "ve", "caf"])]
    fn test_tokenize(#[case] input: &str, #[case] expected: &[&str]) {
        assert_eq!(tokenize(input), expected);
    }

    #[test]
    fn test_counts_track_multiplicity() {
        let counts = TokenCounts::from_text("redshift Redshift REDSHIFT query");
        assert_eq!(counts.get("redshift"), 3);
        assert_eq!(counts.get("query"), 1);
        assert_eq!(counts.get("missing"), 0);
        assert_eq!(counts.total(), 4);
    }

    #[test]
    fn test_overlap_is_capped_by_document() {
        let query = TokenCounts::from_text("redshift redshift");
        let doc = TokenCounts::from_text("redshift cluster");
        assert_eq!(query.overlap(&doc), 1);
    }

    #[test]
    fn test_overlap_is_capped_by_query() {
        let query = TokenCounts::from_text("redshift");
        let doc = TokenCounts::from_text("redshift redshift redshift");
        assert_eq!(query.overlap(&doc), 1);
    }

    #[test]
    fn test_overlap_sums_across_terms() {
        let query = TokenCounts::from_text("read-only redshift redshift");
        let doc = TokenCounts::from_text("redshift read-only redshift notes");
        assert_eq!(query.overlap(&doc), 3);
    }

    #[test]
    fn test_empty_counts() {
        let counts = TokenCounts::from_text("... !!! ");
        assert!(counts.is_empty());
        assert_eq!(counts.total(), 0);
    }
}
