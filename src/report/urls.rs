//! URL discovery in free-text descriptions.

use once_cell::sync::Lazy;
use regex::Regex;

/// `http` or `https`, then `://`, then any run of non-whitespace.
///
/// Punctuation glued to the end of a link is kept as part of the match.
static URL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"https?://\S*").expect("URL pattern must compile"));

/// Iterate the URLs in `text` in order of appearance.
pub fn extract_urls(text: &str) -> impl Iterator<Item = &str> {
    URL_PATTERN.find_iter(text).map(|found| found.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn urls(text: &str) -> Vec<&str> {
        extract_urls(text).collect()
    }

    #[test]
    fn finds_http_and_https() {
        assert_eq!(
            urls("see http://a.test/x and https://b.test/y?z=1"),
            vec!["http://a.test/x", "https://b.test/y?z=1"]
        );
    }

    #[test]
    fn keeps_trailing_punctuation() {
        assert_eq!(urls("(https://a.test/x)."), vec!["https://a.test/x)."]);
    }

    #[test]
    fn stops_at_whitespace() {
        assert_eq!(
            urls("https://a.test\nhttps://b.test\thttps://c.test"),
            vec!["https://a.test", "https://b.test", "https://c.test"]
        );
    }

    #[test]
    fn no_urls_in_plain_text() {
        assert!(urls("no link here, ftp://nope.test either").is_empty());
        assert!(urls("").is_empty());
    }

    #[test]
    fn bare_scheme_matches() {
        assert_eq!(urls("broken https:// link"), vec!["https://"]);
    }
}
