//! Markup stripping for product titles.
//!
//! The shopping API highlights query terms with `<b>` tags inside titles;
//! every angle-bracket run is removed before titles are matched or displayed.

use regex_lite::Regex;
use std::sync::LazyLock;

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new("<[^>]*>").unwrap());

/// Removes every `<...>` tag from the input. Non-greedy, no nesting
/// awareness; text without tags is returned unchanged.
pub fn strip_tags(text: &str) -> String {
    TAG.replace_all(text, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_highlight_tags() {
        assert_eq!(strip_tags("LG <b>세탁기</b> 16kg"), "LG 세탁기 16kg");
        assert_eq!(strip_tags("<b>삼성</b> 그랑데 <b>세탁기</b>"), "삼성 그랑데 세탁기");
    }

    #[test]
    fn test_identity_without_tags() {
        assert_eq!(strip_tags("plain title"), "plain title");
        assert_eq!(strip_tags(""), "");
    }

    #[test]
    fn test_idempotent() {
        let once = strip_tags("a <b>b</b> c");
        assert_eq!(strip_tags(&once), once);
    }

    #[test]
    fn test_unclosed_bracket_left_alone() {
        // No closing '>' means no tag match.
        assert_eq!(strip_tags("price < 500"), "price < 500");
    }

    #[test]
    fn test_non_greedy() {
        assert_eq!(strip_tags("<i>a</i> > <i>b</i>"), "a > b");
    }

    #[test]
    fn test_empty_tag() {
        assert_eq!(strip_tags("a<>b"), "ab");
    }
}
