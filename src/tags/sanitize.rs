//! Markup detection and stripping for registry text

use lazy_static::lazy_static;
use regex::Regex;
use std::borrow::Cow;

lazy_static! {
    static ref MARKUP_TAG: Regex =
        Regex::new(r"</?[A-Za-z!][^<>]*>").expect("markup pattern is valid");
}

pub fn contains_markup(text: &str) -> bool {
    MARKUP_TAG.is_match(text)
}

/// Remove HTML-like tags and collapse the whitespace they leave behind.
///
/// Runs to a fixed point so nested fragments such as `<<b>i>` cannot
/// reassemble into a tag.
pub fn strip_markup(text: &str) -> Cow<'_, str> {
    if !contains_markup(text) {
        return Cow::Borrowed(text);
    }

    let mut current = text.to_string();
    while contains_markup(&current) {
        current = MARKUP_TAG.replace_all(&current, "").into_owned();
    }

    Cow::Owned(current.split_whitespace().collect::<Vec<_>>().join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn plain_text_is_borrowed() {
        let text = "Wrapped Ether (WETH) and USD Coin (USDC)";
        assert!(!contains_markup(text));
        assert!(matches!(strip_markup(text), Cow::Borrowed(_)));
    }

    #[test]
    fn comparison_signs_are_not_markup() {
        assert!(!contains_markup("a < b and c > d"));
        assert!(!contains_markup("<3 token"));
    }

    #[test]
    fn bracketed_comparisons_are_treated_as_markup() {
        // `<y and z>` looks like a tag; stripping it keeps the transform infallible
        assert!(contains_markup("x<y and z>w"));
        assert_eq!(strip_markup("x<y and z>w"), "xw");
    }

    #[test]
    fn tags_are_stripped() {
        let text = "Evil <script>alert(1)</script> Token";
        assert!(contains_markup(text));
        assert_eq!(strip_markup(text), "Evil alert(1) Token");
    }

    #[test]
    fn nested_fragments_do_not_survive() {
        assert_eq!(strip_markup("x <<b>img src=y> z"), "x z");
    }

    proptest! {
        #[test]
        fn stripped_text_never_contains_markup(text in ".{0,64}") {
            prop_assert!(!contains_markup(&strip_markup(&text)));
        }

        #[test]
        fn stripping_is_idempotent(text in "[a-zA-Z <>/=\"]{0,48}") {
            let once = strip_markup(&text).into_owned();
            prop_assert_eq!(strip_markup(&once).into_owned(), once);
        }
    }
}
