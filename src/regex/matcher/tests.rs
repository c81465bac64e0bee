use rstest::rstest;

use super::*;
use crate::regex::Regex;

fn find(pattern: &str, text: &str) -> Option<(usize, usize)> {
    Regex::new(pattern).unwrap().find(text).map(|m| (m.start(), m.end()))
}

#[rstest]
#[case("a+", "baaac", Some((1, 4)))]
#[case("a*", "bbb", Some((0, 0)))]
#[case(".*c", "abcabc", Some((0, 6)))]
#[case("a?b", "ab", Some((0, 2)))]
#[case("a?b", "b", Some((0, 1)))]
#[case("a*a", "aaa", Some((0, 3)))]
#[case("a+ab", "aaab", Some((0, 4)))]
#[case("ä*ö", "ääö", Some((0, 6)))]
#[case(".+😀", "x😀y😀", Some((0, 10)))]
fn test_greedy_and_backtracking(#[case] pattern: &str, #[case] text: &str, #[case] expected: Option<(usize, usize)>) {
    assert_eq!(find(pattern, text), expected);
}

#[rstest]
#[case("a{2,3}", "aaaa", Some((0, 2)))]
#[case("a{2,}b", "aaaab", Some((0, 5)))]
#[case("^a{2}$", "aa", Some((0, 2)))]
#[case("^a{2}$", "aaa", None)]
#[case("a{2,}", "a", None)]
#[case("^a{1,2}b", "aab", Some((0, 3)))]
#[case("^a{1,2}b", "aaab", None)]
#[case("^ab{0}c$", "ac", Some((0, 2)))]
#[case("^ab{0}c$", "abc", None)]
#[case(r"^\d{1,3}\.\d{1,3}$", "10.255", Some((0, 6)))]
#[case("ö{2}", "xööx", Some((1, 5)))]
fn test_repeat(#[case] pattern: &str, #[case] text: &str, #[case] expected: Option<(usize, usize)>) {
    assert_eq!(find(pattern, text), expected);
}

#[rstest]
#[case("b|a", "ab", Some((0, 1)))]
#[case("^b|a", "ab", Some((0, 1)))]
#[case("^a|b", "cb", Some((1, 2)))]
#[case("^b|c", "abc", Some((2, 3)))]
#[case("x|^a", "ba", None)]
#[case("x|^b", "ba", Some((0, 1)))]
#[case("a$|b", "ab", Some((1, 2)))]
#[case("^a|^b", "cab", None)]
#[case("$", "abc", Some((3, 3)))]
#[case("^", "", Some((0, 0)))]
#[case("^$", "", Some((0, 0)))]
#[case("^$", "a", None)]
#[case("a|", "b", Some((0, 0)))]
fn test_branches_and_anchors(#[case] pattern: &str, #[case] text: &str, #[case] expected: Option<(usize, usize)>) {
    assert_eq!(find(pattern, text), expected);
}

#[rstest]
#[case("[a-]", "-", true)]
#[case("[-a]", "-", true)]
#[case("[a-c]", "-", false)]
#[case("[a-c]", "b", true)]
#[case("[a-c]", "d", false)]
#[case(r"[a\-c]", "-", true)]
#[case(r"[a\-c]", "b", false)]
#[case(r"[a\-c]", "_", false)]
#[case(r"[a\-c]", "c", true)]
#[case(r"[\d-z]", "e", false)]
#[case(r"[\d-z]", "z", true)]
#[case(r"[\d-z]", "5", true)]
#[case("[0-9a-f]", "e", true)]
#[case("[0-9a-f]", "g", false)]
#[case(r"[\d.]", "7", true)]
#[case(r"[\d.]", ".", true)]
#[case(r"[\d.]", "x", false)]
#[case(r"[\]]", "]", true)]
#[case(r"[\\]", r"\", true)]
#[case("[äö]", "ö", true)]
#[case("[^äö]", "ü", true)]
#[case("[^äö]", "ä", false)]
#[case("[α-ω]", "λ", true)]
#[case("[α-ω]", "a", false)]
fn test_classes(#[case] pattern: &str, #[case] text: &str, #[case] expected: bool) {
    assert_eq!(find(pattern, text).is_some(), expected, "{pattern:?} on {text:?}");
}

#[rstest]
#[case(r"\s", "\u{b}", true)]
#[case(r"\s", "\u{c}", true)]
#[case(r"\s", "\r", true)]
#[case(r"\w", "Ä", false)]
#[case(r"\W", "Ä", true)]
#[case(r"\D", "😀", true)]
#[case(r"\S", "😀", true)]
#[case(r"\d", "٣", false)]
#[case(r"\w", "_", true)]
fn test_shorthands(#[case] pattern: &str, #[case] text: &str, #[case] expected: bool) {
    assert_eq!(find(pattern, text).is_some(), expected, "{pattern:?} on {text:?}");
}

#[rstest]
#[case("*a", "a")]
#[case("a**", "aa")]
#[case("a{2}{3}", "aaaaaa")]
#[case("+", "+")]
fn test_misplaced_quantifiers_never_match(#[case] pattern: &str, #[case] text: &str) {
    assert_eq!(find(pattern, text), None);
}

#[test]
fn test_dot() {
    assert_eq!(find(".", "\n"), None);
    assert_eq!(find(".", "\r\nx"), Some((2, 3)));
    assert_eq!(find("^.$", "é"), Some((0, 2)));

    let options = Options { dot_matches_newline: true };
    let re = Regex::with_options("^.+$", options).unwrap();
    assert!(re.is_match("a\r\nb"));
}

#[test]
fn test_search_direct() {
    let re = Regex::new("b+").unwrap();
    let matcher = Matcher::new(&re.program, &re.options, b"abbc");
    assert_eq!(matcher.search(), Some(Match { start: 1, end: 3 }));
}
