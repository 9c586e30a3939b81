//! Name canonicalisation and pairwise similarity.

use std::sync::LazyLock;

use regex::Regex;

/// Score returned when one normalised name contains the other.
///
/// Deliberately flat rather than proportional to the length difference.
pub const CONTAINMENT_SCORE: f64 = 0.8;

/// Anything outside the Letter and Number general categories.
///
/// Combining marks (`Mn`, `Mc`) and letter-like symbols (`So`) are stripped
/// even though Unicode classes some of them as alphabetic.
#[expect(
    clippy::expect_used,
    reason = "the pattern is a constant and always compiles"
)]
static NOT_LETTER_OR_DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}\p{N}]").expect("letter/digit pattern compiles"));

/// Canonicalise a raw food name for comparison.
///
/// Lower-cases the text, then keeps only characters in the Unicode Letter
/// and Number categories, which also drops whitespace and combining marks.
/// The result is idempotent.
///
/// # Examples
///
/// ```
/// use potluck_scorer::normalize;
///
/// assert_eq!(normalize("김치 찌개"), normalize("김치찌개"));
/// assert_eq!(normalize("Pad-Thai!"), "padthai");
/// ```
#[must_use]
pub fn normalize(name: &str) -> String {
    NOT_LETTER_OR_DIGIT
        .replace_all(&name.to_lowercase(), "")
        .into_owned()
}

/// Score how alike two raw names are, in `0.0..=1.0`.
///
/// Identical normalised names score `1.0`; a name contained in the other
/// scores [`CONTAINMENT_SCORE`]; everything else scores
/// `1 - levenshtein / longest`, measured in characters. The function is
/// symmetric.
///
/// # Examples
///
/// ```
/// use potluck_scorer::similarity;
///
/// assert_eq!(similarity("파스타", "파 스타"), 1.0);
/// assert_eq!(similarity("짜장면", "짜장"), 0.8);
/// assert_eq!(similarity("초밥", "짜장면"), 0.0);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "edit distance is normalised by the longer name's length"
)]
pub fn similarity(a: &str, b: &str) -> f64 {
    let left = normalize(a);
    let right = normalize(b);

    if left == right {
        return 1.0;
    }
    if left.contains(right.as_str()) || right.contains(left.as_str()) {
        return CONTAINMENT_SCORE;
    }

    let longest = left.chars().count().max(right.chars().count());
    if longest == 0 {
        return 1.0;
    }
    let distance = strsim::levenshtein(&left, &right);
    1.0 - distance as f64 / longest as f64
}
