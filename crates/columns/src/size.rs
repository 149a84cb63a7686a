//! Column size tokens and their classification.

use css_values_units::{
    Fraction, is_fraction_shaped, parse_fraction_text, parse_percentage_text, reduce_percentage,
};

/// Size keywords offered by the block editor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SizeKeyword {
    /// No explicit size: share the row equally with other unsized columns.
    Equal,
    /// Size to content, shrinking when needed. The editor's `fit` is the same thing.
    Auto,
    /// Absorb all free space, never shrinking.
    Fill,
    /// Take the whole row.
    Full,
}

/// A classified size token.
///
/// Every token maps to exactly one variant; tokens that are neither a keyword nor
/// fraction-representable end up as [`ColumnSize::Length`] and are used verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ColumnSize {
    Keyword(SizeKeyword),
    /// `n/d` as written, or a percentage reduced to lowest terms.
    Fraction(Fraction),
    /// Any other CSS length, e.g. `42px` or `20rem`.
    Length(String),
}

impl ColumnSize {
    /// The reduced fraction, when the size has one.
    #[inline]
    pub const fn fraction(&self) -> Option<Fraction> {
        match self {
            Self::Fraction(fraction) => Some(*fraction),
            Self::Keyword(_) | Self::Length(_) => None,
        }
    }
}

/// Classify a size token.
///
/// - empty, whitespace-only or `equal` → [`SizeKeyword::Equal`]
/// - `auto`/`fit`, `fill`, `full` (ASCII case-insensitive) → the keyword
/// - `n/d` with a non-zero denominator → that fraction, unchanged
/// - a percentage or bare number → reduced fraction
/// - anything else → [`ColumnSize::Length`]
///
/// Values without a fraction representation (`0%`, `1/0`, terms overflowing `u32`)
/// fall back to [`SizeKeyword::Equal`] so they never reach `flex-basis`.
///
/// Matching is deliberately lenient: tokens are trimmed and keywords compare ASCII
/// case-insensitively, as CSS keywords do, so `" Full "` is `full`.
pub fn classify(token: &str) -> ColumnSize {
    let trimmed = token.trim();
    if let Some(keyword) = keyword_for(trimmed) {
        return ColumnSize::Keyword(keyword);
    }
    if is_fraction_shaped(trimmed) {
        return parse_fraction_text(trimmed).map_or_else(
            || {
                log::debug!("size token {trimmed:?} has no usable fraction; using equal width");
                ColumnSize::Keyword(SizeKeyword::Equal)
            },
            ColumnSize::Fraction,
        );
    }
    if let Some(percentage) = parse_percentage_text(trimmed) {
        return reduce_percentage(percentage).map_or_else(
            || {
                log::debug!("size token {trimmed:?} has no fraction; using equal width");
                ColumnSize::Keyword(SizeKeyword::Equal)
            },
            ColumnSize::Fraction,
        );
    }
    log::debug!("size token {trimmed:?} used verbatim as a length");
    ColumnSize::Length(trimmed.to_owned())
}

fn keyword_for(text: &str) -> Option<SizeKeyword> {
    const KEYWORDS: [(&str, SizeKeyword); 5] = [
        ("equal", SizeKeyword::Equal),
        ("auto", SizeKeyword::Auto),
        ("fit", SizeKeyword::Auto),
        ("fill", SizeKeyword::Fill),
        ("full", SizeKeyword::Full),
    ];
    if text.is_empty() {
        return Some(SizeKeyword::Equal);
    }
    KEYWORDS
        .iter()
        .find(|(name, _)| text.eq_ignore_ascii_case(name))
        .map(|&(_, keyword)| keyword)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fraction(numerator: u32, denominator: u32) -> ColumnSize {
        Fraction::new(numerator, denominator).map_or_else(
            || ColumnSize::Length(String::new()),
            ColumnSize::Fraction,
        )
    }

    #[test]
    /// # Panics
    /// Panics if empty tokens are not the equal-width default.
    fn empty_is_equal() {
        assert_eq!(classify(""), ColumnSize::Keyword(SizeKeyword::Equal));
        assert_eq!(classify("   "), ColumnSize::Keyword(SizeKeyword::Equal));
        assert_eq!(classify("equal"), ColumnSize::Keyword(SizeKeyword::Equal));
    }

    #[test]
    /// # Panics
    /// Panics if a keyword is misclassified.
    fn keywords() {
        assert_eq!(classify("auto"), ColumnSize::Keyword(SizeKeyword::Auto));
        assert_eq!(classify("fit"), ColumnSize::Keyword(SizeKeyword::Auto));
        assert_eq!(classify("fill"), ColumnSize::Keyword(SizeKeyword::Fill));
        assert_eq!(classify("FULL"), ColumnSize::Keyword(SizeKeyword::Full));
    }

    #[test]
    /// # Panics
    /// Panics if fraction tokens are rewritten or percentages are not reduced.
    fn fractions_and_percentages() {
        assert_eq!(classify("1/3"), fraction(1, 3));
        assert_eq!(classify("2/4"), fraction(2, 4));
        assert_eq!(classify("30%"), fraction(3, 10));
        assert_eq!(classify("50"), fraction(1, 2));
    }

    #[test]
    /// # Panics
    /// Panics if a degenerate percentage is not the equal-width default.
    fn zero_percent_is_equal() {
        assert_eq!(classify("0%"), ColumnSize::Keyword(SizeKeyword::Equal));
    }

    #[test]
    /// # Panics
    /// Panics if a fraction-shaped token without a usable fraction is not equal width.
    fn unusable_fraction_is_equal() {
        assert_eq!(classify("1/0"), ColumnSize::Keyword(SizeKeyword::Equal));
        assert_eq!(
            classify("99999999999/2"),
            ColumnSize::Keyword(SizeKeyword::Equal)
        );
    }

    #[test]
    /// # Panics
    /// Panics if surrounding whitespace or keyword case changes the classification.
    fn matching_is_lenient() {
        assert_eq!(classify(" Full "), ColumnSize::Keyword(SizeKeyword::Full));
        assert_eq!(classify(" 1/3 "), fraction(1, 3));
    }

    #[test]
    /// # Panics
    /// Panics if unrecognized tokens are not kept verbatim as lengths.
    fn everything_else_is_a_length() {
        assert_eq!(classify("42px"), ColumnSize::Length("42px".to_owned()));
        assert_eq!(
            classify("min(20rem, 100%)"),
            ColumnSize::Length("min(20rem, 100%)".to_owned())
        );
    }
}
