//! Fractions of a container size (`n/d`) and their reduction from percentages.
//!
//! Fractions are written the way `calc(100% * n/d)` expects them: two unsigned
//! integers separated by a single `/`, with no whitespace or sign.

use crate::chapter_5_percentages::{Percentage, parse_percentage_text};
use core::fmt;

/// Denominator used when converting a percentage into a fraction.
const PERCENT_DENOMINATOR: u32 = 100;

/// A `numerator/denominator` pair with a non-zero denominator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Fraction {
    numerator: u32,
    denominator: u32,
}

impl Fraction {
    /// Build a fraction, rejecting a zero denominator.
    #[inline]
    pub const fn new(numerator: u32, denominator: u32) -> Option<Self> {
        if denominator == 0 {
            return None;
        }
        Some(Self {
            numerator,
            denominator,
        })
    }

    #[inline]
    pub const fn numerator(self) -> u32 {
        self.numerator
    }

    #[inline]
    pub const fn denominator(self) -> u32 {
        self.denominator
    }

    /// Divide both terms by their greatest common divisor.
    #[inline]
    pub const fn reduced(self) -> Self {
        let divisor = gcd(self.numerator, self.denominator);
        Self {
            numerator: self.numerator / divisor,
            denominator: self.denominator / divisor,
        }
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}/{}", self.numerator, self.denominator)
    }
}

/// Greatest common divisor by the Euclidean algorithm. `gcd(a, 0) == a`.
#[inline]
pub const fn gcd(first: u32, second: u32) -> u32 {
    let mut larger = first;
    let mut remainder = second;
    while remainder != 0 {
        let next = larger % remainder;
        larger = remainder;
        remainder = next;
    }
    larger
}

/// Parse text of the exact shape `^\d+/\d+$`.
///
/// Returns `None` for anything else, including a zero denominator or terms that
/// overflow `u32`.
pub fn parse_fraction_text(text: &str) -> Option<Fraction> {
    if !is_fraction_shaped(text) {
        return None;
    }
    let (numerator_text, denominator_text) = text.split_once('/')?;
    let numerator = numerator_text.parse::<u32>().ok()?;
    let denominator = denominator_text.parse::<u32>().ok()?;
    Fraction::new(numerator, denominator)
}

/// True for text of the shape `^\d+/\d+$`, whether or not it makes a usable fraction.
pub fn is_fraction_shaped(text: &str) -> bool {
    text.split_once('/').is_some_and(|(numerator_text, denominator_text)| {
        is_ascii_digits(numerator_text) && is_ascii_digits(denominator_text)
    })
}

/// Convert a percentage into a fraction over 100 reduced to lowest terms.
///
/// The numerator is the percentage rounded to the nearest whole percent. Zero and
/// negative percentages have no fraction representation.
pub fn reduce_percentage(percentage: Percentage) -> Option<Fraction> {
    let whole_percent = (percentage.0 * PERCENT_DENOMINATOR as f32).round();
    if !whole_percent.is_finite() || whole_percent < 1.0 || whole_percent > u32::MAX as f32 {
        return None;
    }
    Fraction::new(whole_percent as u32, PERCENT_DENOMINATOR).map(Fraction::reduced)
}

/// Reduce a fraction or percentage token to a fraction.
///
/// Fraction-shaped text is returned as written (`"2/4"` stays `2/4`); a percentage
/// (`"75%"` or bare `"75"`) is converted and reduced (`3/4`). Anything else, and any
/// degenerate input such as `"0%"`, yields `None`.
pub fn reduce_to_fraction(text: &str) -> Option<Fraction> {
    if let Some(fraction) = parse_fraction_text(text) {
        return Some(fraction);
    }
    parse_percentage_text(text).and_then(reduce_percentage)
}

fn is_ascii_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|byte| byte.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce_text(text: &str) -> Option<String> {
        reduce_to_fraction(text).map(|fraction| fraction.to_string())
    }

    #[test]
    /// # Panics
    /// Panics if gcd deviates from the Euclidean definition.
    fn gcd_euclid() {
        assert_eq!(gcd(75, 100), 25);
        assert_eq!(gcd(100, 20), 20);
        assert_eq!(gcd(7, 0), 7);
        assert_eq!(gcd(0, 9), 9);
        assert_eq!(gcd(13, 100), 1);
    }

    #[test]
    /// # Panics
    /// Panics if percentages are not reduced to lowest terms.
    fn percentages_reduce_to_lowest_terms() {
        assert_eq!(reduce_text("50%").as_deref(), Some("1/2"));
        assert_eq!(reduce_text("75%").as_deref(), Some("3/4"));
        assert_eq!(reduce_text("20%").as_deref(), Some("1/5"));
        assert_eq!(reduce_text("100%").as_deref(), Some("1/1"));
        assert_eq!(reduce_text("33.33%").as_deref(), Some("33/100"));
        assert_eq!(reduce_text("25").as_deref(), Some("1/4"));
        let half = Fraction::new(50, 100).map(Fraction::reduced);
        assert_eq!(
            half.map(|fraction| (fraction.numerator(), fraction.denominator())),
            Some((1, 2))
        );
    }

    #[test]
    /// # Panics
    /// Panics if an already fraction-shaped token is rewritten.
    fn fractions_pass_through_unchanged() {
        assert_eq!(reduce_text("1/2").as_deref(), Some("1/2"));
        assert_eq!(reduce_text("2/4").as_deref(), Some("2/4"));
    }

    #[test]
    /// # Panics
    /// Panics if degenerate input produces a fraction.
    fn degenerate_input_has_no_fraction() {
        assert_eq!(reduce_text("0%"), None);
        assert_eq!(reduce_text("0"), None);
        assert_eq!(reduce_text("-50%"), None);
        assert_eq!(reduce_text("1/0"), None);
        assert_eq!(reduce_text("auto"), None);
        assert_eq!(reduce_text("42px"), None);
        assert_eq!(reduce_text(""), None);
    }

    #[test]
    /// # Panics
    /// Panics if malformed fraction shapes are accepted.
    fn fraction_shape_is_strict() {
        assert_eq!(parse_fraction_text("1 / 2"), None);
        assert_eq!(parse_fraction_text("+1/2"), None);
        assert_eq!(parse_fraction_text("1/2/3"), None);
        assert_eq!(parse_fraction_text("/2"), None);
        assert_eq!(parse_fraction_text("3/4"), Fraction::new(3, 4));
        assert!(is_fraction_shaped("1/0"));
        assert!(is_fraction_shaped("99999999999/2"));
        assert_eq!(parse_fraction_text("99999999999/2"), None);
        assert!(!is_fraction_shaped("1/2/3"));
    }
}
