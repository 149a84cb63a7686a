//! CSS Values & Units Level 3 — §5 Percentages
//! Spec: <https://www.w3.org/TR/css-values-3/#percentages>

use cssparser::{Parser, ParserInput, Token};

/// A CSS <percentage>
///
/// Spec: <https://www.w3.org/TR/css-values-3/#percentage-value>
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Percentage(pub f32); // stored as 0.0..=1.0

/// Recognize a whole string as a single percentage.
///
/// Accepts exactly one `<percentage>` token (`"30%"`) or one bare `<number>` token,
/// which is read as a percentage (`"30"` is 30%). Surrounding whitespace is ignored;
/// any trailing token makes the text unrecognized.
pub fn parse_percentage_text(text: &str) -> Option<Percentage> {
    let mut input = ParserInput::new(text);
    let mut parser = Parser::new(&mut input);
    parser.skip_whitespace();
    let percentage = match parser.next().ok()? {
        Token::Percentage { unit_value, .. } => Percentage(*unit_value),
        Token::Number { value, .. } => Percentage(*value / 100.0),
        _ => return None,
    };
    parser.is_exhausted().then_some(percentage)
}
