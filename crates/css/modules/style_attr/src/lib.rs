//! CSS Style Attributes — style="..." attribute processing.
//! Spec: <https://www.w3.org/TR/css-style-attr/>

#![forbid(unsafe_code)]

use cssparser::{Delimiter, ParseError, Parser, ParserInput};
use std::collections::HashSet;

/// A declaration computed for a style attribute.
///
/// Spec: <https://www.w3.org/TR/css-style-attr/#interpreting>
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Declaration {
    pub property: String,
    pub value: String,
}

impl Declaration {
    #[inline]
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
        }
    }
}

/// One non-empty item of an author's `style` attribute, kept exactly as written
/// apart from surrounding whitespace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyleItem(String);

impl StyleItem {
    /// The author text of this item.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Property name used to detect collisions, or `None` for an item without a colon.
    ///
    /// Regular property names compare ASCII case-insensitively; custom properties
    /// (`--*`) are case-sensitive.
    ///
    /// Spec: <https://www.w3.org/TR/css-variables-1/#defining-variables>
    pub fn property_key(&self) -> Option<String> {
        let (raw_prop, _) = self.0.split_once(':')?;
        let property_text = raw_prop.trim_matches(is_ascii_whitespace);
        if property_text.is_empty() {
            return None;
        }
        Some(collision_key(property_text))
    }
}

/// Split the value of a `style` attribute into its non-empty items.
///
/// Items are separated by top-level semicolons only: a `;` inside `url()`, a function,
/// a block or a string does not split. Each item is trimmed of ASCII whitespace and
/// otherwise left untouched, including items that are not valid declarations.
///
/// Spec: <https://www.w3.org/TR/css-style-attr/#syntax>
pub fn parse_style_attribute(input: &str) -> Vec<StyleItem> {
    let mut out: Vec<StyleItem> = Vec::new();
    if input.is_empty() {
        return out;
    }
    let mut parser_input = ParserInput::new(input);
    let mut parser = Parser::new(&mut parser_input);
    while !parser.is_exhausted() {
        let start = parser.position();
        let consumed: Result<(), ParseError<'_, ()>> =
            parser.parse_until_before(Delimiter::Semicolon, |item_parser| {
                while item_parser.next_including_whitespace_and_comments().is_ok() {}
                Ok(())
            });
        if let Err(error) = consumed {
            log::debug!("style item ended early: {error:?}");
        }
        let item = parser.slice_from(start).trim_matches(is_ascii_whitespace);
        if !item.is_empty() {
            out.push(StyleItem(item.to_owned()));
        }
        // Step over the `;` that ended the item, if any.
        if parser.next_including_whitespace_and_comments().is_err() {
            break;
        }
    }
    out
}

/// Merge computed declarations into the author's items and serialize the result.
///
/// Author items keep their text and order, minus any whose property is also computed;
/// the computed declarations follow as `property:value`, so a computed value replaces
/// the author's on key collision. Everything is joined with `;`.
pub fn merge_style_attribute(existing: &str, computed: &[Declaration]) -> String {
    let overridden: HashSet<String> = computed
        .iter()
        .map(|decl_item| collision_key(&decl_item.property))
        .collect();
    let mut parts: Vec<String> = parse_style_attribute(existing)
        .into_iter()
        .filter(|item| {
            item.property_key()
                .is_none_or(|key| !overridden.contains(&key))
        })
        .map(|item| item.0)
        .collect();
    parts.extend(
        computed
            .iter()
            .map(|decl_item| format!("{}:{}", decl_item.property, decl_item.value)),
    );
    parts.join(";")
}

/// ASCII whitespace per CSS Syntax (TAB, LF, FF, CR, SPACE).
///
/// Spec: <https://www.w3.org/TR/css-syntax-3/#whitespace>
const fn is_ascii_whitespace(character: char) -> bool {
    matches!(
        character,
        '\u{0009}' | '\u{000A}' | '\u{000C}' | '\u{000D}' | '\u{0020}'
    )
}

/// Comparison key for a property name: lowercase unless it is a custom property.
fn collision_key(name: &str) -> String {
    if name.starts_with("--") {
        return name.to_owned();
    }
    name.to_ascii_lowercase()
}
