//! Mapping from classified column sizes to flex values.
//!
//! | size            | flex-basis           | flex                       |
//! |-----------------|----------------------|----------------------------|
//! | `equal`         | `0%`                 | `1 1 0%`                   |
//! | `auto`          | `auto`               | `0 1 auto`                 |
//! | `fill`          | `0`                  | `1 0 0`                    |
//! | `full`          | `100%`               | `0 0 100%`                 |
//! | fraction `n/d`  | `calc(100% * n/d)`   | `0 1 var(--flex-basis)`    |
//! | length          | the length           | `0 1 <length>`             |

use crate::size::{ColumnSize, SizeKeyword};
use css_flexbox::{Flex, FlexBasis};

/// Custom property the stylesheet computes a fractional column's basis into.
pub const FLEX_BASIS_PROPERTY: &str = "--flex-basis";

/// Weight written to `--columns-<bp>` for sizes without a fraction.
pub const DEFAULT_COLUMNS_WEIGHT: &str = "1";

/// The `flex-basis` a column of this size resolves to.
pub fn flex_basis_for(size: &ColumnSize) -> FlexBasis {
    match size {
        ColumnSize::Keyword(SizeKeyword::Equal) => FlexBasis::Percentage(0),
        ColumnSize::Keyword(SizeKeyword::Auto) => FlexBasis::Auto,
        ColumnSize::Keyword(SizeKeyword::Fill) => FlexBasis::Zero,
        ColumnSize::Keyword(SizeKeyword::Full) => FlexBasis::Percentage(100),
        ColumnSize::Fraction(fraction) => FlexBasis::FractionOfContainer(*fraction),
        ColumnSize::Length(length) => FlexBasis::Raw(length.clone()),
    }
}

/// The full `flex` shorthand for a column of this size.
///
/// Fractional columns defer their basis to [`FLEX_BASIS_PROPERTY`] so the stylesheet
/// can account for gaps; every other size carries its basis inline.
pub fn flex_for(size: &ColumnSize) -> Flex {
    match size {
        ColumnSize::Keyword(SizeKeyword::Equal) => Flex::new(1.0, 1.0, flex_basis_for(size)),
        ColumnSize::Keyword(SizeKeyword::Fill) => Flex::new(1.0, 0.0, flex_basis_for(size)),
        ColumnSize::Keyword(SizeKeyword::Full) => Flex::rigid(flex_basis_for(size)),
        ColumnSize::Fraction(_) => Flex::shrinkable(FlexBasis::var(FLEX_BASIS_PROPERTY)),
        ColumnSize::Keyword(SizeKeyword::Auto) | ColumnSize::Length(_) => {
            Flex::shrinkable(flex_basis_for(size))
        }
    }
}

/// The `--columns-<bp>` weight: the fraction when there is one, otherwise `1`.
pub fn columns_weight(size: &ColumnSize) -> String {
    size.fraction().map_or_else(
        || DEFAULT_COLUMNS_WEIGHT.to_owned(),
        |fraction| fraction.to_string(),
    )
}
