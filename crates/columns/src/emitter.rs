//! Per-column custom property emission.
//!
//! Every column gets, for every breakpoint, a `--columns-<bp>` weight and a
//! `--flex-<bp>` shorthand. Columns are processed in document order because the
//! arrangement is positional.

use crate::arrangement::{Arrangements, resolve_column};
use crate::breakpoint::Breakpoint;
use crate::flex::{columns_weight, flex_basis_for, flex_for};
use crate::size::{ColumnSize, classify};
use css_flexbox::{Flex, FlexBasis};
use css_style_attr::{Declaration, merge_style_attribute};
use css_values_units::Fraction;

/// Everything computed for one column at one breakpoint.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedColumn {
    pub breakpoint: Breakpoint,
    /// The size token as configured (or inherited).
    pub token: String,
    pub size: ColumnSize,
    /// The reduced fraction, when the size has one.
    pub fraction: Option<Fraction>,
    /// The basis the column's width resolves to. For fractions this is the value the
    /// stylesheet is expected to store in `--flex-basis`.
    pub flex_basis: FlexBasis,
    pub flex: Flex,
}

impl ResolvedColumn {
    /// Classify and map a token for one breakpoint.
    pub fn new(breakpoint: &Breakpoint, token: &str) -> Self {
        let size = classify(token);
        Self {
            breakpoint: breakpoint.clone(),
            token: token.to_owned(),
            fraction: size.fraction(),
            flex_basis: flex_basis_for(&size),
            flex: flex_for(&size),
            size,
        }
    }

    #[inline]
    pub const fn flex_grow(&self) -> f32 {
        self.flex.grow
    }

    #[inline]
    pub const fn flex_shrink(&self) -> f32 {
        self.flex.shrink
    }

    /// `--columns-<bp>: <fraction or 1>`
    pub fn columns_declaration(&self) -> Declaration {
        Declaration::new(self.breakpoint.columns_property(), columns_weight(&self.size))
    }

    /// `--flex-<bp>: <grow> <shrink> <basis>`
    pub fn flex_declaration(&self) -> Declaration {
        Declaration::new(self.breakpoint.flex_property(), self.flex.to_string())
    }
}

/// The resolved entries of one column, one per breakpoint in fallback order.
#[derive(Clone, Debug, PartialEq)]
pub struct ColumnStyle {
    pub index: usize,
    pub entries: Vec<ResolvedColumn>,
}

impl ColumnStyle {
    /// Resolve column `index` at every breakpoint.
    pub fn resolve(index: usize, arrangements: &Arrangements) -> Self {
        let entries: Vec<ResolvedColumn> = resolve_column(index, arrangements)
            .into_iter()
            .map(|resolved| ResolvedColumn::new(resolved.breakpoint, resolved.token))
            .collect();
        for entry in &entries {
            log::trace!(
                "column {index} @ {}: {:?} -> flex {}",
                entry.breakpoint,
                entry.token,
                entry.flex
            );
        }
        Self { index, entries }
    }

    /// The entry for the named breakpoint.
    pub fn entry(&self, breakpoint: &str) -> Option<&ResolvedColumn> {
        self.entries
            .iter()
            .find(|entry| entry.breakpoint.name() == breakpoint)
    }

    /// All `--columns-*` declarations followed by all `--flex-*` declarations.
    pub fn declarations(&self) -> Vec<Declaration> {
        let mut out: Vec<Declaration> = self
            .entries
            .iter()
            .map(ResolvedColumn::columns_declaration)
            .collect();
        out.extend(self.entries.iter().map(ResolvedColumn::flex_declaration));
        out
    }

    /// Merge this column's declarations into an existing `style` attribute value.
    #[inline]
    pub fn apply_to(&self, existing_style: &str) -> String {
        merge_style_attribute(existing_style, &self.declarations())
    }
}

/// Resolve `column_count` columns, in increasing index order.
pub fn emit(column_count: usize, arrangements: &Arrangements) -> Vec<ColumnStyle> {
    (0..column_count)
        .map(|index| ColumnStyle::resolve(index, arrangements))
        .collect()
}

/// Revise the `style` attribute of each column, given in document order.
///
/// The returned values line up with the input: element `i` is the new style of the
/// `i`-th column.
pub fn annotate_columns<S: AsRef<str>>(
    existing_styles: &[S],
    arrangements: &Arrangements,
) -> Vec<String> {
    emit(existing_styles.len(), arrangements)
        .iter()
        .zip(existing_styles)
        .map(|(column, existing)| column.apply_to(existing.as_ref()))
        .collect()
}
