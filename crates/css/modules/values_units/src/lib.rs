//! CSS Values and Units Module Level 3 — percentages and fractions.
//! Spec: <https://www.w3.org/TR/css-values-3/>
//!
//! Besides the spec chapters this crate carries the fraction helpers used to express
//! column widths as `calc(100% * n/d)`.

#![forbid(unsafe_code)]

// Per-chapter modules mirroring the spec table of contents.
pub mod chapter_5_percentages;
pub mod fractions;

// Re-exports for ergonomic access from other crates.
pub use chapter_5_percentages::{Percentage, parse_percentage_text};
pub use fractions::{
    Fraction, gcd, is_fraction_shaped, parse_fraction_text, reduce_percentage,
    reduce_to_fraction,
};
