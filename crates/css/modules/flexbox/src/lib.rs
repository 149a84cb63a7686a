//! CSS Flexible Box Layout Module Level 1 — flex item sizing values.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/>

#![forbid(unsafe_code)]

// Spec: §7 — Flexibility
#[path = "7_flexibility/mod.rs"]
mod chapter7;

pub use chapter7::{Flex, FlexBasis};
