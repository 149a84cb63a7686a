//! Flexibility — `flex`, `flex-grow`, `flex-shrink` and `flex-basis` values
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#flexibility>

use core::fmt;
use css_values_units::Fraction;

/// A `flex-basis` value as written into a declaration.
///
/// Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-basis-property>
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum FlexBasis {
    /// `auto`: size from the item's main size property or its content.
    Auto,
    /// Unitless `0`, as produced by the `flex: <number>` shorthand forms.
    Zero,
    /// A whole percentage of the container's inner main size, e.g. `0%` or `100%`.
    Percentage(u32),
    /// A fraction of the container: `calc(100% * n/d)`.
    FractionOfContainer(Fraction),
    /// A reference to a custom property: `var(--name)`.
    Var(String),
    /// Any other author value, written verbatim.
    Raw(String),
}

impl FlexBasis {
    /// `var(<name>)` for a custom property name including its leading `--`.
    #[inline]
    pub fn var(name: &str) -> Self {
        Self::Var(name.to_owned())
    }
}

impl fmt::Display for FlexBasis {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => formatter.write_str("auto"),
            Self::Zero => formatter.write_str("0"),
            Self::Percentage(percent) => write!(formatter, "{percent}%"),
            Self::FractionOfContainer(fraction) => write!(formatter, "calc(100% * {fraction})"),
            Self::Var(name) => write!(formatter, "var({name})"),
            Self::Raw(text) => formatter.write_str(text),
        }
    }
}

/// The `flex` shorthand with all three components spelled out.
///
/// Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-property>
#[derive(Clone, Debug, PartialEq)]
pub struct Flex {
    /// Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-grow-property>
    pub grow: f32,
    /// Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-shrink-property>
    pub shrink: f32,
    pub basis: FlexBasis,
}

impl Flex {
    #[inline]
    pub const fn new(grow: f32, shrink: f32, basis: FlexBasis) -> Self {
        Self {
            grow,
            shrink,
            basis,
        }
    }

    /// `flex: none` expanded: `0 0 <basis>`. Neither grows nor shrinks.
    #[inline]
    pub const fn rigid(basis: FlexBasis) -> Self {
        Self::new(0.0, 0.0, basis)
    }

    /// `flex: initial` expanded: `0 1 <basis>`. Shrinks but never grows.
    #[inline]
    pub const fn shrinkable(basis: FlexBasis) -> Self {
        Self::new(0.0, 1.0, basis)
    }
}

/// Serializes as `<grow> <shrink> <basis>`; whole factors print without a fraction part.
impl fmt::Display for Flex {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{} {} {}", self.grow, self.shrink, self.basis)
    }
}
