//! Responsive breakpoints and the custom properties named after them.

use core::{fmt, slice};

/// Breakpoint names used by the columns block editor, largest first.
pub const DEFAULT_BREAKPOINTS: [&str; 4] = ["xl", "lg", "md", "sm"];

/// A named viewport tier. The name is owned by the caller and only used to build
/// property names; ordering lives in [`Breakpoints`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Breakpoint(String);

impl Breakpoint {
    #[inline]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.0
    }

    /// `--columns-<name>`: the fraction weight of a column at this breakpoint.
    #[inline]
    pub fn columns_property(&self) -> String {
        format!("--columns-{}", self.0)
    }

    /// `--flex-<name>`: the `flex` shorthand of a column at this breakpoint.
    #[inline]
    pub fn flex_property(&self) -> String {
        format!("--flex-{}", self.0)
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

/// Ordered set of breakpoints, largest first. The order is the fallback order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Breakpoints(Vec<Breakpoint>);

impl Breakpoints {
    /// Build from names given largest first. Repeated names keep their first position.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut ordered: Vec<Breakpoint> = Vec::new();
        for name in names {
            let breakpoint = Breakpoint::new(name);
            if ordered.contains(&breakpoint) {
                log::debug!("ignoring repeated breakpoint {breakpoint}");
                continue;
            }
            ordered.push(breakpoint);
        }
        Self(ordered)
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Breakpoint> {
        self.0.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The ultimate fallback source.
    #[inline]
    pub fn largest(&self) -> Option<&Breakpoint> {
        self.0.first()
    }
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self::new(DEFAULT_BREAKPOINTS)
    }
}

impl<'breakpoints> IntoIterator for &'breakpoints Breakpoints {
    type Item = &'breakpoints Breakpoint;
    type IntoIter = slice::Iter<'breakpoints, Breakpoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
