//! Per-breakpoint arrangements and their positional resolution.
//!
//! An arrangement is the ordered list of size tokens for one breakpoint. It repeats
//! across the rendered columns, so column `i` of an arrangement of length `L` gets
//! token `i mod L`. A breakpoint without an arrangement reuses what the next larger
//! breakpoint resolved to for the same column.

use crate::breakpoint::{Breakpoint, Breakpoints};

/// Token used when even the largest breakpoint has no arrangement: equal widths.
pub const NEUTRAL_TOKEN: &str = "";

/// Size token lists keyed by breakpoint, kept in fallback order (largest first).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Arrangements {
    entries: Vec<(Breakpoint, Vec<String>)>,
}

impl Arrangements {
    /// One empty arrangement per breakpoint.
    pub fn new(breakpoints: &Breakpoints) -> Self {
        Self {
            entries: breakpoints
                .iter()
                .map(|breakpoint| (breakpoint.clone(), Vec::new()))
                .collect(),
        }
    }

    /// Replace the arrangement of the named breakpoint.
    ///
    /// Returns `false`, leaving everything untouched, when no breakpoint has that name.
    pub fn set<I, S>(&mut self, name: &str, tokens: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let Some((_, slot)) = self
            .entries
            .iter_mut()
            .find(|(breakpoint, _)| breakpoint.name() == name)
        else {
            log::warn!("no breakpoint named {name:?}; arrangement ignored");
            return false;
        };
        *slot = tokens.into_iter().map(Into::into).collect();
        true
    }

    /// Builder form of [`Arrangements::set`].
    #[must_use]
    pub fn with<I, S>(mut self, name: &str, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set(name, tokens);
        self
    }

    /// The arrangement of the named breakpoint, if the breakpoint exists.
    pub fn tokens(&self, name: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(breakpoint, _)| breakpoint.name() == name)
            .map(|(_, tokens)| tokens.as_slice())
    }

    /// Breakpoints with their arrangements, largest first.
    pub fn iter(&self) -> impl Iterator<Item = (&Breakpoint, &[String])> {
        self.entries
            .iter()
            .map(|(breakpoint, tokens)| (breakpoint, tokens.as_slice()))
    }
}

impl Default for Arrangements {
    fn default() -> Self {
        Self::new(&Breakpoints::default())
    }
}

/// The token an arrangement assigns to a column position.
///
/// `None` only for an empty arrangement.
#[inline]
pub fn token_at(index: usize, tokens: &[String]) -> Option<&str> {
    match tokens {
        [] => None,
        [only] => Some(only.as_str()),
        _ => tokens.get(index % tokens.len()).map(String::as_str),
    }
}

/// A size token chosen for one column at one breakpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolvedToken<'arrangement> {
    pub breakpoint: &'arrangement Breakpoint,
    pub token: &'arrangement str,
    /// True when the breakpoint had no arrangement and the token was carried over.
    pub inherited: bool,
}

/// Resolve the token of column `index` at every breakpoint, largest first.
///
/// Single forward pass: the last resolved token is carried to the next breakpoint and
/// used there when that breakpoint has no arrangement of its own.
pub fn resolve_column(index: usize, arrangements: &Arrangements) -> Vec<ResolvedToken<'_>> {
    let mut carried: &str = NEUTRAL_TOKEN;
    let mut resolved = Vec::with_capacity(arrangements.entries.len());
    for (breakpoint, tokens) in arrangements.iter() {
        let entry = match token_at(index, tokens) {
            Some(token) => {
                carried = token;
                ResolvedToken {
                    breakpoint,
                    token,
                    inherited: false,
                }
            }
            None => {
                log::debug!(
                    "breakpoint {breakpoint} has no arrangement; column {index} inherits {carried:?}"
                );
                ResolvedToken {
                    breakpoint,
                    token: carried,
                    inherited: true,
                }
            }
        };
        resolved.push(entry);
    }
    resolved
}
