//! Columns block configuration as persisted by the block editor.
//!
//! The editor stores one token list per breakpoint under `columnsXl`, `columnsLg`,
//! `columnsMd` and `columnsSm`. Missing or `null` lists mean "no arrangement" and
//! fall back to the next larger breakpoint. Other block attributes are ignored.

use crate::arrangement::Arrangements;
use anyhow::{Context as _, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BlockAttributes {
    pub columns_xl: Option<Vec<String>>,
    pub columns_lg: Option<Vec<String>>,
    pub columns_md: Option<Vec<String>>,
    pub columns_sm: Option<Vec<String>>,
}

impl BlockAttributes {
    /// Parse block attributes from their JSON form.
    ///
    /// # Errors
    /// Returns an error if the text is not a JSON object of the expected shape.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("invalid columns block attributes")
    }

    /// Read and parse block attributes from a JSON file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or does not parse.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read block attributes from {}", path.display()))?;
        Self::from_json(&text)
            .with_context(|| format!("failed to parse block attributes in {}", path.display()))
    }

    /// Arrangements over the default `xl, lg, md, sm` breakpoints.
    pub fn arrangements(&self) -> Arrangements {
        let mut arrangements = Arrangements::default();
        for (name, tokens) in [
            ("xl", &self.columns_xl),
            ("lg", &self.columns_lg),
            ("md", &self.columns_md),
            ("sm", &self.columns_sm),
        ] {
            if let Some(list) = tokens {
                arrangements.set(name, list.iter().cloned());
            }
        }
        arrangements
    }
}
