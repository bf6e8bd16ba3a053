//! Solver configuration, loadable from TOML.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Decides which of several frontier entries with equal `f` is expanded first. Entries that are
/// still tied afterwards are expanded in insertion order, so every policy is deterministic.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Favours entries furthest from the start, which tends to dive towards the goal.
    #[default]
    PreferLargerCost,
    /// Favours entries closest to the start, widening the explored region.
    PreferSmallerCost,
    /// Only the insertion sequence breaks ties.
    InsertionOrder,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolverConfig {
    #[serde(default)]
    pub tie_break: TieBreak,

    /// Maximum number of node expansions before the search gives up as incomplete.
    /// Unbounded when absent.
    #[serde(default)]
    pub max_expansions: Option<usize>,
}

impl SolverConfig {
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    pub fn with_max_expansions(mut self, max_expansions: usize) -> Self {
        self.max_expansions = Some(max_expansions);
        self
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
}
