//! Comparison list model - the "Recent Comparisons" view

use crate::{Comparison, Result};

#[derive(Debug, Clone, Default, PartialEq)]
pub enum ListState {
    #[default]
    Idle,
    Loaded(Vec<Comparison>),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComparisonHistory {
    state: ListState,
}

impl ComparisonHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.state, ListState::Loaded(_))
    }

    /// Records in the order the service returned them
    pub fn entries(&self) -> &[Comparison] {
        match &self.state {
            ListState::Loaded(entries) => entries,
            ListState::Idle => &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    /// Apply a list response. Whichever response arrives last wins; a failed
    /// fetch is logged and leaves the current list in place.
    pub fn apply(&mut self, outcome: Result<Vec<Comparison>>) -> bool {
        match outcome {
            Ok(entries) => {
                tracing::debug!("Loaded {} comparisons", entries.len());
                self.state = ListState::Loaded(entries);
                true
            }
            Err(e) => {
                tracing::warn!("Failed to load comparisons: {}", e);
                false
            }
        }
    }
}
