// src/domain/view_state.rs

use crate::domain::criteria::{CriteriaField, FilterCriteria};
use crate::domain::filter;
use crate::domain::property::PropertyRecord;

/// The three observable states of the filtering UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterPhase {
    /// No criteria, no result; the full list is shown.
    Idle,
    /// Some criteria typed but not applied; the full list is still shown.
    Editing,
    /// Apply was pressed; the result is shown, possibly empty.
    Filtered,
}

/// What the listing grid should display.
#[derive(Debug, PartialEq)]
pub enum Listing<'a> {
    All(&'a [PropertyRecord]),
    Matches(&'a [PropertyRecord]),
    NoMatches,
}

/// Which single action button the filter bar offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterAction {
    Apply,
    RemoveFilter,
}

/// The criteria an Apply ran with, and what they matched.
#[derive(Debug, Clone, PartialEq)]
struct FilteredResult {
    criteria: FilterCriteria,
    matches: Vec<PropertyRecord>,
}

/// Draft criteria plus the result of the last Apply, if any.
///
/// Transitions consume the state and return the next one. Nothing here is
/// stored as a flag that could drift from the data; phase and "filter active"
/// are both derived.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingState {
    criteria: FilterCriteria,
    result: Option<FilteredResult>,
}

impl ListingState {
    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn filtered(&self) -> Option<&[PropertyRecord]> {
        self.result.as_ref().map(|result| result.matches.as_slice())
    }

    /// The criteria the current result was computed from. They can differ
    /// from [`ListingState::criteria`] once the draft is edited again.
    pub fn applied_criteria(&self) -> Option<&FilterCriteria> {
        self.result.as_ref().map(|result| &result.criteria)
    }

    /// Updates one draft field. A previous result stays until the next Apply.
    pub fn edit(self, field: CriteriaField, value: impl Into<String>) -> Self {
        Self {
            criteria: self.criteria.with(field, value),
            result: self.result,
        }
    }

    /// Runs the filter engine over `records` and stores the result wholesale.
    pub fn apply(self, records: &[PropertyRecord]) -> Self {
        let matches = filter::apply(records, &self.criteria);
        Self {
            result: Some(FilteredResult {
                criteria: self.criteria.clone(),
                matches,
            }),
            criteria: self.criteria,
        }
    }

    /// Drops both the criteria and the result.
    pub fn clear(self) -> Self {
        Self::default()
    }

    pub fn phase(&self) -> FilterPhase {
        if self.result.is_some() {
            FilterPhase::Filtered
        } else if !self.criteria.is_empty() {
            FilterPhase::Editing
        } else {
            FilterPhase::Idle
        }
    }

    /// True when any criterion carries input or a result exists.
    pub fn is_filter_active(&self) -> bool {
        !self.criteria.is_empty() || self.result.is_some()
    }

    pub fn action(&self) -> FilterAction {
        match self.phase() {
            FilterPhase::Filtered => FilterAction::RemoveFilter,
            FilterPhase::Idle | FilterPhase::Editing => FilterAction::Apply,
        }
    }

    /// `NoMatches` only when the applied criteria were non-empty.
    pub fn listing<'a>(&'a self, all: &'a [PropertyRecord]) -> Listing<'a> {
        match &self.result {
            None => Listing::All(all),
            Some(result) if !result.matches.is_empty() => Listing::Matches(&result.matches),
            Some(result) if result.criteria.is_empty() => Listing::All(all),
            Some(_) => Listing::NoMatches,
        }
    }
}
