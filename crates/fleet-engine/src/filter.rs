//! Filter criteria and the derived-view pipeline.
//!
//! # Pipeline (fixed order)
//!
//! ```text
//! collection
//!   ① search  name contains search_text (case-insensitive),
//!              skipped when search_text is blank
//!   ② rating  rating > 4.0, when rating_above_4 is set
//!   ③ nearest stable sort by distance, keep the first `nearest_limit`,
//!              when nearest_only is set
//!   → derived view
//! ```
//!
//! Truncation runs last, on the already search/rating-filtered set.

use fleet_driver::Driver;

/// Drivers must be rated strictly above this to pass the rating filter.
pub const RATING_THRESHOLD: f64 = 4.0;

/// Current filter configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub search_text:    String,
    pub rating_above_4: bool,
    pub nearest_only:   bool,
}

/// The boolean filters, for callers that toggle them generically.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FilterFlag {
    RatingAbove4,
    NearestOnly,
}

/// A partial update to [`FilterCriteria`]; `None` fields are left as is.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterUpdate {
    pub search_text:    Option<String>,
    pub rating_above_4: Option<bool>,
    pub nearest_only:   Option<bool>,
}

impl FilterUpdate {
    pub fn search_text(mut self, text: impl Into<String>) -> Self {
        self.search_text = Some(text.into());
        self
    }

    pub fn rating_above_4(mut self, on: bool) -> Self {
        self.rating_above_4 = Some(on);
        self
    }

    pub fn nearest_only(mut self, on: bool) -> Self {
        self.nearest_only = Some(on);
        self
    }

    pub fn flag(self, flag: FilterFlag, on: bool) -> Self {
        match flag {
            FilterFlag::RatingAbove4 => self.rating_above_4(on),
            FilterFlag::NearestOnly  => self.nearest_only(on),
        }
    }
}

impl FilterCriteria {
    /// Apply `update` on top of the current values.
    pub fn merge(&mut self, update: FilterUpdate) {
        if let Some(text) = update.search_text {
            self.search_text = text;
        }
        if let Some(on) = update.rating_above_4 {
            self.rating_above_4 = on;
        }
        if let Some(on) = update.nearest_only {
            self.nearest_only = on;
        }
    }

    pub fn flag(&self, flag: FilterFlag) -> bool {
        match flag {
            FilterFlag::RatingAbove4 => self.rating_above_4,
            FilterFlag::NearestOnly  => self.nearest_only,
        }
    }

    /// `true` if any stage of the pipeline would drop or reorder drivers.
    pub fn is_active(&self) -> bool {
        !self.search_text.trim().is_empty() || self.rating_above_4 || self.nearest_only
    }
}

/// Run the pipeline over `drivers`.  Pure; the input is never modified.
pub fn apply_filters(drivers: &[Driver], criteria: &FilterCriteria, nearest_limit: usize) -> Vec<Driver> {
    let needle = (!criteria.search_text.trim().is_empty())
        .then(|| criteria.search_text.to_lowercase());

    let mut result: Vec<Driver> = drivers
        .iter()
        .filter(|d| needle.as_deref().is_none_or(|n| d.name_matches(n)))
        .filter(|d| !criteria.rating_above_4 || d.rating > RATING_THRESHOLD)
        .cloned()
        .collect();

    if criteria.nearest_only {
        result.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
        result.truncate(nearest_limit);
    }

    result
}
