//! Catalog filtering: composable predicates over an ordered vehicle sequence.
//!
//! Every predicate is independent and all of them must hold. Filtering is
//! stable; the output keeps the input order.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::Vehicle;

/// A choice from an option list, or the wildcard meaning "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "value")]
pub enum Selection {
    #[default]
    All,
    Only(String),
}

impl Selection {
    /// Map a select-box value to a selection. The wildcard label and an empty
    /// value both mean "no constraint".
    pub fn from_input(raw: &str, wildcard_label: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() || raw == wildcard_label {
            Self::All
        } else {
            Self::Only(raw.to_string())
        }
    }

    pub fn matches(&self, value: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == value,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

/// User-chosen search and filter criteria.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterSpec {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub make: Selection,
    #[serde(default)]
    pub body_type: Selection,
    #[serde(default)]
    pub max_price: Option<f64>,
    #[serde(default)]
    pub min_year: Option<i32>,
}

impl FilterSpec {
    /// Build a spec from raw form inputs. Blank or unparsable bounds are
    /// treated as absent, never as zero.
    pub fn from_inputs(
        search: &str,
        make: &str,
        body_type: &str,
        max_price: &str,
        min_year: &str,
        wildcard_label: &str,
    ) -> Self {
        Self {
            search: search.to_string(),
            make: Selection::from_input(make, wildcard_label),
            body_type: Selection::from_input(body_type, wildcard_label),
            max_price: parse_price_bound(max_price),
            min_year: parse_year_bound(min_year),
        }
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = term.into();
        self
    }

    pub fn with_make(mut self, make: impl Into<String>) -> Self {
        self.make = Selection::Only(make.into());
        self
    }

    pub fn with_body_type(mut self, body_type: impl Into<String>) -> Self {
        self.body_type = Selection::Only(body_type.into());
        self
    }

    pub fn with_max_price(mut self, max: f64) -> Self {
        self.max_price = Some(max);
        self
    }

    pub fn with_min_year(mut self, min: i32) -> Self {
        self.min_year = Some(min);
        self
    }

    /// True when every field is at its wildcard or absent value.
    pub fn is_unconstrained(&self) -> bool {
        self.search.is_empty()
            && self.make.is_all()
            && self.body_type.is_all()
            && self.max_price.is_none()
            && self.min_year.is_none()
    }

    /// Check one vehicle against all predicates.
    pub fn matches(&self, vehicle: &Vehicle) -> bool {
        self.matches_search(vehicle)
            && self.make.matches(&vehicle.make)
            && self.body_type.matches(vehicle.body_type.as_str())
            && self.max_price.map_or(true, |max| vehicle.price <= max)
            && self.min_year.map_or(true, |min| vehicle.year >= min)
    }

    fn matches_search(&self, vehicle: &Vehicle) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let term = self.search.to_lowercase();
        vehicle.make.to_lowercase().contains(&term) || vehicle.model.to_lowercase().contains(&term)
    }
}

fn parse_price_bound(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => Some(v),
        _ => {
            debug!("ignoring unparsable max price bound {raw:?}");
            None
        }
    }
}

fn parse_year_bound(raw: &str) -> Option<i32> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match raw.parse::<i32>() {
        Ok(v) => Some(v),
        Err(_) => {
            debug!("ignoring unparsable min year bound {raw:?}");
            None
        }
    }
}

/// Return the vehicles matching `spec`, preserving input order.
pub fn filter_vehicles<'a, I>(vehicles: I, spec: &FilterSpec) -> Vec<&'a Vehicle>
where
    I: IntoIterator<Item = &'a Vehicle>,
{
    vehicles.into_iter().filter(|v| spec.matches(v)).collect()
}

/// Distinct makes in first-seen order, headed by the wildcard label.
pub fn distinct_makes<'a, I>(vehicles: I, wildcard_label: &str) -> Vec<String>
where
    I: IntoIterator<Item = &'a Vehicle>,
{
    distinct_with_wildcard(vehicles.into_iter().map(|v| v.make.as_str()), wildcard_label)
}

/// Distinct body types in first-seen order, headed by the wildcard label.
pub fn distinct_body_types<'a, I>(vehicles: I, wildcard_label: &str) -> Vec<String>
where
    I: IntoIterator<Item = &'a Vehicle>,
{
    distinct_with_wildcard(
        vehicles.into_iter().map(|v| v.body_type.as_str()),
        wildcard_label,
    )
}

fn distinct_with_wildcard<'a>(
    values: impl Iterator<Item = &'a str>,
    wildcard_label: &str,
) -> Vec<String> {
    let mut out = vec![wildcard_label.to_string()];
    for value in values {
        // Option lists stay small; a linear scan keeps first-seen order.
        // A value equal to the wildcard already has its entry at the head.
        if !out.iter().any(|seen| seen == value) {
            out.push(value.to_string());
        }
    }
    out
}
