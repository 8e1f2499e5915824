//! Core data types for the launch dataset
//!
//! - `LaunchRecord`: one row of the launch CSV
//! - `PayloadRange`: a closed payload-mass interval in kilograms
//! - `LaunchDataset`: the full, read-only dataset with values derived at load time

use serde::{Deserialize, Serialize};

/// A single launch attempt
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LaunchRecord {
    /// Launch site name (e.g. "CCAFS LC-40")
    #[serde(rename = "Launch Site")]
    pub launch_site: String,
    /// Payload mass in kilograms
    #[serde(rename = "Payload Mass (kg)")]
    pub payload_mass_kg: f64,
    /// Outcome class: 1 = success, 0 = failure
    #[serde(rename = "class")]
    pub class: u8,
    /// Booster hardware revision (e.g. "FT", "Block 5")
    #[serde(rename = "Booster Version Category")]
    pub booster_version_category: String,
}

impl LaunchRecord {
    pub fn new(
        launch_site: impl Into<String>,
        payload_mass_kg: f64,
        class: u8,
        booster_version_category: impl Into<String>,
    ) -> Self {
        Self {
            launch_site: launch_site.into(),
            payload_mass_kg,
            class,
            booster_version_category: booster_version_category.into(),
        }
    }
}

/// Closed payload-mass interval `[low, high]`
///
/// An interval with `low > high` is empty and matches nothing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct PayloadRange {
    pub low: f64,
    pub high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Check if a payload mass lies within the interval (both ends inclusive)
    pub fn contains(&self, payload_mass_kg: f64) -> bool {
        self.low <= payload_mass_kg && payload_mass_kg <= self.high
    }

    pub fn is_empty(&self) -> bool {
        self.low > self.high
    }
}

impl From<[f64; 2]> for PayloadRange {
    fn from([low, high]: [f64; 2]) -> Self {
        Self { low, high }
    }
}

impl From<PayloadRange> for [f64; 2] {
    fn from(range: PayloadRange) -> Self {
        [range.low, range.high]
    }
}

impl std::fmt::Display for PayloadRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.low, self.high)
    }
}

/// The complete launch dataset
///
/// Built once at startup and never mutated. Payload bounds and the
/// site list are derived here so request handlers never recompute them.
#[derive(Debug, Clone, Default)]
pub struct LaunchDataset {
    records: Vec<LaunchRecord>,
    payload_bounds: Option<PayloadRange>,
    sites: Vec<String>,
}

impl LaunchDataset {
    pub fn new(records: Vec<LaunchRecord>) -> Self {
        let payload_bounds = records.iter().map(|r| r.payload_mass_kg).fold(
            None,
            |bounds: Option<PayloadRange>, mass| match bounds {
                None => Some(PayloadRange::new(mass, mass)),
                Some(b) => Some(PayloadRange::new(b.low.min(mass), b.high.max(mass))),
            },
        );

        let mut sites: Vec<String> = Vec::new();
        for record in &records {
            if !sites.contains(&record.launch_site) {
                sites.push(record.launch_site.clone());
            }
        }

        Self {
            records,
            payload_bounds,
            sites,
        }
    }

    /// All records in file order
    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    /// Minimum and maximum payload mass, `None` when the dataset is empty
    pub fn payload_bounds(&self) -> Option<PayloadRange> {
        self.payload_bounds
    }

    /// Distinct launch sites in first-appearance order
    pub fn sites(&self) -> &[String] {
        &self.sites
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<LaunchRecord> for LaunchDataset {
    fn from_iter<I: IntoIterator<Item = LaunchRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
