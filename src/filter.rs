//! Record Filters
//!
//! Pure functions over the launch dataset that back the two charts:
//!
//! - [`filter_by_site`] + [`outcome_counts`] feed the success pie chart
//! - [`filter_by_site_and_payload`] feeds the payload scatter chart
//!
//! No combination of inputs is an error. An unknown site or an inverted
//! payload range simply selects nothing.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::data::{LaunchDataset, LaunchRecord, PayloadRange};

/// Wire value of the "all sites" sentinel
pub const ALL_SITES: &str = "ALL";

/// Site selected in the dropdown
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SiteSelection {
    /// Every launch site
    #[default]
    All,
    /// One specific site by name
    Site(String),
}

impl SiteSelection {
    pub fn parse(value: &str) -> Self {
        if value == ALL_SITES {
            SiteSelection::All
        } else {
            SiteSelection::Site(value.to_string())
        }
    }

    pub fn matches(&self, record: &LaunchRecord) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(site) => record.launch_site == *site,
        }
    }
}

impl From<String> for SiteSelection {
    fn from(value: String) -> Self {
        if value == ALL_SITES {
            SiteSelection::All
        } else {
            SiteSelection::Site(value)
        }
    }
}

impl From<SiteSelection> for String {
    fn from(selection: SiteSelection) -> Self {
        match selection {
            SiteSelection::All => ALL_SITES.to_string(),
            SiteSelection::Site(site) => site,
        }
    }
}

impl std::fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SiteSelection::All => write!(f, "{}", ALL_SITES),
            SiteSelection::Site(site) => write!(f, "{}", site),
        }
    }
}

/// Records launched from the selected site, in dataset order
pub fn filter_by_site<'a>(
    dataset: &'a LaunchDataset,
    site: &SiteSelection,
) -> Vec<&'a LaunchRecord> {
    dataset
        .records()
        .iter()
        .filter(|r| site.matches(r))
        .collect()
}

/// Records matching the site whose payload lies in `range` (inclusive)
pub fn filter_by_site_and_payload<'a>(
    dataset: &'a LaunchDataset,
    site: &SiteSelection,
    range: PayloadRange,
) -> Vec<&'a LaunchRecord> {
    dataset
        .records()
        .iter()
        .filter(|r| site.matches(r) && range.contains(r.payload_mass_kg))
        .collect()
}

/// Count records per outcome class value
pub fn outcome_counts<'a, I>(records: I) -> BTreeMap<u8, usize>
where
    I: IntoIterator<Item = &'a LaunchRecord>,
{
    let mut counts = BTreeMap::new();
    for record in records {
        *counts.entry(record.class).or_insert(0) += 1;
    }
    counts
}
