//! Core data types for the launch dataset
//!
//! This module defines the fundamental types shared by every handler:
//! - `LaunchRecord`: one row of the launch records CSV
//! - `Dataset`: the full record sequence with precomputed summaries

use serde::{Deserialize, Serialize};

/// Outcome class value for a failed launch
pub const FAILURE: u8 = 0;

/// Outcome class value for a successful launch
pub const SUCCESS: u8 = 1;

/// A single launch record
///
/// Deserialized straight from the CSV header names. Extra columns in the
/// resource are ignored. Immutable after load.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LaunchRecord {
    /// Launch site name, one of a small fixed set
    #[serde(rename = "Launch Site")]
    pub launch_site: String,
    /// Payload mass in kilograms, non-negative
    #[serde(rename = "Payload Mass (kg)")]
    pub payload_mass_kg: f64,
    /// Outcome class: 1 = success, 0 = failure
    #[serde(rename = "class")]
    pub class: u8,
    /// Full booster version string, shown on scatter hover
    #[serde(rename = "Booster Version", default)]
    pub booster_version: String,
    /// Booster version category, used to color scatter series
    #[serde(rename = "Booster Version Category")]
    pub booster_category: String,
}

impl LaunchRecord {
    /// Whether this launch succeeded
    pub fn is_success(&self) -> bool {
        self.class == SUCCESS
    }
}

/// The full launch dataset
///
/// An ordered, immutable sequence of records plus the summaries the page
/// layout needs: the sorted-unique site list and the observed payload
/// extremes that seed the range slider.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<LaunchRecord>,
    sites: Vec<String>,
    payload_extent: (f64, f64),
}

impl Dataset {
    /// Build a dataset from loaded records, computing the summaries.
    ///
    /// Fails on an empty record list: the slider bounds would be
    /// undefined and the process must not start.
    pub fn new(records: Vec<LaunchRecord>) -> Result<Self, super::DatasetError> {
        if records.is_empty() {
            return Err(super::DatasetError::Empty);
        }

        let mut sites: Vec<String> = records.iter().map(|r| r.launch_site.clone()).collect();
        sites.sort();
        sites.dedup();

        let min = records
            .iter()
            .map(|r| r.payload_mass_kg)
            .fold(f64::INFINITY, f64::min);
        let max = records
            .iter()
            .map(|r| r.payload_mass_kg)
            .fold(f64::NEG_INFINITY, f64::max);

        Ok(Self {
            records,
            sites,
            payload_extent: (min, max),
        })
    }

    /// The full record sequence, in resource order
    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset holds no records (never true after a
    /// successful load)
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sorted-unique list of launch site names
    pub fn sites(&self) -> &[String] {
        &self.sites
    }

    /// Observed (min, max) payload mass in kilograms. min <= max.
    pub fn payload_extent(&self) -> (f64, f64) {
        self.payload_extent
    }

    /// Total number of successful launches across all sites
    pub fn total_successes(&self) -> usize {
        self.records.iter().filter(|r| r.is_success()).count()
    }

    /// Number of records at a given site
    pub fn count_at_site(&self, site: &str) -> usize {
        self.records
            .iter()
            .filter(|r| r.launch_site == site)
            .count()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Small fixture dataset used across the crate's unit tests
    pub(crate) fn sample_dataset() -> Dataset {
        let rows = vec![
            record("CCAFS LC-40", 2500.0, SUCCESS, "FT"),
            record("CCAFS LC-40", 500.0, FAILURE, "v1.1"),
            record("KSC LC-39A", 5300.0, SUCCESS, "B4"),
            record("KSC LC-39A", 3100.0, SUCCESS, "FT"),
            record("VAFB SLC-4E", 9600.0, SUCCESS, "B4"),
            record("VAFB SLC-4E", 475.0, FAILURE, "FT"),
        ];
        Dataset::new(rows).unwrap()
    }

    pub(crate) fn record(site: &str, payload: f64, class: u8, category: &str) -> LaunchRecord {
        LaunchRecord {
            launch_site: site.to_string(),
            payload_mass_kg: payload,
            class,
            booster_version: format!("F9 {}", category),
            booster_category: category.to_string(),
        }
    }

    #[test]
    fn test_sites_sorted_unique() {
        let dataset = sample_dataset();
        assert_eq!(
            dataset.sites(),
            &["CCAFS LC-40", "KSC LC-39A", "VAFB SLC-4E"]
        );
    }

    #[test]
    fn test_payload_extent() {
        let dataset = sample_dataset();
        assert_eq!(dataset.payload_extent(), (475.0, 9600.0));
    }

    #[test]
    fn test_summary_counts() {
        let dataset = sample_dataset();
        assert_eq!(dataset.len(), 6);
        assert_eq!(dataset.total_successes(), 4);
        assert_eq!(dataset.count_at_site("CCAFS LC-40"), 2);
        assert_eq!(dataset.count_at_site("nowhere"), 0);
    }

    #[test]
    fn test_empty_dataset_rejected() {
        assert!(matches!(
            Dataset::new(Vec::new()),
            Err(crate::dataset::DatasetError::Empty)
        ));
    }
}
