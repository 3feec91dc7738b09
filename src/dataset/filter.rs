//! Selection types and record predicates
//!
//! A user interaction is described by a transient [`FilterSelection`]:
//! which site is selected in the dropdown and which payload range the
//! slider spans. Selections are derived per event and never persisted.

use serde::{Deserialize, Serialize};

use super::model::LaunchRecord;

/// Wire value the dropdown sends for the "All Sites" option
pub const ALL_SITES: &str = "ALL";

/// The dropdown selection: every site, or one exact site name.
///
/// An unknown site name is representable on purpose. It simply matches
/// no records and the charts degrade to empty figures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SiteSelection {
    /// The "All Sites" option
    All,
    /// A single launch site by exact name
    Site(String),
}

impl SiteSelection {
    /// Whether a record passes this selection
    pub fn matches(&self, record: &LaunchRecord) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(name) => record.launch_site == *name,
        }
    }

    /// The value sent over the wire for this selection
    pub fn wire_value(&self) -> &str {
        match self {
            SiteSelection::All => ALL_SITES,
            SiteSelection::Site(name) => name,
        }
    }
}

impl From<String> for SiteSelection {
    fn from(raw: String) -> Self {
        if raw == ALL_SITES {
            SiteSelection::All
        } else {
            SiteSelection::Site(raw)
        }
    }
}

impl From<SiteSelection> for String {
    fn from(selection: SiteSelection) -> Self {
        selection.wire_value().to_string()
    }
}

/// The slider selection: an inclusive payload mass interval in kilograms.
///
/// Serialized as a `[lo, hi]` pair, matching the slider widget's value.
/// lo <= hi is enforced by the widget and is not re-validated here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct PayloadRange {
    pub lo: f64,
    pub hi: f64,
}

impl PayloadRange {
    pub fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    /// Whether a payload mass lies within [lo, hi]
    pub fn contains(&self, payload_mass_kg: f64) -> bool {
        payload_mass_kg >= self.lo && payload_mass_kg <= self.hi
    }
}

impl From<[f64; 2]> for PayloadRange {
    fn from([lo, hi]: [f64; 2]) -> Self {
        Self { lo, hi }
    }
}

impl From<PayloadRange> for [f64; 2] {
    fn from(range: PayloadRange) -> Self {
        [range.lo, range.hi]
    }
}

/// The combined per-interaction selection: site plus payload range.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSelection {
    pub site: SiteSelection,
    pub payload: PayloadRange,
}

impl FilterSelection {
    pub fn new(site: SiteSelection, payload: PayloadRange) -> Self {
        Self { site, payload }
    }

    /// Whether a record passes both the site and the payload predicate
    pub fn matches(&self, record: &LaunchRecord) -> bool {
        self.site.matches(record) && self.payload.contains(record.payload_mass_kg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::model::tests::record;
    use crate::dataset::model::{FAILURE, SUCCESS};

    #[test]
    fn test_site_selection_parse() {
        assert_eq!(SiteSelection::from("ALL".to_string()), SiteSelection::All);
        assert_eq!(
            SiteSelection::from("KSC LC-39A".to_string()),
            SiteSelection::Site("KSC LC-39A".to_string())
        );
    }

    #[test]
    fn test_site_selection_roundtrip() {
        let all: SiteSelection = serde_json::from_str("\"ALL\"").unwrap();
        assert_eq!(all, SiteSelection::All);
        assert_eq!(serde_json::to_string(&all).unwrap(), "\"ALL\"");

        let site: SiteSelection = serde_json::from_str("\"VAFB SLC-4E\"").unwrap();
        assert_eq!(site.wire_value(), "VAFB SLC-4E");
    }

    #[test]
    fn test_site_matching() {
        let rec = record("CCAFS LC-40", 1000.0, SUCCESS, "FT");

        assert!(SiteSelection::All.matches(&rec));
        assert!(SiteSelection::Site("CCAFS LC-40".to_string()).matches(&rec));
        assert!(!SiteSelection::Site("KSC LC-39A".to_string()).matches(&rec));
    }

    #[test]
    fn test_payload_range_inclusive() {
        let range = PayloadRange::new(500.0, 5000.0);

        assert!(range.contains(500.0));
        assert!(range.contains(5000.0));
        assert!(range.contains(2500.0));
        assert!(!range.contains(499.9));
        assert!(!range.contains(5000.1));
    }

    #[test]
    fn test_payload_range_wire_format() {
        let range: PayloadRange = serde_json::from_str("[0, 10000]").unwrap();
        assert_eq!(range, PayloadRange::new(0.0, 10000.0));
        assert_eq!(serde_json::to_string(&range).unwrap(), "[0.0,10000.0]");
    }

    #[test]
    fn test_filter_selection_combined() {
        let selection = FilterSelection::new(
            SiteSelection::Site("CCAFS LC-40".to_string()),
            PayloadRange::new(0.0, 2000.0),
        );

        assert!(selection.matches(&record("CCAFS LC-40", 1000.0, FAILURE, "v1.1")));
        // wrong site
        assert!(!selection.matches(&record("KSC LC-39A", 1000.0, SUCCESS, "FT")));
        // payload out of range
        assert!(!selection.matches(&record("CCAFS LC-40", 3000.0, SUCCESS, "FT")));
    }
}
