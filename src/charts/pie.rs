//! Success pie chart handler
//!
//! With "All Sites" selected the pie shows one slice per launch site,
//! sized by that site's successful launch count. With a single site
//! selected it shows the site's outcome split: one slice per class.

use std::collections::BTreeMap;

use crate::dataset::{Dataset, SiteSelection, FAILURE, SUCCESS};

use super::figure::PieFigure;

/// Compute the success pie figure for the current dropdown selection.
///
/// A site name outside the known set yields an empty figure; that is
/// how the dashboard degrades, not an error.
pub fn success_pie(dataset: &Dataset, selection: &SiteSelection) -> PieFigure {
    match selection {
        SiteSelection::All => all_sites_pie(dataset),
        SiteSelection::Site(name) => site_outcome_pie(dataset, name),
    }
}

/// Successes only, grouped by site. Slices in site-name order.
fn all_sites_pie(dataset: &Dataset) -> PieFigure {
    let mut counts: BTreeMap<&str, u64> = BTreeMap::new();
    for record in dataset.records().iter().filter(|r| r.is_success()) {
        *counts.entry(record.launch_site.as_str()).or_insert(0) += 1;
    }

    let mut figure = PieFigure::empty("Total Successes by Launch Site");
    for (site, count) in counts {
        figure = figure.slice(site, count);
    }
    figure
}

/// One site's records grouped by outcome class, failures first.
fn site_outcome_pie(dataset: &Dataset, site: &str) -> PieFigure {
    let mut failures = 0u64;
    let mut successes = 0u64;
    for record in dataset.records().iter().filter(|r| r.launch_site == site) {
        if record.is_success() {
            successes += 1;
        } else {
            failures += 1;
        }
    }

    let mut figure = PieFigure::empty(format!("Launch Rate at {}", site));
    if failures > 0 {
        figure = figure.slice(FAILURE.to_string(), failures);
    }
    if successes > 0 {
        figure = figure.slice(SUCCESS.to_string(), successes);
    }
    figure
}
