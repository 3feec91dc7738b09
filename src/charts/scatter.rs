//! Payload scatter chart handler
//!
//! Plots payload mass against launch outcome for every record passing
//! the current site and payload-range selection, one series per booster
//! version category so the page can color them apart.

use crate::dataset::{Dataset, FilterSelection, PayloadRange, SiteSelection};

use super::figure::{ScatterFigure, ScatterSeries};

const X_LABEL: &str = "Payload Mass (kg)";
const Y_LABEL: &str = "class";

/// Compute the payload/outcome scatter figure for the current widget values.
///
/// Records are kept in dataset order; series appear in first-seen
/// category order. An empty selection yields a figure with no series.
pub fn payload_scatter(
    dataset: &Dataset,
    site: &SiteSelection,
    payload: &PayloadRange,
) -> ScatterFigure {
    let selection = FilterSelection::new(site.clone(), *payload);

    let mut series: Vec<ScatterSeries> = Vec::new();
    for record in dataset.records().iter().filter(|r| selection.matches(r)) {
        let idx = match series.iter().position(|s| s.name == record.booster_category) {
            Some(idx) => idx,
            None => {
                series.push(ScatterSeries::new(record.booster_category.clone()));
                series.len() - 1
            }
        };
        series[idx].push(
            record.payload_mass_kg,
            record.class,
            record.booster_version.clone(),
        );
    }

    let title = match site {
        SiteSelection::All => "Correlation between Payload and Success for all Sites".to_string(),
        SiteSelection::Site(name) => {
            format!("Correlation between Payload and Success for {}", name)
        }
    };

    ScatterFigure {
        series,
        title,
        x_label: X_LABEL.to_string(),
        y_label: Y_LABEL.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::model::tests::sample_dataset;

    fn full_range() -> PayloadRange {
        PayloadRange::new(0.0, 10_000.0)
    }

    #[test]
    fn test_all_sites_full_range_keeps_every_record() {
        let dataset = sample_dataset();
        let fig = payload_scatter(&dataset, &SiteSelection::All, &full_range());

        assert_eq!(fig.point_count(), dataset.len());
        assert_eq!(
            fig.title,
            "Correlation between Payload and Success for all Sites"
        );

        // Booster categories exactly as in the dataset, first-seen order.
        let names: Vec<_> = fig.series.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["FT", "v1.1", "B4"]);
    }

    #[test]
    fn test_points_respect_payload_bounds() {
        let dataset = sample_dataset();
        let range = PayloadRange::new(500.0, 5300.0);
        let fig = payload_scatter(&dataset, &SiteSelection::All, &range);

        assert!(fig.point_count() > 0);
        for (x, _, _) in fig.points() {
            assert!(range.contains(x), "point {x} outside [{}, {}]", range.lo, range.hi);
        }
        // 475.0 and 9600.0 fall outside the window
        assert_eq!(fig.point_count(), dataset.len() - 2);
    }

    #[test]
    fn test_site_restriction() {
        let dataset = sample_dataset();
        let selection = SiteSelection::Site("VAFB SLC-4E".to_string());
        let fig = payload_scatter(&dataset, &selection, &full_range());

        assert_eq!(fig.point_count(), 2);
        assert_eq!(
            fig.title,
            "Correlation between Payload and Success for VAFB SLC-4E"
        );
        for (x, y, _) in fig.points() {
            assert!(x == 9600.0 || x == 475.0);
            assert!(y <= 1);
        }
    }

    #[test]
    fn test_empty_selection_yields_empty_figure() {
        let dataset = sample_dataset();
        // A window below every payload in the fixture
        let fig = payload_scatter(&dataset, &SiteSelection::All, &PayloadRange::new(0.0, 100.0));

        assert_eq!(fig.point_count(), 0);
        assert!(fig.series.is_empty());
    }

    #[test]
    fn test_hover_text_carries_booster_version() {
        let dataset = sample_dataset();
        let fig = payload_scatter(&dataset, &SiteSelection::All, &full_range());

        let ft = fig.series.iter().find(|s| s.name == "FT").unwrap();
        assert!(ft.text.iter().all(|t| t == "F9 FT"));
    }

    #[test]
    fn test_idempotent() {
        let dataset = sample_dataset();
        let site = SiteSelection::Site("CCAFS LC-40".to_string());
        let range = PayloadRange::new(0.0, 6000.0);

        assert_eq!(
            payload_scatter(&dataset, &site, &range),
            payload_scatter(&dataset, &site, &range)
        );
    }
}
