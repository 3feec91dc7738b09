//! Page layout builder
//!
//! Builds the dashboard's static page model once at startup: the title,
//! the site dropdown (options derived from the dataset), the payload
//! range slider (thumbs seeded from the observed payload extremes), and
//! the two chart regions. The model is serialized both as JSON (for the
//! layout endpoint) and into the served HTML page.

use serde::{Deserialize, Serialize};

use crate::bindings::{InputId, OutputId};
use crate::dataset::{Dataset, PayloadRange, ALL_SITES};

/// Dashboard page title
pub const PAGE_TITLE: &str = "SpaceX Launch Records Dashboard";

/// Slider bounds and step, kilograms
pub const PAYLOAD_SLIDER_MIN: f64 = 0.0;
pub const PAYLOAD_SLIDER_MAX: f64 = 10_000.0;
pub const PAYLOAD_SLIDER_STEP: f64 = 1_000.0;

/// One dropdown entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropdownOption {
    pub label: String,
    pub value: String,
}

/// The site dropdown model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropdownConfig {
    /// Element id on the page
    pub id: String,
    /// "All Sites" first, then every site in sorted order
    pub options: Vec<DropdownOption>,
    /// Initially selected value
    pub value: String,
    pub placeholder: String,
}

/// The payload range slider model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderConfig {
    /// Element id on the page
    pub id: String,
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    /// Initial thumb positions, seeded from the dataset extremes
    pub value: PayloadRange,
}

/// One chart region keyed by its output id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartRegion {
    pub id: String,
}

/// The full page model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub title: String,
    pub dropdown: DropdownConfig,
    pub slider: SliderConfig,
    pub charts: Vec<ChartRegion>,
}

impl Layout {
    /// Build the layout from the loaded dataset. Called once at startup.
    pub fn build(dataset: &Dataset) -> Self {
        let mut options = vec![DropdownOption {
            label: "All Sites".to_string(),
            value: ALL_SITES.to_string(),
        }];
        options.extend(dataset.sites().iter().map(|site| DropdownOption {
            label: site.clone(),
            value: site.clone(),
        }));

        let (min_payload, max_payload) = dataset.payload_extent();

        Self {
            title: PAGE_TITLE.to_string(),
            dropdown: DropdownConfig {
                id: InputId::SiteDropdown.as_str().to_string(),
                options,
                value: ALL_SITES.to_string(),
                placeholder: "Select a Launch Site".to_string(),
            },
            slider: SliderConfig {
                id: InputId::PayloadSlider.as_str().to_string(),
                label: "Payload range (Kg):".to_string(),
                min: PAYLOAD_SLIDER_MIN,
                max: PAYLOAD_SLIDER_MAX,
                step: PAYLOAD_SLIDER_STEP,
                value: PayloadRange::new(min_payload, max_payload),
            },
            charts: vec![
                ChartRegion {
                    id: OutputId::SuccessPie.as_str().to_string(),
                },
                ChartRegion {
                    id: OutputId::PayloadScatter.as_str().to_string(),
                },
            ],
        }
    }

    /// Render the layout into the served HTML page.
    ///
    /// The model is embedded as JSON; the page script builds the widgets
    /// from it and re-renders charts through the callback endpoint.
    pub fn to_html(&self) -> String {
        let layout_json = serde_json::to_string(self)
            .unwrap_or_else(|_| "{}".to_string())
            // Keep the embedded JSON inert inside the <script> tag
            .replace("</", "<\\/");

        PAGE_TEMPLATE
            .replace("__TITLE__", &self.title)
            .replace("__LAYOUT__", &layout_json)
    }
}

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>__TITLE__</title>
<script src="https://cdn.plot.ly/plotly-2.32.0.min.js"></script>
<style>
  body { font-family: sans-serif; margin: 0 auto; max-width: 960px; padding: 0 1em; }
  h1 { text-align: center; color: #503D36; font-size: 40px; }
  .chart { width: 100%; height: 420px; }
  .slider-row { display: flex; align-items: center; gap: 1em; }
  .slider-row input[type=range] { flex: 1; }
</style>
</head>
<body>
<h1>__TITLE__</h1>
<h2>Choose Launch Site:</h2>
<select id="site-dropdown"></select>
<br>
<div id="success-pie-chart" class="chart"></div>
<br>
<p id="payload-label"></p>
<div class="slider-row">
  <input type="range" id="payload-lo">
  <input type="range" id="payload-hi">
  <span id="payload-readout"></span>
</div>
<div id="success-payload-scatter-chart" class="chart"></div>
<script>
"use strict";
const LAYOUT = __LAYOUT__;

const dropdown = document.getElementById(LAYOUT.dropdown.id);
for (const opt of LAYOUT.dropdown.options) {
  const el = document.createElement("option");
  el.value = opt.value;
  el.textContent = opt.label;
  dropdown.appendChild(el);
}
dropdown.value = LAYOUT.dropdown.value;

document.getElementById("payload-label").textContent = LAYOUT.slider.label;
const lo = document.getElementById("payload-lo");
const hi = document.getElementById("payload-hi");
for (const el of [lo, hi]) {
  el.min = LAYOUT.slider.min;
  el.max = LAYOUT.slider.max;
  el.step = LAYOUT.slider.step;
}
lo.value = LAYOUT.slider.value[0];
hi.value = LAYOUT.slider.value[1];

function payloadRange() {
  let a = Number(lo.value);
  let b = Number(hi.value);
  // The widget keeps lo <= hi
  if (a > b) { [a, b] = [b, a]; }
  return [a, b];
}

function updateReadout() {
  const [a, b] = payloadRange();
  document.getElementById("payload-readout").textContent = a + " - " + b + " kg";
}
updateReadout();

function currentInputs() {
  return { site: dropdown.value, payload: payloadRange() };
}

function renderFigure(id, figure) {
  if (figure.kind === "pie") {
    Plotly.react(id, [{ type: "pie", labels: figure.labels, values: figure.values }],
      { title: figure.title });
  } else if (figure.kind === "scatter") {
    const traces = figure.series.map(s => ({
      type: "scatter", mode: "markers",
      x: s.x, y: s.y, text: s.text, name: s.name,
    }));
    Plotly.react(id, traces, {
      title: figure.title,
      xaxis: { title: figure.x_label },
      yaxis: { title: figure.y_label },
    });
  }
}

async function fire(changed) {
  const response = await fetch("/api/v1/callbacks", {
    method: "POST",
    headers: { "Content-Type": "application/json" },
    body: JSON.stringify({ changed: changed, inputs: currentInputs() }),
  });
  if (!response.ok) { return; }
  const body = await response.json();
  for (const [id, figure] of Object.entries(body.outputs)) {
    renderFigure(id, figure);
  }
}

dropdown.addEventListener("change", () => fire(LAYOUT.dropdown.id));
for (const el of [lo, hi]) {
  el.addEventListener("input", updateReadout);
  el.addEventListener("change", () => fire(LAYOUT.slider.id));
}

// Initial render: the dropdown feeds both charts
fire(LAYOUT.dropdown.id);
</script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::model::tests::sample_dataset;

    #[test]
    fn test_dropdown_options_all_sites_first() {
        let layout = Layout::build(&sample_dataset());

        let values: Vec<_> = layout
            .dropdown
            .options
            .iter()
            .map(|o| o.value.as_str())
            .collect();
        assert_eq!(
            values,
            vec![ALL_SITES, "CCAFS LC-40", "KSC LC-39A", "VAFB SLC-4E"]
        );
        assert_eq!(layout.dropdown.options[0].label, "All Sites");
        assert_eq!(layout.dropdown.value, ALL_SITES);
    }

    #[test]
    fn test_slider_seeded_from_dataset() {
        let layout = Layout::build(&sample_dataset());

        assert_eq!(layout.slider.min, 0.0);
        assert_eq!(layout.slider.max, 10_000.0);
        assert_eq!(layout.slider.step, 1_000.0);
        assert_eq!(layout.slider.value, PayloadRange::new(475.0, 9600.0));
        assert!(layout.slider.value.lo <= layout.slider.value.hi);
    }

    #[test]
    fn test_chart_regions() {
        let layout = Layout::build(&sample_dataset());

        let ids: Vec<_> = layout.charts.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["success-pie-chart", "success-payload-scatter-chart"]);
    }

    #[test]
    fn test_html_embeds_layout() {
        let layout = Layout::build(&sample_dataset());
        let html = layout.to_html();

        assert!(html.contains(PAGE_TITLE));
        assert!(html.contains("site-dropdown"));
        assert!(html.contains("success-payload-scatter-chart"));
        assert!(html.contains("\"CCAFS LC-40\""));
        // Template placeholders fully substituted
        assert!(!html.contains("__LAYOUT__"));
        assert!(!html.contains("__TITLE__"));
    }
}
