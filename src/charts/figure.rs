//! Chart description objects
//!
//! Plain data descriptions of what each chart region should render.
//! The page script turns these into plot traces; nothing here knows
//! about pixels or the charting library.

use serde::{Deserialize, Serialize};

/// A pie chart: parallel slice labels and values plus a title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieFigure {
    /// Slice labels, parallel to `values`
    pub labels: Vec<String>,
    /// Slice values (counts)
    pub values: Vec<u64>,
    /// Chart title
    pub title: String,
}

impl PieFigure {
    /// An empty pie with only a title. Rendered as a blank chart region.
    pub fn empty(title: impl Into<String>) -> Self {
        Self {
            labels: Vec::new(),
            values: Vec::new(),
            title: title.into(),
        }
    }

    /// Append one slice
    pub fn slice(mut self, label: impl Into<String>, value: u64) -> Self {
        self.labels.push(label.into());
        self.values.push(value);
        self
    }

    /// Sum of all slice values
    pub fn total(&self) -> u64 {
        self.values.iter().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// One scatter series: all points sharing a booster version category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterSeries {
    /// Series name (the booster version category)
    pub name: String,
    /// Payload mass per point, kilograms
    pub x: Vec<f64>,
    /// Outcome class per point (0 or 1)
    pub y: Vec<u8>,
    /// Hover text per point (the full booster version string)
    pub text: Vec<String>,
}

impl ScatterSeries {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            x: Vec::new(),
            y: Vec::new(),
            text: Vec::new(),
        }
    }

    /// Append one point
    pub fn push(&mut self, x: f64, y: u8, text: impl Into<String>) {
        self.x.push(x);
        self.y.push(y);
        self.text.push(text.into());
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// A scatter chart: one series per booster category plus axis labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterFigure {
    /// Series in first-seen category order
    pub series: Vec<ScatterSeries>,
    /// Chart title
    pub title: String,
    /// X axis label
    pub x_label: String,
    /// Y axis label
    pub y_label: String,
}

impl ScatterFigure {
    /// Total number of points across all series
    pub fn point_count(&self) -> usize {
        self.series.iter().map(ScatterSeries::len).sum()
    }

    /// Iterate every (x, y, series name) point across all series
    pub fn points(&self) -> impl Iterator<Item = (f64, u8, &str)> + '_ {
        self.series.iter().flat_map(|s| {
            s.x.iter()
                .zip(s.y.iter())
                .map(move |(&x, &y)| (x, y, s.name.as_str()))
        })
    }
}

/// Any figure the dashboard can render, tagged for the page script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Figure {
    Pie(PieFigure),
    Scatter(ScatterFigure),
}

impl Figure {
    /// The figure's title, whichever kind it is
    pub fn title(&self) -> &str {
        match self {
            Figure::Pie(fig) => &fig.title,
            Figure::Scatter(fig) => &fig.title,
        }
    }
}
