//! Chart Handlers
//!
//! The two chart computations behind the dashboard:
//!
//! - **figure**: Chart description objects serialized to the page
//! - **pie**: Success counts, by site or by outcome class
//! - **scatter**: Payload mass vs. outcome, colored by booster category
//!
//! Handlers are pure functions of the dataset and the current widget
//! values. They keep no state between invocations and never fail: a
//! selection matching nothing produces an empty figure, not an error.

pub mod figure;
pub mod pie;
pub mod scatter;

// Re-export commonly used types
pub use figure::{Figure, PieFigure, ScatterFigure, ScatterSeries};
pub use pie::success_pie;
pub use scatter::payload_scatter;
