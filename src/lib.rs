//! # Launchboard
//!
//! Launch Records Dashboard - an interactive web dashboard for exploring
//! launch outcomes by site and payload mass.
//!
//! ## How it works
//!
//! - A fixed CSV of launch records is loaded once at startup into an
//!   immutable in-memory [`dataset::Dataset`]
//! - A page [`layout::Layout`] is built from it: site dropdown, payload
//!   range slider, and two chart regions
//! - Two declarative [`bindings`] wire the widgets to the pure chart
//!   handlers in [`charts`]; every widget change is dispatched through
//!   the registry and the affected figures are recomputed
//! - The [`api`] serves the page and the callback endpoint with Axum
//!
//! ## Modules
//!
//! - [`dataset`]: CSV loading, record model, selection predicates
//! - [`charts`]: Figure types and the pie/scatter handlers
//! - [`bindings`]: The reactive callback registry
//! - [`layout`]: Page layout builder and HTML rendering
//! - [`api`]: HTTP server
//! - [`config`]: TOML + environment configuration
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use launchboard::api::{serve, AppState, ServerConfig};
//! use launchboard::dataset::load_csv;
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Fatal if the resource is missing or malformed
//!     let dataset = Arc::new(load_csv(Path::new("data/spacex_launch_dash.csv"))?);
//!
//!     let config = ServerConfig::default();
//!     let state = AppState::new(dataset, config.clone());
//!     serve(state, &config).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod bindings;
pub mod charts;
pub mod config;
pub mod dataset;
pub mod layout;

// Re-export top-level types for convenience
pub use api::{build_router, serve, ApiError, AppState, ServerConfig};

pub use bindings::{CallbackRegistry, InputId, InputValues, OutputId};

pub use charts::{payload_scatter, success_pie, Figure, PieFigure, ScatterFigure, ScatterSeries};

pub use config::{Config, ConfigError, LoggingConfig};

pub use dataset::{
    load_csv, Dataset, DatasetError, DatasetResult, FilterSelection, LaunchRecord, PayloadRange,
    SiteSelection, ALL_SITES,
};

pub use layout::{DropdownOption, Layout};
