//! Launch Records Dataset
//!
//! This module provides the in-memory launch dataset and its access paths:
//!
//! - **model**: Core data structures (LaunchRecord, Dataset)
//! - **loader**: CSV loading with fail-fast validation
//! - **filter**: Selection types and record predicates
//! - **error**: Error types
//!
//! The dataset is loaded once at process start and never mutated afterwards.
//! Handlers share it behind an `Arc` and run predicate selections over the
//! record slice on every interaction.
//!
//! # Example
//!
//! ```rust,no_run
//! use launchboard::dataset::{load_csv, SiteSelection};
//! use std::path::Path;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let dataset = load_csv(Path::new("data/spacex_launch_dash.csv"))?;
//!
//!     let (min, max) = dataset.payload_extent();
//!     println!("{} launches, payloads {min}-{max} kg", dataset.len());
//!
//!     for site in dataset.sites() {
//!         println!("site: {site}");
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod filter;
pub mod loader;
pub mod model;

// Re-export commonly used types
pub use error::{DatasetError, DatasetResult};
pub use filter::{FilterSelection, PayloadRange, SiteSelection, ALL_SITES};
pub use loader::{load_csv, load_csv_reader};
pub use model::{Dataset, LaunchRecord, FAILURE, SUCCESS};
