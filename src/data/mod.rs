//! Launch Dataset
//!
//! - **types**: `LaunchRecord`, `PayloadRange`, `LaunchDataset`
//! - **loader**: CSV parsing and column validation
//! - **error**: Error types
//!
//! The dataset is loaded once at startup and shared read-only with every
//! request handler.
//!
//! # Example
//!
//! ```rust,no_run
//! use launch_dash::data::load_csv;
//! use std::path::Path;
//!
//! let dataset = load_csv(Path::new("spacex_launch_dash.csv")).unwrap();
//! println!("{} launches from {} sites", dataset.len(), dataset.sites().len());
//! ```

pub mod error;
pub mod loader;
pub mod types;

pub use error::{DatasetError, DatasetResult};
pub use loader::{from_reader, load_csv, load_str, REQUIRED_COLUMNS};
pub use types::{LaunchDataset, LaunchRecord, PayloadRange};
