//! # Launch Dash
//!
//! Interactive web dashboard over a static CSV of rocket launches: a success
//! pie chart and a payload/outcome scatter plot, filtered by launch site and
//! payload range.
//!
//! ## Modules
//!
//! - [`data`]: Launch records and CSV loading
//! - [`filter`]: Site and payload-range filters
//! - [`figure`]: Chart data and Plotly figure JSON
//! - [`layout`]: Declarative page description
//! - [`callbacks`]: Input component → chart handler wiring
//! - [`api`]: HTTP server with Axum
//! - [`config`]: TOML + environment configuration
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use launch_dash::callbacks::{CallbackInputs, CallbackRegistry};
//! use launch_dash::data::{load_csv, PayloadRange};
//! use launch_dash::filter::SiteSelection;
//! use std::path::Path;
//!
//! let dataset = load_csv(Path::new("spacex_launch_dash.csv")).unwrap();
//! let registry = CallbackRegistry::dashboard();
//!
//! let inputs = CallbackInputs::new(SiteSelection::All, PayloadRange::new(0.0, 10000.0));
//! let figures = registry.dispatch(&dataset, &["site-dropdown"], &inputs).unwrap();
//!
//! println!("Redrew {} charts", figures.len());
//! ```

pub mod api;
pub mod callbacks;
pub mod config;
pub mod data;
pub mod figure;
pub mod filter;
pub mod layout;

pub use api::{build_router, serve, ApiError, AppState};
pub use callbacks::{CallbackError, CallbackInputs, CallbackRegistry};
pub use config::{
    CliOverrides, Config, ConfigError, ConfigSource, LoadedConfig, LogFormat, LoggingConfig,
    ServerConfig,
};
pub use data::{load_csv, DatasetError, LaunchDataset, LaunchRecord, PayloadRange};
pub use figure::{Figure, PieChart, ScatterChart};
pub use filter::{filter_by_site, filter_by_site_and_payload, outcome_counts, SiteSelection};
pub use layout::DashboardLayout;
