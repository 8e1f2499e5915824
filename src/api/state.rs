//! Application State
//!
//! Shared state accessible by all API handlers.
//! Everything here is read-only after startup, so handlers share it through
//! `Arc` without locks.

use std::sync::Arc;
use std::time::Instant;

use crate::callbacks::CallbackRegistry;
use crate::config::ServerConfig;
use crate::data::LaunchDataset;
use crate::layout::DashboardLayout;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Launch records loaded at startup
    pub dataset: Arc<LaunchDataset>,
    /// Input component → chart handler wiring
    pub callbacks: Arc<CallbackRegistry>,
    /// Page description, built once from the dataset
    pub layout: Arc<DashboardLayout>,
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Create state for the launch dashboard
    pub fn new(dataset: LaunchDataset, config: ServerConfig) -> Self {
        let layout = DashboardLayout::build(&dataset);

        Self {
            dataset: Arc::new(dataset),
            callbacks: Arc::new(CallbackRegistry::dashboard()),
            layout: Arc::new(layout),
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
