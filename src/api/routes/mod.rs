//! API Routes
//!
//! Route handlers organized by functionality.

pub mod callbacks;
pub mod charts;
pub mod dashboard;
pub mod health;
pub mod sites;
