//! UI Components for the hero dashboard.
//!
//! - [`HeroDashboard`] - preview of the top heroes

mod dashboard;

pub use dashboard::*;
