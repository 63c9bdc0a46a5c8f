//! Configuration loading and management for the Vacation Engine.
//!
//! This module loads the leave policy, the service tier table, and the
//! holiday calendar from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use vacation_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/vacation").unwrap();
//! println!("Loaded {} holidays", config.holidays().len());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{BaseDays, HolidayCalendar, LeavePolicy, VacationConfig};
