//! Vacation Entitlement & Scheduling Engine
//!
//! This crate turns a history of monthly social-insurance payment records into
//! qualifying service months, converts service months into an annual paid-leave
//! entitlement using tiered bonus tables, and validates how an employee splits
//! that entitlement into leave periods before the request goes to an approver.

#![warn(missing_docs)]

pub mod allocation;
pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
