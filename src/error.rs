//! Error types for the Vacation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while computing entitlements and
//! validating leave requests.

use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

/// The main error type for the Vacation Engine.
///
/// Every validation failure is local and deterministic: the caller is expected
/// to surface it and let the employee correct their input. None of these
/// errors are retryable.
///
/// # Example
///
/// ```
/// use vacation_engine::error::EngineError;
///
/// let error = EngineError::MissingMinimumSegment { minimum_days: 10 };
/// assert_eq!(
///     error.to_string(),
///     "At least one leave split must cover 10 or more days"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but is semantically invalid.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// A description of what is wrong with the configuration.
        message: String,
    },

    /// A date range ends before it starts.
    #[error("Invalid date range: end {end} is before start {start}")]
    InvalidRange {
        /// The first day of the range.
        start: NaiveDate,
        /// The last day of the range.
        end: NaiveDate,
    },

    /// A leave split shares at least one calendar day with another split.
    #[error("Leave split {index} overlaps leave split {conflicting_index}")]
    OverlappingSplit {
        /// The index of the split being edited.
        index: usize,
        /// The index of the split it collides with.
        conflicting_index: usize,
    },

    /// A date cannot be selected for leave.
    #[error("Date {date} cannot be selected: {reason}")]
    IneligibleDate {
        /// The rejected date.
        date: NaiveDate,
        /// Why the date is not selectable.
        reason: String,
    },

    /// The splits do not consume the entitlement exactly.
    #[error(
        "Leave splits are not reconciled: {allocated} of {entitlement} days allocated, {unset_splits} split(s) without dates"
    )]
    NotReconciled {
        /// Total days currently allocated across all splits.
        allocated: u32,
        /// The entitlement the splits must consume.
        entitlement: u32,
        /// Number of splits that still have no date range.
        unset_splits: usize,
    },

    /// The splits allocate more days than the entitlement.
    #[error("Leave splits allocate {allocated} days, exceeding the entitlement of {entitlement}")]
    EntitlementExceeded {
        /// Total days currently allocated across all splits.
        allocated: u32,
        /// The entitlement the splits must consume.
        entitlement: u32,
    },

    /// No split is long enough to satisfy the continuous-leave rule.
    #[error("At least one leave split must cover {minimum_days} or more days")]
    MissingMinimumSegment {
        /// The minimum number of days one split must cover.
        minimum_days: u32,
    },

    /// The requested number of splits is outside the configured bounds.
    #[error("Split count {requested} is outside the allowed range 1..={max}")]
    InvalidSplitCount {
        /// The requested split count.
        requested: usize,
        /// The configured maximum split count.
        max: usize,
    },

    /// A split index does not exist in the split set.
    #[error("Leave split index {index} is out of range (split set has {len} splits)")]
    SplitIndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The number of splits in the set.
        len: usize,
    },

    /// A leave request cannot take the requested transition from its state.
    #[error("Cannot {action} a leave request that is {from}")]
    InvalidTransition {
        /// The state the request is currently in.
        from: String,
        /// The attempted action.
        action: String,
    },

    /// Another approver already decided the leave request.
    #[error("Leave request {request_id} was already decided: {status}")]
    DecisionConflict {
        /// The request that was raced on.
        request_id: Uuid,
        /// The status the winning decision left the request in.
        status: String,
    },

    /// No leave request is registered under the given id.
    #[error("Leave request not found: {request_id}")]
    RequestNotFound {
        /// The id that was looked up.
        request_id: Uuid,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
