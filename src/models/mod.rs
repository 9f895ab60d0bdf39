//! Core data models for the vacation engine.
//!
//! This module contains all the domain models used throughout the engine.

mod conflict;
mod criteria;
mod occupancy;
mod raw_row;
mod record;
mod snapshot;

pub use conflict::{ConflictPair, ConflictSeverity, ConflictingEntry, EmployeeConflicts};
pub use criteria::{ApprovalFilter, DateRange, FilterCriteria};
pub use occupancy::DepartmentPresence;
pub use raw_row::{CellValue, RawRow};
pub use record::Record;
pub(crate) use record::inclusive_days;
pub use snapshot::{
    AggregateSnapshot, DepartmentSummary, GlobalTotals, WeeklyBucket, WeeklyEntry, WeeklyStats,
};
