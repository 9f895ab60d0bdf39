//! Analysis engines over validated records.
//!
//! Every function here is pure and synchronous:
//!
//! - Filtering by department, approval state and date range
//! - Same-department conflict detection
//! - Department, weekly and global aggregation
//! - Occupancy at a reference date
//!
//! [`analyze`] chains filtering, conflict detection and aggregation;
//! [`AnalysisCache`] memoizes its result.

mod aggregation;
mod cache;
mod conflicts;
mod filter;
mod occupancy;
mod pipeline;
mod weekly;

pub use aggregation::{aggregate, department_summaries, global_totals};
pub use cache::AnalysisCache;
pub use conflicts::{
    DepartmentPartition, conflicting_departments, detect_conflicts, detect_conflicts_sweep,
    partition_by_department, summarize_by_employee,
};
pub use filter::{filter, matches};
pub use occupancy::{department_presence, on_leave_at, remaining_days, upcoming_leave};
pub use pipeline::{AnalysisReport, analyze};
pub use weekly::{week_start, weekly_buckets, weekly_stats};
