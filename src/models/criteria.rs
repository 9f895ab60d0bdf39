//! Filter criteria for narrowing a record set.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Tri-state approval filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalFilter {
    /// Keep records regardless of approval.
    #[default]
    Any,
    /// Keep approved records only.
    Approved,
    /// Keep records still awaiting approval.
    Pending,
}

impl ApprovalFilter {
    /// Returns true if a record with the given approval state passes.
    pub fn accepts(self, approved: bool) -> bool {
        match self {
            ApprovalFilter::Any => true,
            ApprovalFilter::Approved => approved,
            ApprovalFilter::Pending => !approved,
        }
    }
}

/// An inclusive calendar date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    /// First day of the range (inclusive).
    pub from: NaiveDate,
    /// Last day of the range (inclusive).
    pub to: NaiveDate,
}

impl DateRange {
    /// Creates a range, rejecting `from > to`.
    ///
    /// # Example
    ///
    /// ```
    /// use vacation_engine::models::DateRange;
    /// use chrono::NaiveDate;
    ///
    /// let from = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    /// let to = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
    /// assert!(DateRange::new(from, to).is_ok());
    /// assert!(DateRange::new(to, from).is_err());
    /// ```
    pub fn new(from: NaiveDate, to: NaiveDate) -> EngineResult<Self> {
        let range = Self { from, to };
        range.check()?;
        Ok(range)
    }

    /// Fails with [`EngineError::InvalidDateRange`] when `from > to`.
    ///
    /// Ranges can be built through serde or struct literals, so consumers
    /// re-check before use.
    pub fn check(&self) -> EngineResult<()> {
        if self.from > self.to {
            return Err(EngineError::InvalidDateRange {
                from: self.from,
                to: self.to,
            });
        }
        Ok(())
    }
}

/// User-chosen criteria. Every field is optional; absent means no restriction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Keep records whose department is in the set. `Some` of an empty set
    /// keeps nothing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub departments: Option<BTreeSet<String>>,
    /// Approval state to keep.
    #[serde(default)]
    pub approval: ApprovalFilter,
    /// Keep records intersecting this range.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_range: Option<DateRange>,
}

impl FilterCriteria {
    /// Returns true if the criteria restrict nothing.
    pub fn is_unrestricted(&self) -> bool {
        self.departments.is_none()
            && self.approval == ApprovalFilter::Any
            && self.date_range.is_none()
    }

    /// Restricts to the given departments.
    pub fn with_departments<I, S>(mut self, departments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.departments = Some(departments.into_iter().map(Into::into).collect());
        self
    }

    /// Restricts to the given approval state.
    pub fn with_approval(mut self, approval: ApprovalFilter) -> Self {
        self.approval = approval;
        self
    }

    /// Restricts to records intersecting `range`.
    pub fn with_date_range(mut self, range: DateRange) -> Self {
        self.date_range = Some(range);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_default_criteria_are_unrestricted() {
        assert!(FilterCriteria::default().is_unrestricted());
    }

    #[test]
    fn test_builder_marks_criteria_restricted() {
        let criteria = FilterCriteria::default().with_approval(ApprovalFilter::Pending);
        assert!(!criteria.is_unrestricted());
    }

    #[test]
    fn test_approval_filter_accepts() {
        assert!(ApprovalFilter::Any.accepts(true));
        assert!(ApprovalFilter::Any.accepts(false));
        assert!(ApprovalFilter::Approved.accepts(true));
        assert!(!ApprovalFilter::Approved.accepts(false));
        assert!(ApprovalFilter::Pending.accepts(false));
        assert!(!ApprovalFilter::Pending.accepts(true));
    }

    #[test]
    fn test_single_day_range_is_valid() {
        let day = make_date("2024-05-01");
        assert!(DateRange::new(day, day).is_ok());
    }

    #[test]
    fn test_reversed_range_is_rejected() {
        let result = DateRange::new(make_date("2024-05-02"), make_date("2024-05-01"));
        match result {
            Err(EngineError::InvalidDateRange { from, to }) => {
                assert_eq!(from, make_date("2024-05-02"));
                assert_eq!(to, make_date("2024-05-01"));
            }
            _ => panic!("Expected InvalidDateRange error"),
        }
    }

    #[test]
    fn test_deserialize_criteria() {
        let json = r#"{
            "departments": ["Sales", "IT"],
            "approval": "approved",
            "date_range": {"from": "2024-01-01", "to": "2024-01-31"}
        }"#;

        let criteria: FilterCriteria = serde_json::from_str(json).unwrap();
        assert_eq!(criteria.departments.as_ref().map(|d| d.len()), Some(2));
        assert_eq!(criteria.approval, ApprovalFilter::Approved);
        assert_eq!(criteria.date_range.unwrap().to, make_date("2024-01-31"));
    }

    #[test]
    fn test_deserialize_empty_object_is_unrestricted() {
        let criteria: FilterCriteria = serde_json::from_str("{}").unwrap();
        assert!(criteria.is_unrestricted());
    }
}
