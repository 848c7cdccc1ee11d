//! Input validation for scheduling snapshots.
//!
//! The engine itself never fails: a misconfigured constraint simply
//! produces unexpected vacancies. This pass lets a caller tell
//! misconfiguration apart from intentional vacancy before running.
//! Detects:
//! - Duplicate employee ids and employee codes
//! - Duplicate holiday dates
//! - Leave records with inverted spans or unknown employees
//! - Constraint entries with out-of-range weekday numbers, empty
//!   availability, or shifts the employee does not hold

use std::collections::HashSet;

use crate::models::{Employee, Holiday, LeaveRecord};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same identifier.
    DuplicateId,
    /// A leave record references an employee that doesn't exist.
    UnknownEmployee,
    /// A leave record ends before it starts.
    InvertedLeaveSpan,
    /// A per-shift constraint entry is unusable as written.
    InvalidConstraint,
    /// A constraint entry targets a shift outside the employee's roles.
    ConstraintWithoutRole,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a scheduling snapshot before loading it.
///
/// Checks:
/// 1. No duplicate employee ids or employee codes
/// 2. No duplicate holiday dates
/// 3. Leave spans are ordered and reference known employees
/// 4. Per-shift constraints use weekday numbers 1..=7, have at least
///    one available day, and target shifts the employee holds
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(
    employees: &[Employee],
    holidays: &[Holiday],
    leaves: &[LeaveRecord],
) -> ValidationResult {
    let mut errors = Vec::new();

    let mut employee_ids = HashSet::new();
    let mut employee_codes = HashSet::new();
    for emp in employees {
        if !employee_ids.insert(emp.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate employee id: {}", emp.id),
            ));
        }
        if !emp.employee_code.is_empty() && !employee_codes.insert(emp.employee_code.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate employee code: {}", emp.employee_code),
            ));
        }

        for (shift, constraints) in &emp.constraints.by_shift {
            if !emp.roles.contains(shift) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::ConstraintWithoutRole,
                    format!(
                        "Employee '{}' has constraints for '{shift}' but not the role",
                        emp.id
                    ),
                ));
            }
            if constraints.available_days.is_empty() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidConstraint,
                    format!("Employee '{}', shift '{shift}': no available days", emp.id),
                ));
            }
            if let Some(&bad) = constraints
                .available_days
                .iter()
                .find(|d| !(1..=7).contains(*d))
            {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidConstraint,
                    format!(
                        "Employee '{}', shift '{shift}': weekday {bad} outside 1..=7",
                        emp.id
                    ),
                ));
            }
            if constraints.max_consecutive_days == 0 {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidConstraint,
                    format!(
                        "Employee '{}', shift '{shift}': max consecutive days is zero",
                        emp.id
                    ),
                ));
            }
        }
    }

    let mut holiday_dates = HashSet::new();
    for holiday in holidays {
        if !holiday_dates.insert(holiday.date) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate holiday date: {}", holiday.date),
            ));
        }
    }

    for leave in leaves {
        if leave.end < leave.start {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvertedLeaveSpan,
                format!(
                    "Leave for '{}' ends {} before it starts {}",
                    leave.employee_id, leave.end, leave.start
                ),
            ));
        }
        if !employee_ids.contains(leave.employee_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownEmployee,
                format!("Leave references unknown employee '{}'", leave.employee_id),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PerShiftConstraints, Shift};
    use chrono::NaiveDate;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn sample_employees() -> Vec<Employee> {
        vec![
            Employee::new("e1", "Alice").with_code("A-001").with_role(Shift::Noon),
            Employee::new("e2", "Bob").with_code("A-002").with_role(Shift::Phone),
        ]
    }

    #[test]
    fn test_valid_input() {
        let holidays = vec![Holiday::national("元旦", date("2025-01-01"))];
        let leaves = vec![LeaveRecord::full_days("e1", date("2025-03-10"), date("2025-03-11"))];
        assert!(validate_input(&sample_employees(), &holidays, &leaves).is_ok());
    }

    #[test]
    fn test_duplicate_employee_id() {
        let employees = vec![
            Employee::new("e1", "Alice"),
            Employee::new("e1", "Alice again"),
        ];
        let errors = validate_input(&employees, &[], &[]).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId));
    }

    #[test]
    fn test_duplicate_employee_code() {
        let employees = vec![
            Employee::new("e1", "Alice").with_code("A-001"),
            Employee::new("e2", "Bob").with_code("A-001"),
        ];
        let errors = validate_input(&employees, &[], &[]).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("code")));
    }

    #[test]
    fn test_duplicate_holiday_date() {
        let holidays = vec![
            Holiday::national("元旦", date("2025-01-01")),
            Holiday::national("重複", date("2025-01-01")),
        ];
        let errors = validate_input(&sample_employees(), &holidays, &[]).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("holiday")));
    }

    #[test]
    fn test_inverted_leave_span() {
        let leaves = vec![LeaveRecord::full_days("e1", date("2025-03-11"), date("2025-03-10"))];
        let errors = validate_input(&sample_employees(), &[], &leaves).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvertedLeaveSpan));
    }

    #[test]
    fn test_leave_for_unknown_employee() {
        let leaves = vec![LeaveRecord::full_days("ghost", date("2025-03-10"), date("2025-03-10"))];
        let errors = validate_input(&sample_employees(), &[], &leaves).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::UnknownEmployee));
    }

    #[test]
    fn test_constraint_without_role() {
        let employees = vec![Employee::new("e1", "Alice")
            .with_role(Shift::Noon)
            .with_shift_constraints(Shift::Phone, PerShiftConstraints::weekday_default())];
        let errors = validate_input(&employees, &[], &[]).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::ConstraintWithoutRole));
    }

    #[test]
    fn test_out_of_range_weekday() {
        let employees = vec![Employee::new("e1", "Alice")
            .with_role(Shift::Noon)
            .with_shift_constraints(
                Shift::Noon,
                PerShiftConstraints::weekday_default().with_available_days([0, 8]),
            )];
        let errors = validate_input(&employees, &[], &[]).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidConstraint));
    }

    #[test]
    fn test_empty_available_days() {
        let employees = vec![Employee::new("e1", "Alice")
            .with_role(Shift::Noon)
            .with_shift_constraints(
                Shift::Noon,
                PerShiftConstraints::weekday_default().with_available_days([]),
            )];
        let errors = validate_input(&employees, &[], &[]).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidConstraint
                && e.message.contains("no available days")));
    }

    #[test]
    fn test_multiple_errors_collected() {
        let employees = vec![
            Employee::new("e1", "Alice"),
            Employee::new("e1", "Alice again"),
        ];
        let leaves = vec![LeaveRecord::full_days("ghost", date("2025-03-10"), date("2025-03-10"))];
        let errors = validate_input(&employees, &[], &leaves).unwrap_err();
        assert!(errors.len() >= 2);
    }
}
