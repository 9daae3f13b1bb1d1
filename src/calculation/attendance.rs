//! Attendance summary builder.

use std::collections::HashMap;

use tracing::debug;

use crate::config::ReportLabels;
use crate::error::EngineResult;
use crate::models::{Absence, AttendanceRow, Employee, ReferencePeriod};

/// Lists every absence in `period` with the default report labels.
///
/// See [`compute_attendance_summary_with_labels`].
pub fn compute_attendance_summary(
    absences: &[Absence],
    employees: &[Employee],
    period: ReferencePeriod,
) -> EngineResult<Vec<AttendanceRow>> {
    compute_attendance_summary_with_labels(absences, employees, period, &ReportLabels::default())
}

/// Lists every absence in `period`, one row each, in input order.
///
/// Rows are produced regardless of the employee's status or whether a
/// deduction was applied. `employees` is only used to resolve names: an
/// absence without an employee, or pointing at an unknown one, is shown with
/// `labels.unknown_employee`. A blank reason becomes
/// `labels.unspecified_reason`.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::compute_attendance_summary;
/// use payroll_engine::models::{Absence, ReferencePeriod};
/// use chrono::NaiveDate;
///
/// let absences = vec![Absence {
///     id: "abs_001".to_string(),
///     date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
///     employee_id: Some("emp_gone".to_string()),
///     justified: true,
///     deduction_applied: false,
///     reason: Some("Medical appointment".to_string()),
/// }];
///
/// let rows = compute_attendance_summary(&absences, &[], ReferencePeriod::new(2025, 3).unwrap()).unwrap();
/// assert_eq!(rows.len(), 1);
/// assert_eq!(rows[0].employee_name, "N/A");
/// assert_eq!(rows[0].reason, "Medical appointment");
/// ```
///
/// # Errors
///
/// Returns `InvalidPeriod` if the period's month is outside 1–12.
pub fn compute_attendance_summary_with_labels(
    absences: &[Absence],
    employees: &[Employee],
    period: ReferencePeriod,
    labels: &ReportLabels,
) -> EngineResult<Vec<AttendanceRow>> {
    period.validate()?;

    let mut names: HashMap<&str, &str> = HashMap::with_capacity(employees.len());
    for employee in employees {
        names
            .entry(employee.id.as_str())
            .or_insert(employee.name.as_str());
    }

    let rows: Vec<AttendanceRow> = absences
        .iter()
        .filter(|absence| period.contains(absence.date))
        .map(|absence| AttendanceRow {
            absence_id: absence.id.clone(),
            date: absence.date,
            employee_name: absence
                .employee_id
                .as_deref()
                .and_then(|id| names.get(id).copied())
                .unwrap_or(labels.unknown_employee.as_str())
                .to_string(),
            justified: absence.justified,
            reason: absence
                .reason_text()
                .unwrap_or(labels.unspecified_reason.as_str())
                .to_string(),
        })
        .collect();

    debug!(period = %period, rows = rows.len(), "attendance summary computed");

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::models::EmploymentStatus;
    use chrono::NaiveDate;

    fn march() -> ReferencePeriod {
        ReferencePeriod::new(2025, 3).unwrap()
    }

    fn create_test_employee(id: &str, name: &str, status: EmploymentStatus) -> Employee {
        Employee {
            id: id.to_string(),
            name: name.to_string(),
            base_salary: None,
            transit_fare: None,
            monthly_trips: None,
            status,
            admission_date: NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(),
            termination_date: None,
        }
    }

    fn create_test_absence(id: &str, employee_id: Option<&str>, date: (i32, u32, u32)) -> Absence {
        Absence {
            id: id.to_string(),
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            employee_id: employee_id.map(str::to_string),
            justified: false,
            deduction_applied: true,
            reason: None,
        }
    }

    #[test]
    fn test_one_row_per_absence_in_period() {
        let employees = vec![
            create_test_employee("e1", "Maria Silva", EmploymentStatus::Active),
            create_test_employee("e2", "João Souza", EmploymentStatus::Inactive),
        ];
        let mut justified = create_test_absence("a2", Some("e2"), (2025, 3, 4));
        justified.justified = true;
        justified.deduction_applied = false;
        let absences = vec![
            create_test_absence("a1", Some("e1"), (2025, 3, 3)),
            justified,
            create_test_absence("a3", Some("e1"), (2025, 4, 1)),
        ];

        let rows = compute_attendance_summary(&absences, &employees, march()).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].employee_name, "Maria Silva");
        assert!(!rows[0].justified);
        assert_eq!(rows[1].employee_name, "João Souza");
        assert!(rows[1].justified);
    }

    #[test]
    fn test_source_order_is_kept() {
        let absences = vec![
            create_test_absence("late", Some("e1"), (2025, 3, 28)),
            create_test_absence("early", Some("e1"), (2025, 3, 2)),
            create_test_absence("mid", Some("e1"), (2025, 3, 15)),
        ];
        let rows = compute_attendance_summary(&absences, &[], march()).unwrap();
        let ids: Vec<&str> = rows.iter().map(|r| r.absence_id.as_str()).collect();
        assert_eq!(ids, vec!["late", "early", "mid"]);
    }

    #[test]
    fn test_unknown_or_missing_employee_uses_placeholder() {
        let absences = vec![
            create_test_absence("a1", None, (2025, 3, 3)),
            create_test_absence("a2", Some("ghost"), (2025, 3, 4)),
        ];
        let rows = compute_attendance_summary(&absences, &[], march()).unwrap();
        assert!(rows.iter().all(|r| r.employee_name == "N/A"));
    }

    #[test]
    fn test_blank_reason_uses_placeholder() {
        let mut blank = create_test_absence("a1", Some("e1"), (2025, 3, 3));
        blank.reason = Some("   ".to_string());
        let mut given = create_test_absence("a2", Some("e1"), (2025, 3, 4));
        given.reason = Some(" Atestado médico ".to_string());

        let labels = ReportLabels {
            unknown_employee: "N/A".to_string(),
            unspecified_reason: "Não especificado".to_string(),
        };
        let rows =
            compute_attendance_summary_with_labels(&[blank, given], &[], march(), &labels).unwrap();

        assert_eq!(rows[0].reason, "Não especificado");
        assert_eq!(rows[1].reason, "Atestado médico");
    }

    #[test]
    fn test_first_employee_wins_on_duplicate_ids() {
        let employees = vec![
            create_test_employee("e1", "First", EmploymentStatus::Active),
            create_test_employee("e1", "Second", EmploymentStatus::Active),
        ];
        let absences = vec![create_test_absence("a1", Some("e1"), (2025, 3, 3))];
        let rows = compute_attendance_summary(&absences, &employees, march()).unwrap();
        assert_eq!(rows[0].employee_name, "First");
    }

    #[test]
    fn test_same_month_other_year_is_excluded() {
        let absences = vec![create_test_absence("a1", Some("e1"), (2024, 3, 3))];
        let rows = compute_attendance_summary(&absences, &[], march()).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_invalid_period_is_rejected() {
        let result = compute_attendance_summary(&[], &[], ReferencePeriod { year: 2025, month: 0 });
        assert!(matches!(result, Err(EngineError::InvalidPeriod { .. })));
    }
}
