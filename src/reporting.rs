//! Report generation.
//!
//! Generating a report reads a snapshot of the current records, runs the
//! matching calculator and persists the result. Nothing is persisted unless
//! every step before the insert succeeds.

use tracing::info;

use crate::calculation::{compute_attendance_summary_with_labels, compute_payroll_with_rules};
use crate::config::EngineConfig;
use crate::error::EngineResult;
use crate::models::{ReferencePeriod, ReportKind, ReportPayload, ReportSnapshot};
use crate::store::{DataSource, ReportStore};

/// Computes a report of `kind` for `period` and persists it.
///
/// # Errors
///
/// Returns `InvalidPeriod` for an invalid month, or whatever error the data
/// source or report store reports. The store is not written to on error.
///
/// # Example
///
/// ```
/// use payroll_engine::config::{CompanyMetadata, EngineConfig, PayrollRules, ReportLabels};
/// use payroll_engine::models::{ReferencePeriod, ReportKind};
/// use payroll_engine::reporting::generate_report;
/// use payroll_engine::store::{InMemoryStore, ReportStore};
///
/// let config = EngineConfig::new(
///     CompanyMetadata {
///         code: "test".to_string(),
///         name: "Test Co".to_string(),
///         currency: "BRL".to_string(),
///         locale: "pt-BR".to_string(),
///     },
///     PayrollRules::default(),
///     ReportLabels::default(),
/// );
/// let store = InMemoryStore::new();
///
/// let period = ReferencePeriod::new(2025, 3).unwrap();
/// let snapshot = generate_report(&store, &store, &config, ReportKind::Payroll, period).unwrap();
/// assert_eq!(store.get_report(snapshot.id).unwrap(), snapshot);
/// ```
pub fn generate_report(
    source: &dyn DataSource,
    reports: &dyn ReportStore,
    config: &EngineConfig,
    kind: ReportKind,
    period: ReferencePeriod,
) -> EngineResult<ReportSnapshot> {
    period.validate()?;

    let employees = source.employees()?;
    let absences = source.absences_in(period)?;

    let payload = match kind {
        ReportKind::Payroll => ReportPayload::Payroll(compute_payroll_with_rules(
            &employees,
            &absences,
            period,
            config.rules(),
        )?),
        ReportKind::AttendanceSummary => {
            ReportPayload::AttendanceSummary(compute_attendance_summary_with_labels(
                &absences,
                &employees,
                period,
                config.labels(),
            )?)
        }
    };

    let snapshot = reports.insert_report(period, payload)?;

    info!(
        report_id = %snapshot.id,
        kind = kind.title(),
        period = %period,
        "report generated"
    );

    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CompanyMetadata, PayrollRules, ReportLabels};
    use crate::error::EngineError;
    use crate::models::{Absence, Employee, EmploymentStatus};
    use crate::store::InMemoryStore;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn create_test_config() -> EngineConfig {
        EngineConfig::new(
            CompanyMetadata {
                code: "test".to_string(),
                name: "Test Co".to_string(),
                currency: "BRL".to_string(),
                locale: "pt-BR".to_string(),
            },
            PayrollRules::default(),
            ReportLabels::default(),
        )
    }

    fn seeded_store() -> InMemoryStore {
        let store = InMemoryStore::new();
        store
            .save_employee(Employee {
                id: "e1".to_string(),
                name: "Maria Silva".to_string(),
                base_salary: Some(Decimal::from_str("1500.00").unwrap()),
                transit_fare: None,
                monthly_trips: None,
                status: EmploymentStatus::Active,
                admission_date: NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(),
                termination_date: None,
            })
            .unwrap();
        for (id, day) in [("a1", 3), ("a2", 4)] {
            store
                .save_absence(Absence {
                    id: id.to_string(),
                    date: NaiveDate::from_ymd_opt(2025, 3, day).unwrap(),
                    employee_id: Some("e1".to_string()),
                    justified: false,
                    deduction_applied: true,
                    reason: None,
                })
                .unwrap();
        }
        store
    }

    #[test]
    fn test_payroll_report_is_persisted() {
        let store = seeded_store();
        let period = ReferencePeriod::new(2025, 3).unwrap();

        let snapshot =
            generate_report(&store, &store, &create_test_config(), ReportKind::Payroll, period)
                .unwrap();

        assert_eq!(snapshot.kind(), ReportKind::Payroll);
        match &snapshot.payload {
            ReportPayload::Payroll(payroll) => {
                assert_eq!(
                    payroll.totals.net_salary,
                    Decimal::from_str("1300.00").unwrap()
                );
            }
            other => panic!("Expected payroll payload, got {:?}", other),
        }
        assert_eq!(store.list_reports().unwrap().len(), 1);
    }

    #[test]
    fn test_attendance_report_resolves_names() {
        let store = seeded_store();
        let period = ReferencePeriod::new(2025, 3).unwrap();

        let snapshot = generate_report(
            &store,
            &store,
            &create_test_config(),
            ReportKind::AttendanceSummary,
            period,
        )
        .unwrap();

        match snapshot.payload {
            ReportPayload::AttendanceSummary(rows) => {
                assert_eq!(rows.len(), 2);
                assert_eq!(rows[0].employee_name, "Maria Silva");
            }
            other => panic!("Expected attendance payload, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_period_persists_nothing() {
        let store = seeded_store();
        let period = ReferencePeriod { year: 2025, month: 13 };

        let result =
            generate_report(&store, &store, &create_test_config(), ReportKind::Payroll, period);

        assert!(matches!(result, Err(EngineError::InvalidPeriod { .. })));
        assert!(store.list_reports().unwrap().is_empty());
    }
}
