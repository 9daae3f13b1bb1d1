//! Monthly overview shown on the back-office home screen.

use chrono::Weekday;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::payroll::compute_payroll_with_rules;
use super::site_revenue::{SiteRevenueSummary, summarize_site_revenue};
use crate::config::PayrollRules;
use crate::error::EngineResult;
use crate::models::{Absence, Employee, ReferencePeriod, Shift, Site, shifts_on};

/// Headline numbers for one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardOverview {
    /// The month the numbers are for.
    pub period: ReferencePeriod,
    /// Employees with active status.
    pub active_employees: u32,
    /// Sites with an active contract.
    pub active_sites: u32,
    /// Absences dated in the period, of any kind.
    pub absences_in_period: u32,
    /// Sum of net salaries, as on the payroll report.
    pub payroll_spend: Decimal,
    /// Sum of transit costs, as on the payroll report.
    pub transit_total: Decimal,
    /// Revenue from active sites.
    pub site_revenue: SiteRevenueSummary,
    /// Number of schedule entries.
    pub total_shifts: u32,
    /// The weekday whose schedule is listed, if one was requested.
    pub weekday: Option<Weekday>,
    /// Schedule entries on `weekday`, in source order.
    pub weekday_shifts: Vec<Shift>,
}

/// Builds the overview for `period`.
///
/// The payroll figures come from [`compute_payroll_with_rules`], so they
/// always agree with a payroll report generated from the same data.
///
/// # Errors
///
/// Returns `InvalidPeriod` if the period's month is outside 1–12, or
/// `CalculationOverflow` if a payroll or revenue sum is too large.
pub fn build_dashboard(
    employees: &[Employee],
    absences: &[Absence],
    sites: &[Site],
    shifts: &[Shift],
    period: ReferencePeriod,
    weekday: Option<Weekday>,
    rules: &PayrollRules,
) -> EngineResult<DashboardOverview> {
    let payroll = compute_payroll_with_rules(employees, absences, period, rules)?;

    let weekday_shifts = weekday
        .map(|day| shifts_on(shifts, day).into_iter().cloned().collect())
        .unwrap_or_default();

    Ok(DashboardOverview {
        period,
        active_employees: payroll.line_items.len() as u32,
        active_sites: sites.iter().filter(|s| s.is_active()).count() as u32,
        absences_in_period: absences.iter().filter(|a| period.contains(a.date)).count() as u32,
        payroll_spend: payroll.totals.net_salary,
        transit_total: payroll.totals.transit_cost,
        site_revenue: summarize_site_revenue(sites)?,
        total_shifts: shifts.len() as u32,
        weekday,
        weekday_shifts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EmploymentStatus, SiteStatus, Transport};
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_employee(id: &str, salary: &str, status: EmploymentStatus) -> Employee {
        Employee {
            id: id.to_string(),
            name: format!("Employee {}", id),
            base_salary: Some(dec(salary)),
            transit_fare: Some(dec("5.00")),
            monthly_trips: Some(40),
            status,
            admission_date: NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(),
            termination_date: None,
        }
    }

    fn create_test_shift(id: &str, weekday: Weekday) -> Shift {
        Shift {
            id: id.to_string(),
            weekday,
            hours: dec("8"),
            employee_id: "e1".to_string(),
            site_id: "s1".to_string(),
        }
    }

    fn create_test_site(status: SiteStatus) -> Site {
        Site {
            id: "s1".to_string(),
            name: "Residencial Aurora".to_string(),
            service_fee: Some(dec("4000")),
            issues_tax_invoice: false,
            withholding: None,
            status,
            transport: Transport::None,
        }
    }

    #[test]
    fn test_overview_counts_and_totals() {
        let employees = vec![
            create_test_employee("e1", "1500", EmploymentStatus::Active),
            create_test_employee("e2", "2000", EmploymentStatus::Inactive),
        ];
        let absences = vec![
            Absence {
                id: "a1".to_string(),
                date: NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(),
                employee_id: Some("e1".to_string()),
                justified: false,
                deduction_applied: true,
                reason: None,
            },
            Absence {
                id: "a2".to_string(),
                date: NaiveDate::from_ymd_opt(2025, 3, 4).unwrap(),
                employee_id: Some("e2".to_string()),
                justified: true,
                deduction_applied: false,
                reason: None,
            },
        ];
        let sites = vec![
            create_test_site(SiteStatus::Active),
            create_test_site(SiteStatus::Inactive),
        ];
        let shifts = vec![
            create_test_shift("sh1", Weekday::Mon),
            create_test_shift("sh2", Weekday::Tue),
            create_test_shift("sh3", Weekday::Mon),
        ];

        let overview = build_dashboard(
            &employees,
            &absences,
            &sites,
            &shifts,
            ReferencePeriod::new(2025, 3).unwrap(),
            Some(Weekday::Mon),
            &PayrollRules::default(),
        )
        .unwrap();

        assert_eq!(overview.active_employees, 1);
        assert_eq!(overview.active_sites, 1);
        assert_eq!(overview.absences_in_period, 2);
        assert_eq!(overview.payroll_spend, dec("1400.00"));
        assert_eq!(overview.transit_total, dec("200.00"));
        assert_eq!(overview.site_revenue.gross_monthly_total, dec("4000"));
        assert_eq!(overview.total_shifts, 3);
        let ids: Vec<&str> = overview.weekday_shifts.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["sh1", "sh3"]);
    }

    #[test]
    fn test_without_weekday_lists_no_shifts() {
        let shifts = vec![create_test_shift("sh1", Weekday::Mon)];
        let overview = build_dashboard(
            &[],
            &[],
            &[],
            &shifts,
            ReferencePeriod::new(2025, 3).unwrap(),
            None,
            &PayrollRules::default(),
        )
        .unwrap();

        assert!(overview.weekday_shifts.is_empty());
        assert_eq!(overview.total_shifts, 1);
        assert_eq!(overview.payroll_spend, Decimal::ZERO);
    }

    #[test]
    fn test_invalid_period_fails() {
        let result = build_dashboard(
            &[],
            &[],
            &[],
            &[],
            ReferencePeriod { year: 2025, month: 13 },
            None,
            &PayrollRules::default(),
        );
        assert!(result.is_err());
    }
}
