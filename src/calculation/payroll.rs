//! Payroll aggregation.
//!
//! Runs the deduction and transit calculators for every active employee and
//! folds the results into a [`PayrollReportPayload`].

use std::collections::HashMap;

use rust_decimal::Decimal;
use tracing::debug;

use super::deduction::calculate_deduction;
use super::money::{overflow, round_money};
use super::transit::calculate_transit_allowance;
use crate::config::PayrollRules;
use crate::error::EngineResult;
use crate::models::{
    Absence, AuditStep, Employee, PayrollLineItem, PayrollReportPayload, PayrollTotals,
    ReferencePeriod,
};

/// Computes the payroll for `period` with the default payroll rules.
///
/// See [`compute_payroll_with_rules`].
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::compute_payroll;
/// use payroll_engine::models::{Employee, EmploymentStatus, ReferencePeriod};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let employees = vec![Employee {
///     id: "emp_001".to_string(),
///     name: "Maria Silva".to_string(),
///     base_salary: Some(Decimal::from_str("1500.00").unwrap()),
///     transit_fare: None,
///     monthly_trips: None,
///     status: EmploymentStatus::Active,
///     admission_date: NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(),
///     termination_date: None,
/// }];
///
/// let payroll = compute_payroll(&employees, &[], ReferencePeriod::new(2025, 3).unwrap()).unwrap();
/// assert_eq!(payroll.line_items.len(), 1);
/// assert_eq!(payroll.totals.net_salary.to_string(), "1500.00");
/// ```
pub fn compute_payroll(
    employees: &[Employee],
    absences: &[Absence],
    period: ReferencePeriod,
) -> EngineResult<PayrollReportPayload> {
    compute_payroll_with_rules(employees, absences, period, &PayrollRules::default())
}

/// Computes the payroll for `period`.
///
/// Inactive employees are skipped. For each active employee, in input
/// order, the absences owned by that employee inside the period are
/// deducted and the transit cost is computed. The net salary is base salary
/// minus deductions; transit is reported alongside but never subtracted.
/// Absences whose employee is unknown or missing contribute nothing.
///
/// The salary is rounded to `rules.money_scale` once and that amount feeds
/// both the deduction and the line item. Every monetary field is rounded on
/// the line item, so the totals are exact sums of the lines.
///
/// # Errors
///
/// Returns `InvalidPeriod` if the period's month is outside 1–12. Nothing is
/// computed in that case. Returns `CalculationOverflow` if any amount or
/// total is too large for a decimal.
pub fn compute_payroll_with_rules(
    employees: &[Employee],
    absences: &[Absence],
    period: ReferencePeriod,
    rules: &PayrollRules,
) -> EngineResult<PayrollReportPayload> {
    period.validate()?;

    let mut by_employee: HashMap<&str, Vec<&Absence>> = HashMap::new();
    for absence in absences.iter().filter(|a| period.contains(a.date)) {
        if let Some(employee_id) = absence.employee_id.as_deref() {
            by_employee.entry(employee_id).or_default().push(absence);
        }
    }

    let mut line_items = Vec::new();
    let mut totals = PayrollTotals::default();
    let mut audit_trace: Vec<AuditStep> = Vec::new();
    let mut step_number: u32 = 1;

    for employee in employees.iter().filter(|e| e.is_active()) {
        let owned = by_employee
            .get(employee.id.as_str())
            .map(Vec::as_slice)
            .unwrap_or_default();

        let base_salary = round_money(employee.effective_salary(), rules.money_scale);

        let deduction = calculate_deduction(
            Some(base_salary),
            owned.iter().copied(),
            &period,
            rules,
            step_number,
        )?;
        step_number += 1;

        let transit = calculate_transit_allowance(
            employee.transit_fare,
            employee.monthly_trips,
            rules,
            step_number,
        )?;
        step_number += 1;

        let net_salary = base_salary
            .checked_sub(deduction.total)
            .ok_or_else(|| overflow("net_salary", "net salary"))?;
        let item = PayrollLineItem {
            employee_id: employee.id.clone(),
            employee_name: employee.name.clone(),
            base_salary,
            transit_cost: transit.cost,
            deduction_total: deduction.total,
            absences_with_deduction: deduction.qualifying_absences,
            net_salary,
        };

        totals.add(&item)?;
        line_items.push(item);
        audit_trace.push(deduction.audit_step);
        audit_trace.push(transit.audit_step);
    }

    debug!(
        period = %period,
        employees = employees.len(),
        line_items = line_items.len(),
        net_total = %totals.net_salary,
        "payroll computed"
    );

    Ok(PayrollReportPayload {
        period,
        line_items,
        totals,
        audit_trace,
    })
}
