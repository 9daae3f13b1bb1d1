//! Absence deduction calculation.
//!
//! An absence with the deduction applied costs the employee the absent day
//! plus the proportional weekly rest day: two daily rates, where the daily
//! rate is the monthly salary over a fixed 30-day month. The rest-day part is
//! charged for every absence whatever weekday it fell on, and the total is
//! never capped at the salary.

use rust_decimal::Decimal;

use super::money::{overflow, round_money};
use crate::config::PayrollRules;
use crate::error::EngineResult;
use crate::models::{Absence, AuditStep, ReferencePeriod};

const RULE_ID: &str = "absence_deduction";

/// The result of a deduction calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct DeductionResult {
    /// Total amount deducted, rounded to the money scale.
    pub total: Decimal,
    /// Number of absences that were deducted.
    pub qualifying_absences: u32,
    /// Salary divided by the daily-rate divisor (unrounded).
    pub daily_rate: Decimal,
    /// Amount charged per deducted absence (unrounded).
    pub per_absence_penalty: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the salary deduction for one employee's absences in a period.
///
/// Only absences dated inside `period` with `deduction_applied` set are
/// counted; the caller is expected to pass absences of a single employee.
/// A blank or negative salary deducts nothing.
///
/// # Errors
///
/// Returns `CalculationOverflow` if the deduction is too large for a decimal.
///
/// # Arguments
///
/// * `base_salary` - The employee's monthly salary
/// * `absences` - The employee's absences, in any period
/// * `period` - The reference month
/// * `rules` - Divisor, penalty days and rounding scale
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_deduction;
/// use payroll_engine::config::PayrollRules;
/// use payroll_engine::models::{Absence, ReferencePeriod};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let period = ReferencePeriod::new(2025, 3).unwrap();
/// let absences: Vec<Absence> = [10, 17]
///     .iter()
///     .map(|day| Absence {
///         id: format!("abs_{}", day),
///         date: NaiveDate::from_ymd_opt(2025, 3, *day).unwrap(),
///         employee_id: Some("emp_001".to_string()),
///         justified: false,
///         deduction_applied: true,
///         reason: None,
///     })
///     .collect();
///
/// let result = calculate_deduction(
///     Some(Decimal::from_str("1500.00").unwrap()),
///     &absences,
///     &period,
///     &PayrollRules::default(),
///     1,
/// )
/// .unwrap();
///
/// assert_eq!(result.qualifying_absences, 2);
/// assert_eq!(result.total, Decimal::from_str("200.00").unwrap());
/// ```
pub fn calculate_deduction<'a, I>(
    base_salary: Option<Decimal>,
    absences: I,
    period: &ReferencePeriod,
    rules: &PayrollRules,
    step_number: u32,
) -> EngineResult<DeductionResult>
where
    I: IntoIterator<Item = &'a Absence>,
{
    let salary = base_salary.unwrap_or(Decimal::ZERO).max(Decimal::ZERO);

    let qualifying: Vec<&Absence> = absences
        .into_iter()
        .filter(|absence| absence.deduction_applied && period.contains(absence.date))
        .collect();
    let count = qualifying.len() as u32;

    let daily_rate = if rules.daily_rate_divisor.is_zero() {
        Decimal::ZERO
    } else {
        salary
            .checked_div(rules.daily_rate_divisor)
            .ok_or_else(|| overflow(RULE_ID, "daily rate"))?
    };
    let per_absence_penalty = daily_rate
        .checked_mul(rules.absence_penalty_days)
        .ok_or_else(|| overflow(RULE_ID, "per-absence penalty"))?;
    let total = per_absence_penalty
        .checked_mul(Decimal::from(count))
        .map(|total| round_money(total, rules.money_scale))
        .ok_or_else(|| overflow(RULE_ID, "deduction total"))?;

    let reasoning = if count == 0 {
        "No deducted absences in the period".to_string()
    } else {
        format!(
            "{} absence(s) × (${} / {} × {}) = ${}",
            count,
            salary.normalize(),
            rules.daily_rate_divisor.normalize(),
            rules.absence_penalty_days.normalize(),
            total
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: RULE_ID.to_string(),
        rule_name: "Absence Deduction".to_string(),
        input: serde_json::json!({
            "period": period.to_string(),
            "base_salary": salary.normalize().to_string(),
            "absence_ids": qualifying.iter().map(|a| a.id.as_str()).collect::<Vec<_>>(),
            "daily_rate_divisor": rules.daily_rate_divisor.normalize().to_string(),
            "absence_penalty_days": rules.absence_penalty_days.normalize().to_string()
        }),
        output: serde_json::json!({
            "qualifying_absences": count,
            "daily_rate": daily_rate.normalize().to_string(),
            "per_absence_penalty": per_absence_penalty.normalize().to_string(),
            "total": total.to_string()
        }),
        reasoning,
    };

    Ok(DeductionResult {
        total,
        qualifying_absences: count,
        daily_rate,
        per_absence_penalty,
        audit_step,
    })
}
