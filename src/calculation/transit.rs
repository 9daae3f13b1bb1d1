//! Transit allowance calculation.
//!
//! The company pays for a fixed number of bus trips per month. The cost is
//! not prorated for partial months or absences.

use rust_decimal::Decimal;

use super::money::{overflow, round_money};
use crate::config::PayrollRules;
use crate::error::EngineResult;
use crate::models::AuditStep;

/// The result of a transit allowance calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct TransitAllowanceResult {
    /// Monthly transit cost, rounded to the money scale.
    pub cost: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the monthly transit cost of an employee.
///
/// A blank or negative fare or trip count is read as zero. Fails with
/// `CalculationOverflow` when the cost is too large for a decimal.
///
/// # Arguments
///
/// * `fare` - Price of a single trip
/// * `monthly_trips` - Number of paid trips per month
/// * `rules` - Supplies the rounding scale
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_transit_allowance;
/// use payroll_engine::config::PayrollRules;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = calculate_transit_allowance(
///     Some(Decimal::from_str("5.75").unwrap()),
///     Some(44),
///     &PayrollRules::default(),
///     1,
/// )
/// .unwrap();
/// assert_eq!(result.cost.to_string(), "253.00");
/// ```
pub fn calculate_transit_allowance(
    fare: Option<Decimal>,
    monthly_trips: Option<i32>,
    rules: &PayrollRules,
    step_number: u32,
) -> EngineResult<TransitAllowanceResult> {
    let fare = fare.unwrap_or(Decimal::ZERO).max(Decimal::ZERO);
    let trips = monthly_trips.map(|t| t.max(0)).unwrap_or(0);
    let cost = fare
        .checked_mul(Decimal::from(trips))
        .map(|cost| round_money(cost, rules.money_scale))
        .ok_or_else(|| overflow("transit_allowance", "transit cost"))?;

    let audit_step = AuditStep {
        step_number,
        rule_id: "transit_allowance".to_string(),
        rule_name: "Transit Allowance".to_string(),
        input: serde_json::json!({
            "fare": fare.normalize().to_string(),
            "monthly_trips": trips
        }),
        output: serde_json::json!({
            "cost": cost.to_string()
        }),
        reasoning: format!("{} trips × ${} = ${}", trips, fare.normalize(), cost),
    };

    Ok(TransitAllowanceResult { cost, audit_step })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn transit(fare: Option<&str>, trips: Option<i32>) -> Decimal {
        calculate_transit_allowance(fare.map(dec), trips, &PayrollRules::default(), 1)
            .unwrap()
            .cost
    }

    #[test]
    fn test_fare_times_trips() {
        assert_eq!(transit(Some("5.75"), Some(44)), dec("253.00"));
        assert_eq!(transit(Some("4.40"), Some(22)), dec("96.80"));
    }

    #[test]
    fn test_missing_values_default_to_zero() {
        assert_eq!(transit(None, Some(44)), Decimal::ZERO);
        assert_eq!(transit(Some("5.75"), None), Decimal::ZERO);
        assert_eq!(transit(None, None).to_string(), "0.00");
    }

    #[test]
    fn test_negative_values_are_coerced_to_zero() {
        assert_eq!(transit(Some("-5.75"), Some(44)), Decimal::ZERO);
        assert_eq!(transit(Some("5.75"), Some(-3)), Decimal::ZERO);
    }

    #[test]
    fn test_audit_step() {
        let result = calculate_transit_allowance(
            Some(dec("5.75")),
            Some(44),
            &PayrollRules::default(),
            3,
        )
        .unwrap();
        assert_eq!(result.audit_step.step_number, 3);
        assert_eq!(result.audit_step.rule_id, "transit_allowance");
        assert_eq!(result.audit_step.input["monthly_trips"], 44);
        assert_eq!(result.audit_step.output["cost"], "253.00");
        assert_eq!(result.audit_step.reasoning, "44 trips × $5.75 = $253.00");
    }

    #[test]
    fn test_cost_too_large_for_decimal_is_an_error() {
        match calculate_transit_allowance(Some(Decimal::MAX), Some(2), &PayrollRules::default(), 1) {
            Err(EngineError::CalculationOverflow { rule, .. }) => {
                assert_eq!(rule, "transit_allowance")
            }
            other => panic!("Expected CalculationOverflow, got {:?}", other),
        }
    }
}
