//! Report models.
//!
//! This module contains the computed outputs of the engine: payroll line
//! items and totals, attendance rows, the audit trace, and the persisted
//! [`ReportSnapshot`] that wraps either payload.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ReferencePeriod;
use crate::error::{EngineError, EngineResult};

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// One employee's row in a payroll report.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayrollLineItem;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let item = PayrollLineItem {
///     employee_id: "emp_001".to_string(),
///     employee_name: "Maria Silva".to_string(),
///     base_salary: Decimal::from_str("1500.00").unwrap(),
///     transit_cost: Decimal::from_str("253.00").unwrap(),
///     deduction_total: Decimal::from_str("200.00").unwrap(),
///     absences_with_deduction: 2,
///     net_salary: Decimal::from_str("1300.00").unwrap(),
/// };
/// assert_eq!(item.base_salary - item.deduction_total, item.net_salary);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollLineItem {
    /// The employee this line is for.
    pub employee_id: String,
    /// The employee's name at the time of generation.
    pub employee_name: String,
    /// Base monthly salary.
    pub base_salary: Decimal,
    /// Monthly transit cost. Informational: not subtracted from net salary.
    pub transit_cost: Decimal,
    /// Total deducted for absences.
    pub deduction_total: Decimal,
    /// Number of absences that carried a deduction.
    pub absences_with_deduction: u32,
    /// Base salary minus deductions.
    pub net_salary: Decimal,
}

/// Aggregated totals for a payroll report.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PayrollTotals {
    /// Sum of base salaries.
    pub base_salary: Decimal,
    /// Sum of transit costs.
    pub transit_cost: Decimal,
    /// Sum of absence deductions.
    pub deductions: Decimal,
    /// Sum of net salaries.
    pub net_salary: Decimal,
}

impl PayrollTotals {
    /// Adds a line item to the running totals.
    ///
    /// The totals are left untouched when any sum would overflow.
    pub fn add(&mut self, item: &PayrollLineItem) -> EngineResult<()> {
        let sum = |total: Decimal, value: Decimal, field: &str| {
            total
                .checked_add(value)
                .ok_or_else(|| EngineError::CalculationOverflow {
                    rule: "payroll_totals".to_string(),
                    message: format!("sum of {} is out of range", field),
                })
        };

        *self = PayrollTotals {
            base_salary: sum(self.base_salary, item.base_salary, "base salaries")?,
            transit_cost: sum(self.transit_cost, item.transit_cost, "transit costs")?,
            deductions: sum(self.deductions, item.deduction_total, "deductions")?,
            net_salary: sum(self.net_salary, item.net_salary, "net salaries")?,
        };
        Ok(())
    }
}

/// The computed content of a payroll report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollReportPayload {
    /// The month the payroll covers.
    pub period: ReferencePeriod,
    /// One line per active employee, in processing order.
    pub line_items: Vec<PayrollLineItem>,
    /// Totals across all line items.
    pub totals: PayrollTotals,
    /// Every rule applied while computing the payroll, in order.
    #[serde(default)]
    pub audit_trace: Vec<AuditStep>,
}

/// One row of the attendance summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRow {
    /// The absence this row was built from.
    pub absence_id: String,
    /// The day of the absence.
    pub date: NaiveDate,
    /// The employee's name, or a placeholder when the employee is unknown.
    pub employee_name: String,
    /// Whether the absence was justified.
    pub justified: bool,
    /// The reason, or a placeholder when none was given.
    pub reason: String,
}

/// The kinds of report the engine can generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    /// Monthly payroll.
    Payroll,
    /// Monthly list of absences.
    AttendanceSummary,
}

impl ReportKind {
    /// Human-readable title.
    pub fn title(self) -> &'static str {
        match self {
            ReportKind::Payroll => "Payroll",
            ReportKind::AttendanceSummary => "Attendance Summary",
        }
    }
}

/// The payload of a persisted report, tagged by kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum ReportPayload {
    /// A payroll report.
    Payroll(PayrollReportPayload),
    /// An attendance summary.
    AttendanceSummary(Vec<AttendanceRow>),
}

impl ReportPayload {
    /// The kind of report this payload belongs to.
    pub fn kind(&self) -> ReportKind {
        match self {
            ReportPayload::Payroll(_) => ReportKind::Payroll,
            ReportPayload::AttendanceSummary(_) => ReportKind::AttendanceSummary,
        }
    }
}

/// A generated report as persisted by a report store.
///
/// Snapshots are immutable once created; the only further transition is
/// deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSnapshot {
    /// Identifier assigned by the store.
    pub id: Uuid,
    /// The month the report covers.
    pub period: ReferencePeriod,
    /// The stored reference date (15th of the month).
    pub reference_date: NaiveDate,
    /// The computed content.
    pub payload: ReportPayload,
    /// When the store persisted the report.
    pub generated_at: DateTime<Utc>,
}

impl ReportSnapshot {
    /// The kind of report.
    pub fn kind(&self) -> ReportKind {
        self.payload.kind()
    }
}
