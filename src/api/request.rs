//! Request types for the payroll engine API.
//!
//! JSON bodies carry the reference period as `{"year": .., "month": ..}`;
//! query strings use the `YYYY-MM` form.

use serde::{Deserialize, Serialize};

use crate::models::{Absence, Employee, ReferencePeriod, ReportKind};

/// Request body for `POST /payroll`.
///
/// The payroll is computed from the records in the body only; the store is
/// not consulted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollRequest {
    /// The month to compute.
    pub period: ReferencePeriod,
    /// Employees to include. Inactive ones are skipped.
    #[serde(default)]
    pub employees: Vec<Employee>,
    /// Absences of any period; only those in `period` count.
    #[serde(default)]
    pub absences: Vec<Absence>,
}

/// Request body for `POST /attendance`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceRequest {
    /// The month to list.
    pub period: ReferencePeriod,
    /// Absences of any period.
    #[serde(default)]
    pub absences: Vec<Absence>,
    /// Employees used to resolve names.
    #[serde(default)]
    pub employees: Vec<Employee>,
}

/// Request body for `POST /reports`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateReportRequest {
    /// Which report to generate.
    pub kind: ReportKind,
    /// The month the report covers.
    pub period: ReferencePeriod,
}

/// Query string for `GET /dashboard`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DashboardQuery {
    /// Month in `YYYY-MM` form; the current month when absent.
    #[serde(default)]
    pub period: Option<String>,
    /// Optional weekday name whose schedule should be listed.
    #[serde(default)]
    pub weekday: Option<String>,
}

/// Query string for `GET /absences`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AbsenceQuery {
    /// Restricts the listing to a month in `YYYY-MM` form.
    #[serde(default)]
    pub period: Option<String>,
}
