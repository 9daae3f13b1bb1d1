//! Absence model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A day an employee did not show up for work.
///
/// The employee reference is optional because records can outlive the
/// employee they pointed at. Calculators tolerate such orphans; only
/// [`Absence::validate`] rejects them, at input time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Absence {
    /// Unique identifier for the absence.
    pub id: String,
    /// The calendar day of the absence.
    pub date: NaiveDate,
    /// The employee this absence belongs to.
    #[serde(default)]
    pub employee_id: Option<String>,
    /// Whether the absence was justified (medical note, etc.).
    #[serde(default)]
    pub justified: bool,
    /// Whether the absence is deducted from salary.
    #[serde(default)]
    pub deduction_applied: bool,
    /// Free-text reason.
    #[serde(default)]
    pub reason: Option<String>,
}

impl Absence {
    /// Returns true if this absence is owned by `employee_id`.
    pub fn belongs_to(&self, employee_id: &str) -> bool {
        self.employee_id.as_deref() == Some(employee_id)
    }

    /// The reason, if one was given and it is not blank.
    pub fn reason_text(&self) -> Option<&str> {
        self.reason
            .as_deref()
            .map(str::trim)
            .filter(|reason| !reason.is_empty())
    }

    /// Validates a new or edited absence before it is stored.
    ///
    /// An absence must name its employee, and cannot be both unjustified
    /// and free of deduction.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::models::Absence;
    /// use chrono::NaiveDate;
    ///
    /// let absence = Absence {
    ///     id: "abs_001".to_string(),
    ///     date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
    ///     employee_id: Some("emp_001".to_string()),
    ///     justified: false,
    ///     deduction_applied: false,
    ///     reason: None,
    /// };
    /// assert!(absence.validate().is_err());
    /// ```
    pub fn validate(&self) -> EngineResult<()> {
        if self.employee_id.as_deref().is_none_or(|id| id.trim().is_empty()) {
            return Err(EngineError::InvalidAbsence {
                absence_id: self.id.clone(),
                message: "an employee must be selected".to_string(),
            });
        }

        if !self.justified && !self.deduction_applied {
            return Err(EngineError::InvalidAbsence {
                absence_id: self.id.clone(),
                message: "must be justified or have the deduction applied".to_string(),
            });
        }

        Ok(())
    }
}
