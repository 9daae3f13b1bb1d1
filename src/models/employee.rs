//! Employee model and related types.
//!
//! This module defines the [`Employee`] struct and [`EmploymentStatus`] enum
//! for representing the cleaning staff that payroll is computed for.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Whether an employee is currently on the payroll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentStatus {
    /// Currently employed; included in payroll.
    Active,
    /// Terminated or on leave; excluded from payroll.
    Inactive,
}

/// Represents an employee of the company.
///
/// Monetary fields are nullable because the data-entry forms allow leaving
/// them blank. The calculators read blanks and negative values as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's full name.
    pub name: String,
    /// Base monthly salary.
    #[serde(default)]
    pub base_salary: Option<Decimal>,
    /// Fare for a single transit trip.
    #[serde(default)]
    pub transit_fare: Option<Decimal>,
    /// Number of paid transit trips per month.
    #[serde(default)]
    pub monthly_trips: Option<i32>,
    /// Current employment status.
    pub status: EmploymentStatus,
    /// The date the employee was hired.
    pub admission_date: NaiveDate,
    /// The date the employee left, if any.
    #[serde(default)]
    pub termination_date: Option<NaiveDate>,
}

impl Employee {
    /// Returns true if the employee is on the active payroll.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::{Employee, EmploymentStatus};
    /// use chrono::NaiveDate;
    ///
    /// let employee = Employee {
    ///     id: "emp_001".to_string(),
    ///     name: "Maria Silva".to_string(),
    ///     base_salary: None,
    ///     transit_fare: None,
    ///     monthly_trips: None,
    ///     status: EmploymentStatus::Active,
    ///     admission_date: NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(),
    ///     termination_date: None,
    /// };
    /// assert!(employee.is_active());
    /// ```
    pub fn is_active(&self) -> bool {
        self.status == EmploymentStatus::Active
    }

    /// Base salary with a blank or negative value read as zero.
    pub fn effective_salary(&self) -> Decimal {
        non_negative(self.base_salary)
    }

    /// Validates the record before it is stored.
    ///
    /// A termination date is only allowed on inactive employees and cannot
    /// precede the admission date.
    pub fn validate(&self) -> EngineResult<()> {
        if self.name.trim().is_empty() {
            return Err(EngineError::InvalidEmployee {
                field: "name".to_string(),
                message: "cannot be empty".to_string(),
            });
        }

        if let Some(termination) = self.termination_date {
            if self.is_active() {
                return Err(EngineError::InvalidEmployee {
                    field: "termination_date".to_string(),
                    message: "only inactive employees can have a termination date".to_string(),
                });
            }
            if termination < self.admission_date {
                return Err(EngineError::InvalidEmployee {
                    field: "termination_date".to_string(),
                    message: "cannot be before the admission date".to_string(),
                });
            }
        }

        Ok(())
    }
}

pub(crate) fn non_negative(value: Option<Decimal>) -> Decimal {
    value.unwrap_or(Decimal::ZERO).max(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_employee(status: EmploymentStatus) -> Employee {
        Employee {
            id: "emp_001".to_string(),
            name: "Maria Silva".to_string(),
            base_salary: Some(dec("1500.00")),
            transit_fare: Some(dec("5.75")),
            monthly_trips: Some(44),
            status,
            admission_date: NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(),
            termination_date: None,
        }
    }

    #[test]
    fn test_deserialize_active_employee() {
        let json = r#"{
            "id": "emp_001",
            "name": "Maria Silva",
            "base_salary": "1500.00",
            "transit_fare": "5.75",
            "monthly_trips": 44,
            "status": "active",
            "admission_date": "2023-06-01"
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.id, "emp_001");
        assert_eq!(employee.status, EmploymentStatus::Active);
        assert_eq!(employee.base_salary, Some(dec("1500.00")));
        assert_eq!(employee.monthly_trips, Some(44));
        assert!(employee.termination_date.is_none());
    }

    #[test]
    fn test_deserialize_employee_with_blank_money_fields() {
        let json = r#"{
            "id": "emp_002",
            "name": "Ana Souza",
            "base_salary": null,
            "status": "inactive",
            "admission_date": "2020-01-15",
            "termination_date": "2024-02-29"
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.status, EmploymentStatus::Inactive);
        assert_eq!(employee.effective_salary(), Decimal::ZERO);
        assert!(employee.transit_fare.is_none());
        assert!(employee.monthly_trips.is_none());
    }

    #[test]
    fn test_negative_salary_reads_as_zero() {
        let mut employee = create_test_employee(EmploymentStatus::Active);
        employee.base_salary = Some(dec("-100"));

        assert_eq!(employee.effective_salary(), Decimal::ZERO);
    }

    #[test]
    fn test_is_active() {
        assert!(create_test_employee(EmploymentStatus::Active).is_active());
        assert!(!create_test_employee(EmploymentStatus::Inactive).is_active());
    }

    #[test]
    fn test_validate_rejects_termination_on_active_employee() {
        let mut employee = create_test_employee(EmploymentStatus::Active);
        employee.termination_date = NaiveDate::from_ymd_opt(2024, 1, 1);

        match employee.validate() {
            Err(EngineError::InvalidEmployee { field, .. }) => {
                assert_eq!(field, "termination_date")
            }
            other => panic!("Expected InvalidEmployee, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_termination_before_admission() {
        let mut employee = create_test_employee(EmploymentStatus::Inactive);
        employee.termination_date = NaiveDate::from_ymd_opt(2022, 1, 1);
        assert!(employee.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_terminated_inactive_employee() {
        let mut employee = create_test_employee(EmploymentStatus::Inactive);
        employee.termination_date = NaiveDate::from_ymd_opt(2024, 1, 1);
        assert!(employee.validate().is_ok());
    }

    #[test]
    fn test_employment_status_serialization() {
        assert_eq!(
            serde_json::to_string(&EmploymentStatus::Active).unwrap(),
            "\"active\""
        );
        assert_eq!(
            serde_json::to_string(&EmploymentStatus::Inactive).unwrap(),
            "\"inactive\""
        );
    }
}
