//! In-memory implementation of the data-access traits.

use std::sync::{Mutex, MutexGuard};

use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use super::{DataSource, ReportStore};
use crate::error::{EngineError, EngineResult};
use crate::models::{
    Absence, Employee, ReferencePeriod, ReportPayload, ReportSnapshot, Shift, Site,
};

#[derive(Debug, Default)]
struct Records {
    employees: Vec<Employee>,
    absences: Vec<Absence>,
    sites: Vec<Site>,
    shifts: Vec<Shift>,
    reports: Vec<ReportSnapshot>,
}

/// Keeps every record in memory behind a single mutex.
///
/// Records keep their registration order. Saving a record whose id already
/// exists replaces it in place.
///
/// # Example
///
/// ```
/// use payroll_engine::store::{DataSource, InMemoryStore};
/// use payroll_engine::models::{Employee, EmploymentStatus};
/// use chrono::NaiveDate;
///
/// let store = InMemoryStore::new();
/// store.save_employee(Employee {
///     id: "emp_001".to_string(),
///     name: "Maria Silva".to_string(),
///     base_salary: None,
///     transit_fare: None,
///     monthly_trips: None,
///     status: EmploymentStatus::Active,
///     admission_date: NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(),
///     termination_date: None,
/// }).unwrap();
///
/// assert_eq!(store.employees().unwrap().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct InMemoryStore {
    inner: Mutex<Records>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn records(&self) -> EngineResult<MutexGuard<'_, Records>> {
        self.inner.lock().map_err(|_| EngineError::StorageError {
            message: "record lock poisoned".to_string(),
        })
    }

    /// Validates and saves an employee.
    pub fn save_employee(&self, employee: Employee) -> EngineResult<Employee> {
        employee.validate()?;
        let mut records = self.records()?;
        upsert(&mut records.employees, employee.clone(), |e| &e.id);
        debug!(employee_id = %employee.id, "employee saved");
        Ok(employee)
    }

    /// Deletes an employee.
    ///
    /// # Errors
    ///
    /// Returns `EmployeeInUse` while any absence references the employee,
    /// and `EmployeeNotFound` if there is no such employee.
    pub fn delete_employee(&self, id: &str) -> EngineResult<()> {
        let mut records = self.records()?;

        let absences = records.absences.iter().filter(|a| a.belongs_to(id)).count();
        if absences > 0 {
            return Err(EngineError::EmployeeInUse {
                id: id.to_string(),
                absences,
            });
        }

        let before = records.employees.len();
        records.employees.retain(|e| e.id != id);
        if records.employees.len() == before {
            return Err(EngineError::EmployeeNotFound { id: id.to_string() });
        }

        debug!(employee_id = %id, "employee deleted");
        Ok(())
    }

    /// Validates and saves an absence.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAbsence` if the absence fails validation and
    /// `EmployeeNotFound` if it points at an unregistered employee.
    pub fn save_absence(&self, absence: Absence) -> EngineResult<Absence> {
        absence.validate()?;
        let mut records = self.records()?;

        if let Some(employee_id) = absence.employee_id.as_deref() {
            if !records.employees.iter().any(|e| e.id == employee_id) {
                return Err(EngineError::EmployeeNotFound {
                    id: employee_id.to_string(),
                });
            }
        }

        upsert(&mut records.absences, absence.clone(), |a| &a.id);
        Ok(absence)
    }

    /// All absences, in registration order.
    pub fn absences(&self) -> EngineResult<Vec<Absence>> {
        Ok(self.records()?.absences.clone())
    }

    /// Saves a site.
    pub fn save_site(&self, site: Site) -> EngineResult<Site> {
        let mut records = self.records()?;
        upsert(&mut records.sites, site.clone(), |s| &s.id);
        Ok(site)
    }

    /// All sites, in registration order.
    pub fn sites(&self) -> EngineResult<Vec<Site>> {
        Ok(self.records()?.sites.clone())
    }

    /// Saves a schedule entry.
    pub fn save_shift(&self, shift: Shift) -> EngineResult<Shift> {
        let mut records = self.records()?;
        upsert(&mut records.shifts, shift.clone(), |s| &s.id);
        Ok(shift)
    }

    /// All schedule entries, in registration order.
    pub fn shifts(&self) -> EngineResult<Vec<Shift>> {
        Ok(self.records()?.shifts.clone())
    }
}

fn upsert<T, F>(items: &mut Vec<T>, item: T, id: F)
where
    F: Fn(&T) -> &String,
{
    match items.iter().position(|existing| id(existing) == id(&item)) {
        Some(index) => items[index] = item,
        None => items.push(item),
    }
}

impl DataSource for InMemoryStore {
    fn employees(&self) -> EngineResult<Vec<Employee>> {
        Ok(self.records()?.employees.clone())
    }

    fn absences_in(&self, period: ReferencePeriod) -> EngineResult<Vec<Absence>> {
        Ok(self
            .records()?
            .absences
            .iter()
            .filter(|a| period.contains(a.date))
            .cloned()
            .collect())
    }
}

impl ReportStore for InMemoryStore {
    fn insert_report(
        &self,
        period: ReferencePeriod,
        payload: ReportPayload,
    ) -> EngineResult<ReportSnapshot> {
        let snapshot = ReportSnapshot {
            id: Uuid::new_v4(),
            period,
            reference_date: period.reference_date()?,
            payload,
            generated_at: Utc::now(),
        };

        self.records()?.reports.push(snapshot.clone());
        debug!(report_id = %snapshot.id, kind = ?snapshot.kind(), "report stored");
        Ok(snapshot)
    }

    fn get_report(&self, id: Uuid) -> EngineResult<ReportSnapshot> {
        self.records()?
            .reports
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or(EngineError::ReportNotFound { id })
    }

    fn list_reports(&self) -> EngineResult<Vec<ReportSnapshot>> {
        Ok(self.records()?.reports.iter().rev().cloned().collect())
    }

    fn delete_report(&self, id: Uuid) -> EngineResult<()> {
        let mut records = self.records()?;
        let before = records.reports.len();
        records.reports.retain(|r| r.id != id);
        if records.reports.len() == before {
            return Err(EngineError::ReportNotFound { id });
        }
        Ok(())
    }
}
