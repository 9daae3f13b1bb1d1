//! Data-access layer.
//!
//! The calculators never read storage themselves. These traits describe what
//! the report generator needs from the outside world: a snapshot of the
//! current records and somewhere to persist generated reports.
//! [`InMemoryStore`] implements both for the HTTP service and for tests.

mod memory;

use uuid::Uuid;

use crate::error::EngineResult;
use crate::models::{Absence, Employee, ReferencePeriod, ReportPayload, ReportSnapshot};

pub use memory::InMemoryStore;

/// Read access to the records reports are computed from.
pub trait DataSource: Send + Sync {
    /// All employees, in registration order.
    fn employees(&self) -> EngineResult<Vec<Employee>>;

    /// Absences dated inside `period`, in registration order.
    fn absences_in(&self, period: ReferencePeriod) -> EngineResult<Vec<Absence>>;
}

/// Persistence for generated report snapshots.
pub trait ReportStore: Send + Sync {
    /// Persists a payload, assigning its id and generation timestamp.
    fn insert_report(
        &self,
        period: ReferencePeriod,
        payload: ReportPayload,
    ) -> EngineResult<ReportSnapshot>;

    /// Looks up a report by id.
    ///
    /// # Errors
    ///
    /// Returns `ReportNotFound` if no report has this id.
    fn get_report(&self, id: Uuid) -> EngineResult<ReportSnapshot>;

    /// All stored reports, newest first.
    fn list_reports(&self) -> EngineResult<Vec<ReportSnapshot>>;

    /// Deletes a report by id.
    ///
    /// # Errors
    ///
    /// Returns `ReportNotFound` if no report has this id.
    fn delete_report(&self, id: Uuid) -> EngineResult<()>;
}
