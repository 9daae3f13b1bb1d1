//! Core data models for the payroll engine.
//!
//! This module contains the domain records (employees, absences, sites,
//! shifts), the reference period, and the computed report types.

mod absence;
mod employee;
mod period;
mod report;
mod shift;
mod site;

pub use absence::Absence;
pub use employee::{Employee, EmploymentStatus};
pub use period::{REFERENCE_DAY, ReferencePeriod};
pub use report::{
    AttendanceRow, AuditStep, PayrollLineItem, PayrollReportPayload, PayrollTotals, ReportKind,
    ReportPayload, ReportSnapshot,
};
pub use shift::{Shift, parse_weekday, shifts_on};
pub use site::{BusLine, BusLineKind, Site, SiteStatus, Transport};
