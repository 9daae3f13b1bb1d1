//! Calculation logic for the payroll engine.
//!
//! This module contains the pure calculation functions: absence deductions,
//! transit allowance, the payroll aggregator that combines them per employee,
//! the attendance summary, site revenue and the monthly dashboard overview.
//! None of them perform I/O; every input is passed in as a snapshot.

mod attendance;
mod dashboard;
mod deduction;
mod money;
mod payroll;
mod site_revenue;
mod transit;

pub use attendance::{compute_attendance_summary, compute_attendance_summary_with_labels};
pub use dashboard::{DashboardOverview, build_dashboard};
pub use deduction::{DeductionResult, calculate_deduction};
pub use payroll::{compute_payroll, compute_payroll_with_rules};
pub use site_revenue::{SiteRevenueSummary, summarize_site_revenue};
pub use transit::{TransitAllowanceResult, calculate_transit_allowance};
