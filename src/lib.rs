//! Payroll and attendance engine for a commercial cleaning company.
//!
//! This crate computes monthly payroll (salary minus absence deductions, with
//! the transit allowance reported alongside) and attendance summaries from
//! snapshots of employee and absence records, persists generated reports,
//! and serves everything over a small HTTP API.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod reporting;
pub mod store;
pub mod telemetry;
