//! HTTP API module for the payroll engine.
//!
//! This module exposes the pure payroll and attendance calculations, the
//! record store and report snapshots as REST endpoints.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    AbsenceQuery, AttendanceRequest, DashboardQuery, GenerateReportRequest, PayrollRequest,
};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
