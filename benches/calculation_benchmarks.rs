//! Performance benchmarks for the payroll engine.
//!
//! Payroll for a few thousand records should finish well under a second:
//! - Pure payroll over 100 / 1000 / 5000 employees
//! - Attendance summary over 5000 absences
//! - `POST /payroll` through the router for 1000 employees
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use std::str::FromStr;

use chrono::NaiveDate;
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use payroll_engine::api::{AppState, PayrollRequest, create_router};
use payroll_engine::calculation::{compute_attendance_summary, compute_payroll};
use payroll_engine::config::ConfigLoader;
use payroll_engine::models::{Absence, Employee, EmploymentStatus, ReferencePeriod};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

fn period() -> ReferencePeriod {
    ReferencePeriod::new(2025, 3).unwrap()
}

/// Creates `count` employees, every tenth one inactive.
fn create_employees(count: usize) -> Vec<Employee> {
    (0..count)
        .map(|i| Employee {
            id: format!("emp_{:05}", i),
            name: format!("Employee {}", i),
            base_salary: Some(Decimal::from_str("1518.00").unwrap() + Decimal::from(i as u32 % 500)),
            transit_fare: Some(Decimal::from_str("5.75").unwrap()),
            monthly_trips: Some(44),
            status: if i % 10 == 9 {
                EmploymentStatus::Inactive
            } else {
                EmploymentStatus::Active
            },
            admission_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            termination_date: None,
        })
        .collect()
}

/// Creates `count` absences spread over February to April.
fn create_absences(count: usize, employees: usize) -> Vec<Absence> {
    (0..count)
        .map(|i| Absence {
            id: format!("abs_{:05}", i),
            date: NaiveDate::from_ymd_opt(2025, 2 + (i % 3) as u32, 1 + (i % 28) as u32).unwrap(),
            employee_id: Some(format!("emp_{:05}", i % employees.max(1))),
            justified: i % 2 == 0,
            deduction_applied: i % 2 == 1,
            reason: None,
        })
        .collect()
}

/// Benchmark: pure payroll at increasing sizes.
///
/// Target: < 100ms mean for 5000 employees
fn bench_payroll_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("payroll");

    for employee_count in [100usize, 1000, 5000].iter() {
        let employees = create_employees(*employee_count);
        let absences = create_absences(employee_count * 2, *employee_count);

        group.throughput(Throughput::Elements(*employee_count as u64));
        group.bench_with_input(
            BenchmarkId::new("employees", employee_count),
            employee_count,
            |b, _| b.iter(|| black_box(compute_payroll(&employees, &absences, period()).unwrap())),
        );
    }

    group.finish();
}

/// Benchmark: attendance summary over 5000 absences.
fn bench_attendance_summary(c: &mut Criterion) {
    let employees = create_employees(1000);
    let absences = create_absences(5000, 1000);

    c.bench_function("attendance_5000_absences", |b| {
        b.iter(|| black_box(compute_attendance_summary(&absences, &employees, period()).unwrap()))
    });
}

/// Benchmark: `POST /payroll` through the router.
///
/// Target: < 50ms mean for 1000 employees
fn bench_payroll_endpoint(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let config = ConfigLoader::load("./config/conservadora").expect("Failed to load config");
    let router = create_router(AppState::new(config));

    let request = PayrollRequest {
        period: period(),
        employees: create_employees(1000),
        absences: create_absences(2000, 1000),
    };
    let body = serde_json::to_string(&request).unwrap();

    let mut group = c.benchmark_group("endpoint");
    group.throughput(Throughput::Elements(1000));

    group.bench_function("payroll_1000_employees", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/payroll")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_payroll_scaling,
    bench_attendance_summary,
    bench_payroll_endpoint,
);
criterion_main!(benches);
