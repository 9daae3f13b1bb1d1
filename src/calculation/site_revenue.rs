//! Monthly revenue across client sites.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::money::overflow;
use crate::error::EngineResult;
use crate::models::Site;

/// Revenue totals over the active sites that have a service fee.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SiteRevenueSummary {
    /// Number of active sites with a service fee.
    pub active_sites: u32,
    /// Sum of service fees.
    pub gross_monthly_total: Decimal,
    /// Sum of service fees after withholding.
    pub net_monthly_total: Decimal,
}

/// Sums the monthly fees of active sites.
///
/// Inactive sites and sites without a service fee are left out. The
/// withholding is subtracted only for sites that issue tax invoices. Fails
/// with `CalculationOverflow` when a sum is too large for a decimal.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::summarize_site_revenue;
/// use payroll_engine::models::{Site, SiteStatus, Transport};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let sites = vec![Site {
///     id: "site_001".to_string(),
///     name: "Residencial Aurora".to_string(),
///     service_fee: Some(Decimal::from_str("4500.00").unwrap()),
///     issues_tax_invoice: true,
///     withholding: Some(Decimal::from_str("495.00").unwrap()),
///     status: SiteStatus::Active,
///     transport: Transport::None,
/// }];
///
/// let summary = summarize_site_revenue(&sites).unwrap();
/// assert_eq!(summary.active_sites, 1);
/// assert_eq!(summary.net_monthly_total, Decimal::from_str("4005.00").unwrap());
/// ```
pub fn summarize_site_revenue(sites: &[Site]) -> EngineResult<SiteRevenueSummary> {
    sites
        .iter()
        .filter(|site| site.is_active() && site.service_fee.is_some())
        .try_fold(
            SiteRevenueSummary::default(),
            |summary, site| -> EngineResult<SiteRevenueSummary> {
                Ok(SiteRevenueSummary {
                    active_sites: summary.active_sites + 1,
                    gross_monthly_total: summary
                        .gross_monthly_total
                        .checked_add(site.gross_monthly_fee())
                        .ok_or_else(|| overflow("site_revenue", "gross monthly total"))?,
                    net_monthly_total: summary
                        .net_monthly_total
                        .checked_add(site.net_monthly_fee())
                        .ok_or_else(|| overflow("site_revenue", "net monthly total"))?,
                })
            },
        )
}
