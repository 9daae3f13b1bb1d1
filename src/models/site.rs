//! Site (condominium) model.
//!
//! Sites are the client buildings the company cleans. Besides identification,
//! a site carries its monthly service fee and, when it issues tax invoices,
//! the amount withheld from that fee.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::employee::non_negative;

/// Whether a site currently has an active contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SiteStatus {
    /// Contract in force.
    Active,
    /// Contract ended or suspended.
    Inactive,
}

/// Category of a city bus line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BusLineKind {
    /// Neighbourhood line.
    Neighborhood,
    /// Rapid transit line.
    Rapid,
}

/// One bus line that reaches a site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusLine {
    /// The line number or name as printed on the bus.
    pub line: String,
    /// The line category.
    pub kind: BusLineKind,
}

/// How staff get to a site.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Transport {
    /// No transport information recorded.
    #[default]
    None,
    /// Staff travel in a company vehicle.
    CompanyVehicle,
    /// Staff take public buses.
    Bus {
        /// The lines that serve the site.
        #[serde(default)]
        lines: Vec<BusLine>,
    },
}

/// A client site (condominium).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Site {
    /// Unique identifier for the site.
    pub id: String,
    /// The site's name.
    pub name: String,
    /// Monthly service fee charged to the site.
    #[serde(default)]
    pub service_fee: Option<Decimal>,
    /// Whether the site receives a tax invoice.
    #[serde(default)]
    pub issues_tax_invoice: bool,
    /// Amount withheld from the fee when a tax invoice is issued.
    #[serde(default)]
    pub withholding: Option<Decimal>,
    /// Contract status.
    pub status: SiteStatus,
    /// Transport details for staff commuting to the site.
    #[serde(default)]
    pub transport: Transport,
}

impl Site {
    /// Returns true if the site has an active contract.
    pub fn is_active(&self) -> bool {
        self.status == SiteStatus::Active
    }

    /// Service fee with a blank or negative value read as zero.
    pub fn gross_monthly_fee(&self) -> Decimal {
        non_negative(self.service_fee)
    }

    /// The withholding that applies to this site.
    ///
    /// Zero unless the site issues tax invoices.
    pub fn effective_withholding(&self) -> Decimal {
        if self.issues_tax_invoice {
            non_negative(self.withholding)
        } else {
            Decimal::ZERO
        }
    }

    /// Monthly fee after withholding.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::models::{Site, SiteStatus, Transport};
    /// use rust_decimal::Decimal;
    /// use std::str::FromStr;
    ///
    /// let site = Site {
    ///     id: "site_001".to_string(),
    ///     name: "Residencial Aurora".to_string(),
    ///     service_fee: Some(Decimal::from_str("4500.00").unwrap()),
    ///     issues_tax_invoice: true,
    ///     withholding: Some(Decimal::from_str("495.00").unwrap()),
    ///     status: SiteStatus::Active,
    ///     transport: Transport::None,
    /// };
    /// assert_eq!(site.net_monthly_fee(), Decimal::from_str("4005.00").unwrap());
    /// ```
    pub fn net_monthly_fee(&self) -> Decimal {
        self.gross_monthly_fee() - self.effective_withholding()
    }
}
