//! Shift (schedule entry) model.
//!
//! A shift assigns an employee to a site on a recurring weekday for a fixed
//! number of hours.

use chrono::Weekday;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

/// A recurring weekly schedule entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    /// Unique identifier for the shift.
    pub id: String,
    /// The weekday the shift repeats on.
    #[serde(deserialize_with = "deserialize_weekday")]
    pub weekday: Weekday,
    /// Hours worked on the shift.
    pub hours: Decimal,
    /// The employee assigned to the shift.
    pub employee_id: String,
    /// The site where the shift is worked.
    pub site_id: String,
}

impl Shift {
    /// Returns true if the shift is worked on `weekday`.
    pub fn is_on(&self, weekday: Weekday) -> bool {
        self.weekday == weekday
    }
}

/// Returns the shifts scheduled on `weekday`, in source order.
pub fn shifts_on(shifts: &[Shift], weekday: Weekday) -> Vec<&Shift> {
    shifts.iter().filter(|shift| shift.is_on(weekday)).collect()
}

/// Parses a weekday name.
///
/// Accepts English names and abbreviations as well as Portuguese names, with
/// or without accents and the `-feira` suffix. Matching is case-insensitive.
///
/// # Example
///
/// ```
/// use payroll_engine::models::parse_weekday;
/// use chrono::Weekday;
///
/// assert_eq!(parse_weekday("Segunda-feira"), Some(Weekday::Mon));
/// assert_eq!(parse_weekday("sábado"), Some(Weekday::Sat));
/// assert_eq!(parse_weekday("sunday"), Some(Weekday::Sun));
/// assert_eq!(parse_weekday("someday"), None);
/// ```
pub fn parse_weekday(value: &str) -> Option<Weekday> {
    let normalized = value.trim().to_lowercase();
    let normalized = normalized.strip_suffix("-feira").unwrap_or(&normalized);

    match normalized {
        "mon" | "monday" | "segunda" => Some(Weekday::Mon),
        "tue" | "tuesday" | "terça" | "terca" => Some(Weekday::Tue),
        "wed" | "wednesday" | "quarta" => Some(Weekday::Wed),
        "thu" | "thursday" | "quinta" => Some(Weekday::Thu),
        "fri" | "friday" | "sexta" => Some(Weekday::Fri),
        "sat" | "saturday" | "sábado" | "sabado" => Some(Weekday::Sat),
        "sun" | "sunday" | "domingo" => Some(Weekday::Sun),
        _ => None,
    }
}

fn deserialize_weekday<'de, D>(deserializer: D) -> Result<Weekday, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_weekday(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("unknown weekday '{}'", raw)))
}
