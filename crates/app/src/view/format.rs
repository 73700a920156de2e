//! Display formatting for dates and Chilean peso amounts.

use chrono::{DateTime, Datelike, NaiveDateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};

/// Placeholder for missing or unreadable values.
pub const NOT_AVAILABLE: &str = "N/A";

/// Spanish short month names (`es-ES`).
const MONTHS: [&str; 12] = [
    "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sept", "oct", "nov", "dic",
];

/// Format a VTEX timestamp as `10 may 2024`.
///
/// Accepts RFC 3339 (`2024-05-10T10:30:00.0000000+00:00`) and offset-less
/// timestamps, which are read as UTC. Missing or unparsable input yields
/// [`NOT_AVAILABLE`].
#[must_use]
pub fn format_date_for_display(value: Option<&str>) -> String {
    let Some(date) = value.and_then(parse_timestamp) else {
        return NOT_AVAILABLE.to_owned();
    };

    let month = usize::try_from(date.month0())
        .ok()
        .and_then(|m| MONTHS.get(m))
        .copied()
        .unwrap_or_default();
    format!("{} {month} {}", date.day(), date.year())
}

fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(date) = DateTime::parse_from_rfc3339(value) {
        return Some(date.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

/// Format an amount in major units as CLP: `$45.500`.
///
/// Pesos have no decimals; amounts are rounded half away from zero.
#[must_use]
pub fn format_clp(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let digits = rounded.abs().trunc().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}
