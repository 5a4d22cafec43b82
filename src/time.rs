use hifitime::Epoch;
use itertools::{Itertools, MinMaxResult};

use crate::constants::MJD;
use crate::heliograph_errors::HeliographError;

const MONTH_NAMES: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Parse a calendar date to a modified julian date (MJD, UTC days, midnight).
///
/// Accepted formats, matching what the observation tables contain:
/// * month-name dates: `"June 22, 2024"` or `"Jun 22, 2024"`
/// * slash dates: `"10/18/2024"` (month/day/year)
/// * ISO dates: `"2024-06-22"`
///
/// Arguments
/// ---------
/// * `date`: the date string
///
/// Return
/// ------
/// * the date as MJD, or [`HeliographError::InvalidDate`] when the string does not
///   parse or does not name a real calendar day
pub fn parse_date(date: &str) -> Result<MJD, HeliographError> {
    let invalid = || HeliographError::InvalidDate(date.to_string());
    let (year, month, day) = split_date(date).ok_or_else(invalid)?;

    let epoch =
        Epoch::maybe_from_gregorian_utc(year, month, day, 0, 0, 0, 0).map_err(|_| invalid())?;
    Ok(epoch.to_mjd_utc_days())
}

fn split_date(date: &str) -> Option<(i32, u8, u8)> {
    let trimmed = date.trim();
    if trimmed.is_empty() {
        return None;
    }

    // month/day/year
    if trimmed.contains('/') {
        let parts: Vec<&str> = trimmed.split('/').collect();
        if parts.len() != 3 {
            return None;
        }
        let month: u8 = parts[0].trim().parse().ok()?;
        let day: u8 = parts[1].trim().parse().ok()?;
        let year: i32 = parts[2].trim().parse().ok()?;
        return Some((year, month, day));
    }

    // year-month-day
    if trimmed.contains('-') {
        let parts: Vec<&str> = trimmed.split('-').collect();
        if parts.len() != 3 {
            return None;
        }
        let year: i32 = parts[0].trim().parse().ok()?;
        let month: u8 = parts[1].trim().parse().ok()?;
        let day: u8 = parts[2].trim().parse().ok()?;
        return Some((year, month, day));
    }

    // month-name day, year
    let parts: Vec<&str> = trimmed.split_whitespace().collect();
    if parts.len() != 3 {
        return None;
    }
    let month = month_number(parts[0])?;
    let day: u8 = parts[1].trim_end_matches(',').parse().ok()?;
    let year: i32 = parts[2].parse().ok()?;
    Some((year, month, day))
}

/// Month number for a full or three-letter English month name, case-insensitive.
fn month_number(name: &str) -> Option<u8> {
    let lower = name.to_ascii_lowercase();
    if lower.len() < 3 {
        return None;
    }
    MONTH_NAMES
        .iter()
        .position(|month| *month == lower || month.starts_with(&lower))
        .map(|index| index as u8 + 1)
}

/// Format an MJD as a short human date, e.g. `"Jun 26, 2024"`.
///
/// Used for the animation's interpolated-date readout.
pub fn format_mjd(mjd: MJD) -> String {
    let (year, month, day, _, _, _, _) = Epoch::from_mjd_utc(mjd).to_gregorian_utc();
    format!("{} {}, {}", MONTH_ABBREVIATIONS[(month - 1) as usize], day, year)
}

/// Anything carrying an observation timestamp.
pub trait Dated {
    fn timestamp(&self) -> MJD;
}

/// Minimum and maximum timestamp over a dataset.
///
/// Arguments
/// ---------
/// * `items`: the dated records
///
/// Return
/// ------
/// * `(min, max)` in MJD, or `(0.0, 0.0)` when no valid timestamp exists
///
/// The range maps a normalized animation progress in [0, 1] onto a real calendar
/// instant, and sets the day span driving the differential-rotation grid.
pub fn date_range<T: Dated>(items: &[T]) -> (MJD, MJD) {
    timestamp_range(items.iter().map(|item| item.timestamp()))
}

pub(crate) fn timestamp_range(timestamps: impl Iterator<Item = MJD>) -> (MJD, MJD) {
    match timestamps.filter(|timestamp| !timestamp.is_nan()).minmax() {
        MinMaxResult::NoElements => (0.0, 0.0),
        MinMaxResult::OneElement(only) => (only, only),
        MinMaxResult::MinMax(min, max) => (min, max),
    }
}
