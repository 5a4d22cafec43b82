pub mod table_reader;
pub mod track_ext;

use serde::{Deserialize, Serialize};

use crate::constants::{Degree, SpotId, MJD};
use crate::time::{parse_date, Dated};

/// One raw tabular row as edited in a data grid or read from a CSV file.
///
/// Everything is optional or textual at this stage: a trailing row whose longitude has
/// not been filled in yet, or a blank separator row, is ordinary input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRow {
    pub id: String,
    pub date: String,
    pub lat: Option<f64>,
    pub long: Option<f64>,
}

impl RawRow {
    pub fn new(id: &str, date: &str, lat: Option<f64>, long: Option<f64>) -> Self {
        RawRow {
            id: id.to_string(),
            date: date.to_string(),
            lat,
            long,
        }
    }
}

/// A dated measurement of one tracked sunspot's position.
///
/// # Fields
///
/// * `id` - Identifier of the tracked spot
/// * `time` - Observation date as MJD (UTC days)
/// * `lat` - Heliographic latitude in degrees, `None` while unmeasured
/// * `long` - Heliographic longitude in degrees, `None` while unmeasured
///
/// The coordinates stay optional on purpose: an observation without a position still
/// anchors the dataset's date range. Observations are immutable values, replaced
/// wholesale when the source table changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub id: SpotId,
    pub time: MJD,
    pub lat: Option<Degree>,
    pub long: Option<Degree>,
}

impl Observation {
    /// Create a new observation
    ///
    /// Arguments
    /// ---------
    /// * `id`: identifier of the tracked spot
    /// * `time`: the observation date as MJD
    /// * `lat`: heliographic latitude in degrees, if measured
    /// * `long`: heliographic longitude in degrees, if measured
    ///
    /// Return
    /// ------
    /// * a new Observation struct
    pub fn new(id: &str, time: MJD, lat: Option<Degree>, long: Option<Degree>) -> Self {
        Observation {
            id: id.to_string(),
            time,
            lat,
            long,
        }
    }
}

impl Dated for Observation {
    fn timestamp(&self) -> MJD {
        self.time
    }
}

/// Treat a NaN coordinate the same as a missing one.
fn normalize_coordinate(value: Option<f64>) -> Option<Degree> {
    value.filter(|coordinate| !coordinate.is_nan())
}

/// Build observations from raw tabular rows.
///
/// Rows with an empty id or an unparseable date are dropped; rows with missing or NaN
/// coordinates are kept with the coordinate normalized to `None`, so they still count
/// toward the dataset's date range.
///
/// Arguments
/// ---------
/// * `rows`: the raw rows, in table order
///
/// Return
/// ------
/// * the observations, preserving the input order
pub fn observations_from_rows(rows: &[RawRow]) -> Vec<Observation> {
    rows.iter()
        .filter_map(|row| {
            let id = row.id.trim();
            if id.is_empty() {
                return None;
            }
            let time = parse_date(&row.date).ok()?;
            Some(Observation::new(
                id,
                time,
                normalize_coordinate(row.lat),
                normalize_coordinate(row.long),
            ))
        })
        .collect()
}
