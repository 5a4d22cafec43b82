//! Rotation of projected disk positions, and the measured-rotation calculator built
//! on it: project a dated spot, spin it by an applied angle about the disk center,
//! then read the new heliographic coordinates back off the disk.

use nalgebra::{Rotation2, Vector2};

use crate::constants::{Degree, MJD};
use crate::conversion::{degrees_to_percent, percent_to_degrees};
use crate::heliograph_errors::HeliographError;
use crate::projection::{position_to_spherical, spherical_to_position, DiskPosition};
use crate::time::{date_range, Dated};

/// Rotate a disk position by an angle about the disk center (0.5, 0.5).
///
/// Arguments
/// ---------
/// * `position`: the projected position to rotate
/// * `degrees`: rotation angle in degrees, counterclockwise; any magnitude is
///   accepted, the trigonometry is periodic
///
/// Return
/// ------
/// * the rotated [`DiskPosition`]. No clamping is applied: a point near the limb can
///   land a hair outside [0, 1] through floating-point error, and callers must
///   tolerate that.
pub fn rotate_point(position: DiskPosition, degrees: Degree) -> DiskPosition {
    let rotation = Rotation2::new(degrees.to_radians());
    let offset = Vector2::new(position.px - 0.5, position.py - 0.5);
    let rotated = rotation * offset;
    DiskPosition {
        px: rotated.x + 0.5,
        py: rotated.y + 0.5,
    }
}

/// One dated sunspot measurement together with the rotation measured for that day.
///
/// Cleaned form: the date parsed, every field numeric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationRecord {
    pub time: MJD,
    pub lat: Degree,
    pub long: Degree,
    pub rotation: Degree,
}

impl Dated for RotationRecord {
    fn timestamp(&self) -> MJD {
        self.time
    }
}

/// A rotation record carried through the calculator: the coordinates after applying
/// the scaled rotation. A point spun off the visible disk has no recoverable
/// coordinates and yields `None` fields, mirroring the empty output cell.
#[derive(Debug, Clone, PartialEq)]
pub struct RotatedRecord {
    pub time: MJD,
    pub lat: Option<Degree>,
    pub long: Option<Degree>,
    pub applied: Degree,
}

/// A projected, rotated disk marker with its date-ramp color fraction.
#[derive(Debug, Clone, PartialEq)]
pub struct RotationPoint {
    pub position: DiskPosition,
    pub hue_fraction: f64,
    pub time: MJD,
}

/// Build cleaned rotation records from raw string rows (`date, lat, long, rotation`).
///
/// A row is kept only when the date parses and all three numbers are finite; blank
/// separator rows fall out naturally.
pub fn rotation_records_from_rows(rows: &[[&str; 4]]) -> Vec<RotationRecord> {
    rows.iter()
        .filter_map(|[date, lat, long, rotation]| {
            let time = crate::time::parse_date(date).ok()?;
            let lat: f64 = lat.trim().parse().ok()?;
            let long: f64 = long.trim().parse().ok()?;
            let rotation: f64 = rotation.trim().parse().ok()?;
            if lat.is_nan() || long.is_nan() || rotation.is_nan() {
                return None;
            }
            Some(RotationRecord {
                time,
                lat,
                long,
                rotation,
            })
        })
        .collect()
}

/// Apply a record's measured rotation, scaled by `rotation_amount`, and recover the
/// resulting heliographic coordinates.
///
/// Arguments
/// ---------
/// * `record`: the cleaned rotation record
/// * `rotation_amount`: scale applied to the measured rotation, usually in [0, 1]
///
/// Return
/// ------
/// * the [`RotatedRecord`], or a range error when the record's coordinates fall
///   outside the projectable ±90° window
pub fn rotate_record(
    record: &RotationRecord,
    rotation_amount: f64,
) -> Result<RotatedRecord, HeliographError> {
    let sx = degrees_to_percent(Some(record.long)).unwrap_or(0.0);
    let sy = degrees_to_percent(Some(record.lat)).unwrap_or(0.0);
    let position = spherical_to_position(sx, sy)?;

    let applied = record.rotation * rotation_amount;
    let rotated = rotate_point(position, applied);

    // the rotation can push a limb point off the disk; the output then has no
    // coordinates rather than an error
    let spherical = position_to_spherical(rotated.px, rotated.py).ok();

    Ok(RotatedRecord {
        time: record.time,
        lat: percent_to_degrees(spherical.map(|s| s.sy)),
        long: percent_to_degrees(spherical.map(|s| s.sx)),
        applied,
    })
}

/// Project and rotate every record, attaching the per-date color fraction.
///
/// The fraction runs the dataset's date range linearly from 0 (earliest date) to 1
/// (latest); a single-date dataset pins it to 0.
pub fn rotation_points(
    records: &[RotationRecord],
    rotation_amount: f64,
) -> Result<Vec<RotationPoint>, HeliographError> {
    let (min_time, max_time) = date_range(records);

    records
        .iter()
        .map(|record| {
            let sx = degrees_to_percent(Some(record.long)).unwrap_or(0.0);
            let sy = degrees_to_percent(Some(record.lat)).unwrap_or(0.0);
            let position = spherical_to_position(sx, sy)?;
            let rotated = rotate_point(position, record.rotation * rotation_amount);

            let hue_fraction = if max_time > min_time {
                (record.time - min_time) / (max_time - min_time)
            } else {
                0.0
            };

            Ok(RotationPoint {
                position: rotated,
                hue_fraction,
                time: record.time,
            })
        })
        .collect()
}

/// Map a [0, 1] fraction onto the 0–300 hue ramp used for date coloring.
///
/// Out-of-range fractions are a caller bug and raise an error; a NaN fraction (an
/// empty date range) falls back to hue 0.
pub fn to_hue(value: f64) -> Result<f64, HeliographError> {
    if value < 0.0 || value > 1.0 {
        return Err(HeliographError::HueOutOfRange(value));
    }
    if value.is_nan() {
        return Ok(0.0);
    }
    Ok(300.0 * value)
}
