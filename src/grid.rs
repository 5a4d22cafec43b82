//! Sphere-surface grid sampling.
//!
//! Two point clouds feed the disk visuals: a static reference graticule (meridians
//! and parallels at 15° spacing) and a rotating grid whose columns drift with the
//! Sun's differential rotation. Rotation rate varies by latitude: the equator turns
//! in about 24.5 days, the poles in about 34 days, and the rate between them blends
//! smoothly rather than stepping per band.

use std::f64::consts::PI;

use crate::constants::{
    AVG_DAYS_EQUATOR_ROTATION, AVG_DAYS_POLE_ROTATION, GRID_COLS, GRID_COL_WIDTH_DEG, GRID_ROWS,
};
use crate::conversion::{degrees_to_percent, interpolate};
use crate::heliograph_errors::HeliographError;
use crate::projection::{spherical_to_position, DiskPosition};

/// Latitudes and longitudes traced by the static reference graticule, in degrees.
const REFERENCE_LINES_DEG: [f64; 13] = [
    -90.0, -75.0, -60.0, -45.0, -30.0, -15.0, 0.0, 15.0, 30.0, 45.0, 60.0, 75.0, 90.0,
];

/// Points sampled along each reference line.
const REFERENCE_LINE_RES: usize = 128;

/// Cosine ease from 0 to 1 with zero slope at both ends.
///
/// Weights the pole-to-equator rotation blend so the rate transition across
/// latitudes is continuous.
pub fn smooth(x: f64) -> f64 {
    0.5 - (x * PI).cos() / 2.0
}

/// Sample the rotating surface grid for one animation instant.
///
/// Arguments
/// ---------
/// * `animation_progress`: normalized progress through the animation cycle, in [0, 1]
/// * `range_days`: calendar span of the dataset in days, which sets how many solar
///   rotations the cycle covers
///
/// Return
/// ------
/// * the visible grid points, projected onto the disk
///
/// Each column starts at a fixed longitude offset and drifts by the latitude-blended
/// rotation progress, doubled so one unit spans the full sphere. A point whose
/// drifted coordinate falls on the back half of the sphere (`mod 2 > 1`) is not
/// visible in the orthographic view and is discarded before projection.
pub fn sample_rotating_grid(
    animation_progress: f64,
    range_days: f64,
) -> Result<Vec<DiskPosition>, HeliographError> {
    let pole_rotation_progress = animation_progress * (range_days / AVG_DAYS_POLE_ROTATION);
    let equator_rotation_progress = animation_progress * (range_days / AVG_DAYS_EQUATOR_ROTATION);

    let mut points = Vec::with_capacity(GRID_COLS * GRID_ROWS / 2);
    for col in 0..GRID_COLS {
        let x_offset = (GRID_COL_WIDTH_DEG / 180.0) * col as f64;

        for row in 0..GRID_ROWS {
            let row_y = row as f64 / GRID_ROWS as f64;
            let dist_from_equator = 1.0 - (row_y - 0.5).abs() * 2.0;

            let col_x = interpolate(
                pole_rotation_progress,
                equator_rotation_progress,
                smooth(dist_from_equator),
            )? * 2.0
                + x_offset;

            let wrapped = col_x.rem_euclid(2.0);
            if wrapped > 1.0 {
                // back side of the sphere
                continue;
            }

            points.push(spherical_to_position(wrapped, row_y)?);
        }
    }
    Ok(points)
}

/// Sample the static reference graticule: meridians then parallels, at 15° spacing.
pub fn reference_grid() -> Result<Vec<DiskPosition>, HeliographError> {
    let mut points = Vec::with_capacity(2 * REFERENCE_LINES_DEG.len() * REFERENCE_LINE_RES);

    for long in REFERENCE_LINES_DEG {
        let sx = degrees_to_percent(Some(long)).unwrap_or(0.0);
        for step in 0..REFERENCE_LINE_RES {
            let sy = step as f64 / REFERENCE_LINE_RES as f64;
            points.push(spherical_to_position(sx, sy)?);
        }
    }

    for lat in REFERENCE_LINES_DEG {
        let sy = degrees_to_percent(Some(lat)).unwrap_or(0.0);
        for step in 0..REFERENCE_LINE_RES {
            let sx = step as f64 / REFERENCE_LINE_RES as f64;
            points.push(spherical_to_position(sx, sy)?);
        }
    }

    Ok(points)
}
