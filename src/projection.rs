//! Orthographic disk projection of a hemisphere.
//!
//! A point on the visible hemisphere is parameterized by two independent arc-length
//! fractions: `sx` runs along a parallel (longitude-like) and `sy` along a meridian
//! (latitude-like), both in [0, 1]. The projector maps that pair onto a normalized 2D
//! position inside the circular disk inscribed in the unit square, the way the sphere's
//! silhouette appears in an orthographic view. Sampling latitudes and longitudes
//! linearly would fill a square; the cosine remapping below bunches points up toward
//! the poles and limb so the outline comes out circular.
//!
//! Both directions of the mapping are exposed as explicitly paired inverse functions.
//! The round trip `position_to_spherical(spherical_to_position(sx, sy))` recovers
//! `(sx, sy)` up to floating-point tolerance for every valid input.

use std::f64::consts::PI;

use crate::constants::Percent;
use crate::heliograph_errors::HeliographError;

/// Tolerance used to shave floating-point noise off a chord ratio before inverting.
const RATIO_NOISE: f64 = 1e-9;

/// A pair of arc-length fractions locating a point on the visible hemisphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphericalPercent {
    pub sx: Percent,
    pub sy: Percent,
}

/// A normalized 2D position on the projected disk.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiskPosition {
    pub px: Percent,
    pub py: Percent,
}

fn check_percent(percent: Percent) -> Result<(), HeliographError> {
    // NaN fails the containment test and is rejected here as well
    if (0.0..=1.0).contains(&percent) {
        Ok(())
    } else {
        Err(HeliographError::PercentOutOfRange(percent))
    }
}

fn check_axis(axis: char, value: Percent) -> Result<(), HeliographError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(HeliographError::SphericalOutOfRange { axis, value })
    }
}

/// Convert the fraction of a hemisphere's arc length traversed to the fraction of its
/// diameter traversed in one dimension.
///
/// Arguments
/// ---------
/// * `percent`: fraction of the arc length, from 0 (-90°) to 1 (90°)
///
/// Return
/// ------
/// * fraction of the diameter, from 0 to 1, or [`HeliographError::PercentOutOfRange`]
///   when the input is outside [0, 1]
pub fn arc_percent_to_linear_percent(percent: Percent) -> Result<Percent, HeliographError> {
    check_percent(percent)?;
    Ok((1.0 - (percent * PI).cos()) / 2.0)
}

/// Exact inverse of [`arc_percent_to_linear_percent`].
pub fn linear_percent_to_arc_percent(percent: Percent) -> Result<Percent, HeliographError> {
    check_percent(percent)?;
    Ok((1.0 - 2.0 * percent).acos() / PI)
}

/// Horizontal chord bounds of the disk at a given vertical position.
///
/// The disk is a unit circle in normalized space: at vertical offset `d` from the
/// center the chord half-width is `sqrt(1 - d²)`.
fn chord_bounds(py: Percent) -> (f64, f64) {
    // 0 at the disk's vertical center, 1 at either pole
    let y_offset_from_center = (2.0 * py - 1.0).abs();

    let half_width = (1.0 - y_offset_from_center.powi(2)).sqrt();

    let xmin = 0.5 - half_width / 2.0;
    let xmax = 1.0 - xmin;
    (xmin, xmax)
}

/// Project a hemisphere point onto the disk.
///
/// Arguments
/// ---------
/// * `sx`: longitude-like arc fraction in [0, 1]
/// * `sy`: latitude-like arc fraction in [0, 1]
///
/// Return
/// ------
/// * the [`DiskPosition`], always inside the disk inscribed in the unit square, or
///   [`HeliographError::SphericalOutOfRange`] when either input is outside [0, 1]
///
/// The vertical position comes straight from the cosine remapping of `sy`. The
/// horizontal position interpolates the remapped `sx` across the chord the disk
/// spans at that height, so both poles collapse to the single point (0.5, py).
pub fn spherical_to_position(sx: Percent, sy: Percent) -> Result<DiskPosition, HeliographError> {
    check_axis('x', sx)?;
    check_axis('y', sy)?;

    let py = arc_percent_to_linear_percent(sy)?;
    let (xmin, xmax) = chord_bounds(py);

    let px = xmin + (xmax - xmin) * arc_percent_to_linear_percent(sx)?;
    Ok(DiskPosition { px, py })
}

/// Exact algebraic inverse of [`spherical_to_position`].
///
/// Arguments
/// ---------
/// * `px`: horizontal disk position in [0, 1]
/// * `py`: vertical disk position in [0, 1]
///
/// Return
/// ------
/// * the recovered [`SphericalPercent`], or [`HeliographError::SphericalOutOfRange`] /
///   [`HeliographError::PercentOutOfRange`] when the input lies outside the unit
///   square or outside the disk itself
///
/// At the poles the chord collapses to a single point and the longitude fraction is
/// undefined; the degenerate center column `sx = 0.5` is returned there.
pub fn position_to_spherical(px: Percent, py: Percent) -> Result<SphericalPercent, HeliographError> {
    check_axis('x', px)?;
    check_axis('y', py)?;

    let sy = linear_percent_to_arc_percent(py)?;
    let (xmin, xmax) = chord_bounds(py);
    let span = xmax - xmin;

    let sx = if span == 0.0 {
        0.5
    } else {
        let mut percent_of_diameter = (px - xmin) / span;
        // a forward-projected limb point can land a few ulps outside the chord
        if percent_of_diameter < 0.0 && percent_of_diameter > -RATIO_NOISE {
            percent_of_diameter = 0.0;
        } else if percent_of_diameter > 1.0 && percent_of_diameter < 1.0 + RATIO_NOISE {
            percent_of_diameter = 1.0;
        }
        linear_percent_to_arc_percent(percent_of_diameter)?
    };

    Ok(SphericalPercent { sx, sy })
}
