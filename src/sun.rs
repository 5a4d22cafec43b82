//! Scene geometry for the Earth/Sun position simulator.
//!
//! Everything here is pure coordinate plumbing: the equatorial numbers themselves
//! (right ascension, declination, sidereal time) come from an external ephemeris and
//! are treated as opaque inputs. Geographic axes are z-up; the rendered scene is
//! y-up, hence the axis swap.

use nalgebra::Vector3;

use crate::constants::Degree;

/// Distance of the sun marker from the scene origin.
pub const SUN_ORBIT_RADIUS: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeographicLocation {
    pub lat: Degree,
    pub long: Degree,
}

/// Equatorial coordinates of a point on the celestial sphere, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquatorialCoord {
    pub right_ascension: Degree,
    pub declination: Degree,
}

/// Position of a geographic point on the unit sphere, z-up.
pub fn geographic_to_cartesian(location: GeographicLocation) -> Vector3<f64> {
    let lat_rad = location.lat.to_radians();
    let long_rad = location.long.to_radians();

    Vector3::new(
        lat_rad.cos() * long_rad.cos(),
        lat_rad.cos() * long_rad.sin(),
        lat_rad.sin(),
    )
}

/// Swap the y and z axes: geographic z-up to the scene's y-up convention.
pub fn to_scene_vector(vector: Vector3<f64>) -> Vector3<f64> {
    Vector3::new(vector.x, vector.z, vector.y)
}

/// Rotate a scene vector about the vertical (y) axis.
pub fn rotate_about_y(vector: Vector3<f64>, degrees: Degree) -> Vector3<f64> {
    let radians = degrees.to_radians();

    Vector3::new(
        vector.x * radians.cos() - vector.z * radians.sin(),
        vector.y,
        vector.x * radians.sin() + vector.z * radians.cos(),
    )
}

/// Equatorial coordinates of the zenith above a ground point.
///
/// Arguments
/// ---------
/// * `location`: the observer's geographic position
/// * `gast_hours`: Greenwich apparent sidereal time, in sidereal hours
///
/// Return
/// ------
/// * the [`EquatorialCoord`] straight overhead: right ascension is the local
///   sidereal time (15° per sidereal hour, plus the observer's longitude),
///   declination the observer's latitude
pub fn local_equatorial(location: GeographicLocation, gast_hours: f64) -> EquatorialCoord {
    let local_sidereal_deg = gast_hours * 15.0 + location.long;

    EquatorialCoord {
        right_ascension: local_sidereal_deg,
        declination: location.lat,
    }
}

/// Earth's rotation angle for a given sidereal time, in degrees.
pub fn earth_rotation_degrees(gast_hours: f64) -> Degree {
    gast_hours * 15.0
}

/// Scene position of the sun marker.
///
/// Arguments
/// ---------
/// * `right_ascension_hours`: the Sun's right ascension, in hours
/// * `declination`: the Sun's declination, in degrees
///
/// Return
/// ------
/// * the marker position: the unit-sphere point at latitude `declination` and
///   longitude `-ra`, swapped into scene axes and pushed out to
///   [`SUN_ORBIT_RADIUS`]
pub fn sun_scene_position(right_ascension_hours: f64, declination: Degree) -> Vector3<f64> {
    let ra_degrees = right_ascension_hours * 15.0;
    let unit = geographic_to_cartesian(GeographicLocation {
        lat: declination,
        long: -ra_degrees,
    });
    to_scene_vector(unit) * SUN_ORBIT_RADIUS
}
