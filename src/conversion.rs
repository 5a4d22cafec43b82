use crate::constants::{Degree, Percent};
use crate::heliograph_errors::HeliographError;

/// Map an angle in degrees from [-90, 90] linearly onto [0, 1].
///
/// Arguments
/// ---------
/// * `deg`: the angle in degrees, or `None` when the measurement is missing
///
/// Return
/// ------
/// * `Option<Percent>`: the normalized fraction, or `None` when the input is missing
///   or not a number. A missing coordinate is ordinary data, not a failure.
pub fn degrees_to_percent(deg: Option<Degree>) -> Option<Percent> {
    let deg = deg?;
    if deg.is_nan() {
        return None;
    }
    Some((deg + 90.0) / 180.0)
}

/// Map a normalized fraction from [0, 1] linearly back onto [-90, 90] degrees.
///
/// Same missing/NaN passthrough contract as [`degrees_to_percent`].
pub fn percent_to_degrees(percent: Option<Percent>) -> Option<Degree> {
    let percent = percent?;
    if percent.is_nan() {
        return None;
    }
    Some(180.0 * percent - 90.0)
}

/// Linear interpolation between `min` and `max` by a fraction in [0, 1].
///
/// Arguments
/// ---------
/// * `min`: value at fraction 0
/// * `max`: value at fraction 1
/// * `percent`: interpolation fraction, validated against [0, 1] at both bounds
///
/// Return
/// ------
/// * the interpolated value, or [`HeliographError::InvalidInterpolation`] when the
///   fraction is out of range
pub fn interpolate(min: f64, max: f64, percent: f64) -> Result<f64, HeliographError> {
    if !(0.0..=1.0).contains(&percent) {
        return Err(HeliographError::InvalidInterpolation(percent));
    }
    let delta = max - min;
    Ok(min + delta * percent)
}

#[cfg(test)]
mod conversion_test {
    use super::*;

    #[test]
    fn test_degrees_to_percent() {
        assert_eq!(degrees_to_percent(Some(-90.0)), Some(0.0));
        assert_eq!(degrees_to_percent(Some(0.0)), Some(0.5));
        assert_eq!(degrees_to_percent(Some(90.0)), Some(1.0));
        assert_eq!(degrees_to_percent(Some(45.0)), Some(0.75));
        assert_eq!(degrees_to_percent(None), None);
        assert_eq!(degrees_to_percent(Some(f64::NAN)), None);
    }

    #[test]
    fn test_percent_to_degrees() {
        assert_eq!(percent_to_degrees(Some(0.0)), Some(-90.0));
        assert_eq!(percent_to_degrees(Some(0.5)), Some(0.0));
        assert_eq!(percent_to_degrees(Some(1.0)), Some(90.0));
        assert_eq!(percent_to_degrees(None), None);
        assert_eq!(percent_to_degrees(Some(f64::NAN)), None);
    }

    #[test]
    fn test_degrees_percent_round_trip() {
        for deg in [-90.0, -37.5, 0.0, 12.25, 90.0] {
            let percent = degrees_to_percent(Some(deg)).unwrap();
            assert_eq!(percent_to_degrees(Some(percent)), Some(deg));
        }
    }

    #[test]
    fn test_interpolate() {
        assert_eq!(interpolate(0.0, 10.0, 0.5).unwrap(), 5.0);
        assert_eq!(interpolate(0.0, 10.0, 0.0).unwrap(), 0.0);
        assert_eq!(interpolate(0.0, 10.0, 1.0).unwrap(), 10.0);
        // descending ranges are allowed, only the fraction is validated
        assert_eq!(interpolate(10.0, 0.0, 0.25).unwrap(), 7.5);

        assert_eq!(
            interpolate(0.0, 10.0, -0.1),
            Err(HeliographError::InvalidInterpolation(-0.1))
        );
        assert_eq!(
            interpolate(0.0, 10.0, 1.1),
            Err(HeliographError::InvalidInterpolation(1.1))
        );
        assert!(interpolate(0.0, 10.0, f64::NAN).is_err());
    }
}
