use approx::assert_relative_eq;

use heliograph::constants::LAST_FRAME;
use heliograph::conversion::degrees_to_percent;
use heliograph::frames::compute_frames;
use heliograph::observations::observations_from_rows;
use heliograph::projection::spherical_to_position;
use heliograph::time::{date_range, format_mjd};

mod common;
use common::{fixture_rows, FIXTURE_LONGS, FIXTURE_SPOTS};

const JUNE_22: f64 = 60483.0;
const JULY_2: f64 = 60493.0;
const JULY_3: f64 = 60494.0;

#[test]
fn test_fixture_ingestion() {
    let observations = observations_from_rows(&fixture_rows());

    // 3 spots x 12 dated rows; the missing-longitude rows survive ingestion
    assert_eq!(observations.len(), 36);
    assert_eq!(observations.iter().filter(|o| o.long.is_none()).count(), 3);

    // the July 3 row has a parseable date, so it stretches the range
    assert_eq!(date_range(&observations), (JUNE_22, JULY_3));
}

#[test]
fn test_first_frame_matches_first_observations() {
    let observations = observations_from_rows(&fixture_rows());
    let frames = compute_frames(&observations);
    assert_eq!(frames.len(), LAST_FRAME);

    let first = &frames[0];
    assert_eq!(first.len(), 3);

    for (index, (id, lat)) in FIXTURE_SPOTS.iter().enumerate() {
        let point = &first[index];
        assert_eq!(&point.id, id);
        let expected_x = degrees_to_percent(FIXTURE_LONGS[0]).unwrap();
        let expected_y = degrees_to_percent(Some(*lat)).unwrap();
        assert_relative_eq!(point.x, expected_x, epsilon = 1e-12);
        assert_relative_eq!(point.y, expected_y, epsilon = 1e-12);

        // and the projected marker lands where projecting the raw observation does
        let from_frame = spherical_to_position(point.x, point.y).unwrap();
        let from_observation = spherical_to_position(expected_x, expected_y).unwrap();
        assert_relative_eq!(from_frame.px, from_observation.px, epsilon = 1e-12);
        assert_relative_eq!(from_frame.py, from_observation.py, epsilon = 1e-12);
    }
}

#[test]
fn test_last_populated_frame_approaches_final_measurement() {
    let observations = observations_from_rows(&fixture_rows());
    let frames = compute_frames(&observations);

    let range = JULY_3 - JUNE_22;

    // the last frame whose sampled instant is at or before the July 2 measurement
    let last_populated = (0..LAST_FRAME)
        .rev()
        .find(|frame| JUNE_22 + range * (*frame as f64 / LAST_FRAME as f64) <= JULY_2)
        .unwrap();

    let frame = &frames[last_populated];
    assert_eq!(frame.len(), 3);

    let t = JUNE_22 + range * (last_populated as f64 / LAST_FRAME as f64);
    let amt = t - (JULY_2 - 1.0);
    let expected_long = 61.0 + (75.0 - 61.0) * amt;
    let expected_x = degrees_to_percent(Some(expected_long)).unwrap();

    for point in frame {
        assert_relative_eq!(point.x, expected_x, epsilon = 1e-9);
        // within a couple of longitude degrees of the final measurement
        assert!((point.x - degrees_to_percent(Some(75.0)).unwrap()).abs() < 2.0 / 180.0);
    }
}

#[test]
fn test_frames_past_final_measurement_are_empty() {
    let observations = observations_from_rows(&fixture_rows());
    let frames = compute_frames(&observations);

    let range = JULY_3 - JUNE_22;
    let first_empty = (0..LAST_FRAME)
        .find(|frame| JUNE_22 + range * (*frame as f64 / LAST_FRAME as f64) > JULY_2)
        .unwrap();

    // no spot has a bracketing observation after July 2, so every later frame
    // omits all of them rather than defaulting to an edge value
    for frame in &frames[first_empty..] {
        assert!(frame.is_empty());
    }
}

#[test]
fn test_animation_date_readout() {
    let observations = observations_from_rows(&fixture_rows());
    let (min_time, max_time) = date_range(&observations);

    assert_eq!(format_mjd(min_time), "Jun 22, 2024");
    assert_eq!(format_mjd(max_time), "Jul 3, 2024");

    let midpoint = heliograph::conversion::interpolate(min_time, max_time, 0.5).unwrap();
    assert_eq!(format_mjd(midpoint), "Jun 27, 2024");
}
