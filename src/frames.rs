//! Frame precomputation for the looping animation.
//!
//! Every animation cycle is a fixed number of discrete frames. For each frame the
//! dataset's date range is sampled linearly, and every tracked spot with observations
//! bracketing that instant contributes one interpolated position. Interpolation runs
//! on the normalized spherical coordinates, not on projected disk positions; the
//! projector is applied afterwards by the rendering layer.
//!
//! All frames are precomputed eagerly: the dataset is small, changes only on explicit
//! edit, and no frame depends on another frame's output.

use itertools::Itertools;

use crate::constants::{Percent, SpotId, LAST_FRAME, MJD};
use crate::conversion::degrees_to_percent;
use crate::observations::Observation;
use crate::time::date_range;

/// One spot's normalized position at one sampled instant.
#[derive(Debug, Clone, PartialEq)]
pub struct FramePoint {
    pub id: SpotId,
    pub x: Percent,
    pub y: Percent,
}

/// One sampled animation instant: an entry for every spot that has data there.
pub type Frame = Vec<FramePoint>;

/// A dated normalized position on one spot's track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct TrackPoint {
    pub(crate) time: MJD,
    pub(crate) x: Percent,
    pub(crate) y: Percent,
}

/// Normalized position series of one spot, sorted ascending by time.
///
/// Observations without a usable latitude or longitude are skipped; they carry no
/// position to interpolate.
pub(crate) fn track_points(observations: &[Observation], id: &str) -> Vec<TrackPoint> {
    let mut points: Vec<TrackPoint> = observations
        .iter()
        .filter(|observation| observation.id == id)
        .filter_map(|observation| {
            let x = degrees_to_percent(observation.long)?;
            let y = degrees_to_percent(observation.lat)?;
            Some(TrackPoint {
                time: observation.time,
                x,
                y,
            })
        })
        .collect();
    points.sort_by(|a, b| a.time.total_cmp(&b.time));
    points
}

/// Interpolate a sorted track at instant `t`.
///
/// `prev` is the latest point at or before `t`, `next` the earliest at or after it.
/// When either is absent the spot has no position at this instant and `None` is
/// returned; a spot is never defaulted to an edge value. Coincident bracketing
/// points pin the fraction to 0.
pub(crate) fn interpolate_track(points: &[TrackPoint], t: MJD) -> Option<(Percent, Percent)> {
    // a reversed pair would yield a negative fraction, so the ordering is asserted
    // instead of being masked by an absolute value
    debug_assert!(
        points
            .windows(2)
            .all(|pair| pair[0].time <= pair[1].time),
        "track series must be sorted ascending by time"
    );

    let prev = points.iter().rev().find(|point| point.time <= t)?;
    let next = points.iter().find(|point| point.time >= t)?;

    let amt = if next.time > prev.time {
        (t - prev.time) / (next.time - prev.time)
    } else {
        0.0
    };

    Some((
        prev.x + (next.x - prev.x) * amt,
        prev.y + (next.y - prev.y) * amt,
    ))
}

/// Precompute the whole animation cycle at the default frame count.
///
/// Arguments
/// ---------
/// * `observations`: the cleaned dataset, every spot's rows mixed together
///
/// Return
/// ------
/// * one [`Frame`] per animation tick, spots ordered by first appearance in the
///   dataset; a spot with no bracketing observations at a given instant is omitted
///   from that frame
pub fn compute_frames(observations: &[Observation]) -> Vec<Frame> {
    compute_frames_with(observations, LAST_FRAME)
}

/// Precompute an animation cycle of `frame_count` frames.
///
/// Frame `f` samples the instant `min + (max - min) * f / frame_count` over the
/// dataset's date range, so the final frame stops one tick short of the range's end
/// and the loop restarts cleanly.
pub fn compute_frames_with(observations: &[Observation], frame_count: usize) -> Vec<Frame> {
    let (min_time, max_time) = date_range(observations);

    let tracks: Vec<(&SpotId, Vec<TrackPoint>)> = observations
        .iter()
        .map(|observation| &observation.id)
        .unique()
        .map(|id| (id, track_points(observations, id)))
        .collect();

    (0..frame_count)
        .map(|frame| {
            let progress = frame as f64 / frame_count as f64;
            let t = min_time + (max_time - min_time) * progress;

            tracks
                .iter()
                .filter_map(|(id, points)| {
                    let (x, y) = interpolate_track(points, t)?;
                    Some(FramePoint {
                        id: (*id).clone(),
                        x,
                        y,
                    })
                })
                .collect()
        })
        .collect()
}
