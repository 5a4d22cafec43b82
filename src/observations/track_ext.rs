//! Track ingestion and per-track queries.
//!
//! A [`TrackSet`] is a `HashMap<SpotId, Observations>` storing one time-ordered list
//! of observations per tracked spot. The [`TrackSetExt`] trait adds constructors from
//! raw tabular rows and CSV files, appenders, and the bracketing position query used
//! by the animation.

use camino::Utf8Path;

use super::table_reader::observations_from_csv;
use super::{observations_from_rows, Observation, RawRow};
use crate::constants::{Percent, TrackSet, MJD};
use crate::frames::{interpolate_track, track_points};
use crate::heliograph_errors::HeliographError;
use crate::time::timestamp_range;

/// Extension trait for [`TrackSet`] providing ingestion and interpolation.
pub trait TrackSetExt {
    /// Build a track set from raw tabular rows.
    ///
    /// Rows failing the usual cleaning (empty id, unparseable date) are dropped.
    fn new_from_rows(rows: &[RawRow]) -> TrackSet;

    /// Build a track set from a CSV file with `id,date,lat,long` columns.
    fn new_from_csv(path: &Utf8Path) -> Result<TrackSet, HeliographError>;

    /// Append observations, keeping every track sorted ascending by time.
    fn add_observations(&mut self, observations: Vec<Observation>);

    /// Normalized spherical position of one track at instant `t`.
    ///
    /// Interpolates linearly between the two chronologically nearest observations
    /// bracketing `t`. Returns `None` when the track is unknown or has no
    /// observation on one side of `t`: the spot has no position at that instant.
    fn interpolate_at(&self, id: &str, t: MJD) -> Option<(Percent, Percent)>;

    /// Minimum and maximum observation timestamp across all tracks, `(0, 0)` when
    /// the set is empty.
    fn date_range(&self) -> (MJD, MJD);
}

impl TrackSetExt for TrackSet {
    fn new_from_rows(rows: &[RawRow]) -> TrackSet {
        let mut set = TrackSet::default();
        set.add_observations(observations_from_rows(rows));
        set
    }

    fn new_from_csv(path: &Utf8Path) -> Result<TrackSet, HeliographError> {
        let mut set = TrackSet::default();
        set.add_observations(observations_from_csv(path)?);
        Ok(set)
    }

    fn add_observations(&mut self, observations: Vec<Observation>) {
        for observation in observations {
            let track = self.entry(observation.id.clone()).or_default();
            track.push(observation);
        }
        for track in self.values_mut() {
            track.sort_by(|a, b| a.time.total_cmp(&b.time));
        }
    }

    fn interpolate_at(&self, id: &str, t: MJD) -> Option<(Percent, Percent)> {
        let track = self.get(id)?;
        let points = track_points(track, id);
        interpolate_track(&points, t)
    }

    fn date_range(&self) -> (MJD, MJD) {
        timestamp_range(self.values().flatten().map(|observation| observation.time))
    }
}
