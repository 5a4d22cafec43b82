//! # Constants and type definitions for heliograph
//!
//! This module centralizes the **animation clock**, **solar rotation constants**, and **common
//! type definitions** used throughout the `heliograph` library. It also defines the container
//! types for storing sunspot observations grouped per tracked spot.
//!
//! ## Overview
//!
//! - Animation clock configuration (frame rate, cycle duration, frame count)
//! - Solar differential rotation periods (equator vs. poles)
//! - Rotating grid sampling resolution
//! - Core type aliases used across the crate
//! - Container types for storing observations and tracks
//!
//! These definitions are used by all main modules, including the disk projector, the frame
//! interpolator, and the grid sampler.

use crate::observations::Observation;
use ahash::RandomState;
use smallvec::SmallVec;
use std::collections::HashMap;

// -------------------------------------------------------------------------------------------------
// Animation clock
// -------------------------------------------------------------------------------------------------

/// Logical frames per second of the animation clock
pub const FPS: u32 = 30;

/// Duration of one full animation cycle in milliseconds
pub const ANIMATION_DURATION_MS: u32 = 5000;

/// Number of discrete frames in one animation cycle
pub const LAST_FRAME: usize = (FPS * (ANIMATION_DURATION_MS / 1000)) as usize;

/// Wall-clock interval between two frame ticks, in milliseconds
pub const TIMEOUT_INTERVAL_MS: f64 = 1000.0 / FPS as f64;

// -------------------------------------------------------------------------------------------------
// Solar rotation
// -------------------------------------------------------------------------------------------------

// The Sun rotates on its axis once every 27 days on average, but the rate of
// rotation varies by latitude.

/// Sidereal rotation period near the solar poles, in days
pub const AVG_DAYS_POLE_ROTATION: f64 = 34.3;

/// Sidereal rotation period at the solar equator, in days
pub const AVG_DAYS_EQUATOR_ROTATION: f64 = 24.47;

// -------------------------------------------------------------------------------------------------
// Rotating grid resolution
// -------------------------------------------------------------------------------------------------

/// Number of longitude bands sampled by the rotating grid
pub const GRID_COLS: usize = 32;

/// Number of latitude bands sampled by the rotating grid
pub const GRID_ROWS: usize = 100;

/// Angular width of one longitude band, in degrees
pub const GRID_COL_WIDTH_DEG: f64 = 360.0 / GRID_COLS as f64;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Normalized fraction in [0, 1]
pub type Percent = f64;
/// Modified Julian Date (UTC days)
pub type MJD = f64;
/// Identifier of a tracked sunspot (e.g. `"A"`, `"AR3664"`)
pub type SpotId = String;

// -------------------------------------------------------------------------------------------------
// Data containers
// -------------------------------------------------------------------------------------------------

/// A small, inline-optimized container for observations of a single spot.
pub type Observations = SmallVec<[Observation; 12]>;

/// One time-ordered list of observations per tracked spot.
pub type TrackSet = HashMap<SpotId, Observations, RandomState>;
