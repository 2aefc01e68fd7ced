//! Synthetic ceiling-grid scenario for demonstrating the solver.
//!
//! Purpose
//! -------
//! Generate a reproducible toy deployment: four anchors at the ceiling
//! corners of a rectangular room, a node drawn uniformly inside the room,
//! exact ranges from node to every anchor, and a noisy copy of those ranges
//! as the "measured" input handed to the solver.
//!
//! Conventions
//! -----------
//! - All randomness flows through the caller's RNG, so seeded runs replay
//!   the same scenario.
//! - Measurement noise is uniform in `[-noise, noise)` per range, clamped so
//!   a noisy range never goes negative.
use crate::geometry::metric::euclidean;
use crate::solver::{
    errors::SolveResult,
    types::{Point, Points, Ranges},
};
use ndarray::array;
use rand::Rng;

/// Room extent along x, in meters.
pub const ROOM_WIDTH: f64 = 9.0;
/// Room extent along y, in meters.
pub const ROOM_LENGTH: f64 = 9.0;
/// Anchor mounting height, in meters.
pub const ANCHOR_HEIGHT: f64 = 3.0;
/// Half-width of the uniform measurement noise, in meters.
pub const RANGE_NOISE: f64 = 0.5;

/// A generated deployment: anchors, hidden node, and its ranges.
///
/// Fields
/// ------
/// - `anchors`: 4×3 ceiling-corner anchor positions.
/// - `node`: the hidden true position the solver should recover.
/// - `ranges`: exact node-to-anchor distances.
/// - `measured`: `ranges` plus uniform noise; this is what the solver sees.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub anchors: Points,
    pub node: Point,
    pub ranges: Ranges,
    pub measured: Ranges,
}

impl Scenario {
    /// Generate a ceiling-grid scenario inside a `width × length × height`
    /// room.
    ///
    /// # Behavior
    /// - Anchors sit at the four ceiling corners, all at `height`.
    /// - The node is drawn uniformly inside the room volume.
    /// - Each measured range is the exact range plus a uniform draw from
    ///   `[-noise, noise)`; `noise = 0` disables the jitter entirely.
    ///
    /// Room extents and `height` must be strictly positive and `noise`
    /// non-negative; the crate-level constants satisfy this.
    ///
    /// # Errors
    /// Propagates shape faults from the distance metric; these cannot occur
    /// for the fixed 3-D layout built here.
    pub fn ceiling_grid<R: Rng + ?Sized>(
        width: f64, length: f64, height: f64, noise: f64, rng: &mut R,
    ) -> SolveResult<Self> {
        let anchors = array![
            [0.0, 0.0, height],
            [width, 0.0, height],
            [width, length, height],
            [0.0, length, height],
        ];
        let node = array![
            rng.gen_range(0.0..width),
            rng.gen_range(0.0..length),
            rng.gen_range(0.0..height),
        ];

        let mut ranges = Ranges::zeros(anchors.nrows());
        for j in 0..anchors.nrows() {
            ranges[j] = euclidean(&anchors.row(j), &node.view())?;
        }
        let mut measured = ranges.clone();
        if noise > 0.0 {
            for value in measured.iter_mut() {
                // Clamp so measurement noise never drives a range negative.
                *value = (*value + rng.gen_range(-noise..noise)).max(0.0);
            }
        }

        Ok(Scenario { anchors, node, ranges, measured })
    }
}
