//! Naismith's-rule walking-time weights.
//!
//! A link's flat cost is its length at walking pace; the direction that
//! gains elevation additionally pays a climbing penalty per metre of
//! ascent. Descent is costed as flat ground.

/// Walking speed in metres per second (5km/h).
pub const WALKING_SPEED: f64 = 5_000.0 / 3_600.0;

/// Climbing penalty in seconds per metre of ascent (one minute per 10m).
pub const CLIMB_PENALTY: f64 = 60.0 / 10.0;

/// Traversal direction of a link relative to its stored geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// From the link's start node to its end node.
    Forward,
    /// From the link's end node back to its start node.
    Reverse,
}

/// Walking time, in seconds, to traverse a link of `length` metres in
/// `direction`, given the elevations at the link's geometric start and
/// end.
///
/// Only the ascending direction pays the climb penalty; when the
/// endpoint elevations are equal both directions cost flat time.
pub fn link_weight(length: f64, elev_start: f64, elev_end: f64, direction: Direction) -> f64 {
    let flat = length / WALKING_SPEED;

    let ascends = match direction {
        Direction::Forward => elev_end > elev_start,
        Direction::Reverse => elev_start > elev_end,
    };

    if ascends {
        flat + (elev_end - elev_start).abs() * CLIMB_PENALTY
    } else {
        flat
    }
}
