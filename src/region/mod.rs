//! Region filtering: the bounded area restricting which nodes, links
//! and raster cells participate in a query.

#[cfg(test)]
mod test;

use geo::{Area, Coord, LineString, Point, Polygon, Relate};
use thiserror::Error;

/// Segments used to approximate the disc boundary.
const DISC_SEGMENTS: usize = 64;

#[derive(Error, Debug)]
pub enum RegionError {
    /// The query region encloses no area and cannot contain any feature.
    #[error("search region is degenerate: radius {radius} encloses no area")]
    Degenerate { radius: f64 },
}

/// Closed planar area around a query point. Built once per query,
/// read-only afterwards.
#[derive(Clone, Debug)]
pub struct Region {
    center: Point,
    radius: f64,
    polygon: Polygon,
}

impl Region {
    /// Builds a closed disc of `radius` ground units around `center`.
    ///
    /// A non-positive radius still yields a [`Region`]; it simply fails
    /// every containment test rather than panicking.
    pub fn disc(center: Point, radius: f64) -> Self {
        let reach = radius.max(0.0);
        let ring = (0..=DISC_SEGMENTS)
            .map(|i| {
                let theta =
                    (i % DISC_SEGMENTS) as f64 / DISC_SEGMENTS as f64 * std::f64::consts::TAU;
                Coord {
                    x: center.x() + reach * theta.cos(),
                    y: center.y() + reach * theta.sin(),
                }
            })
            .collect::<Vec<_>>();

        Region {
            center,
            radius,
            polygon: Polygon::new(LineString::new(ring), vec![]),
        }
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn polygon(&self) -> &Polygon {
        &self.polygon
    }

    /// A region that encloses no area cannot contain anything.
    pub fn is_degenerate(&self) -> bool {
        self.polygon.unsigned_area() <= 0.0
    }

    /// Inclusive membership for a single point: inside the region or on
    /// its boundary.
    pub fn covers_point(&self, point: &Point) -> bool {
        if self.is_degenerate() {
            return false;
        }

        let matrix = point.relate(&self.polygon);
        matrix.is_within() || matrix.is_touches()
    }

    /// Inclusive membership for a polyline: the whole line must lie
    /// inside the region or touch its boundary. Partially overlapping
    /// lines are rejected outright, never clipped.
    pub fn covers_line(&self, line: &LineString) -> bool {
        if self.is_degenerate() {
            return false;
        }

        let matrix = line.relate(&self.polygon);
        matrix.is_within() || matrix.is_touches()
    }
}
