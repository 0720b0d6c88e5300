//! In-memory road-network records. Sourced from an external dataset
//! (ids, coordinates, lengths); read-only to the engine.


use geo::{Distance, Euclidean, LineString, Point};
use rstar::{Envelope, AABB};
use serde::{Deserialize, Serialize};

/// Identifier issued by the road-network source for a node.
pub type NodeId = String;

/// Identifier issued by the road-network source for a link.
pub type LinkId = String;

/// A junction in the source road network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadNode {
    pub id: NodeId,
    pub position: Point,
}

impl RoadNode {
    pub fn new(id: impl Into<NodeId>, position: Point) -> Self {
        Self {
            id: id.into(),
            position,
        }
    }
}

impl rstar::RTreeObject for RoadNode {
    type Envelope = AABB<Point>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.position)
    }
}

impl rstar::PointDistance for RoadNode {
    fn distance_2(
        &self,
        point: &<Self::Envelope as Envelope>::Point,
    ) -> <<Self::Envelope as Envelope>::Point as rstar::Point>::Scalar {
        Euclidean.distance(self.position, *point).powi(2)
    }
}

/// A traversable way between two road nodes.
///
/// The polyline runs from the `start` node to the `end` node and holds
/// at least two coordinates; `length` is the planar length in metres,
/// as precomputed by the source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadLink {
    pub id: LinkId,
    pub start: NodeId,
    pub end: NodeId,
    pub geometry: LineString,
    pub length: f64,
}

impl RoadLink {
    /// Builds a link, deriving `length` from the geometry for sources
    /// that do not carry a precomputed one.
    pub fn new(
        id: impl Into<LinkId>,
        start: impl Into<NodeId>,
        end: impl Into<NodeId>,
        geometry: LineString,
    ) -> Self {
        let length = geometry
            .lines()
            .map(|segment| Euclidean.distance(segment.start_point(), segment.end_point()))
            .sum();

        Self {
            id: id.into(),
            start: start.into(),
            end: end.into(),
            geometry,
            length,
        }
    }

    /// Ground coordinate of the link's start node.
    pub fn start_point(&self) -> Option<Point> {
        self.geometry.points().next()
    }

    /// Ground coordinate of the link's end node.
    pub fn end_point(&self) -> Option<Point> {
        self.geometry.points().last()
    }
}
