use geo::Point;
use serde::{Deserialize, Serialize};

use crate::graph::Weight;
use crate::network::{LinkId, NodeId};

/// Why a single (origin, destination) pairing was skipped. Non-fatal:
/// the sweep continues with the remaining pairs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PairFailure {
    /// A candidate node id does not exist in the weighted graph.
    MissingNode { node: NodeId },
    /// Both nodes exist but no directed walk connects them.
    Unreachable { origin: NodeId, destination: NodeId },
}

/// The cheapest route found across every candidate pairing.
///
/// Produced once per query; the link sequence, the terminal node ids
/// and the destination point are everything a renderer needs to draw
/// the path and report the walking time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RouteResult {
    /// Ordered link ids forming a contiguous walk from `origin` to
    /// `destination`.
    pub links: Vec<LinkId>,
    /// Total walking time, seconds.
    pub cost: Weight,
    /// Graph node the walk starts from.
    pub origin: NodeId,
    /// Graph node the walk ends at.
    pub destination: NodeId,
    /// Ground coordinate of the destination the walk serves.
    pub destination_point: Point,
    /// Index of the winning destination candidate set.
    pub destination_index: usize,
    /// Per-pair diagnostics accumulated during the sweep, in sweep
    /// order.
    pub failures: Vec<PairFailure>,
}

impl RouteResult {
    /// Total walking time in minutes, for reporting.
    pub fn minutes(&self) -> f64 {
        self.cost / 60.0
    }
}
