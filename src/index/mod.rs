//! Proximity index: k-nearest lookups over the road nodes that passed
//! the region filter.


use geo::Point;
use log::debug;
use rstar::RTree;
use serde::{Deserialize, Serialize};

use crate::network::{NodeId, RoadNode};

/// A node returned by a proximity query, with its Euclidean distance
/// (metres) from the query point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: NodeId,
    pub position: Point,
    pub distance: f64,
}

/// Immutable k-nearest index over road nodes.
///
/// Built once per query; coincident duplicate points are indexed as
/// distinct entries.
#[derive(Debug)]
pub struct ProximityIndex {
    tree: RTree<RoadNode>,
    size: usize,
}

impl ProximityIndex {
    pub fn build(nodes: Vec<RoadNode>) -> Self {
        let size = nodes.len();
        debug!("Bulk loading proximity index with {size} nodes");

        Self {
            tree: RTree::bulk_load(nodes),
            size,
        }
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// The `k` nodes nearest to `query`, ordered by ascending distance
    /// and then ascending id.
    ///
    /// Returns fewer than `k` entries only when the index holds fewer;
    /// an empty index yields an empty vector, which callers treat as a
    /// terminating "no node reachable" condition.
    pub fn nearest(&self, query: Point, k: usize) -> Vec<Candidate> {
        if k == 0 {
            return Vec::new();
        }

        // Drain the neighbour iterator past the k-th distance so that
        // equidistant entries at the cut-off are ordered by id rather
        // than by tree order.
        let mut hits: Vec<(f64, &RoadNode)> = Vec::new();
        for (node, distance_2) in self.tree.nearest_neighbor_iter_with_distance_2(&query) {
            if hits.len() >= k && distance_2 > hits[k - 1].0 {
                break;
            }
            hits.push((distance_2, node));
        }

        hits.sort_by(|a, b| a.0.total_cmp(&b.0).then_with(|| a.1.id.cmp(&b.1.id)));
        hits.truncate(k);

        hits.into_iter()
            .map(|(distance_2, node)| Candidate {
                id: node.id.clone(),
                position: node.position,
                distance: distance_2.sqrt(),
            })
            .collect()
    }
}
