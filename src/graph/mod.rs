//! Directed road graph with asymmetric climb weights.

pub mod error;
pub mod weight;


#[doc(inline)]
pub use error::GraphError;

use geo::Point;
use log::info;
use petgraph::graph::{DiGraph, NodeIndex};
use rustc_hash::FxHashMap;

use crate::elevation::RasterGrid;
use crate::graph::weight::{link_weight, Direction};
use crate::network::{LinkId, NodeId, RoadLink};
use crate::region::Region;

/// Time cost of one directed traversal, in seconds.
pub type Weight = f64;

/// A directed edge: the link it originated from and its walking time.
#[derive(Clone, Debug, PartialEq)]
pub struct LinkEdge {
    pub link: LinkId,
    pub weight: Weight,
}

/// Directed, asymmetrically weighted road graph. Built once per query
/// from the links inside the active region, read-only afterwards.
///
/// Every retained link contributes exactly two directed edges, so
/// parallel edges between one node pair occur whenever two links share
/// both endpoints.
pub struct WeightedGraph {
    graph: DiGraph<NodeId, LinkEdge>,
    nodes: FxHashMap<NodeId, NodeIndex>,
}

impl WeightedGraph {
    /// Builds the graph from the links wholly inside `region`, sampling
    /// endpoint elevations from the masked `grid`.
    ///
    /// The direction of each link that gains elevation carries the
    /// climbing penalty; the opposite direction costs flat walking
    /// time. Links with equal endpoint elevations cost flat time both
    /// ways.
    pub fn build(
        links: &[RoadLink],
        region: &Region,
        grid: &RasterGrid,
    ) -> Result<WeightedGraph, GraphError> {
        let mut graph = DiGraph::new();
        let mut nodes = FxHashMap::default();
        let mut kept = 0usize;

        for link in links {
            if !region.covers_line(&link.geometry) {
                continue;
            }

            let (start, end) = match (link.start_point(), link.end_point()) {
                (Some(start), Some(end)) if link.geometry.0.len() >= 2 => (start, end),
                _ => return Err(GraphError::DegenerateLink(link.id.clone())),
            };

            let elev_start = sample(grid, &link.id, &start)?;
            let elev_end = sample(grid, &link.id, &end)?;

            let source = intern(&mut graph, &mut nodes, &link.start);
            let target = intern(&mut graph, &mut nodes, &link.end);

            graph.add_edge(
                source,
                target,
                LinkEdge {
                    link: link.id.clone(),
                    weight: link_weight(link.length, elev_start, elev_end, Direction::Forward),
                },
            );
            graph.add_edge(
                target,
                source,
                LinkEdge {
                    link: link.id.clone(),
                    weight: link_weight(link.length, elev_start, elev_end, Direction::Reverse),
                },
            );
            kept += 1;
        }

        info!(
            "Graph built: {kept} of {} links retained, {} nodes",
            links.len(),
            nodes.len()
        );

        Ok(WeightedGraph { graph, nodes })
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// Every directed edge in the graph.
    pub fn edges(&self) -> impl Iterator<Item = &LinkEdge> {
        self.graph.edge_weights()
    }

    pub(crate) fn node_index(&self, id: &str) -> Option<NodeIndex> {
        self.nodes.get(id).copied()
    }

    pub(crate) fn node_id(&self, index: NodeIndex) -> &NodeId {
        &self.graph[index]
    }

    /// Cheapest walk between two nodes as (total seconds, node path),
    /// or `None` when no path exists. Dijkstra over non-negative
    /// weights, expressed as A* with a zero heuristic.
    pub fn cheapest_route(
        &self,
        from: NodeIndex,
        to: NodeIndex,
    ) -> Option<(Weight, Vec<NodeIndex>)> {
        petgraph::algo::astar(
            &self.graph,
            from,
            |node| node == to,
            |edge| edge.weight().weight,
            |_| 0.0,
        )
    }

    /// Cheapest walk between two source node ids. `None` when either id
    /// is absent from the graph or no path connects them.
    pub fn cheapest_route_between(&self, from: &str, to: &str) -> Option<(Weight, Vec<NodeIndex>)> {
        self.cheapest_route(self.node_index(from)?, self.node_index(to)?)
    }

    /// Cheapest directed edge between two adjacent nodes of a walk;
    /// weight ties resolve to the lowest link id. `None` when no edge
    /// connects the pair.
    pub(crate) fn connecting_link(&self, from: NodeIndex, to: NodeIndex) -> Option<&LinkEdge> {
        self.graph
            .edges_connecting(from, to)
            .map(|edge| edge.weight())
            .min_by(|a, b| a.weight.total_cmp(&b.weight).then_with(|| a.link.cmp(&b.link)))
    }
}

fn intern(
    graph: &mut DiGraph<NodeId, LinkEdge>,
    nodes: &mut FxHashMap<NodeId, NodeIndex>,
    id: &NodeId,
) -> NodeIndex {
    *nodes
        .entry(id.clone())
        .or_insert_with(|| graph.add_node(id.clone()))
}

fn sample(grid: &RasterGrid, link: &LinkId, point: &Point) -> Result<f64, GraphError> {
    grid.sample_at(point).map_err(|source| GraphError::EndpointSample {
        link: link.clone(),
        source,
    })
}
