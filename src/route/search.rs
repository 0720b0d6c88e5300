use geo::Point;
use itertools::Itertools;
use log::{debug, info, warn};
use petgraph::graph::NodeIndex;
use rayon::iter::{IntoParallelIterator, ParallelIterator};

use crate::graph::{Weight, WeightedGraph};
use crate::index::Candidate;
use crate::network::{LinkId, NodeId};
use crate::route::error::{CandidateEnd, RouteError};
use crate::route::result::{PairFailure, RouteResult};

/// One destination point with the road nodes found near it.
#[derive(Clone, Debug)]
pub struct DestinationSet {
    pub point: Point,
    pub candidates: Vec<Candidate>,
}

/// Candidate sets feeding one best-route sweep: origin candidates plus
/// one candidate set per destination point.
#[derive(Clone, Debug)]
pub struct RouteQuery {
    pub origin_candidates: Vec<Candidate>,
    pub destinations: Vec<DestinationSet>,
}

struct Found {
    cost: Weight,
    path: Vec<NodeIndex>,
    origin: NodeId,
    destination: NodeId,
    destination_point: Point,
    destination_index: usize,
}

/// Sweeps every (origin × destination) candidate pairing with Dijkstra
/// and keeps the globally cheapest route.
///
/// Per-pair failures (unknown node, unreachable pair) are recorded and
/// skipped; the whole search fails only when no pairing yields a path.
/// Pairs are evaluated in parallel but folded in sweep order — strict
/// cost improvement only — so an exact cost tie always resolves to the
/// earliest pair (lowest destination index, then origin rank, then
/// destination rank) regardless of scheduling.
pub fn find_best_route(
    graph: &WeightedGraph,
    query: &RouteQuery,
) -> Result<RouteResult, RouteError> {
    if query.origin_candidates.is_empty() {
        return Err(RouteError::NoCandidates(CandidateEnd::Origin));
    }
    if query.destinations.iter().all(|set| set.candidates.is_empty()) {
        return Err(RouteError::NoCandidates(CandidateEnd::Destination));
    }

    let pairs = query
        .destinations
        .iter()
        .enumerate()
        .flat_map(|(index, set)| {
            query
                .origin_candidates
                .iter()
                .cartesian_product(set.candidates.iter())
                .map(move |(origin, destination)| (index, set.point, origin, destination))
        })
        .collect::<Vec<_>>();

    debug!("Sweeping {} candidate pairs", pairs.len());

    let outcomes = pairs
        .into_par_iter()
        .map(|(index, point, origin, destination)| {
            evaluate_pair(graph, index, point, origin, destination)
        })
        .collect::<Vec<_>>();

    let attempted = outcomes.len();
    let mut failures = Vec::new();
    let mut best: Option<Found> = None;

    for outcome in outcomes {
        match outcome {
            Ok(found) => {
                if best.as_ref().map_or(true, |b| found.cost < b.cost) {
                    best = Some(found);
                }
            }
            Err(failure) => {
                warn!("Skipping candidate pair: {failure:?}");
                failures.push(failure);
            }
        }
    }

    let Some(best) = best else {
        return Err(RouteError::NoRouteFound { attempted });
    };

    let links = reconstruct_links(graph, &best.path)?;
    info!(
        "Best route: {:.1}s over {} links to destination {}",
        best.cost,
        links.len(),
        best.destination_index
    );

    Ok(RouteResult {
        links,
        cost: best.cost,
        origin: best.origin,
        destination: best.destination,
        destination_point: best.destination_point,
        destination_index: best.destination_index,
        failures,
    })
}

fn evaluate_pair(
    graph: &WeightedGraph,
    destination_index: usize,
    destination_point: Point,
    origin: &Candidate,
    destination: &Candidate,
) -> Result<Found, PairFailure> {
    let from = graph.node_index(&origin.id).ok_or_else(|| PairFailure::MissingNode {
        node: origin.id.clone(),
    })?;
    let to = graph
        .node_index(&destination.id)
        .ok_or_else(|| PairFailure::MissingNode {
            node: destination.id.clone(),
        })?;

    let (cost, path) = graph
        .cheapest_route(from, to)
        .ok_or_else(|| PairFailure::Unreachable {
            origin: origin.id.clone(),
            destination: destination.id.clone(),
        })?;

    Ok(Found {
        cost,
        path,
        origin: origin.id.clone(),
        destination: destination.id.clone(),
        destination_point,
        destination_index,
    })
}

/// Walks consecutive node pairs of the winning path and reads back the
/// link id of the cheapest connecting edge.
fn reconstruct_links(
    graph: &WeightedGraph,
    path: &[NodeIndex],
) -> Result<Vec<LinkId>, RouteError> {
    path.windows(2)
        .map(|pair| {
            graph
                .connecting_link(pair[0], pair[1])
                .map(|edge| edge.link.clone())
                .ok_or_else(|| RouteError::EdgeGap {
                    from: graph.node_id(pair[0]).clone(),
                    to: graph.node_id(pair[1]).clone(),
                })
        })
        .collect()
}
