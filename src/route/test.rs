use super::error::{CandidateEnd, RouteError};
use super::result::PairFailure;
use super::search::{find_best_route, DestinationSet, RouteQuery};
use crate::elevation::{GridTransform, RasterGrid};
use crate::graph::weight::WALKING_SPEED;
use crate::graph::WeightedGraph;
use crate::index::Candidate;
use crate::network::RoadLink;
use crate::region::Region;

use approx::assert_relative_eq;
use geo::{line_string, point, Coord, LineString, Point};

/// Flat terrain: every cell 1m above the baseline.
fn flat_grid() -> RasterGrid {
    let transform = GridTransform::new(Coord { x: 0.0, y: 1_000.0 }, 100.0).unwrap();
    RasterGrid::new(vec![1.0; 100], 10, 10, -9999.0, transform).unwrap()
}

fn region() -> Region {
    Region::disc(point! { x: 500.0, y: 500.0 }, 400.0)
}

fn link(id: &str, start: &str, end: &str, geometry: LineString) -> RoadLink {
    RoadLink::new(id, start, end, geometry)
}

/// n1 (300, 500) — a — n2 (400, 500) — b — n3 (500, 500), 100m each.
fn chain_links() -> Vec<RoadLink> {
    vec![
        link("a", "n1", "n2", line_string![(x: 300.0, y: 500.0), (x: 400.0, y: 500.0)]),
        link("b", "n2", "n3", line_string![(x: 400.0, y: 500.0), (x: 500.0, y: 500.0)]),
    ]
}

fn chain_graph() -> WeightedGraph {
    WeightedGraph::build(&chain_links(), &region(), &flat_grid()).unwrap()
}

fn candidate(id: &str, position: Point) -> Candidate {
    Candidate {
        id: id.into(),
        position,
        distance: 0.0,
    }
}

fn destination(id: &str, position: Point) -> DestinationSet {
    DestinationSet {
        point: position,
        candidates: vec![candidate(id, position)],
    }
}

#[test]
fn single_pair_matches_direct_dijkstra() {
    let graph = chain_graph();
    let target = point! { x: 500.0, y: 500.0 };

    let query = RouteQuery {
        origin_candidates: vec![candidate("n1", point! { x: 300.0, y: 500.0 })],
        destinations: vec![destination("n3", target)],
    };

    let result = find_best_route(&graph, &query).unwrap();
    let (direct, _) = graph.cheapest_route_between("n1", "n3").unwrap();

    assert_relative_eq!(result.cost, direct);
    assert_eq!(result.links, ["a", "b"]);
    assert_eq!(result.origin, "n1");
    assert_eq!(result.destination, "n3");
    assert_eq!(result.destination_point, target);
    assert!(result.failures.is_empty());
}

#[test]
fn cheapest_destination_wins_and_is_recorded() {
    // Two spurs off n1 with flat times of exactly 150s and 120s.
    let spurs = vec![
        RoadLink {
            id: "slow".into(),
            start: "n1".into(),
            end: "n4".into(),
            geometry: line_string![(x: 300.0, y: 500.0), (x: 350.0, y: 550.0)],
            length: 150.0 * WALKING_SPEED,
        },
        RoadLink {
            id: "fast".into(),
            start: "n1".into(),
            end: "n5".into(),
            geometry: line_string![(x: 300.0, y: 500.0), (x: 350.0, y: 450.0)],
            length: 120.0 * WALKING_SPEED,
        },
    ];
    let graph = WeightedGraph::build(&spurs, &region(), &flat_grid()).unwrap();

    let query = RouteQuery {
        origin_candidates: vec![candidate("n1", point! { x: 300.0, y: 500.0 })],
        destinations: vec![
            destination("n4", point! { x: 350.0, y: 550.0 }),
            destination("n5", point! { x: 350.0, y: 450.0 }),
        ],
    };

    let result = find_best_route(&graph, &query).unwrap();

    assert_relative_eq!(result.cost, 120.0, epsilon = 1e-9);
    assert_eq!(result.destination, "n5");
    assert_eq!(result.destination_index, 1);
}

#[test]
fn missing_node_is_skipped_not_fatal() {
    let graph = chain_graph();

    let query = RouteQuery {
        origin_candidates: vec![
            candidate("ghost", point! { x: 310.0, y: 500.0 }),
            candidate("n1", point! { x: 300.0, y: 500.0 }),
        ],
        destinations: vec![destination("n3", point! { x: 500.0, y: 500.0 })],
    };

    let result = find_best_route(&graph, &query).unwrap();

    assert_eq!(result.origin, "n1");
    assert_eq!(
        result.failures,
        [PairFailure::MissingNode {
            node: "ghost".into()
        }]
    );
}

#[test]
fn unreachable_pair_is_recorded_and_sweep_continues() {
    // A disconnected island inside the region: n8 — n9.
    let mut links = chain_links();
    links.push(link(
        "island",
        "n8",
        "n9",
        line_string![(x: 600.0, y: 600.0), (x: 700.0, y: 600.0)],
    ));
    let graph = WeightedGraph::build(&links, &region(), &flat_grid()).unwrap();

    let query = RouteQuery {
        origin_candidates: vec![candidate("n1", point! { x: 300.0, y: 500.0 })],
        destinations: vec![
            destination("n8", point! { x: 600.0, y: 600.0 }),
            destination("n3", point! { x: 500.0, y: 500.0 }),
        ],
    };

    let result = find_best_route(&graph, &query).unwrap();

    assert_eq!(result.destination, "n3");
    assert_eq!(result.destination_index, 1);
    assert_eq!(
        result.failures,
        [PairFailure::Unreachable {
            origin: "n1".into(),
            destination: "n8".into()
        }]
    );
}

#[test]
fn all_pairs_failing_is_no_route_found() {
    let mut links = chain_links();
    links.push(link(
        "island",
        "n8",
        "n9",
        line_string![(x: 600.0, y: 600.0), (x: 700.0, y: 600.0)],
    ));
    let graph = WeightedGraph::build(&links, &region(), &flat_grid()).unwrap();

    let query = RouteQuery {
        origin_candidates: vec![candidate("n1", point! { x: 300.0, y: 500.0 })],
        destinations: vec![
            destination("n8", point! { x: 600.0, y: 600.0 }),
            destination("n9", point! { x: 700.0, y: 600.0 }),
        ],
    };

    assert!(matches!(
        find_best_route(&graph, &query),
        Err(RouteError::NoRouteFound { attempted: 2 })
    ));
}

#[test]
fn empty_origin_candidates_short_circuit() {
    let graph = chain_graph();

    let query = RouteQuery {
        origin_candidates: Vec::new(),
        destinations: vec![destination("n3", point! { x: 500.0, y: 500.0 })],
    };

    assert!(matches!(
        find_best_route(&graph, &query),
        Err(RouteError::NoCandidates(CandidateEnd::Origin))
    ));
}

#[test]
fn empty_destination_sets_short_circuit() {
    let graph = chain_graph();

    let query = RouteQuery {
        origin_candidates: vec![candidate("n1", point! { x: 300.0, y: 500.0 })],
        destinations: vec![
            DestinationSet {
                point: point! { x: 500.0, y: 500.0 },
                candidates: Vec::new(),
            },
            DestinationSet {
                point: point! { x: 400.0, y: 500.0 },
                candidates: Vec::new(),
            },
        ],
    };

    assert!(matches!(
        find_best_route(&graph, &query),
        Err(RouteError::NoCandidates(CandidateEnd::Destination))
    ));
}

#[test]
fn exact_cost_ties_resolve_to_the_earliest_destination() {
    let graph = chain_graph();
    let target = point! { x: 500.0, y: 500.0 };

    // The same node offered under two destination points: identical
    // costs, so the sweep must keep the first.
    let query = RouteQuery {
        origin_candidates: vec![candidate("n1", point! { x: 300.0, y: 500.0 })],
        destinations: vec![destination("n3", target), destination("n3", target)],
    };

    let result = find_best_route(&graph, &query).unwrap();
    assert_eq!(result.destination_index, 0);
}
