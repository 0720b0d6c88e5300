//! Query pipeline: region, raster mask, peak extraction, candidate
//! lookup, graph build and the best-route sweep, in one call.


use geo::Point;
use log::{debug, info};

use crate::elevation::RasterGrid;
use crate::graph::WeightedGraph;
use crate::index::ProximityIndex;
use crate::network::{RoadLink, RoadNode};
use crate::region::{Region, RegionError};
use crate::route::{find_best_route, DestinationSet, RouteQuery, RouteResult};
use crate::Result;

/// Parameters for a single route query.
#[derive(Clone, Copy, Debug)]
pub struct PlanQuery {
    /// Ground coordinate routing starts from. Callers validate it
    /// against their operating boundary before querying.
    pub origin: Point,
    /// Radius of the search region around the origin, metres.
    pub radius: f64,
    /// Road-node candidates taken per proximity lookup.
    pub candidates: usize,
}

impl PlanQuery {
    pub fn new(origin: Point, radius: f64) -> Self {
        Self {
            origin,
            radius,
            candidates: 1,
        }
    }

    pub fn with_candidates(mut self, candidates: usize) -> Self {
        self.candidates = candidates;
        self
    }
}

/// Plans the least-time walking route from the query origin to the
/// highest ground inside the query region.
///
/// Every stage owns query-scoped state: the region, the masked raster,
/// the proximity index and the weighted graph are built fresh per call
/// and discarded with it. Failures surface as typed [`Error`](crate::Error)
/// variants naming the stage that refused the query.
pub fn plan_route(
    query: &PlanQuery,
    nodes: &[RoadNode],
    links: &[RoadLink],
    grid: &RasterGrid,
) -> Result<RouteResult> {
    let region = Region::disc(query.origin, query.radius);
    if region.is_degenerate() {
        return Err(RegionError::Degenerate {
            radius: query.radius,
        }
        .into());
    }

    let masked = grid.mask_to_region(&region)?;
    let destinations = masked.extract_maxima();
    info!(
        "{} highest location(s) found within {}m",
        destinations.len(),
        query.radius
    );

    let in_region = nodes
        .iter()
        .filter(|node| region.covers_point(&node.position))
        .cloned()
        .collect::<Vec<_>>();
    debug!("{} of {} road nodes inside the region", in_region.len(), nodes.len());

    let index = ProximityIndex::build(in_region);
    let graph = WeightedGraph::build(links, &region, &masked)?;

    let route_query = RouteQuery {
        origin_candidates: index.nearest(query.origin, query.candidates),
        destinations: destinations
            .into_iter()
            .map(|point| DestinationSet {
                candidates: index.nearest(point, query.candidates),
                point,
            })
            .collect(),
    };

    Ok(find_best_route(&graph, &route_query)?)
}
