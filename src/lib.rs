#![doc = include_str!("../readme.md")]

pub mod elevation;
pub mod error;
pub mod graph;
pub mod index;
pub mod network;
pub mod plan;
pub mod region;
pub mod route;

#[doc(inline)]
pub use error::{Error, Result};
#[doc(inline)]
pub use graph::WeightedGraph;
#[doc(inline)]
pub use index::{Candidate, ProximityIndex};
#[doc(inline)]
pub use plan::{plan_route, PlanQuery};
#[doc(inline)]
pub use region::Region;
#[doc(inline)]
pub use route::{RouteQuery, RouteResult};
