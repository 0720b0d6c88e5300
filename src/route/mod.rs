//! Multi-candidate best-route search over the weighted graph.

pub mod error;
mod result;
mod search;

#[cfg(test)]
mod test;

#[doc(inline)]
pub use error::{CandidateEnd, RouteError};
#[doc(inline)]
pub use result::{PairFailure, RouteResult};
#[doc(inline)]
pub use search::{find_best_route, DestinationSet, RouteQuery};
