use std::fmt;

use thiserror::Error;

use crate::network::NodeId;

/// Which end of the search ran out of candidates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CandidateEnd {
    Origin,
    Destination,
}

impl fmt::Display for CandidateEnd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CandidateEnd::Origin => "origin",
            CandidateEnd::Destination => "destination",
        })
    }
}

#[derive(Error, Debug)]
pub enum RouteError {
    /// The proximity stage produced nothing to search from or to; the
    /// sweep never starts.
    #[error("no {0} candidates inside the region")]
    NoCandidates(CandidateEnd),

    /// Every candidate pairing failed.
    #[error("no route found across {attempted} candidate pairs")]
    NoRouteFound { attempted: usize },

    /// The winning path names two adjacent nodes with no connecting
    /// edge. Construction guarantees one per direction, so reaching
    /// this is a graph-construction bug, not a routing outcome.
    #[error("winning path has no edge between {from} and {to}")]
    EdgeGap { from: NodeId, to: NodeId },
}
