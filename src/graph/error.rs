use thiserror::Error;

use crate::elevation::RasterError;
use crate::network::LinkId;

#[derive(Error, Debug)]
pub enum GraphError {
    /// A link passed the region filter but one of its endpoints could
    /// not be sampled; the masking and weighting transforms disagree.
    #[error("failed to sample elevation for link {link}: {source}")]
    EndpointSample { link: LinkId, source: RasterError },

    /// A link's polyline holds fewer than two coordinates.
    #[error("link {0} has no usable geometry")]
    DegenerateLink(LinkId),
}
