use thiserror::Error;

use crate::elevation::RasterError;
use crate::graph::GraphError;
use crate::region::RegionError;
use crate::route::RouteError;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error; one variant per stage of the pipeline so callers
/// can tell which stage refused the query.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Region(#[from] RegionError),

    #[error(transparent)]
    Raster(#[from] RasterError),

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Route(#[from] RouteError),
}
