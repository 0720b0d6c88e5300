//! Elevation sampling: raster masking, peak extraction and
//! point-at-coordinate lookups through a shared affine transform.

pub mod error;
mod grid;


#[doc(inline)]
pub use error::RasterError;
#[doc(inline)]
pub use grid::{GridTransform, RasterGrid, BASELINE_ELEVATION};
