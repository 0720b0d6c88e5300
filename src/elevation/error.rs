use geo::Point;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RasterError {
    /// Raster data length does not match the declared shape.
    #[error("raster shape mismatch: {len} samples cannot fill {width}x{height}")]
    ShapeMismatch {
        len: usize,
        width: usize,
        height: usize,
    },

    #[error("cell size must be positive, got {0}")]
    InvalidCellSize(f64),

    /// A ground coordinate inverse-transformed outside the grid.
    #[error("point {point:?} lies outside the raster extent")]
    OutsideExtent { point: Point },

    /// The sampled cell carries the no-data marker.
    #[error("no elevation data at {point:?}")]
    NoData { point: Point },

    /// Masking retained nothing usable: every cell inside the region is
    /// no-data or at/below the baseline elevation.
    #[error("masked region holds no elevation above the {baseline}m baseline ({cells} cells retained)")]
    NothingAboveBaseline { baseline: f64, cells: usize },
}
