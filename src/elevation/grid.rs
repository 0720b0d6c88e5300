use geo::{BoundingRect, Coord, Intersects, Point, Rect};
use log::debug;

use crate::elevation::error::RasterError;
use crate::region::Region;

/// Elevation at or below which a cell cannot be a destination. The
/// source rasters are relative to mean sea level.
pub const BASELINE_ELEVATION: f64 = 0.0;

/// North-up affine transform between raster (column, row) space and
/// ground coordinates.
///
/// Cells are square and uniform; `origin` is the outer corner of cell
/// (0, 0), the grid's top-left. Constant for the grid's lifetime, and
/// shared between the masking and the weighting passes so both resolve
/// coordinates identically.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridTransform {
    origin: Coord,
    cell_size: f64,
}

impl GridTransform {
    pub fn new(origin: Coord, cell_size: f64) -> Result<Self, RasterError> {
        if cell_size <= 0.0 {
            return Err(RasterError::InvalidCellSize(cell_size));
        }

        Ok(Self { origin, cell_size })
    }

    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Ground coordinate of the outer (top-left) corner of a cell.
    pub fn ground(&self, col: usize, row: usize) -> Point {
        Point::new(
            self.origin.x + col as f64 * self.cell_size,
            self.origin.y - row as f64 * self.cell_size,
        )
    }

    /// Ground coordinate of the centre of a cell: the corner shifted by
    /// half a cell east and south.
    pub fn cell_center(&self, col: usize, row: usize) -> Point {
        let corner = self.ground(col, row);
        Point::new(
            corner.x() + self.cell_size / 2.0,
            corner.y() - self.cell_size / 2.0,
        )
    }

    /// Inverse transform: the (col, row) of the cell whose square holds
    /// `point`. Unbounded; callers check the result against the extent.
    pub fn cell_of(&self, point: &Point) -> (i64, i64) {
        let col = ((point.x() - self.origin.x) / self.cell_size).floor() as i64;
        let row = ((self.origin.y - point.y()) / self.cell_size).floor() as i64;
        (col, row)
    }
}

/// A rectangular elevation raster in row-major order with a constant
/// affine transform. Cells equal to the no-data marker are excluded
/// from every elevation computation.
#[derive(Clone, Debug)]
pub struct RasterGrid {
    data: Vec<f64>,
    width: usize,
    height: usize,
    nodata: f64,
    transform: GridTransform,
}

impl RasterGrid {
    pub fn new(
        data: Vec<f64>,
        width: usize,
        height: usize,
        nodata: f64,
        transform: GridTransform,
    ) -> Result<Self, RasterError> {
        if data.len() != width * height {
            return Err(RasterError::ShapeMismatch {
                len: data.len(),
                width,
                height,
            });
        }

        Ok(Self {
            data,
            width,
            height,
            nodata,
            transform,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn nodata(&self) -> f64 {
        self.nodata
    }

    pub fn transform(&self) -> &GridTransform {
        &self.transform
    }

    fn is_nodata(&self, value: f64) -> bool {
        value == self.nodata || (value.is_nan() && self.nodata.is_nan())
    }

    /// Value of a cell, `None` outside the extent or on no-data.
    pub fn value_at(&self, col: usize, row: usize) -> Option<f64> {
        if col >= self.width || row >= self.height {
            return None;
        }

        let value = self.data[row * self.width + col];
        (!self.is_nodata(value)).then_some(value)
    }

    /// Elevation at a ground coordinate, resolved through the inverse
    /// transform.
    pub fn sample_at(&self, point: &Point) -> Result<f64, RasterError> {
        let (col, row) = self.transform.cell_of(point);
        if col < 0 || row < 0 || col as usize >= self.width || row as usize >= self.height {
            return Err(RasterError::OutsideExtent { point: *point });
        }

        let value = self.data[row as usize * self.width + col as usize];
        if self.is_nodata(value) {
            return Err(RasterError::NoData { point: *point });
        }

        Ok(value)
    }

    /// Clips the raster to the bounding extent of `region`, writing
    /// no-data into every cell whose square does not intersect the
    /// region polygon.
    ///
    /// Partially covered cells are kept (all-touched), so peaks adjacent
    /// to the region boundary are not lost. Fails when every retained
    /// cell is no-data or at/below [`BASELINE_ELEVATION`], signalling
    /// that the region holds no viable destination.
    pub fn mask_to_region(&self, region: &Region) -> Result<RasterGrid, RasterError> {
        let nothing = |cells| RasterError::NothingAboveBaseline {
            baseline: BASELINE_ELEVATION,
            cells,
        };

        let bounds = region.polygon().bounding_rect().ok_or_else(|| nothing(0))?;

        let (col_min, row_min) = self
            .transform
            .cell_of(&Point::new(bounds.min().x, bounds.max().y));
        let (col_max, row_max) = self
            .transform
            .cell_of(&Point::new(bounds.max().x, bounds.min().y));

        if col_max < 0
            || row_max < 0
            || col_min >= self.width as i64
            || row_min >= self.height as i64
        {
            return Err(nothing(0));
        }

        let col0 = col_min.max(0) as usize;
        let row0 = row_min.max(0) as usize;
        let col1 = col_max.min(self.width as i64 - 1) as usize;
        let row1 = row_max.min(self.height as i64 - 1) as usize;

        let width = col1 - col0 + 1;
        let height = row1 - row0 + 1;

        let mut data = vec![self.nodata; width * height];
        let mut kept = 0usize;
        let mut above_baseline = false;

        for row in row0..=row1 {
            for col in col0..=col1 {
                let value = self.data[row * self.width + col];
                if self.is_nodata(value) {
                    continue;
                }

                let square = Rect::new(
                    self.transform.ground(col, row).0,
                    self.transform.ground(col + 1, row + 1).0,
                );
                if !square.to_polygon().intersects(region.polygon()) {
                    continue;
                }

                data[(row - row0) * width + (col - col0)] = value;
                kept += 1;
                above_baseline |= value > BASELINE_ELEVATION;
            }
        }

        if kept == 0 || !above_baseline {
            return Err(nothing(kept));
        }

        debug!("Masked raster to {width}x{height} window, {kept} cells retained");

        Ok(RasterGrid {
            data,
            width,
            height,
            nodata: self.nodata,
            transform: GridTransform {
                origin: self.transform.ground(col0, row0).0,
                cell_size: self.transform.cell_size,
            },
        })
    }

    /// Ground centres of every cell holding the grid's maximum value,
    /// in row-major scan order. Deterministic: the same grid yields the
    /// identical sequence on every call, and equal maxima are all
    /// returned.
    pub fn extract_maxima(&self) -> Vec<Point> {
        let max = self
            .data
            .iter()
            .filter(|&&value| !self.is_nodata(value))
            .fold(f64::NEG_INFINITY, |acc, &value| acc.max(value));

        if max == f64::NEG_INFINITY {
            return Vec::new();
        }

        self.data
            .iter()
            .enumerate()
            .filter(|&(_, &value)| !self.is_nodata(value) && value == max)
            .map(|(i, _)| self.transform.cell_center(i % self.width, i / self.width))
            .collect()
    }
}
