// THEORY:
// The `multiplier` module is the pricing end of the program. It turns grayscale
// pixel values into surge-price multipliers with a fixed linear map:
//
//     normalized = 1 - v / 255
//     multiplier = 1.0 + normalized * 2.0
//
// Dark pixels (dense blob overlap) land near 3.0, white pixels land on exactly 1.0.
// The map is pointwise and stateless, so the `MultiplierGrid` built from an image is
// fully determined by that image's bytes.

pub mod multiplier {
    use image::GrayImage;
    use std::fmt;

    /// Baseline price multiplier, produced by pure white pixels.
    pub const MIN_MULTIPLIER: f64 = 1.0;
    /// Maximum surge multiplier, produced by pure black pixels.
    pub const MAX_MULTIPLIER: f64 = 3.0;

    /// Grids with more cells than this print in summarized form under `{}`.
    const SUMMARY_THRESHOLD: usize = 1000;
    /// Rows and columns kept at each edge of a summarized grid.
    pub(crate) const EDGE_ITEMS: usize = 3;

    /// Converts a grayscale pixel value to a price multiplier in `[1.0, 3.0]`.
    pub fn pixel_to_multiplier(pixel_value: u8) -> f64 {
        let normalized = 1.0 - (pixel_value as f64 / 255.0);
        MIN_MULTIPLIER + normalized * (MAX_MULTIPLIER - MIN_MULTIPLIER)
    }

    /// A row-major grid of price multipliers with the same shape as its source image.
    #[derive(Debug, Clone, PartialEq)]
    pub struct MultiplierGrid {
        width: u32,
        height: u32,
        values: Vec<f64>,
    }

    impl MultiplierGrid {
        /// Maps every pixel of `image` through [`pixel_to_multiplier`].
        pub fn from_gray(image: &GrayImage) -> Self {
            let (width, height) = image.dimensions();
            let values = image.as_raw().iter().copied().map(pixel_to_multiplier).collect();
            Self {
                width,
                height,
                values,
            }
        }

        pub fn width(&self) -> u32 {
            self.width
        }

        pub fn height(&self) -> u32 {
            self.height
        }

        /// `(width, height)` of the grid.
        pub fn dimensions(&self) -> (u32, u32) {
            (self.width, self.height)
        }

        /// The raw row-major values.
        pub fn values(&self) -> &[f64] {
            &self.values
        }

        /// Multiplier at column `x`, row `y`, or `None` when out of bounds.
        pub fn get(&self, x: u32, y: u32) -> Option<f64> {
            if x >= self.width || y >= self.height {
                return None;
            }
            self.values
                .get((y as usize) * (self.width as usize) + x as usize)
                .copied()
        }

        /// Iterates over the grid one row at a time.
        pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
            // `max(1)` keeps `chunks_exact` happy for an empty grid.
            self.values.chunks_exact((self.width as usize).max(1))
        }

        pub fn min(&self) -> Option<f64> {
            self.values.iter().copied().reduce(f64::min)
        }

        pub fn max(&self) -> Option<f64> {
            self.values.iter().copied().reduce(f64::max)
        }

        pub fn mean(&self) -> Option<f64> {
            if self.values.is_empty() {
                return None;
            }
            Some(self.values.iter().sum::<f64>() / self.values.len() as f64)
        }

        fn write_row(f: &mut fmt::Formatter<'_>, row: &[f64], summarize: bool) -> fmt::Result {
            f.write_str("[")?;
            if summarize && row.len() > 2 * EDGE_ITEMS {
                write_values(f, &row[..EDGE_ITEMS])?;
                f.write_str(" ... ")?;
                write_values(f, &row[row.len() - EDGE_ITEMS..])?;
            } else {
                write_values(f, row)?;
            }
            f.write_str("]")
        }
    }

    fn write_values(f: &mut fmt::Formatter<'_>, values: &[f64]) -> fmt::Result {
        for (i, v) in values.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{v:.8}")?;
        }
        Ok(())
    }

    impl fmt::Display for MultiplierGrid {
        /// `{}` prints the grid, eliding the middle rows and columns once it has more than
        /// 1000 cells. `{:#}` always prints every value.
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            let summarize = !f.alternate() && self.values.len() > SUMMARY_THRESHOLD;
            let rows: Vec<&[f64]> = if self.width == 0 { Vec::new() } else { self.rows().collect() };

            f.write_str("[")?;
            let mut first = true;
            let mut emit = |f: &mut fmt::Formatter<'_>, row: &[f64]| -> fmt::Result {
                if !first {
                    f.write_str("\n ")?;
                }
                first = false;
                Self::write_row(f, row, summarize)
            };

            if summarize && rows.len() > 2 * EDGE_ITEMS {
                for row in &rows[..EDGE_ITEMS] {
                    emit(f, row)?;
                }
                f.write_str("\n ...")?;
                for row in &rows[rows.len() - EDGE_ITEMS..] {
                    emit(f, row)?;
                }
            } else {
                for row in &rows {
                    emit(f, row)?;
                }
            }
            f.write_str("]")
        }
    }
}
