// THEORY:
// The parser is the second stage. It opens an image, coerces it to 8-bit grayscale
// and runs every pixel through `pixel_to_multiplier`. It holds no state, so parsing
// the same unmodified file twice yields bit-identical grids.

use crate::DEFAULT_OUTPUT_PATH;
use crate::core_modules::multiplier::multiplier::MultiplierGrid;
use crate::core_modules::utils::image_helper::image_helper;
use crate::error::Result;
use image::DynamicImage;
use std::path::Path;
use tracing::info;

/// Reads the image at `path` and returns its grid of price multipliers.
///
/// Fails with `SurgeError::NotFound` if the file does not exist and with
/// `SurgeError::Decode` if it is not a readable image.
pub fn parse_price_multipliers(path: impl AsRef<Path>) -> Result<MultiplierGrid> {
    let path = path.as_ref();
    let image = image_helper::load_gray(path)?;
    let grid = MultiplierGrid::from_gray(&image);
    info!(
        path = %path.display(),
        width = grid.width(),
        height = grid.height(),
        "parsed price multipliers"
    );
    Ok(grid)
}

/// Parses the generator's default output file.
pub fn parse_default_price_multipliers() -> Result<MultiplierGrid> {
    parse_price_multipliers(DEFAULT_OUTPUT_PATH)
}

/// In-memory counterpart of [`parse_price_multipliers`].
pub fn multipliers_from_image(image: &DynamicImage) -> MultiplierGrid {
    MultiplierGrid::from_gray(&image.to_luma8())
}
