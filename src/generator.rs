// THEORY:
// The generator is the first of the two stages. It is a straight pipeline with no
// state carried between runs:
//
// 1.  **Canvas**: start from a white `IntensityField` of `size × size`.
// 2.  **Compositing**: draw `num_blobs` random `Blob`s and multiply each one's inverted
//     footprint into the field. Darkness accumulates multiplicatively.
// 3.  **Smoothing**: blur the composite with a Gaussian of σ = `blur_radius / 10`.
// 4.  **Quantization**: clamp, scale to 0..=255 and store as 8-bit grayscale.
// 5.  **Persistence**: write the PNG to `output_path`, overwriting what is there.
//
// Randomness is always injected. Callers pass their own `Rng`, a seed, or let the
// convenience entry point seed from the OS.

use crate::DEFAULT_OUTPUT_PATH;
use crate::core_modules::blob::blob::Blob;
use crate::core_modules::intensity_field::intensity_field::IntensityField;
use crate::core_modules::utils::image_helper::image_helper;
use crate::error::{Result, SurgeError};
use image::GrayImage;
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::path::PathBuf;
use tracing::{debug, info};

/// Ratio between the configured blur radius and the Gaussian standard deviation.
const BLUR_RADIUS_TO_SIGMA: f64 = 10.0;

/// Configuration for the blob image generator.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Width and height of the square canvas in pixels.
    pub size: u32,
    /// How many random blobs to composite.
    pub num_blobs: u32,
    /// Blur strength. The Gaussian standard deviation is a tenth of this.
    pub blur_radius: f64,
    /// Where the PNG is written.
    pub output_path: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            size: 512,
            num_blobs: 10,
            blur_radius: 30.0,
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(SurgeError::InvalidConfig("size must be positive".into()));
        }
        if !(self.blur_radius.is_finite() && self.blur_radius > 0.0) {
            return Err(SurgeError::InvalidConfig(format!(
                "blur_radius must be a positive number, got {}",
                self.blur_radius
            )));
        }
        Ok(())
    }

    /// Standard deviation of the post-composite blur.
    pub fn blur_sigma(&self) -> f64 {
        self.blur_radius / BLUR_RADIUS_TO_SIGMA
    }
}

/// Builds the un-blurred field: a white canvas darkened by `num_blobs` random blobs.
pub fn composite_blobs<R: Rng + ?Sized>(config: &GeneratorConfig, rng: &mut R) -> Result<IntensityField> {
    config.validate()?;

    let mut field = IntensityField::white(config.size);
    for i in 0..config.num_blobs {
        let blob = Blob::random(config.size, rng);
        debug!(
            index = i,
            x = blob.center_x,
            y = blob.center_y,
            radius = blob.radius,
            intensity = blob.intensity,
            "compositing blob"
        );
        field.apply_blob(&blob);
    }
    Ok(field)
}

/// Runs the whole generator in memory and returns the quantized image without
/// touching the filesystem.
pub fn render_blob_image<R: Rng + ?Sized>(config: &GeneratorConfig, rng: &mut R) -> Result<GrayImage> {
    let field = composite_blobs(config, rng)?;
    Ok(field.blurred(config.blur_sigma()).quantize())
}

/// Renders an image with `rng` and writes it to `config.output_path`.
pub fn generate_blob_image_with_rng<R: Rng + ?Sized>(
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<GrayImage> {
    info!(
        size = config.size,
        num_blobs = config.num_blobs,
        blur_radius = config.blur_radius,
        "generating blob image"
    );
    let image = render_blob_image(config, rng)?;
    image_helper::save_gray_png(&config.output_path, &image)?;
    info!(path = %config.output_path.display(), "wrote blob image");
    Ok(image)
}

/// Renders and writes an image using an OS-seeded generator.
pub fn generate_blob_image(config: &GeneratorConfig) -> Result<GrayImage> {
    let mut rng = StdRng::from_os_rng();
    generate_blob_image_with_rng(config, &mut rng)
}

/// Renders and writes an image that is fully reproducible from `seed`.
pub fn generate_blob_image_seeded(config: &GeneratorConfig, seed: u64) -> Result<GrayImage> {
    let mut rng = StdRng::seed_from_u64(seed);
    generate_blob_image_with_rng(config, &mut rng)
}
