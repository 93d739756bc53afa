// THEORY:
// This file is the main entry point for the `surge_map` library crate.
// It exposes the two stages of the program as its public API:
//
// 1.  **Generator**: composites random Gaussian "blobs" onto a white canvas, blurs
//     the result and writes it out as a grayscale PNG.
// 2.  **Parser**: reads that PNG back and maps every pixel to a surge-price
//     multiplier in [1.0, 3.0].
//
// The stages share nothing but the image file. Both also have an in-memory path
// (`render_blob_image` / `multipliers_from_image`) for callers that want to skip
// the disk round trip. The numeric building blocks live in `core_modules`.

pub mod core_modules;
pub mod error;
pub mod generator;
pub mod parser;

pub use core_modules::blob::blob::Blob;
pub use core_modules::intensity_field::intensity_field::IntensityField;
pub use core_modules::multiplier::multiplier::{MultiplierGrid, pixel_to_multiplier};
pub use error::{Result, SurgeError};
pub use generator::{
    GeneratorConfig, composite_blobs, generate_blob_image, generate_blob_image_seeded,
    generate_blob_image_with_rng, render_blob_image,
};
pub use parser::{multipliers_from_image, parse_default_price_multipliers, parse_price_multipliers};

/// Where the generator writes its image and where the parser looks by default.
pub const DEFAULT_OUTPUT_PATH: &str = "random_blobs.png";
