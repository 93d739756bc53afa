// Runs the multiplier parser against the default blob image and prints the grid.
// Flip `RUN_GENERATOR` to regenerate `random_blobs.png` first.

use surge_map::{
    DEFAULT_OUTPUT_PATH, GeneratorConfig, generate_blob_image, parse_default_price_multipliers,
};
use tracing_subscriber::EnvFilter;

const RUN_GENERATOR: bool = false;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    if RUN_GENERATOR {
        generate_blob_image(&GeneratorConfig::default())?;
    }

    let multipliers = parse_default_price_multipliers()?;
    let origin = multipliers
        .get(0, 0)
        .ok_or_else(|| anyhow::anyhow!("{DEFAULT_OUTPUT_PATH} contains no pixels"))?;

    println!("Price multiplier at coordinate (0,0): {origin:.2}");
    println!("{multipliers:#}");

    Ok(())
}
