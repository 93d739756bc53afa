// THEORY:
// A `Blob` is a single radial darkening region. It is never stored: the generator
// draws one, stamps it onto the `IntensityField`, and throws it away.
//
// Key properties:
// 1.  **Gaussian Falloff**: the footprint at distance `d` from the center is
//     `exp(-d² / (2σ²)) · intensity` with `σ = radius / 3`, so the visible edge sits
//     roughly at `radius` and the peak value equals `intensity`.
// 2.  **Darken Only**: the field is updated as `field · (1 - footprint)`. With
//     `intensity ≤ 1` every factor lies in [0, 1], so a blob can never lighten a cell,
//     and overlapping blobs compound toward black.
// 3.  **Order Independence**: multiplication is commutative, so the order in which
//     blobs are applied does not change the final field.

pub mod blob {
    use rand::Rng;

    /// Smallest radius a random blob may draw (inclusive).
    pub const MIN_RADIUS: u32 = 150;
    /// Upper bound for a random blob radius (exclusive).
    pub const MAX_RADIUS: u32 = 300;
    /// Smallest peak intensity a random blob may draw.
    pub const MIN_INTENSITY: f64 = 0.6;
    /// Largest peak intensity a random blob may draw.
    pub const MAX_INTENSITY: f64 = 1.0;

    /// A radial darkening region with Gaussian falloff.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct Blob {
        /// Column of the blob center, in pixels.
        pub center_x: u32,
        /// Row of the blob center, in pixels.
        pub center_y: u32,
        /// Nominal radius in pixels. The falloff standard deviation is a third of this.
        pub radius: u32,
        /// Peak darkening at the center, in [0, 1].
        pub intensity: f64,
    }

    impl Blob {
        pub fn new(center_x: u32, center_y: u32, radius: u32, intensity: f64) -> Self {
            Self {
                center_x,
                center_y,
                radius,
                intensity,
            }
        }

        /// Draws a blob for a `size × size` canvas: integer center uniform in `[0, size)`,
        /// integer radius uniform in `[MIN_RADIUS, MAX_RADIUS)`, real intensity uniform in
        /// `[MIN_INTENSITY, MAX_INTENSITY]`.
        ///
        /// `size` must be non-zero.
        pub fn random<R: Rng + ?Sized>(size: u32, rng: &mut R) -> Self {
            let center_x = rng.random_range(0..size);
            let center_y = rng.random_range(0..size);
            let radius = rng.random_range(MIN_RADIUS..MAX_RADIUS);
            let intensity = rng.random_range(MIN_INTENSITY..=MAX_INTENSITY);
            Self::new(center_x, center_y, radius, intensity)
        }

        /// Standard deviation of the Gaussian falloff.
        pub fn sigma(&self) -> f64 {
            self.radius as f64 / 3.0
        }

        /// The blob's darkening contribution at cell `(x, y)`.
        pub fn footprint_at(&self, x: u32, y: u32) -> f64 {
            let dx = x as f64 - self.center_x as f64;
            let dy = y as f64 - self.center_y as f64;
            let distance_sq = dx * dx + dy * dy;
            let sigma = self.sigma();
            (-distance_sq / (2.0 * sigma * sigma)).exp() * self.intensity
        }
    }
}

#[cfg(test)]
mod tests {

    use super::blob::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn footprint_peaks_at_center_with_full_intensity() {
        let blob = Blob::new(10, 20, 150, 0.75);
        assert!((blob.footprint_at(10, 20) - 0.75).abs() < 1e-12);
    }

    #[test]
    fn footprint_decreases_with_distance() {
        let blob = Blob::new(0, 0, 150, 1.0);
        let mut previous = blob.footprint_at(0, 0);
        for d in 1..400 {
            let current = blob.footprint_at(d, 0);
            assert!(current < previous, "footprint did not fall at distance {d}");
            previous = current;
        }
    }

    #[test]
    fn footprint_is_radially_symmetric() {
        let blob = Blob::new(50, 50, 200, 0.9);
        let a = blob.footprint_at(80, 50);
        let b = blob.footprint_at(50, 80);
        let c = blob.footprint_at(20, 50);
        assert_eq!(a, b);
        assert_eq!(a, c);
    }

    #[test]
    fn footprint_at_radius_is_three_sigma_down() {
        let blob = Blob::new(0, 0, 150, 1.0);
        let expected = (-4.5f64).exp();
        assert!((blob.footprint_at(150, 0) - expected).abs() < 1e-12);
    }

    #[test]
    fn random_blobs_stay_within_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let blob = Blob::random(64, &mut rng);
            assert!(blob.center_x < 64);
            assert!(blob.center_y < 64);
            assert!((MIN_RADIUS..MAX_RADIUS).contains(&blob.radius));
            assert!((MIN_INTENSITY..=MAX_INTENSITY).contains(&blob.intensity));
        }
    }

    #[test]
    fn random_blobs_are_reproducible_from_a_seed() {
        let a = Blob::random(512, &mut StdRng::seed_from_u64(42));
        let b = Blob::random(512, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
