// THEORY:
// The `IntensityField` is the generator's working canvas: a square grid of
// brightness values where 1.0 is white and 0.0 is black. It starts fully white,
// is darkened in place by each `Blob`, blurred once, and finally quantized into an
// 8-bit grayscale image.
//
// Like the other core containers it is deliberately "dumb". It knows how to apply
// a blob to itself and how to hand itself to the blur and quantization steps, but
// it has no idea where blobs come from or where the image ends up.
//
// Storage is a single-precision `Luma<f32>` buffer so the blur can run directly
// through `imageproc`. Its Gaussian clamps to the nearest edge pixel at the borders
// and truncates the kernel at a radius of ⌈2σ⌉.

pub mod intensity_field {
    use crate::core_modules::blob::blob::Blob;
    use image::{GrayImage, ImageBuffer, Luma};
    use imageproc::filter::gaussian_blur_f32;

    /// Single-channel float image backing the field.
    pub type FieldBuffer = ImageBuffer<Luma<f32>, Vec<f32>>;

    /// Absorbs single-precision error in the blur's kernel sum so that a pure white
    /// field still truncates to 255. Far below one quantization step.
    const LEVEL_EPSILON: f32 = 1e-3;

    /// A square grid of brightness values.
    #[derive(Debug, Clone, PartialEq)]
    pub struct IntensityField {
        buffer: FieldBuffer,
    }

    impl IntensityField {
        /// A `size × size` field of pure white (all 1.0).
        pub fn white(size: u32) -> Self {
            Self {
                buffer: FieldBuffer::from_pixel(size, size, Luma([1.0])),
            }
        }

        /// Side length of the field in cells.
        pub fn size(&self) -> u32 {
            self.buffer.width()
        }

        /// The raw row-major values.
        pub fn values(&self) -> &[f32] {
            self.buffer.as_raw()
        }

        /// Brightness at column `x`, row `y`, or `None` when out of bounds.
        pub fn get(&self, x: u32, y: u32) -> Option<f32> {
            self.buffer.get_pixel_checked(x, y).map(|p| p.0[0])
        }

        /// Darkens the field with `blob`: `field ← field · (1 - footprint)`.
        pub fn apply_blob(&mut self, blob: &Blob) {
            for (x, y, pixel) in self.buffer.enumerate_pixels_mut() {
                pixel.0[0] *= (1.0 - blob.footprint_at(x, y)) as f32;
            }
        }

        /// Returns a copy blurred with an isotropic Gaussian of standard deviation `sigma`.
        ///
        /// A non-positive or non-finite `sigma` returns an unblurred copy.
        pub fn blurred(&self, sigma: f64) -> Self {
            if !(sigma.is_finite() && sigma > 0.0) || self.buffer.is_empty() {
                return self.clone();
            }
            Self {
                buffer: gaussian_blur_f32(&self.buffer, sigma as f32),
            }
        }

        /// Converts the field into an 8-bit grayscale image.
        ///
        /// Values are clamped to [0, 1] before scaling so blur overshoot can never wrap
        /// around, then truncated to a level.
        pub fn quantize(&self) -> GrayImage {
            GrayImage::from_fn(self.size(), self.size(), |x, y| {
                Luma([to_level(self.buffer.get_pixel(x, y).0[0])])
            })
        }
    }

    pub(crate) fn to_level(value: f32) -> u8 {
        (value.clamp(0.0, 1.0) * 255.0 + LEVEL_EPSILON) as u8
    }
}
