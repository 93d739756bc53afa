pub mod image_helper {
    use crate::error::{Result, SurgeError};
    use image::codecs::png::PngEncoder;
    use image::{GrayImage, ImageEncoder, ImageError, ImageReader};
    use std::fs::File;
    use std::io::{self, BufWriter, Write};
    use std::path::Path;

    /// Writes `image` as a single-channel 8-bit PNG, replacing any existing file.
    pub fn save_gray_png(path: impl AsRef<Path>, image: &GrayImage) -> Result<()> {
        let output = File::create(path.as_ref())?;
        let mut writer = BufWriter::new(output);
        let encoder = PngEncoder::new(&mut writer);

        let (width, height) = image.dimensions();
        encoder
            .write_image(image.as_raw(), width, height, image::ExtendedColorType::L8)
            .map_err(|e| match e {
                ImageError::IoError(io) => SurgeError::Io(io),
                other => SurgeError::Encode(other),
            })?;
        writer.flush()?;

        Ok(())
    }

    /// Opens any supported image and converts it to 8-bit grayscale.
    pub fn load_gray(path: impl AsRef<Path>) -> Result<GrayImage> {
        let path = path.as_ref();
        let reader = ImageReader::open(path)
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => SurgeError::NotFound(path.to_path_buf()),
                _ => SurgeError::Io(e),
            })?
            .with_guessed_format()?;

        let decoded = reader.decode().map_err(|source| SurgeError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(decoded.into_luma8())
    }
}

#[cfg(test)]
mod tests {

    use super::image_helper::*;
    use crate::error::SurgeError;
    use image::{GrayImage, Luma, Rgb, RgbImage};

    #[test]
    fn save_white_file() {
        let dir = tempfile::tempdir().expect("Error creating temp dir.");
        let path = dir.path().join("white_file.png");
        let image = GrayImage::from_pixel(50, 50, Luma([255]));

        save_gray_png(&path, &image).expect("Error Saving File.");
        let loaded = load_gray(&path).expect("Error Loading File.");

        assert_eq!(loaded, image);
    }

    #[test]
    fn save_gradient_file() {
        let dir = tempfile::tempdir().expect("Error creating temp dir.");
        let path = dir.path().join("gradient_file.png");
        let width = 300u32;
        let height = 7u32;
        let image = GrayImage::from_fn(width, height, |x, _| Luma([(x % 256) as u8]));

        save_gray_png(&path, &image).expect("Error Saving File.");
        let loaded = load_gray(&path).expect("Error Loading File.");

        assert_eq!(loaded.dimensions(), (width, height));
        assert_eq!(loaded, image);
    }

    #[test]
    fn saved_file_is_single_channel() {
        let dir = tempfile::tempdir().expect("Error creating temp dir.");
        let path = dir.path().join("gray.png");
        save_gray_png(&path, &GrayImage::new(4, 4)).expect("Error Saving File.");

        let decoded = image::open(&path).expect("Error Loading File.");
        assert_eq!(decoded.color(), image::ColorType::L8);
    }

    #[test]
    fn save_overwrites_existing_file() {
        let dir = tempfile::tempdir().expect("Error creating temp dir.");
        let path = dir.path().join("overwrite.png");
        save_gray_png(&path, &GrayImage::from_pixel(8, 8, Luma([0]))).expect("first save");
        save_gray_png(&path, &GrayImage::from_pixel(2, 3, Luma([9]))).expect("second save");

        let loaded = load_gray(&path).expect("Error Loading File.");
        assert_eq!(loaded.dimensions(), (2, 3));
        assert!(loaded.pixels().all(|p| p.0[0] == 9));
    }

    #[test]
    fn color_images_are_converted_to_gray() {
        let dir = tempfile::tempdir().expect("Error creating temp dir.");
        let path = dir.path().join("color.png");
        RgbImage::from_pixel(3, 3, Rgb([255, 255, 255]))
            .save(&path)
            .expect("Error Saving File.");

        let loaded = load_gray(&path).expect("Error Loading File.");
        assert_eq!(loaded.dimensions(), (3, 3));
        assert!(loaded.pixels().all(|p| p.0[0] == 255));
    }

    #[test]
    fn full_device_write_is_an_io_error() {
        let full = std::path::Path::new("/dev/full");
        if !full.exists() {
            return;
        }
        // Noise keeps the PNG stream large enough to spill past the write buffer.
        let mut state = 0x2545_F491u32;
        let image = GrayImage::from_fn(512, 512, |_, _| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            Luma([state as u8])
        });

        let err = save_gray_png(full, &image).unwrap_err();
        assert!(matches!(err, SurgeError::Io(_)), "got {err:?}");
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().expect("Error creating temp dir.");
        let err = load_gray(dir.path().join("nope.png")).unwrap_err();
        assert!(matches!(err, SurgeError::NotFound(_)));
    }

    #[test]
    fn garbage_file_is_a_decode_error() {
        let dir = tempfile::tempdir().expect("Error creating temp dir.");
        let path = dir.path().join("garbage.png");
        std::fs::write(&path, b"definitely not an image").expect("Error writing file.");

        let err = load_gray(&path).unwrap_err();
        assert!(matches!(err, SurgeError::Decode { .. }));
    }
}
