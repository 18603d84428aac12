/* Copyright 2020 @TwoCookingMice */

use std::fmt;
use std::path::Path;

use exr::prelude::write_rgb_file;

use crate::math::bitmap::Bitmap;

#[derive(Debug)]
pub enum ImageWriteError {
    Png(image::ImageError),
    Exr(exr::error::Error),
    UnsupportedFormat(String),
}

impl From<image::ImageError> for ImageWriteError {
    fn from(err: image::ImageError) -> Self {
        ImageWriteError::Png(err)
    }
}

impl From<exr::error::Error> for ImageWriteError {
    fn from(err: exr::error::Error) -> Self {
        ImageWriteError::Exr(err)
    }
}

impl fmt::Display for ImageWriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageWriteError::Png(err) => write!(f, "png error: {}", err),
            ImageWriteError::Exr(err) => write!(f, "exr error: {}", err),
            ImageWriteError::UnsupportedFormat(ext) => write!(f, "unsupported image format: {}", ext),
        }
    }
}

impl std::error::Error for ImageWriteError {}

// Write EXR Image to file
pub fn write_exr_to_file<P: AsRef<Path>>(image: &Bitmap, file_path: P) -> Result<(), ImageWriteError> {
    let width = image.width();
    write_rgb_file(file_path.as_ref(), width, image.height(), |x, y| {
        let c = image[(x, y)];
        (c.x, c.y, c.z)
    })?;
    Ok(())
}

pub fn write_png_to_file<P: AsRef<Path>>(image: &Bitmap, file_path: P) -> Result<(), ImageWriteError> {
    image::save_buffer(file_path.as_ref(),
                       &image.to_rgb8(),
                       image.width() as u32,
                       image.height() as u32,
                       image::ColorType::Rgb8)?;
    Ok(())
}

/// Picks the encoder from the file extension: `.exr` or `.png`.
pub fn write_image<P: AsRef<Path>>(image: &Bitmap, file_path: P) -> Result<(), ImageWriteError> {
    let path = file_path.as_ref();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    log::info!("Starting writing image: {}.", path.display());
    match ext.as_str() {
        "exr" => write_exr_to_file(image, path)?,
        "png" => write_png_to_file(image, path)?,
        _ => return Err(ImageWriteError::UnsupportedFormat(ext)),
    }
    log::info!("Image written to: {} ({}x{}).", path.display(), image.width(), image.height());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::constants::Vector3f;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("patchlab_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_png_round_trip_dimensions() {
        let mut bmp = Bitmap::new(4, 3);
        bmp[(1, 2)] = Vector3f::new(1.0, 0.0, 0.0);
        let path = temp_path("frame.png");
        write_image(&bmp, &path).expect("png written");

        let loaded = image::open(&path).expect("png readable").to_rgb8();
        assert_eq!(loaded.dimensions(), (4, 3));
        assert_eq!(loaded.get_pixel(1, 2).0, [255, 0, 0]);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_unknown_extension_is_rejected() {
        let bmp = Bitmap::new(2, 2);
        match write_image(&bmp, temp_path("frame.tiff")) {
            Err(ImageWriteError::UnsupportedFormat(ext)) => assert_eq!(ext, "tiff"),
            other => panic!("unexpected result: {:?}", other.map(|_| ())),
        }
    }
}
