//! Pure Rust image processing backend — zero external dependencies.
//!
//! Everything is statically linked into the binary.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (JPEG, PNG, TIFF, WebP) | `image` crate (pure Rust decoders) |
//! | Identify | `image::image_dimensions` (header read, no full decode) |
//! | Cover resize | `image::DynamicImage::resize_exact` with `Lanczos3` filter |
//! | Crop | `image::DynamicImage::crop_imm` |
//! | Encode | `image::DynamicImage::save` (format inferred from extension) |

use super::backend::{BackendError, Dimensions, ImageBackend};
use super::calculations::{cover_dimensions, crop_rectangle};
use super::params::{AnchorMode, FitCropParams, TargetSize};
use image::imageops::FilterType;
use image::{DynamicImage, ImageReader};
use std::path::Path;

/// Pure Rust backend using the `image` crate ecosystem.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Load and decode an image from disk.
fn load_image(path: &Path) -> Result<DynamicImage, BackendError> {
    ImageReader::open(path)
        .map_err(BackendError::Io)?
        .decode()
        .map_err(|e| BackendError::Decode {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
}

/// Save an image, inferring the output format from the path's extension.
fn save_image(img: &DynamicImage, path: &Path) -> Result<(), BackendError> {
    img.save(path).map_err(|e| BackendError::Encode {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// In-memory fit-and-crop: cover resize with Lanczos3, then anchored crop.
///
/// The result is exactly `target` pixels. The aspect mismatch between source
/// and target is absorbed by cropping, never by stretching.
fn fit_crop_pixels(img: &DynamicImage, target: TargetSize, anchor: AnchorMode) -> DynamicImage {
    let source = (img.width(), img.height());
    let (new_w, new_h) = cover_dimensions(source, (target.width, target.height));

    let resized = img.resize_exact(new_w, new_h, FilterType::Lanczos3);

    let rect = crop_rectangle((new_w, new_h), (target.width, target.height), anchor);
    resized.crop_imm(rect.left, rect.top, rect.width, rect.height)
}

impl ImageBackend for RustBackend {
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError> {
        let (width, height) =
            image::image_dimensions(path).map_err(|e| BackendError::Decode {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        Ok(Dimensions { width, height })
    }

    fn fit_crop(&self, params: &FitCropParams) -> Result<Dimensions, BackendError> {
        let img = load_image(&params.source)?;
        let cropped = fit_crop_pixels(&img, params.target, params.anchor);
        save_image(&cropped, &params.output)?;
        Ok(Dimensions {
            width: cropped.width(),
            height: cropped.height(),
        })
    }
}
