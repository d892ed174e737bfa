//! High-level image operations.
//!
//! These functions combine path derivation with backend execution. They
//! decide *where* the result goes; the backend does the pixel work.

use super::backend::{BackendError, Dimensions, ImageBackend};
use super::params::{AnchorMode, FitCropParams, TargetSize};
use crate::naming;
use std::path::{Path, PathBuf};

/// Result type for image operations.
pub type Result<T> = std::result::Result<T, BackendError>;

/// Result of a completed fit-and-crop on a file.
#[derive(Debug, Clone)]
pub struct FitCropOutcome {
    pub output: PathBuf,
    pub source_dims: Dimensions,
    pub final_dims: Dimensions,
}

/// Fit-and-crop a file to the target size, writing next to the input.
///
/// The output path carries a `_{width}x{height}` suffix (see
/// [`naming::sized_output_path`]), so the input file is never overwritten.
pub fn fit_crop_file(
    backend: &impl ImageBackend,
    source: &Path,
    target: TargetSize,
    anchor: AnchorMode,
) -> Result<FitCropOutcome> {
    let output = naming::sized_output_path(source, target);

    let source_dims = backend.identify(source)?;
    let final_dims = backend.fit_crop(&FitCropParams {
        source: source.to_path_buf(),
        output: output.clone(),
        target,
        anchor,
    })?;

    Ok(FitCropOutcome {
        output,
        source_dims,
        final_dims,
    })
}
