//! Pure calculation functions for image dimensions.
//!
//! All functions here are pure and testable without any I/O or images.

use super::params::AnchorMode;

/// Calculate dimensions that cover a target area (resize before crop).
///
/// Applies the smallest uniform scale that makes both dimensions at least as
/// large as the target, preserving the source aspect ratio. One dimension
/// matches the target (up to rounding), the other may exceed it.
///
/// Scaled dimensions are floored, then clamped up to the target: the floor
/// can land one pixel under the target in the ratio-defining axis when the
/// exact product falls fractionally below an integer, and a crop from an
/// undersized image would read out of bounds.
///
/// # Arguments
/// * `source` - Original image dimensions (width, height)
/// * `target` - Target area dimensions (width, height)
///
/// # Returns
/// * `(width, height)` - Cover dimensions, each >= its target dimension
pub fn cover_dimensions(source: (u32, u32), target: (u32, u32)) -> (u32, u32) {
    let (src_w, src_h) = source;
    let (tgt_w, tgt_h) = target;

    let ratio = (tgt_w as f64 / src_w as f64).max(tgt_h as f64 / src_h as f64);

    let w = (src_w as f64 * ratio) as u32;
    let h = (src_h as f64 * ratio) as u32;
    (w.max(tgt_w), h.max(tgt_h))
}

/// Region of the resized image kept after cropping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRect {
    /// Left edge offset into the resized image.
    pub left: u32,
    /// Top edge offset into the resized image.
    pub top: u32,
    pub width: u32,
    pub height: u32,
}

/// Position the target-sized crop within the resized image.
///
/// - [`AnchorMode::TopLeft`]: the crop sits at `(0, 0)` regardless of the
///   resized dimensions.
/// - [`AnchorMode::Center`]: the crop is centered with integer (floor)
///   division, biasing the crop toward the top-left when the excess is odd.
///
/// Callers pass dimensions from [`cover_dimensions`], which are at least the
/// target; offsets saturate to zero rather than underflow otherwise.
///
/// # Arguments
/// * `resized` - Resized image dimensions (width, height)
/// * `target` - Target crop dimensions (width, height)
/// * `anchor` - Where to place the crop
pub fn crop_rectangle(resized: (u32, u32), target: (u32, u32), anchor: AnchorMode) -> CropRect {
    let (res_w, res_h) = resized;
    let (tgt_w, tgt_h) = target;

    let (left, top) = match anchor {
        AnchorMode::TopLeft => (0, 0),
        AnchorMode::Center => (
            res_w.saturating_sub(tgt_w) / 2,
            res_h.saturating_sub(tgt_h) / 2,
        ),
    };

    CropRect {
        left,
        top,
        width: tgt_w,
        height: tgt_h,
    }
}
