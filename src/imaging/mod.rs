//! Image processing — pure Rust, zero external dependencies.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Identify** | `image::image_dimensions` |
//! | **Cover resize** | `resize_exact` with Lanczos3 |
//! | **Crop** | `crop_imm` at the anchor rectangle |
//! | **Encode** | `DynamicImage::save`, format from extension |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for dimension math (unit testable)
//! - **Parameters**: Data structures describing image operations
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]
//! - **Operations**: High-level functions combining naming + backend

pub mod backend;
mod calculations;
pub mod operations;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, Dimensions, ImageBackend};
pub use operations::{FitCropOutcome, fit_crop_file};
pub use params::{AnchorMode, FitCropParams, InvalidAnchorMode, TargetSize};
pub use rust_backend::RustBackend;
