//! Parameter types for image operations.
//!
//! These structs describe *what* to do, not *how* to do it. They are the
//! interface between the high-level [`operations`](super::operations) module
//! (which decides what file to write where) and the
//! [`backend`](super::backend) (which does the actual pixel work). This
//! separation allows swapping backends (e.g. for testing with a mock) without
//! changing operation logic.
//!
//! ## Types
//!
//! - [`TargetSize`] — Exact output dimensions in pixels. Both must be positive;
//!   enforced at the CLI and config boundaries.
//! - [`AnchorMode`] — Which region of the cover-resized image survives the crop.
//! - [`FitCropParams`] — Full specification for one fit-and-crop: source,
//!   output path, target dimensions, anchor.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

/// Exact output dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetSize {
    pub width: u32,
    pub height: u32,
}

impl TargetSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for TargetSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Error for anchor strings that are neither `topleft` nor `center`.
///
/// Only reachable at the parsing boundary (CLI argument or config file);
/// everywhere else [`AnchorMode`] is matched exhaustively.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid anchor mode '{0}' (expected 'topleft' or 'center')")]
pub struct InvalidAnchorMode(pub String);

/// Which region of the cover-resized image is kept after cropping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnchorMode {
    /// Crop anchored at the resized image's top-left corner.
    TopLeft,
    /// Crop centered in the resized image, odd leftover pixel biased top-left.
    #[default]
    Center,
}

impl FromStr for AnchorMode {
    type Err = InvalidAnchorMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "topleft" => Ok(Self::TopLeft),
            "center" => Ok(Self::Center),
            other => Err(InvalidAnchorMode(other.to_string())),
        }
    }
}

impl fmt::Display for AnchorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TopLeft => write!(f, "topleft"),
            Self::Center => write!(f, "center"),
        }
    }
}

/// Parameters for a fit-and-crop operation (cover resize + anchored crop).
#[derive(Debug, Clone, PartialEq)]
pub struct FitCropParams {
    pub source: PathBuf,
    pub output: PathBuf,
    pub target: TargetSize,
    pub anchor: AnchorMode,
}
