//! Screens a blood smear microscopy image for parasite-like objects.
//!
//! The crate runs a single forward pipeline over an in-memory RGB image:
//! adaptive binarization, outer-contour extraction, a roundness filter, and
//! annotation of the surviving boundaries. [`detect`] returns the annotated
//! copy together with the accepted-object count, and [`estimate_density`]
//! converts that count into clinically styled density figures.
//!
//! Image decoding and on-screen rendering are the caller's responsibility;
//! every invocation is a pure, deterministic function of its input and is
//! safe to run concurrently for independent images.

pub mod annotate;
pub mod contours;
pub mod density;
pub mod error;
pub mod threshold;

pub use contours::FilterParams;
pub use density::{DensityMetrics, estimate_density};
pub use error::{Result, ScreenError};

use image::RgbImage;
use tracing::debug;

/// Output of one screening pass over a single image.
///
/// Created fresh per [`detect`] call and never mutated afterward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detection {
    /// Copy of the input with each accepted boundary overdrawn in green.
    pub annotated: RgbImage,
    /// Number of contours that passed the roundness filter.
    pub count: usize,
}

/// Screens an image with the default [`FilterParams`].
///
/// See [`detect_with_params`] for the stage breakdown and failure modes.
pub fn detect(image: &RgbImage) -> Result<Detection> {
    detect_with_params(image, &FilterParams::default())
}

/// Screens an image for round, parasite-like objects.
///
/// Stages, in order: luma-weighted grayscale conversion, inverted adaptive
/// thresholding ([`threshold::binarize`]), outer-contour extraction
/// ([`contours::outer_contours`]), the roundness filter
/// ([`contours::retain_round_in_place`]), and annotation
/// ([`annotate::draw_outlines`]).
///
/// The annotated image has the same dimensions and channel layout as the
/// input. Either the full result is produced or the call fails; no partial
/// results are returned.
///
/// # Errors
///
/// [`ScreenError::InvalidImage`] when the input has zero area.
pub fn detect_with_params(image: &RgbImage, params: &FilterParams) -> Result<Detection> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(ScreenError::InvalidImage { width, height });
    }

    let gray = image::imageops::grayscale(image);
    let mask = threshold::binarize(&gray);

    let mut candidates = contours::outer_contours(&mask);
    debug!(total = candidates.len(), "extracted outer contours");

    contours::retain_round_in_place(&mut candidates, params);
    debug!(kept = candidates.len(), "applied roundness filter");

    let annotated = annotate::draw_outlines(image, &candidates);
    Ok(Detection {
        annotated,
        count: candidates.len(),
    })
}
