use image::{GrayImage, Luma};
use imageproc::filter::gaussian_blur_f32;

/// Side length in pixels of the local neighborhood window the threshold
/// reference approximates. Must be odd.
pub const BLOCK_SIZE: u32 = 11;

/// Constant subtracted from the local mean before the comparison; keeps
/// flat regions from speckling into foreground.
pub const OFFSET: f32 = 2.0;

/// Binarizes a grayscale image with Gaussian-weighted adaptive thresholding.
///
/// Each pixel is compared against the Gaussian-weighted mean of its local
/// neighborhood minus [`OFFSET`]: pixels darker than that reference become
/// foreground (255), all others background (0). The polarity is inverted
/// relative to plain thresholding: stained parasite bodies are dark
/// structures on a bright field.
///
/// The weighting uses the sigma conventionally derived from a
/// [`BLOCK_SIZE`]-tap Gaussian kernel, so the reference is the same local
/// average the window size encodes.
///
/// A uniform image produces an all-background mask.
pub fn binarize(gray: &GrayImage) -> GrayImage {
    let reference = gaussian_blur_f32(gray, kernel_sigma(BLOCK_SIZE));

    let mut mask = GrayImage::new(gray.width(), gray.height());
    for (x, y, pixel) in mask.enumerate_pixels_mut() {
        let value = gray.get_pixel(x, y)[0] as f32;
        let local_mean = reference.get_pixel(x, y)[0] as f32;
        *pixel = Luma([if value <= local_mean - OFFSET { 255 } else { 0 }]);
    }
    mask
}

/// Sigma matching an odd `ksize`-tap Gaussian kernel: 0.3·((k−1)/2 − 1) + 0.8.
fn kernel_sigma(ksize: u32) -> f32 {
    0.3 * ((ksize - 1) as f32 * 0.5 - 1.0) + 0.8
}
