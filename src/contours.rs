use image::GrayImage;
use imageproc::{
    contours::{BorderType, Contour, find_contours},
    point::Point,
};
use num::{Num, NumCast};
use num_traits::AsPrimitive;

/// Contours enclosing no more than this many square pixels are treated as
/// noise specks and dropped.
pub const MIN_AREA: f64 = 50.0;

/// Exclusive lower bound of the accepted circularity band.
pub const MIN_CIRCULARITY: f64 = 0.5;

/// Inclusive upper bound of the accepted circularity band. A perfect circle
/// scores exactly 1.0.
pub const MAX_CIRCULARITY: f64 = 1.0;

/// Thresholds for the roundness filter.
///
/// The defaults reject pixel-level specks and elongated or irregular
/// artifacts while tolerating the rasterization imperfection of real
/// parasite bodies. Values computed fractionally above `max_circularity`
/// by discretization error fail the band; the upper comparison is exact.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterParams {
    /// Contours with enclosed area less than or equal to this are dropped.
    pub min_area: f64,
    /// Exclusive lower circularity bound.
    pub min_circularity: f64,
    /// Inclusive upper circularity bound.
    pub max_circularity: f64,
}

impl Default for FilterParams {
    fn default() -> Self {
        Self {
            min_area: MIN_AREA,
            min_circularity: MIN_CIRCULARITY,
            max_circularity: MAX_CIRCULARITY,
        }
    }
}

/// Extracts the outer boundary of each connected foreground region of a
/// binary mask.
///
/// Runs Suzuki-Abe border following over the mask (any nonzero pixel is
/// foreground) and keeps only top-level outer borders: hole borders and
/// regions nested inside holes are discarded. An all-background mask yields
/// an empty vector.
///
/// The full traced boundary is retained per contour; no chain approximation
/// is applied. Ordering follows the raster scan of the tracer and is not
/// part of the contract.
pub fn outer_contours(mask: &GrayImage) -> Vec<Contour<i32>> {
    let mut contours = find_contours::<i32>(mask);
    contours.retain(|contour| contour.border_type == BorderType::Outer && contour.parent.is_none());
    contours
}

/// Filters a vector of contours in-place, keeping only those that resemble
/// round parasite bodies.
///
/// A contour survives when all of the following hold:
///
/// 1. it has at least 3 points (degenerate traces are skipped silently);
/// 2. its enclosed area exceeds `params.min_area`;
/// 3. its closed perimeter is strictly positive;
/// 4. its circularity lies in `(params.min_circularity, params.max_circularity]`.
///
/// Relative order of the survivors is preserved.
pub fn retain_round_in_place(contours: &mut Vec<Contour<i32>>, params: &FilterParams) {
    contours.retain(|contour| {
        if contour.points.len() < 3 {
            return false;
        }

        let area = contour_area(&contour.points);
        if area <= params.min_area {
            return false;
        }

        let boundary = perimeter(&contour.points);
        if boundary <= 0.0 {
            return false;
        }

        let roundness = circularity(area, boundary);
        params.min_circularity < roundness && roundness <= params.max_circularity
    });
}

/// Calculates the perimeter of a closed contour polygon.
///
/// The perimeter is the sum of Euclidean distances between consecutive
/// points, closing the loop by including the distance between the last and
/// first point. Contours with 0 or 1 point have a perimeter of `0.0`.
pub fn perimeter<T>(points: &[Point<T>]) -> f64
where
    T: Num + NumCast + Copy + PartialEq + Eq + AsPrimitive<f64>,
{
    points
        .iter()
        .zip(points.iter().cycle().skip(1))
        .map(|(p1, p2)| {
            let dx: f64 = p2.x.as_() - p1.x.as_();
            let dy: f64 = p2.y.as_() - p1.y.as_();
            dx.hypot(dy)
        })
        .sum()
}

/// Calculates the area enclosed by a closed contour polygon via the
/// shoelace formula. Contours with fewer than 3 points enclose no area.
pub fn contour_area<T>(points: &[Point<T>]) -> f64
where
    T: Num + NumCast + Copy + PartialEq + Eq + AsPrimitive<f64>,
{
    if points.len() < 3 {
        return 0.0;
    }

    let twice_signed: f64 = points
        .iter()
        .zip(points.iter().cycle().skip(1))
        .map(|(p1, p2)| p1.x.as_() * p2.y.as_() - p2.x.as_() * p1.y.as_())
        .sum();

    twice_signed.abs() / 2.0
}

/// Dimensionless roundness score `4π·area / perimeter²`.
///
/// Scores 1.0 for a perfect circle and falls toward 0 as the shape
/// elongates. The caller must guarantee `perimeter > 0`.
pub fn circularity(area: f64, perimeter: f64) -> f64 {
    4.0 * std::f64::consts::PI * area / (perimeter * perimeter)
}
