/// Multiplier converting a raw object count to parasites per mm³.
pub const PER_MM3_FACTOR: u64 = 500;

/// Multiplier of the first parasites-per-µL counting convention.
pub const PER_UL_FACTOR: u64 = 40;

/// Numerator of the second parasites-per-µL counting convention.
pub const PER_UL_NUMERATOR: u64 = 8000;

/// Denominator of the second parasites-per-µL counting convention.
pub const PER_UL_DENOMINATOR: f64 = 100.0;

/// Parasite density estimates derived from a single object count.
///
/// The three figures follow three distinct manual-microscopy counting
/// conventions found in screening protocols. The conventions overlap and
/// their derivations are not reconciled here; all three are reported
/// side by side and the interpretation is left to the reader.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DensityMetrics {
    /// `count × 500`, parasites per mm³.
    pub per_mm3: u64,
    /// `count × 40`, parasites per µL (first convention).
    pub per_ul_formula1: u64,
    /// `count × 8000 / 100`, parasites per µL (second convention),
    /// rounded to 2 decimal places.
    pub per_ul_formula2: f64,
}

/// Converts an object count into the three density metrics.
///
/// Pure arithmetic; a count of 0 yields all-zero metrics.
pub fn estimate_density(count: usize) -> DensityMetrics {
    let count = count as u64;
    DensityMetrics {
        per_mm3: count * PER_MM3_FACTOR,
        per_ul_formula1: count * PER_UL_FACTOR,
        per_ul_formula2: round2((count * PER_UL_NUMERATOR) as f64 / PER_UL_DENOMINATOR),
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
