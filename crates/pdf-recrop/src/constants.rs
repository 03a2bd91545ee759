//! Shared physical constants for crop geometry

/// Points per millimeter (1 inch = 72 points, 1 inch = 25.4mm)
pub const POINTS_PER_MM: f32 = 72.0 / 25.4; // ≈ 2.83465

/// Convert millimeters to points
#[inline]
pub fn mm_to_pt(mm: f32) -> f32 {
    mm * POINTS_PER_MM
}

/// Convert points to millimeters
#[inline]
pub fn pt_to_mm(pt: f32) -> f32 {
    pt / POINTS_PER_MM
}

/// Default overlap band duplicated between the two split halves, in mm.
///
/// Matches the measured minimum printing margin of an HP LaserJet
/// Professional P1606dn. Adjust per printer.
pub const DEFAULT_OVERLAP_MM: f32 = 4.0;

/// Measured scan area of an HP OfficeJet Pro 7740 scanning A3, in mm.
/// The scanner reports 432.65 × 297.01 instead of the nominal 420 × 297.
pub const DEFAULT_SCAN_WIDTH_MM: f32 = 432.65;

/// See [`DEFAULT_SCAN_WIDTH_MM`]
pub const DEFAULT_SCAN_HEIGHT_MM: f32 = 297.01;

/// A3 landscape page size in points, at nominal scale
pub const A3_LANDSCAPE_WIDTH_PT: f32 = 1190.55;

/// See [`A3_LANDSCAPE_WIDTH_PT`]
pub const A3_LANDSCAPE_HEIGHT_PT: f32 = 841.89;
