//! Crop geometry calculator.
//!
//! Pure functions that convert nominal physical dimensions (millimeters)
//! into crop rectangles in a page's own coordinate space. The measured page
//! is assumed to be a uniform scale of the nominal sheet, so all positions
//! are computed as fractions of the nominal width/height and then scaled by
//! the measured page size.

use crate::types::*;

/// Nominal dimensions for splitting one landscape sheet into two
/// overlapping portrait slices. All values in millimeters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitSpec {
    /// Width of the source sheet, read in landscape (e.g. 420 for A3)
    pub source_width_mm: f32,
    /// Width of each portrait slice (e.g. 210 for A4)
    pub slice_width_mm: f32,
    /// Overlap band shared by both slices, compensating for the printer's
    /// physical margin
    pub overlap_mm: f32,
}

impl SplitSpec {
    pub fn validate(&self) -> Result<()> {
        if self.source_width_mm <= 0.0 {
            return Err(RecropError::Config(format!(
                "source width must be positive, got {} mm",
                self.source_width_mm
            )));
        }
        if self.slice_width_mm <= 0.0 {
            return Err(RecropError::Config(format!(
                "slice width must be positive, got {} mm",
                self.slice_width_mm
            )));
        }
        if self.overlap_mm < 0.0 {
            return Err(RecropError::Config(format!(
                "overlap must not be negative, got {} mm",
                self.overlap_mm
            )));
        }
        if self.slice_width_mm + self.overlap_mm > self.source_width_mm {
            return Err(RecropError::Config(format!(
                "slice width {} mm plus overlap {} mm exceeds source width {} mm",
                self.slice_width_mm, self.overlap_mm, self.source_width_mm
            )));
        }
        Ok(())
    }
}

/// Nominal dimensions for trimming a scanner's oversized capture down to a
/// nominal sheet. All values in millimeters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrimSpec {
    pub scan_width_mm: f32,
    pub scan_height_mm: f32,
    pub nominal_width_mm: f32,
    pub nominal_height_mm: f32,
}

impl TrimSpec {
    pub fn validate(&self) -> Result<()> {
        if self.scan_width_mm <= 0.0 || self.scan_height_mm <= 0.0 {
            return Err(RecropError::Config(format!(
                "scan area must be positive, got {} x {} mm",
                self.scan_width_mm, self.scan_height_mm
            )));
        }
        if self.nominal_width_mm <= 0.0 || self.nominal_height_mm <= 0.0 {
            return Err(RecropError::Config(format!(
                "nominal sheet must be positive, got {} x {} mm",
                self.nominal_width_mm, self.nominal_height_mm
            )));
        }
        if self.nominal_width_mm > self.scan_width_mm
            || self.nominal_height_mm > self.scan_height_mm
        {
            return Err(RecropError::Config(format!(
                "nominal sheet {} x {} mm exceeds scan area {} x {} mm (negative trim)",
                self.nominal_width_mm,
                self.nominal_height_mm,
                self.scan_width_mm,
                self.scan_height_mm
            )));
        }
        Ok(())
    }
}

/// Cut one landscape page into a left and a right slice along its width.
///
/// The left slice covers the nominal band `[overlap, overlap + slice]`, the
/// right slice `[slice - overlap, source - overlap]`, so the two share a
/// `2 * overlap` band in the middle. Whatever a printer discards at its
/// physical margin on one printed slice is duplicated on the other, and the
/// outer `overlap` of the source sheet is sacrificed.
///
/// Returns the slices in reading order: left first.
pub fn split_with_overlap(spec: &SplitSpec, page: &PageGeometry) -> Result<(CropRect, CropRect)> {
    spec.validate()?;

    let scale = page.width / spec.source_width_mm;
    let top = page.origin_y + page.height;

    let left = CropRect {
        lower_left: (page.origin_x + spec.overlap_mm * scale, page.origin_y),
        upper_right: (
            page.origin_x + (spec.overlap_mm + spec.slice_width_mm) * scale,
            top,
        ),
    };
    let right = CropRect {
        lower_left: (
            page.origin_x + (spec.slice_width_mm - spec.overlap_mm) * scale,
            page.origin_y,
        ),
        upper_right: (
            page.origin_x + (spec.source_width_mm - spec.overlap_mm) * scale,
            top,
        ),
    };

    Ok((left, right))
}

/// Discard the scanner's excess capture from the left and bottom edges so
/// the visible region matches the nominal sheet.
///
/// Only left and bottom are trimmed: the target scanner registers the sheet
/// against the top-right corner, so the excess always accumulates on the
/// other two edges. Right and top stay at the page's natural extent.
pub fn trim_to_nominal(spec: &TrimSpec, page: &PageGeometry) -> Result<CropRect> {
    spec.validate()?;

    let left_trim = (spec.scan_width_mm - spec.nominal_width_mm) / spec.scan_width_mm * page.width;
    let bottom_trim =
        (spec.scan_height_mm - spec.nominal_height_mm) / spec.scan_height_mm * page.height;

    Ok(CropRect {
        lower_left: (page.origin_x + left_trim, page.origin_y + bottom_trim),
        upper_right: page.upper_right(),
    })
}
