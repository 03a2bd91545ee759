use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecropError {
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Malformed document: {0}")]
    Malformed(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
    #[error("No pages to crop")]
    NoPages,
}

pub type Result<T> = std::result::Result<T, RecropError>;

/// Sheet orientation
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Portrait: height > width (default for standard sheet sizes)
    #[default]
    Portrait,
    /// Landscape: width > height
    Landscape,
}

/// Nominal physical sheet sizes.
///
/// These are used only to derive proportional crop fractions; the actual
/// page units never have to match the nominal size, only its aspect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SheetSize {
    A3,
    A4,
    A5,
    Letter,
    Ledger,
    Custom { width_mm: f32, height_mm: f32 },
}

impl SheetSize {
    /// Base dimensions in millimeters (always portrait: width < height for
    /// standard sizes)
    pub fn dimensions_mm(self) -> (f32, f32) {
        match self {
            SheetSize::A3 => (297.0, 420.0),
            SheetSize::A4 => (210.0, 297.0),
            SheetSize::A5 => (148.0, 210.0),
            SheetSize::Letter => (215.9, 279.4),
            SheetSize::Ledger => (279.4, 431.8),
            SheetSize::Custom {
                width_mm,
                height_mm,
            } => (width_mm, height_mm),
        }
    }

    /// Dimensions with orientation applied
    pub fn dimensions_with_orientation(self, orientation: Orientation) -> (f32, f32) {
        let (w, h) = self.dimensions_mm();
        match orientation {
            Orientation::Portrait => (w, h),
            Orientation::Landscape => (h, w),
        }
    }
}

/// Measured bounding box of one page, in page-native points.
///
/// Read from a page's MediaBox at runtime. Scanners and print drivers
/// introduce small deviations from the nominal sheet size, so crop fractions
/// are computed against the nominal sheet and scaled by these measurements.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub origin_x: f32,
    pub origin_y: f32,
    pub width: f32,
    pub height: f32,
}

impl PageGeometry {
    pub fn new(origin_x: f32, origin_y: f32, width: f32, height: f32) -> Result<Self> {
        if width <= 0.0 || height <= 0.0 {
            return Err(RecropError::Malformed(format!(
                "page box is degenerate: {width} x {height}"
            )));
        }
        Ok(Self {
            origin_x,
            origin_y,
            width,
            height,
        })
    }

    /// Upper-right corner of the page box
    pub fn upper_right(&self) -> (f32, f32) {
        (self.origin_x + self.width, self.origin_y + self.height)
    }
}

/// Visible-region override for a page, in that page's native coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropRect {
    pub lower_left: (f32, f32),
    pub upper_right: (f32, f32),
}

impl CropRect {
    pub fn width(&self) -> f32 {
        self.upper_right.0 - self.lower_left.0
    }

    pub fn height(&self) -> f32 {
        self.upper_right.1 - self.lower_left.1
    }
}
