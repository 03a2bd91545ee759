use crate::constants::{DEFAULT_OVERLAP_MM, DEFAULT_SCAN_HEIGHT_MM, DEFAULT_SCAN_WIDTH_MM};
use crate::geometry::{SplitSpec, TrimSpec};
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which pages of the input document a run processes
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PageRange {
    /// Only the first page. The scanner-trim use case is documented as
    /// single-page, so this is the trim default.
    #[default]
    First,
    /// Every page, in index order
    All,
}

/// Configuration for split mode: one landscape page in, two overlapping
/// portrait pages out.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SplitOptions {
    /// Source sheet, read in landscape
    pub source: SheetSize,
    /// Target sheet for each slice, read in portrait
    pub target: SheetSize,
    /// Overlap band in millimeters
    pub overlap_mm: f32,
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self {
            source: SheetSize::A3,
            target: SheetSize::A4,
            overlap_mm: DEFAULT_OVERLAP_MM,
        }
    }
}

impl SplitOptions {
    /// Derive the nominal split dimensions. The source sheet contributes its
    /// landscape width, the target sheet its portrait width, so the A3→A4
    /// default cuts a 420 mm span into two 210 mm slices.
    pub fn split_spec(&self) -> SplitSpec {
        let (source_width_mm, _) = self.source.dimensions_with_orientation(Orientation::Landscape);
        let (slice_width_mm, _) = self.target.dimensions_mm();
        SplitSpec {
            source_width_mm,
            slice_width_mm,
            overlap_mm: self.overlap_mm,
        }
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        self.split_spec().validate()
    }

    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| RecropError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| RecropError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }
}

/// Configuration for trim mode: cut a scanner's oversized capture down to a
/// nominal sheet.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TrimOptions {
    /// Measured scan area width in millimeters
    pub scan_width_mm: f32,
    /// Measured scan area height in millimeters
    pub scan_height_mm: f32,
    /// The sheet the scan should have measured
    pub nominal: SheetSize,
    /// Orientation the nominal sheet was scanned in
    pub nominal_orientation: Orientation,
    /// Pages to process
    pub pages: PageRange,
}

impl Default for TrimOptions {
    fn default() -> Self {
        Self {
            scan_width_mm: DEFAULT_SCAN_WIDTH_MM,
            scan_height_mm: DEFAULT_SCAN_HEIGHT_MM,
            nominal: SheetSize::A3,
            nominal_orientation: Orientation::Landscape,
            pages: PageRange::First,
        }
    }
}

impl TrimOptions {
    pub fn trim_spec(&self) -> TrimSpec {
        let (nominal_width_mm, nominal_height_mm) = self
            .nominal
            .dimensions_with_orientation(self.nominal_orientation);
        TrimSpec {
            scan_width_mm: self.scan_width_mm,
            scan_height_mm: self.scan_height_mm,
            nominal_width_mm,
            nominal_height_mm,
        }
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        self.trim_spec().validate()
    }

    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| RecropError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| RecropError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::*;
    use serde::{Deserialize, Serialize};

    impl Serialize for SheetSize {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            use serde::ser::SerializeStruct;
            match self {
                SheetSize::A3 => serializer.serialize_str("A3"),
                SheetSize::A4 => serializer.serialize_str("A4"),
                SheetSize::A5 => serializer.serialize_str("A5"),
                SheetSize::Letter => serializer.serialize_str("Letter"),
                SheetSize::Ledger => serializer.serialize_str("Ledger"),
                SheetSize::Custom {
                    width_mm,
                    height_mm,
                } => {
                    let mut s = serializer.serialize_struct("Custom", 2)?;
                    s.serialize_field("width_mm", width_mm)?;
                    s.serialize_field("height_mm", height_mm)?;
                    s.end()
                }
            }
        }
    }

    impl<'de> Deserialize<'de> for SheetSize {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            use serde::de::{self, MapAccess, Visitor};
            use std::fmt;

            struct SheetSizeVisitor;

            impl<'de> Visitor<'de> for SheetSizeVisitor {
                type Value = SheetSize;

                fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                    formatter.write_str("a sheet size")
                }

                fn visit_str<E>(self, value: &str) -> std::result::Result<SheetSize, E>
                where
                    E: de::Error,
                {
                    match value {
                        "A3" => Ok(SheetSize::A3),
                        "A4" => Ok(SheetSize::A4),
                        "A5" => Ok(SheetSize::A5),
                        "Letter" => Ok(SheetSize::Letter),
                        "Ledger" => Ok(SheetSize::Ledger),
                        _ => Err(de::Error::unknown_variant(
                            value,
                            &["A3", "A4", "A5", "Letter", "Ledger", "Custom"],
                        )),
                    }
                }

                fn visit_map<M>(self, mut map: M) -> std::result::Result<SheetSize, M::Error>
                where
                    M: MapAccess<'de>,
                {
                    let mut width_mm = None;
                    let mut height_mm = None;

                    while let Some(key) = map.next_key::<String>()? {
                        match key.as_str() {
                            "width_mm" => width_mm = Some(map.next_value()?),
                            "height_mm" => height_mm = Some(map.next_value()?),
                            _ => {
                                let _: serde::de::IgnoredAny = map.next_value()?;
                            }
                        }
                    }

                    match (width_mm, height_mm) {
                        (Some(w), Some(h)) => Ok(SheetSize::Custom {
                            width_mm: w,
                            height_mm: h,
                        }),
                        _ => Err(de::Error::missing_field("width_mm or height_mm")),
                    }
                }
            }

            deserializer.deserialize_any(SheetSizeVisitor)
        }
    }

    impl Serialize for PageRange {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_str(match self {
                PageRange::First => "First",
                PageRange::All => "All",
            })
        }
    }

    impl<'de> Deserialize<'de> for PageRange {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            match s.as_str() {
                "First" => Ok(PageRange::First),
                "All" => Ok(PageRange::All),
                _ => Err(serde::de::Error::custom("Unknown page range")),
            }
        }
    }
} // end of serde_impls module
