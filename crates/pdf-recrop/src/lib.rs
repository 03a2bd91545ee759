pub mod constants;
pub mod crop;
pub mod geometry;
mod options;
mod stats;
mod types;

pub use crop::{load_pdf, save_pdf, split, trim};
pub use geometry::{SplitSpec, TrimSpec, split_with_overlap, trim_to_nominal};
pub use options::*;
pub use stats::{CropStatistics, calculate_split_statistics, calculate_trim_statistics};
pub use types::*;
