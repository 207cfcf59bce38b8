//! colorpick Region - Area analysis
//!
//! Picks a handful of representative sample points inside a rectangular
//! area of an image. Sampling, scoring, grouping and selection are chained
//! in [`analyze_region`], which hands the result to a
//! [`RecordSink`](colorpick_record::RecordSink).
//!
//! # Examples
//!
//! ```
//! use colorpick_color::ColorFormat;
//! use colorpick_core::{Pix, Region, color};
//! use colorpick_record::RecordSlotStore;
//! use colorpick_region::{AnalyzeConfig, analyze_region};
//!
//! let pix = Pix::new_filled(20, 20, color::compose_rgb(9, 9, 9)).unwrap();
//! let region = Region::from_corners(0, 0, 19, 19);
//! let mut store = RecordSlotStore::new();
//! let report = analyze_region(
//!     &pix,
//!     &region,
//!     &AnalyzeConfig::default(),
//!     ColorFormat::Hex,
//!     &mut store,
//! )
//! .unwrap();
//! assert_eq!(report.recorded(), 5);
//! assert_eq!(store.get(0).unwrap().display_color, "#090909");
//! ```

pub mod analyze;
pub mod error;

// Re-export core types
pub use colorpick_core;

// Re-export error types
pub use error::{RegionError, RegionResult};

pub use analyze::{AnalyzeConfig, analyze_region, collect_groups, select_region_points};
