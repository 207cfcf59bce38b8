//! colorpick Color - Color analysis for sample-point selection
//!
//! This crate provides the building blocks of region analysis:
//!
//! - **Similarity** ([`similarity`]): 8-neighbor color homogeneity score
//! - **Grouping** ([`grouping`]): First-fit clustering with fixed reference colors
//! - **Selection** ([`select`]): Anchor plus per-group budgeted point choice
//! - **Formatting** ([`format`]): Display strings for packed colors

pub mod error;
pub mod format;
pub mod grouping;
pub mod select;
pub mod similarity;

// Re-export core types
pub use colorpick_core;

// Re-export error types
pub use error::{ColorError, ColorResult};

pub use format::{ColorFormat, format_color};
pub use grouping::{ColorGroup, ColorGroups};
pub use select::{per_group_budget, select_points};
pub use similarity::{
    AnalyzePoint, MAX_SIMILARITY, NEIGHBOR_OFFSETS, analyze_point, neighbor_similarity,
};
