//! colorpick - Color sampling for screen captures
//!
//! Picks representative colors out of an image: either by analyzing a
//! selected area, by recording single points, or by laying a pattern of
//! points around a base point. Results land in a bounded store of keyed
//! records.
//!
//! # Overview
//!
//! - [`region`]: area analysis (grid sampling, similarity, grouping, selection)
//! - [`record`]: record slots, the record sink and auto-pick patterns
//! - [`color`]: the analysis stages and color display formats
//! - [`io`]: PNG loading and saving
//! - [`Session`]: the state of one picking session
//!
//! # Example
//!
//! ```
//! use colorpick::{Pix, Session, color::ColorFormat, region::AnalyzeConfig};
//!
//! let pix = Pix::new_filled(40, 40, 0x336699ff).unwrap();
//! let mut session = Session::new();
//! session.set_image(pix);
//! session.update_area(0, 0, 39, 39);
//!
//! let report = session.analyze_area(&AnalyzeConfig::default()).unwrap();
//! assert_eq!(report.recorded(), 5);
//! assert_eq!(session.records().get(0).unwrap().display_color, "#336699");
//!
//! session.set_color_format(ColorFormat::Rgb);
//! assert_eq!(session.records().get(0).unwrap().display_color, "rgb(51, 102, 153)");
//! ```

// Re-export core types (primary data structures used everywhere)
pub use colorpick_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use colorpick_color as color;
pub use colorpick_io as io;
pub use colorpick_record as record;
pub use colorpick_region as region;

pub mod config;
pub mod error;
pub mod session;

pub use config::PickerConfig;
pub use error::{SessionError, SessionResult};
pub use session::Session;
