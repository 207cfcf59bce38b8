//! colorpick Record - Recorded sample points
//!
//! This crate owns the user-visible result of sampling:
//!
//! - **Records** ([`record`]): a coordinate with its display and native color
//! - **Store** ([`store`]): bounded keyed storage with slot padding and
//!   renumbering
//! - **Sink** ([`sink`]): the contract producers emit points through
//! - **Auto-pick** ([`autopick`]): pattern generation around a base point

pub mod autopick;
pub mod error;
pub mod record;
pub mod sink;
pub mod store;

pub use colorpick_core;

pub use autopick::{AutoPickConfig, AutoPickMode, auto_pick};
pub use error::{RecordError, RecordResult};
pub use record::{PLACEHOLDER_DISPLAY, Record};
pub use sink::{RecordSink, SinkReport};
pub use store::{RECORD_CAPACITY, RecordSlotStore};
