//! Picking session
//!
//! A [`Session`] ties together the state a color picker works on: the
//! active image, the selected area, the display format and the record
//! store. Every operation takes the session explicitly; there is no global
//! state.

use crate::config::PickerConfig;
use crate::error::{SessionError, SessionResult};
use colorpick_color::ColorFormat;
use colorpick_core::{Pix, PixelSource, Region};
use colorpick_record::{AutoPickConfig, RecordSlotStore, SinkReport, auto_pick};
use colorpick_region::{AnalyzeConfig, analyze_region};
use std::path::Path;
use tracing::{debug, info};

/// State of one picking session.
#[derive(Debug, Clone, Default)]
pub struct Session {
    image: Option<Pix>,
    area: Option<Region>,
    color_format: ColorFormat,
    records: RecordSlotStore,
}

impl Session {
    /// Create an empty session with the default display format.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty session using the display format of `config`.
    pub fn from_config(config: &PickerConfig) -> SessionResult<Self> {
        config.validate()?;
        Ok(Self {
            color_format: config.color_format,
            ..Self::default()
        })
    }

    /// The active image, if any.
    pub fn image(&self) -> Option<&Pix> {
        self.image.as_ref()
    }

    fn active_image(&self) -> SessionResult<&Pix> {
        self.image.as_ref().ok_or(SessionError::NoImage)
    }

    /// Install an image without touching the records.
    pub fn set_image(&mut self, pix: Pix) {
        info!(width = pix.width(), height = pix.height(), "image set");
        self.image = Some(pix);
    }

    /// Load a PNG file and install it as the active image.
    pub fn open_image<P: AsRef<Path>>(&mut self, path: P) -> SessionResult<()> {
        let pix = colorpick_io::read_image(path)?;
        self.set_image(pix);
        Ok(())
    }

    /// Install a new image and re-read every record's color from it.
    ///
    /// # Returns
    ///
    /// The number of records refreshed.
    pub fn replace_image(&mut self, pix: Pix) -> usize {
        info!(width = pix.width(), height = pix.height(), "image replaced");
        let refreshed = self.records.refetch(&pix, self.color_format);
        self.image = Some(pix);
        refreshed
    }

    /// The selected area, if any.
    pub fn area(&self) -> Option<&Region> {
        self.area.as_ref()
    }

    /// Select the area spanned by two corners, in any order.
    pub fn update_area(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) -> Region {
        let region = Region::from_corners(x1, y1, x2, y2);
        debug!(
            min_x = region.min_x(),
            min_y = region.min_y(),
            max_x = region.max_x(),
            max_y = region.max_y(),
            "area updated"
        );
        self.area = Some(region);
        region
    }

    /// Forget the selected area.
    pub fn reset_area(&mut self) {
        self.area = None;
    }

    /// The active display format.
    pub fn color_format(&self) -> ColorFormat {
        self.color_format
    }

    /// Switch the display format and re-render every stored record.
    pub fn set_color_format(&mut self, format: ColorFormat) {
        self.color_format = format;
        self.records.reformat(format);
    }

    /// The record store.
    pub fn records(&self) -> &RecordSlotStore {
        &self.records
    }

    /// Sample the active image at `(x, y)` and record the color.
    ///
    /// See [`RecordSlotStore::add`] for the meaning of `slot_key`.
    ///
    /// # Returns
    ///
    /// The position the record was written to.
    pub fn add_record(&mut self, x: i32, y: i32, slot_key: Option<&str>) -> SessionResult<usize> {
        let pix = self.active_image()?;
        let native = pix
            .color_at_checked(i64::from(x), i64::from(y))
            .ok_or(SessionError::OutOfImage {
                x,
                y,
                width: pix.width(),
                height: pix.height(),
            })?;
        let display = self.color_format.format(native);
        Ok(self.records.add(x, y, display, Some(native), slot_key)?)
    }

    /// Remove the records carrying `slot_key`, or all records without one.
    pub fn remove_record(&mut self, slot_key: Option<&str>) -> usize {
        self.records.remove(slot_key)
    }

    /// Re-read every record's color from the active image.
    pub fn refetch_records(&mut self) -> SessionResult<usize> {
        let pix = self.image.as_ref().ok_or(SessionError::NoImage)?;
        let refreshed = self.records.refetch(pix, self.color_format);
        info!(refreshed, "records refetched");
        Ok(refreshed)
    }

    /// Analyze the selected area and record the representative points.
    pub fn analyze_area(&mut self, config: &AnalyzeConfig) -> SessionResult<SinkReport> {
        let pix = self.image.as_ref().ok_or(SessionError::NoImage)?;
        let region = self.area.as_ref().ok_or(SessionError::NoArea)?;
        let report = analyze_region(pix, region, config, self.color_format, &mut self.records)?;
        info!(
            recorded = report.recorded(),
            rejected = report.rejected,
            "area analyzed"
        );
        Ok(report)
    }

    /// Record a pattern of points around the first record.
    pub fn auto_pick(&mut self, config: &AutoPickConfig) -> SessionResult<SinkReport> {
        let pix = self.image.as_ref().ok_or(SessionError::NoImage)?;
        let report = auto_pick(&mut self.records, pix, config, self.color_format)?;
        info!(
            mode = ?config.mode,
            recorded = report.recorded(),
            rejected = report.rejected,
            "auto-pick done"
        );
        Ok(report)
    }

    /// Export the records as a JSON array.
    pub fn records_json(&self) -> SessionResult<String> {
        Ok(self.records.to_json()?)
    }
}
