//! Bounded, keyed record storage
//!
//! The store holds at most [`RECORD_CAPACITY`] records in slot order. Keys
//! are decimal strings:
//!
//! - Records added without a key get the 1-based key `len + 1`.
//! - Adding with key `k` targets position `k - 1`; missing lower slots are
//!   padded with placeholders keyed `1..k-1`.
//! - Removing by key renumbers the survivors `0..n-1`. Keys are therefore
//!   1-based after inserts and 0-based after a removal.

use crate::error::{RecordError, RecordResult};
use crate::record::Record;
use crate::sink::RecordSink;
use colorpick_color::ColorFormat;
use colorpick_core::{PixelSource, Point};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Maximum number of records in a store.
pub const RECORD_CAPACITY: usize = 20;

/// Ordered store of recorded points.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordSlotStore {
    records: Vec<Record>,
}

/// Parse a 1-based slot key into a position.
fn parse_slot_key(key: &str) -> RecordResult<usize> {
    let slot = key
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|&k| k >= 1)
        .ok_or_else(|| RecordError::InvalidSlotKey(key.to_string()))?;
    if slot > RECORD_CAPACITY {
        return Err(RecordError::CapacityExceeded {
            capacity: RECORD_CAPACITY,
        });
    }
    Ok(slot - 1)
}

impl RecordSlotStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record.
    ///
    /// Without a key (or with an empty one) the record is appended. With a
    /// key the record is written at that 1-based slot, replacing any record
    /// already there.
    ///
    /// # Returns
    ///
    /// The position the record was written to.
    ///
    /// # Errors
    ///
    /// - [`RecordError::CapacityExceeded`] if the store is full or the key
    ///   lies beyond the capacity
    /// - [`RecordError::InvalidSlotKey`] if the key is not a positive integer
    ///
    /// The store is unchanged on error.
    pub fn add(
        &mut self,
        x: i32,
        y: i32,
        display: impl Into<String>,
        native: Option<u32>,
        slot_key: Option<&str>,
    ) -> RecordResult<usize> {
        if self.records.len() >= RECORD_CAPACITY {
            return Err(RecordError::CapacityExceeded {
                capacity: RECORD_CAPACITY,
            });
        }

        let Some(key) = slot_key.filter(|k| !k.is_empty()) else {
            let index = self.records.len();
            self.records
                .push(Record::new((index + 1).to_string(), x, y, display, native));
            return Ok(index);
        };

        let index = parse_slot_key(key)?;
        while self.records.len() < index {
            let next = self.records.len() + 1;
            self.records.push(Record::placeholder(next.to_string()));
        }
        let record = Record::new((index + 1).to_string(), x, y, display, native);
        if index < self.records.len() {
            self.records[index] = record;
        } else {
            self.records.push(record);
        }
        Ok(index)
    }

    /// Remove records.
    ///
    /// With a key, every record carrying that key is dropped and the
    /// survivors are renumbered `"0"`, `"1"`, ... in their current order.
    /// The renumbering happens even when nothing matched. Without a key (or
    /// with an empty one) the store is cleared.
    ///
    /// # Returns
    ///
    /// The number of records removed.
    pub fn remove(&mut self, slot_key: Option<&str>) -> usize {
        let before = self.records.len();
        match slot_key.filter(|k| !k.is_empty()) {
            Some(key) => {
                self.records.retain(|r| r.slot_key != key);
                for (i, r) in self.records.iter_mut().enumerate() {
                    r.slot_key = i.to_string();
                }
            }
            None => self.records.clear(),
        }
        before - self.records.len()
    }

    /// Remove every record.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Re-read every record's color from `source`.
    ///
    /// Coordinates and keys are kept. Records lying outside `source`,
    /// placeholders included, are left untouched.
    ///
    /// # Returns
    ///
    /// The number of records refreshed.
    pub fn refetch<S: PixelSource + ?Sized>(&mut self, source: &S, format: ColorFormat) -> usize {
        let mut refreshed = 0;
        for r in &mut self.records {
            if let Some(pixel) = source.color_at_checked(i64::from(r.x), i64::from(r.y)) {
                r.native_color = Some(pixel);
                r.display_color = format.format(pixel);
                refreshed += 1;
            }
        }
        debug!(
            refreshed,
            skipped = self.records.len() - refreshed,
            "refetched records"
        );
        refreshed
    }

    /// Re-render every sampled record's display color in `format`.
    pub fn reformat(&mut self, format: ColorFormat) {
        for r in &mut self.records {
            if let Some(pixel) = r.native_color {
                r.display_color = format.format(pixel);
            }
        }
    }

    /// Number of records, placeholders included.
    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the store is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Check whether another record can be added.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.records.len() >= RECORD_CAPACITY
    }

    /// Record at a position.
    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    /// First record carrying `key`.
    pub fn get_by_key(&self, key: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.slot_key == key)
    }

    /// Iterate over the records in slot order.
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Coordinate of the record at position 0, the auto-pick base.
    pub fn base_point(&self) -> Option<Point> {
        self.records.first().map(Record::point)
    }

    /// All records in slot order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Serialize the records as a JSON array.
    pub fn to_json(&self) -> RecordResult<String> {
        Ok(serde_json::to_string_pretty(&self.records)?)
    }
}

impl<'a> IntoIterator for &'a RecordSlotStore {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl RecordSink for RecordSlotStore {
    fn record(&mut self, x: i32, y: i32, display: String, native: u32) -> RecordResult<()> {
        self.add(x, y, display, Some(native), None).map(|_| ())
    }
}
