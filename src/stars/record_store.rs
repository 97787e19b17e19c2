//! # Record store
//!
//! In-memory, insertion-ordered collection of [`StarRecord`]s read from a star CSV.
//!
//! ## Input format
//! -----------------
//! - Comma separated, **no quoting and no escaping**: a proper name containing a
//!   comma is split across two columns.
//! - Columns are positional: `StarID, ProperName, X, Y, Z, ...`.
//! - Any line containing the substring `StarID` is treated as a header and
//!   skipped, wherever it appears in the file. A star literally named `StarID`
//!   is therefore never loaded.
//! - Blank lines are ignored.
//! - Bytes that are not valid UTF-8 are replaced with `U+FFFD`; the row is
//!   still loaded.
//!
//! ## Load modes
//! -----------------
//! - [`LoadMode::Lazy`] keeps coordinates as raw text; a malformed row is stored
//!   and only fails when a query computes its distance.
//! - [`LoadMode::Strict`] parses every position while loading and stops at the
//!   first malformed row, leaving the store untouched.
//!
//! ## Duplicates
//! -----------------
//! Identifiers are not checked for uniqueness. Loading the same file twice
//! stores every row twice, in order.
use std::{fs::File, io::Read};

use camino::Utf8Path;
use csv::{ByteRecord, ReaderBuilder};
use tracing::{debug, info};

use super::star_record::StarRecord;
use crate::{
    constants::{CSV_DELIMITER, HEADER_MARKER},
    starbot_errors::StarbotError,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadMode {
    #[default]
    Lazy,
    Strict,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordStore {
    stars: Vec<StarRecord>,
}

impl RecordStore {
    pub fn new() -> Self {
        RecordStore::default()
    }

    /// Create a store from a star CSV file.
    ///
    /// Arguments
    /// ---------
    /// * `path`: path of the CSV file
    /// * `mode`: whether coordinates are validated while loading
    ///
    /// Return
    /// ------
    /// * The populated store, or [`StarbotError::IoError`] if the file cannot be opened
    pub fn from_csv_path(path: &Utf8Path, mode: LoadMode) -> Result<Self, StarbotError> {
        let mut store = RecordStore::new();
        store.load_csv(path, mode)?;
        Ok(store)
    }

    /// Append the rows of a star CSV file to the store.
    ///
    /// Rows already present are kept; the new rows are added after them in
    /// file order.
    ///
    /// Return
    /// ------
    /// * The number of records added by this call
    pub fn load_csv(&mut self, path: &Utf8Path, mode: LoadMode) -> Result<usize, StarbotError> {
        let file = File::open(path)?;
        let added = self.read_csv(file, mode)?;
        info!(%path, added, total = self.len(), "star catalog loaded");
        Ok(added)
    }

    /// Append the rows read from any CSV source to the store.
    ///
    /// On error nothing is appended.
    pub fn read_csv<R: Read>(&mut self, reader: R, mode: LoadMode) -> Result<usize, StarbotError> {
        let mut csv_reader = ReaderBuilder::new()
            .has_headers(false)
            .delimiter(CSV_DELIMITER)
            .quoting(false)
            .flexible(true)
            .from_reader(reader);

        let mut loaded = Vec::new();
        for record in csv_reader.byte_records() {
            let record = record?;
            if is_header(&record) {
                debug!(line = ?record.position().map(|p| p.line()), "skipping header row");
                continue;
            }

            let star = StarRecord::from(&record);
            if mode == LoadMode::Strict {
                star.position()?;
            }
            loaded.push(star);
        }

        let added = loaded.len();
        self.stars.extend(loaded);
        Ok(added)
    }

    pub fn push(&mut self, star: StarRecord) {
        self.stars.push(star);
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    pub fn stars(&self) -> &[StarRecord] {
        &self.stars
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StarRecord> {
        self.stars.iter()
    }

    /// Find a star by exact proper name.
    ///
    /// The whole store is scanned and the **last** matching record wins when
    /// several stars share the name.
    pub fn find_by_name(&self, name: &str) -> Option<&StarRecord> {
        self.stars.iter().rev().find(|star| star.name == name)
    }
}

impl FromIterator<StarRecord> for RecordStore {
    fn from_iter<T: IntoIterator<Item = StarRecord>>(iter: T) -> Self {
        RecordStore {
            stars: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a StarRecord;
    type IntoIter = std::slice::Iter<'a, StarRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.stars.iter()
    }
}

fn is_header(record: &ByteRecord) -> bool {
    // the marker has no delimiter in it, so a per-field check matches a whole-line check
    record
        .iter()
        .any(|field| String::from_utf8_lossy(field).contains(HEADER_MARKER))
}
