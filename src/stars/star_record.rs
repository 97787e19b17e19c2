//! # Star record
//!
//! One data row of the star CSV. The identifier and the proper name are kept as
//! text; the three coordinates are kept **as read** and only parsed when a
//! position is requested.
//!
//! ## Lazy coordinates
//! -----------------
//! A row whose coordinate column is not numeric is still a valid [`StarRecord`].
//! The failure surfaces as [`StarbotError::ParseError`] the first time
//! [`StarRecord::position`] is called, typically while ranking neighbors.
//! Use [`LoadMode::Strict`](crate::stars::LoadMode::Strict) to reject such rows
//! at load time instead.
use std::{borrow::Cow, fmt};

use csv::ByteRecord;

use crate::{
    constants::{Position, StarId, ID_FIELD, NAME_FIELD, X_FIELD, Y_FIELD, Z_FIELD},
    starbot_errors::StarbotError,
};

const AXIS_NAMES: [&str; 3] = ["x", "y", "z"];

#[derive(Debug, Clone, PartialEq)]
pub struct StarRecord {
    pub id: StarId,
    pub name: String,
    coordinates: [String; 3],
}

impl StarRecord {
    /// Build a record from already known numeric coordinates.
    pub fn new(id: impl Into<StarId>, name: impl Into<String>, x: f64, y: f64, z: f64) -> Self {
        StarRecord {
            id: id.into(),
            name: name.into(),
            coordinates: [x.to_string(), y.to_string(), z.to_string()],
        }
    }

    /// Build a record from the raw fields of one CSV row.
    ///
    /// Fields are taken positionally (`id, name, x, y, z`); extra columns are
    /// ignored and missing ones are left empty, so a short row only fails once
    /// its position is needed.
    ///
    /// Arguments
    /// ---------
    /// * `fields`: the row, already split on the delimiter
    ///
    /// Return
    /// ------
    /// * The record, with coordinates kept as raw text
    pub fn from_fields<'a, I>(fields: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut row = [""; 5];
        for (slot, field) in row.iter_mut().zip(fields) {
            *slot = field;
        }

        StarRecord {
            id: row[ID_FIELD].to_string(),
            name: row[NAME_FIELD].to_string(),
            coordinates: [
                row[X_FIELD].to_string(),
                row[Y_FIELD].to_string(),
                row[Z_FIELD].to_string(),
            ],
        }
    }

    /// Raw text of the three coordinate columns, in `x, y, z` order.
    pub fn raw_coordinates(&self) -> &[String; 3] {
        &self.coordinates
    }

    /// Parse the stored coordinates into a position vector.
    ///
    /// Surrounding whitespace is tolerated; anything else that is not a
    /// floating point literal yields [`StarbotError::ParseError`] naming the
    /// offending axis.
    pub fn position(&self) -> Result<Position, StarbotError> {
        let mut axes = [0.0; 3];
        for ((axis, raw), name) in axes.iter_mut().zip(&self.coordinates).zip(AXIS_NAMES) {
            *axis = parse_number(name, raw)?;
        }
        Ok(Position::new(axes[0], axes[1], axes[2]))
    }
}

/// Invalid UTF-8 in a field is replaced with `U+FFFD` instead of rejecting the row.
impl From<&ByteRecord> for StarRecord {
    fn from(record: &ByteRecord) -> Self {
        let fields: Vec<Cow<'_, str>> = record.iter().map(String::from_utf8_lossy).collect();
        StarRecord::from_fields(fields.iter().map(|field| field.as_ref()))
    }
}

impl fmt::Display for StarRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z] = &self.coordinates;
        write!(f, "{} ({}) [{}, {}, {}]", self.id, self.name, x, y, z)
    }
}

/// Parse one numeric field, reporting `field` on failure.
pub(crate) fn parse_number(field: &str, raw: &str) -> Result<f64, StarbotError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| StarbotError::parse_error(field, raw))
}
