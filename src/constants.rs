//! # Constants and type definitions for Starbot
//!
//! Field layout of the star CSV and the small set of type aliases shared by the
//! record store, the distance evaluator and the neighbor ranker.

// -------------------------------------------------------------------------------------------------
// Star CSV layout
// -------------------------------------------------------------------------------------------------

/// Any line containing this substring is treated as the CSV header and skipped
pub const HEADER_MARKER: &str = "StarID";

/// Field delimiter of the star CSV (no quoting, no escaping)
pub const CSV_DELIMITER: u8 = b',';

/// Column of the star identifier
pub const ID_FIELD: usize = 0;

/// Column of the proper name
pub const NAME_FIELD: usize = 1;

/// Column of the x coordinate
pub const X_FIELD: usize = 2;

/// Column of the y coordinate
pub const Y_FIELD: usize = 3;

/// Column of the z coordinate
pub const Z_FIELD: usize = 4;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Star identifier, as written in the `StarID` column
pub type StarId = String;

/// Cartesian position of a star
pub type Position = nalgebra::Vector3<f64>;
