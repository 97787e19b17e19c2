//! # Neighbor queries
//!
//! A [`NeighborQuery`] pairs a neighbor count `k` with a [`QueryPoint`]. The two
//! accepted argument shapes are:
//!
//! | Arguments       | Query point                         |
//! |-----------------|-------------------------------------|
//! | `k name`        | [`QueryPoint::Named`]               |
//! | `k x y z`       | [`QueryPoint::Coordinates`]         |
//!
//! Any other number of arguments is an [`StarbotError::InvalidArgument`].
use std::fmt;

use crate::{constants::Position, stars::star_record::parse_number, starbot_errors::StarbotError};

#[derive(Debug, Clone, PartialEq)]
pub enum QueryPoint {
    /// A stored star, resolved by exact proper name.
    Named(String),
    /// An ad-hoc location that is not a member of the store.
    Coordinates(Position),
}

impl QueryPoint {
    /// Build a named query point, dropping every double quote from `name`.
    pub fn named(name: &str) -> Self {
        QueryPoint::Named(name.replace('"', ""))
    }

    pub fn coordinates(x: f64, y: f64, z: f64) -> Self {
        QueryPoint::Coordinates(Position::new(x, y, z))
    }
}

impl fmt::Display for QueryPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryPoint::Named(name) => write!(f, "star {name:?}"),
            QueryPoint::Coordinates(p) => write!(f, "point ({}, {}, {})", p.x, p.y, p.z),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NeighborQuery {
    pub k: usize,
    pub point: QueryPoint,
}

impl NeighborQuery {
    pub fn new(k: usize, point: QueryPoint) -> Self {
        NeighborQuery { k, point }
    }

    /// Parse the arguments following the `naive_neighbors` verb.
    ///
    /// Arguments
    /// ---------
    /// * `args`: either `[k, name]` or `[k, x, y, z]`
    ///
    /// Return
    /// ------
    /// * The query, [`StarbotError::ParseError`] for a non-numeric `k` or
    ///   coordinate, or [`StarbotError::InvalidArgument`] for any other arity
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self, StarbotError> {
        match args {
            [k, name] => Ok(NeighborQuery::new(
                parse_count(k.as_ref())?,
                QueryPoint::named(name.as_ref()),
            )),
            [k, x, y, z] => Ok(NeighborQuery::new(
                parse_count(k.as_ref())?,
                QueryPoint::coordinates(
                    parse_number("x", x.as_ref())?,
                    parse_number("y", y.as_ref())?,
                    parse_number("z", z.as_ref())?,
                ),
            )),
            _ => Err(StarbotError::InvalidArgument(format!(
                "expected `<k> <name>` or `<k> <x> <y> <z>`, got {} argument(s)",
                args.len()
            ))),
        }
    }
}

/// Parse a neighbor count.
///
/// Any numeric literal is accepted. Fractional counts are truncated toward
/// zero, so `2.5` asks for two neighbors; zero, negative and NaN counts all
/// mean "no neighbors".
pub fn parse_count(raw: &str) -> Result<usize, StarbotError> {
    let k = parse_number("k", raw)?;
    // saturating cast: NaN and negatives become 0, +inf becomes usize::MAX
    Ok(k.trunc() as usize)
}
