//! # Naive neighbor ranking
//!
//! Brute-force k-nearest-neighbor search over a [`RecordStore`].
//!
//! ## Algorithm
//! -----------------
//! 1. Resolve the query point. A named point is looked up by exact name, last
//!    match wins; an unknown name is a [`StarbotError::StarNotFound`].
//! 2. Compute the distance from the query point to **every** stored star. The
//!    distances live in a per-query list of [`Neighbor`] values; stored
//!    records are never written to.
//! 3. Stable sort ascending by distance, so equidistant stars keep file order.
//! 4. Take the first `k` ids. For a named query, the first entry carrying the
//!    resolved star's id is skipped once; further duplicates of that id are
//!    regular candidates.
//!
//! Fewer than `k` ids are returned when the store is too small.
use itertools::Itertools;
use tracing::debug;

use super::query::{NeighborQuery, QueryPoint};
use crate::{
    constants::{Position, StarId},
    distance::distance_between,
    stars::{RecordStore, StarRecord},
    starbot_errors::StarbotError,
};

/// A star together with its distance to the query point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor<'a> {
    pub star: &'a StarRecord,
    pub distance: f64,
}

/// Resolve the query point to a position, and for named points the id to exclude.
fn resolve<'a>(
    store: &'a RecordStore,
    point: &QueryPoint,
) -> Result<(Position, Option<&'a StarId>), StarbotError> {
    match point {
        QueryPoint::Named(name) => {
            let star = store
                .find_by_name(name)
                .ok_or_else(|| StarbotError::StarNotFound(name.clone()))?;
            Ok((star.position()?, Some(&star.id)))
        }
        QueryPoint::Coordinates(position) => Ok((*position, None)),
    }
}

/// Every star of the store with its distance to `origin`, nearest first.
///
/// Equidistant stars keep their store order.
pub fn rank_by_distance<'a>(
    store: &'a RecordStore,
    origin: &Position,
) -> Result<Vec<Neighbor<'a>>, StarbotError> {
    let mut ranked = store
        .iter()
        .map(|star| {
            Ok(Neighbor {
                star,
                distance: distance_between(origin, star)?,
            })
        })
        .collect::<Result<Vec<_>, StarbotError>>()?;

    ranked.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    Ok(ranked)
}

/// Find the `k` nearest stars to the query point.
///
/// Arguments
/// ---------
/// * `store`: the loaded stars
/// * `query`: neighbor count and query point
///
/// Return
/// ------
/// * The neighbors, nearest first, with their distances
///
/// Errors
/// ------
/// * [`StarbotError::StarNotFound`] if a named point matches no star
/// * [`StarbotError::ParseError`] if any stored coordinate is not numeric
pub fn nearest_neighbors<'a>(
    store: &'a RecordStore,
    query: &NeighborQuery,
) -> Result<Vec<Neighbor<'a>>, StarbotError> {
    let (origin, excluded) = resolve(store, &query.point)?;
    let ranked = rank_by_distance(store, &origin)?;

    let mut pending_exclusion = excluded;
    let neighbors: Vec<Neighbor<'a>> = ranked
        .into_iter()
        .filter(|neighbor| {
            if pending_exclusion.is_some_and(|id| *id == neighbor.star.id) {
                pending_exclusion = None;
                return false;
            }
            true
        })
        .take(query.k)
        .collect();

    debug!(
        point = %query.point,
        k = query.k,
        found = neighbors.len(),
        "naive neighbor query"
    );
    Ok(neighbors)
}

/// Ids of the `k` nearest stars to the query point, nearest first.
pub fn naive_neighbors(
    store: &RecordStore,
    query: &NeighborQuery,
) -> Result<Vec<StarId>, StarbotError> {
    Ok(nearest_neighbors(store, query)?
        .into_iter()
        .map(|neighbor| neighbor.star.id.clone())
        .collect_vec())
}
