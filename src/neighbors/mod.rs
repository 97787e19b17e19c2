//! # Neighbor ranker
//!
//! Parse a neighbor query ([`NeighborQuery`]) and answer it against a
//! [`RecordStore`](crate::stars::RecordStore) by brute force
//! ([`naive_neighbors`]).
//!
//! ```
//! use starbot::neighbors::{naive_neighbors, NeighborQuery};
//! use starbot::stars::{RecordStore, StarRecord};
//!
//! let store: RecordStore = [
//!     StarRecord::new("0", "A", 0.0, 0.0, 0.0),
//!     StarRecord::new("1", "B", 1.0, 0.0, 0.0),
//!     StarRecord::new("2", "C", 2.0, 0.0, 0.0),
//! ]
//! .into_iter()
//! .collect();
//!
//! let query = NeighborQuery::from_args(&["1", "B"]).unwrap();
//! assert_eq!(naive_neighbors(&store, &query).unwrap(), ["0"]);
//! ```
pub mod query;
pub mod ranker;

pub use query::{parse_count, NeighborQuery, QueryPoint};
pub use ranker::{naive_neighbors, nearest_neighbors, rank_by_distance, Neighbor};
