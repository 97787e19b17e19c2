//! # Starbot
//!
//! A small command interpreter answering **k nearest neighbors** queries over a
//! catalog of stars loaded from CSV, plus a couple of arithmetic commands.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`stars`] | [`StarRecord`] and the in-memory [`RecordStore`] |
//! | [`distance`] | Euclidean distance between located items |
//! | [`neighbors`] | [`NeighborQuery`] parsing and brute-force ranking |
//! | [`repl`] | Command parsing and the interactive [`Session`](repl::Session) |
pub mod constants;
pub mod distance;
pub mod math_bot;
pub mod neighbors;
pub mod repl;
pub mod starbot_errors;
pub mod stars;

pub use constants::{Position, StarId};
pub use neighbors::{naive_neighbors, NeighborQuery, QueryPoint};
pub use starbot_errors::StarbotError;
pub use stars::{LoadMode, RecordStore, StarRecord};
