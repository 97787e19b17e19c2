//! # Star records and the record store
//!
//! - [`StarRecord`]: one data row (`id`, `name`, raw `x, y, z`).
//! - [`RecordStore`]: the ordered, in-memory collection the neighbor ranker
//!   queries. Stored records are never modified by a query.
pub mod record_store;
pub mod star_record;

pub use record_store::{LoadMode, RecordStore};
pub use star_record::StarRecord;
