//! geodb-text
//!
//! Tantivy-backed place index. Places are stored with their geoprint as a raw
//! `loc_<code>` term; proximity search is a union of term-prefix queries over
//! a cell and its neighbors, ranked by haversine distance.

pub mod tantivy_utils;
pub mod index;
pub mod search;

pub use index::TantivyPlaceIndexer;
pub use search::PlaceSearchEngine;
