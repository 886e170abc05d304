//! Domain types shared by the place index and its callers.

use serde::{Deserialize, Serialize};

pub type PlaceId = String;

/// A named point that is independently indexed.
///
/// - `id`: globally unique place identifier
/// - `name`: display name, stored but not analyzed for search
/// - `lat`/`lon`: WGS84 coordinates in degrees
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub id: PlaceId,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

/// A proximity search result.
///
/// `id` matches `Place::id`. `code` is the stored geoprint and
/// `distance_m` the approximate great-circle distance to the query point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceHit {
    pub id: PlaceId,
    pub name: String,
    pub code: String,
    pub distance_m: f64,
}
