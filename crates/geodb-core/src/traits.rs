use crate::types::{Place, PlaceHit};

pub trait PlaceIndexer: Send + Sync {
    fn index(&self, places: &[Place]) -> anyhow::Result<usize>;
}

pub trait ProximitySearch: Send + Sync {
    /// Places within the geoprint cell of `precision` around the point (and its
    /// eight neighbors), nearest first.
    fn near(&self, lat: f64, lon: f64, precision: usize, limit: usize) -> anyhow::Result<Vec<PlaceHit>>;
}
