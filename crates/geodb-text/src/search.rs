use anyhow::Result;
use std::sync::{Mutex, MutexGuard};
use tantivy::collector::DocSetCollector;
use tantivy::query::{BooleanQuery, Query, RegexQuery};
use tantivy::{Index, IndexReader, TantivyDocument};

use geodb_cache::LruCache;
use geodb_core::config::Settings;
use geodb_core::error::Error;
use geodb_core::traits::ProximitySearch;
use geodb_core::types::PlaceHit;
use geodb_geoprint::{distance, encode, location_term, neighbor_codes, AngularUnit, GeoCode, LOCATION_TERM_PREFIX};

use crate::tantivy_utils::PlaceFields;

/// Proximity search over a place index. Built cell queries are kept in an LRU
/// cache keyed by cell code.
pub struct PlaceSearchEngine {
	reader: IndexReader,
	fields: PlaceFields,
	index_precision: usize,
	query_cache: Mutex<LruCache<String, Box<dyn Query>>>,
}

impl PlaceSearchEngine {
	pub fn open(index_dir: std::path::PathBuf, settings: &Settings) -> Result<Self, anyhow::Error> {
		if !index_dir.exists() {
			return Err(Error::NotFound(format!("place index at {}", index_dir.display())).into());
		}
		let index = Index::open_in_dir(&index_dir)?;
		Self::from_index(index, settings.geo.precision, settings.cache.query_capacity)
	}

	/// `index_precision` is the geoprint length the index was written with.
	pub fn from_index(index: Index, index_precision: usize, query_cache_capacity: usize) -> Result<Self, anyhow::Error> {
		let reader = index.reader()?;
		let fields = PlaceFields::resolve(&index.schema())?;
		let query_cache = Mutex::new(LruCache::new(query_cache_capacity)?);
		Ok(Self { reader, fields, index_precision, query_cache })
	}

	/// Pick up commits made after the engine was opened.
	pub fn reload(&self) -> Result<()> {
		self.reader.reload()?;
		Ok(())
	}

	pub fn cached_queries(&self) -> Result<usize> {
		Ok(self.lock_cache()?.len())
	}

	fn lock_cache(&self) -> Result<MutexGuard<'_, LruCache<String, Box<dyn Query>>>, Error> {
		self.query_cache.lock().map_err(|_| Error::Operation("query cache lock poisoned".into()))
	}

	/// Union of term-prefix queries for `cell` and its neighbors.
	fn cell_query(&self, cell: &GeoCode) -> Result<Box<dyn Query>> {
		let key = cell.to_string();
		{
			let mut cache = self.lock_cache()?;
			if let Ok(query) = cache.get(&key) {
				tracing::debug!(cell = %key, "query cache hit");
				return Ok(query.box_clone());
			}
		}

		let mut cells = neighbor_codes(cell);
		cells.insert(cell.clone());
		let mut clauses: Vec<Box<dyn Query>> = Vec::with_capacity(cells.len());
		for c in &cells {
			let pattern = format!("{}.*", location_term(c)?);
			clauses.push(Box::new(RegexQuery::from_pattern(&pattern, self.fields.location)?));
		}
		let query: Box<dyn Query> = Box::new(BooleanQuery::union(clauses));

		let mut cache = self.lock_cache()?;
		cache.put(key.clone(), query.box_clone());
		tracing::debug!(cell = %key, clauses = cells.len(), "query cache miss");
		Ok(query)
	}

	/// Places in the `precision`-length cell around the point and its eight
	/// neighbors, nearest first. `precision` is clamped to `[2, index precision]`.
	pub fn near(&self, lat: f64, lon: f64, precision: usize, limit: usize) -> Result<Vec<PlaceHit>, anyhow::Error> {
		let center = encode(lat, lon, self.index_precision, AngularUnit::Degrees);
		let cell = center.truncate(precision.min(self.index_precision).max(2));
		let query = self.cell_query(&cell)?;

		let searcher = self.reader.searcher();
		let matches = searcher.search(query.as_ref(), &DocSetCollector)?;
		let mut hits = Vec::with_capacity(matches.len());
		for addr in matches {
			let doc: TantivyDocument = searcher.doc(addr)?;
			let term = PlaceFields::text(&doc, self.fields.location);
			let code = GeoCode::parse(term.strip_prefix(LOCATION_TERM_PREFIX).unwrap_or(&term))?;
			hits.push(PlaceHit {
				id: PlaceFields::text(&doc, self.fields.id),
				name: PlaceFields::text(&doc, self.fields.name),
				distance_m: distance(&center, &code, AngularUnit::Degrees),
				code: code.to_string(),
			});
		}
		hits.sort_by(|a, b| a.distance_m.total_cmp(&b.distance_m).then_with(|| a.id.cmp(&b.id)));
		hits.truncate(limit);
		tracing::debug!(cell = %cell, hits = hits.len(), "proximity search");
		Ok(hits)
	}
}

impl ProximitySearch for PlaceSearchEngine {
	fn near(&self, lat: f64, lon: f64, precision: usize, limit: usize) -> Result<Vec<PlaceHit>> {
		Self::near(self, lat, lon, precision, limit)
	}
}
