use anyhow::Result;
use tantivy::{doc, Index};

use geodb_core::traits::PlaceIndexer;
use geodb_core::types::Place;
use geodb_geoprint::{encode, location_term, AngularUnit};

use crate::tantivy_utils::{build_schema, PlaceFields};

pub struct TantivyPlaceIndexer {
	index: Index,
	fields: PlaceFields,
	precision: usize,
}

impl TantivyPlaceIndexer {
	/// Create a fresh index in `index_dir`, replacing any existing one.
	pub fn create(index_dir: std::path::PathBuf, precision: usize) -> Result<Self, anyhow::Error> {
		let schema = build_schema();
		if index_dir.exists() { std::fs::remove_dir_all(&index_dir)?; }
		std::fs::create_dir_all(&index_dir)?;
		let index = Index::create_in_dir(&index_dir, schema.clone())?;
		let fields = PlaceFields::resolve(&schema)?;
		Ok(Self { index, fields, precision })
	}

	pub fn create_in_ram(precision: usize) -> Result<Self, anyhow::Error> {
		let schema = build_schema();
		let index = Index::create_in_ram(schema.clone());
		let fields = PlaceFields::resolve(&schema)?;
		Ok(Self { index, fields, precision })
	}

	pub fn precision(&self) -> usize { self.precision }

	/// Handle for opening a search engine over the same index.
	pub fn tantivy_index(&self) -> Index { self.index.clone() }
}

impl PlaceIndexer for TantivyPlaceIndexer {
	fn index(&self, places: &[Place]) -> Result<usize> {
		let mut index_writer = self.index.writer(50_000_000)?;
		for p in places {
			let code = encode(p.lat, p.lon, self.precision, AngularUnit::Degrees);
			let doc = doc!(
				self.fields.id => p.id.clone(),
				self.fields.name => p.name.clone(),
				self.fields.location => location_term(&code)?,
			);
			index_writer.add_document(doc)?;
		}
		index_writer.commit()?;
		tracing::info!(count = places.len(), precision = self.precision, "indexed places");
		Ok(places.len())
	}
}
