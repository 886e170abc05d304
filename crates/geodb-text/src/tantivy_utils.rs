use tantivy::schema::{Field, Schema, STRING, STORED};
use tantivy::TantivyDocument;
use tantivy::schema::Value;

/// Place schema. `location` holds the raw `loc_<geoprint>` term so that term
/// prefixes are spatial cells; it must never go through a tokenizer.
pub fn build_schema() -> Schema {
	let mut schema_builder = Schema::builder();
	schema_builder.add_text_field("id", STRING | STORED);
	schema_builder.add_text_field("name", STORED);
	schema_builder.add_text_field("location", STRING | STORED);
	schema_builder.build()
}

/// Resolved field handles of [`build_schema`].
#[derive(Clone, Copy)]
pub struct PlaceFields {
	pub id: Field,
	pub name: Field,
	pub location: Field,
}

impl PlaceFields {
	pub fn resolve(schema: &Schema) -> Result<Self, anyhow::Error> {
		Ok(Self {
			id: schema.get_field("id")?,
			name: schema.get_field("name")?,
			location: schema.get_field("location")?,
		})
	}

	pub fn text(doc: &TantivyDocument, field: Field) -> String {
		doc.get_first(field).and_then(|v| v.as_str()).unwrap_or("").to_string()
	}
}
