//! geodb-geoprint
//!
//! Geoprints are a geohash variant built for prefix-based proximity search.
//! Instead of base32, every character after the first encodes one joint
//! bisection of the longitude and latitude intervals in a base-4 alphabet
//! (`g`, `a`, `t`, `c`). The first character is the hemisphere: `w` for
//! longitudes below zero, `e` for everything from zero up to 180.
//!
//! Codes are longer than geohashes but every prefix is itself a valid, coarser
//! code, so a search engine term prefix match is a spatial containment query.
//! As with geohashes, points close to each other across the equator or a
//! meridian boundary may share no prefix at all; [`neighbors`] covers that.
//!
//! ```
//! use geodb_geoprint::{encode, AngularUnit, DEFAULT_PRECISION};
//!
//! let code = encode(7.0625, -95.677068, DEFAULT_PRECISION, AngularUnit::Degrees);
//! assert_eq!(code.as_str(), "watttatcttttgctacgaagt");
//! ```

mod code;
mod codec;
mod measure;
mod neighbors;

pub use code::{AngularUnit, BoundingBox, GeoCode};
pub use codec::{
    bounding_box, decode, encode, encode_default, encode_with_box, error, format, location_term, size,
    ALPHABET, DEFAULT_PRECISION, LOCATION_TERM_PREFIX, MAX_TERM_LEN,
};
pub use measure::{bearing, distance, EARTH_RADIUS_M};
pub use neighbors::{adjacent, neighbor_codes, neighbors, spacing, Direction, Neighbor, ADJACENCY_EPSILON_FACTOR};
