use geodb_core::error::{Error, Result};

use crate::code::{AngularUnit, BoundingBox, GeoCode};

/// Digit alphabet; the index is `lon_bit << 1 | lat_bit`.
pub const ALPHABET: [u8; 4] = *b"gatc";
pub const DEFAULT_PRECISION: usize = 22;
/// Prefix of the indexed term holding a geoprint.
pub const LOCATION_TERM_PREFIX: &str = "loc_";
/// Longest term the search engine accepts, in bytes.
pub const MAX_TERM_LEN: usize = 240;

#[derive(Debug, Clone, Copy)]
struct Interval {
    min: f64,
    max: f64,
}

impl Interval {
    const LATITUDE: Interval = Interval { min: -90.0, max: 90.0 };

    fn hemisphere(western: bool) -> Self {
        if western { Interval { min: -180.0, max: 0.0 } } else { Interval { min: 0.0, max: 180.0 } }
    }

    fn mid(self) -> f64 {
        (self.min + self.max) / 2.0
    }

    fn narrow(&mut self, upper: bool) {
        let mid = self.mid();
        if upper { self.min = mid } else { self.max = mid }
    }
}

/// `2^-(len - 1)`: the fraction of the starting interval left after `len - 1` bisections.
pub(crate) fn halvings(len: usize) -> f64 {
    0.5f64.powi(i32::try_from(len.saturating_sub(1)).unwrap_or(i32::MAX))
}

/// Encode a point into a geoprint of `precision` characters.
///
/// A `precision` below 1 still yields the hemisphere marker. Inputs are not
/// range checked; latitudes outside [-90, 90] or longitudes outside
/// [-180, 180] pin to the outermost cell.
pub fn encode(latitude: f64, longitude: f64, precision: usize, unit: AngularUnit) -> GeoCode {
    encode_with_box(latitude, longitude, precision, unit).0
}

pub fn encode_default(latitude: f64, longitude: f64) -> GeoCode {
    encode(latitude, longitude, DEFAULT_PRECISION, AngularUnit::Degrees)
}

/// Like [`encode`], also returning the cell bounds in degrees.
pub fn encode_with_box(latitude: f64, longitude: f64, precision: usize, unit: AngularUnit) -> (GeoCode, BoundingBox) {
    let lat = unit.to_degrees(latitude);
    let lon = unit.to_degrees(longitude);

    let western = lon < 0.0;
    let mut lon_i = Interval::hemisphere(western);
    let mut lat_i = Interval::LATITUDE;

    let mut code = String::with_capacity(precision.max(1));
    code.push(if western { 'w' } else { 'e' });
    while code.len() < precision {
        let lon_bit = lon > lon_i.mid();
        lon_i.narrow(lon_bit);
        let lat_bit = lat > lat_i.mid();
        lat_i.narrow(lat_bit);
        let digit = (usize::from(lon_bit) << 1) | usize::from(lat_bit);
        code.push(char::from(ALPHABET[digit]));
    }
    (GeoCode::from_encoded(code), to_box(lat_i, lon_i))
}

fn to_box(lat_i: Interval, lon_i: Interval) -> BoundingBox {
    BoundingBox { lat_min: lat_i.min, lon_min: lon_i.min, lat_max: lat_i.max, lon_max: lon_i.max }
}

fn intervals(code: &GeoCode) -> (Interval, Interval) {
    let mut lat_i = Interval::LATITUDE;
    let mut lon_i = Interval::hemisphere(code.is_western());
    for b in code.as_str().bytes().skip(1) {
        let digit = ALPHABET.iter().position(|&a| a == b).unwrap_or(0);
        lon_i.narrow(digit & 2 != 0);
        lat_i.narrow(digit & 1 != 0);
    }
    (lat_i, lon_i)
}

/// Center of the geoprint cell as `(latitude, longitude)`.
///
/// The true encoded point is within [`error`] of each coordinate.
pub fn decode(code: &GeoCode, unit: AngularUnit) -> (f64, f64) {
    let (lat_i, lon_i) = intervals(code);
    (unit.express_degrees(lat_i.mid()), unit.express_degrees(lon_i.mid()))
}

pub fn bounding_box(code: &GeoCode, unit: AngularUnit) -> BoundingBox {
    let (lat_i, lon_i) = intervals(code);
    to_box(lat_i, lon_i).in_unit(unit)
}

/// Maximum deviation of a decoded coordinate from the encoded point: `90 * 2^-(len-1)`.
///
/// This is the latitude half-width. Longitude starts from a 180 degree
/// hemisphere rather than the full 360 degrees, which is the only reason its
/// half-width is the same; it does not hold for geohash-style codes in general.
pub fn error(code: &GeoCode, unit: AngularUnit) -> f64 {
    unit.express_degrees(90.0 * halvings(code.len()))
}

/// Approximate edge length of the cell in meters.
pub fn size(code: &GeoCode) -> f64 {
    20_000_000.0 * halvings(code.len())
}

/// Decoded latitude and longitude rendered with only the digits the code resolves.
///
/// Trailing zeros are dropped, and so is a point left bare by that, so a
/// center of exactly 10 degrees reads `"10"` rather than `"10."`.
pub fn format(code: &GeoCode) -> (String, String) {
    let (lat, lon) = decode(code, AngularUnit::Degrees);
    let digits = (-error(code, AngularUnit::Degrees).log10()).round().max(1.0) - 1.0;
    let places = digits as usize;
    (trim_decimals(format!("{lat:.places$}")), trim_decimals(format!("{lon:.places$}")))
}

fn trim_decimals(s: String) -> String {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

/// The search engine term for a geoprint, `loc_<code>`.
pub fn location_term(code: &GeoCode) -> Result<String> {
    let term = format!("{LOCATION_TERM_PREFIX}{code}");
    if term.len() > MAX_TERM_LEN {
        return Err(Error::InvalidTerm(format!("location term of {} bytes exceeds {}", term.len(), MAX_TERM_LEN)));
    }
    Ok(term)
}
