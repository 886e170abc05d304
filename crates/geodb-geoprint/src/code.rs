use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use geodb_core::error::{Error, Result};

use crate::codec::ALPHABET;

/// Unit of angles passed to and returned from the codec.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngularUnit {
    #[default]
    Degrees,
    Radians,
}

impl AngularUnit {
    /// Interpret `value` as an angle in this unit and return it in degrees.
    pub fn to_degrees(self, value: f64) -> f64 {
        match self {
            Self::Degrees => value,
            Self::Radians => value.to_degrees(),
        }
    }

    /// Express an angle given in degrees in this unit.
    pub fn express_degrees(self, degrees: f64) -> f64 {
        match self {
            Self::Degrees => degrees,
            Self::Radians => degrees.to_radians(),
        }
    }

    /// Express an angle given in radians in this unit.
    pub fn express_radians(self, radians: f64) -> f64 {
        match self {
            Self::Degrees => radians.to_degrees(),
            Self::Radians => radians,
        }
    }
}

/// A validated geoprint: a hemisphere marker followed by base-4 digits.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GeoCode(String);

impl GeoCode {
    pub fn parse(s: &str) -> Result<Self> {
        let mut bytes = s.bytes();
        match bytes.next() {
            Some(b'w' | b'e') => {}
            Some(_) => return Err(Error::InvalidGeoprint(format!("'{s}' must start with 'w' or 'e'"))),
            None => return Err(Error::InvalidGeoprint("empty geoprint".to_string())),
        }
        if let Some(bad) = bytes.find(|b| !ALPHABET.contains(b)) {
            return Err(Error::InvalidGeoprint(format!("'{s}' contains '{}'", char::from(bad))));
        }
        Ok(Self(s.to_string()))
    }

    /// Caller guarantees `s` is already well formed.
    pub(crate) fn from_encoded(s: String) -> Self {
        Self(s)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of characters, hemisphere marker included. Never zero.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_western(&self) -> bool {
        self.0.starts_with('w')
    }

    /// The enclosing code of length `len` (at least the hemisphere marker).
    pub fn truncate(&self, len: usize) -> Self {
        let len = len.clamp(1, self.len());
        Self(self.0[..len].to_string())
    }

    pub fn starts_with(&self, prefix: &GeoCode) -> bool {
        self.0.starts_with(prefix.as_str())
    }
}

impl fmt::Display for GeoCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for GeoCode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for GeoCode {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}

impl From<GeoCode> for String {
    fn from(code: GeoCode) -> Self {
        code.0
    }
}

impl AsRef<str> for GeoCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Latitude/longitude intervals of a geoprint cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub lat_min: f64,
    pub lon_min: f64,
    pub lat_max: f64,
    pub lon_max: f64,
}

impl BoundingBox {
    pub fn center(&self) -> (f64, f64) {
        ((self.lat_min + self.lat_max) / 2.0, (self.lon_min + self.lon_max) / 2.0)
    }

    pub fn contains_point(&self, lat: f64, lon: f64) -> bool {
        (self.lat_min..=self.lat_max).contains(&lat) && (self.lon_min..=self.lon_max).contains(&lon)
    }

    /// True when `other` lies inside `self`; shared edges count as inside.
    pub fn contains(&self, other: &BoundingBox) -> bool {
        self.lat_min <= other.lat_min
            && self.lon_min <= other.lon_min
            && self.lat_max >= other.lat_max
            && self.lon_max >= other.lon_max
    }

    /// Convert a box held in degrees into `unit`.
    pub fn in_unit(&self, unit: AngularUnit) -> Self {
        Self {
            lat_min: unit.express_degrees(self.lat_min),
            lon_min: unit.express_degrees(self.lon_min),
            lat_max: unit.express_degrees(self.lat_max),
            lon_max: unit.express_degrees(self.lon_max),
        }
    }
}
