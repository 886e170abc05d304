use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::f64::consts::PI;
use std::fmt;

use geodb_core::error::{Error, Result};

use crate::code::{AngularUnit, GeoCode};
use crate::codec::{decode, encode, halvings};

/// Relative tolerance for comparing decoded cell centers, as a fraction of the cell spacing.
///
/// Centers are dyadic fractions of 180 and decode exactly in `f64` up to about
/// 45 characters; the slack only absorbs platforms with looser float math.
pub const ADJACENCY_EPSILON_FACTOR: f64 = 1e-9;

/// Compass label attached to a neighbor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    NorthEast,
    SouthEast,
    West,
    NorthWest,
    SouthWest,
}

impl Direction {
    pub fn label(self) -> &'static str {
        match self {
            Self::North => "N",
            Self::South => "S",
            Self::East => "E",
            Self::NorthEast => "NE",
            Self::SouthEast => "SE",
            Self::West => "W",
            Self::NorthWest => "NW",
            Self::SouthWest => "SW",
        }
    }

    /// Clockwise angle from north, in radians.
    pub fn radial(self) -> f64 {
        match self {
            Self::North => 0.0,
            Self::NorthEast => PI / 4.0,
            Self::East => PI / 2.0,
            Self::SouthEast => 3.0 * PI / 4.0,
            Self::South => PI,
            Self::SouthWest => 5.0 * PI / 4.0,
            Self::West => 3.0 * PI / 2.0,
            Self::NorthWest => 7.0 * PI / 4.0,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// `(lat step, lon step, label)` in emission order.
///
/// Labels are a fixed table, not geometry: `(0, 1)` is labeled north even
/// though it steps east. Stored neighbor labels depend on this exact pairing.
const STEPS: [(i8, i8, Direction); 8] = [
    (0, 1, Direction::North),
    (0, -1, Direction::South),
    (1, 0, Direction::East),
    (1, 1, Direction::NorthEast),
    (1, -1, Direction::SouthEast),
    (-1, 0, Direction::West),
    (-1, 1, Direction::NorthWest),
    (-1, -1, Direction::SouthWest),
];

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Neighbor {
    pub direction: Direction,
    pub code: GeoCode,
}

/// Cell edge length in degrees for codes of `precision` characters.
pub fn spacing(precision: usize) -> f64 {
    180.0 * halvings(precision)
}

/// The eight surrounding cells at the same precision, labeled.
///
/// Cells on the poles or the antimeridian have no cell beyond them; the
/// out-of-range step re-encodes into the border cell itself.
pub fn neighbors(code: &GeoCode) -> Vec<Neighbor> {
    let precision = code.len();
    let step = spacing(precision);
    let (lat, lon) = decode(code, AngularUnit::Degrees);
    STEPS
        .iter()
        .map(|&(d_lat, d_lon, direction)| Neighbor {
            direction,
            code: encode(
                lat + f64::from(d_lat) * step,
                lon + f64::from(d_lon) * step,
                precision,
                AngularUnit::Degrees,
            ),
        })
        .collect()
}

pub fn neighbor_codes(code: &GeoCode) -> BTreeSet<GeoCode> {
    neighbors(code).into_iter().map(|n| n.code).collect()
}

/// Whether two cells of equal precision touch along an edge or a corner.
///
/// Equal codes are never adjacent. Codes shorter than 3 characters or of
/// different lengths fail with [`Error::PrecisionMismatch`].
pub fn adjacent(first: &GeoCode, second: &GeoCode) -> Result<bool> {
    if first == second {
        return Ok(false);
    }
    if first.len().min(second.len()) < 3 {
        return Err(Error::PrecisionMismatch(
            "adjacency requires at least 3 characters of precision".to_string(),
        ));
    }
    if first.len() != second.len() {
        return Err(Error::PrecisionMismatch(format!(
            "adjacency can only be checked for the same precision ({} vs {})",
            first.len(),
            second.len()
        )));
    }

    let (lat1, lon1) = decode(first, AngularUnit::Degrees);
    let (lat2, lon2) = decode(second, AngularUnit::Degrees);
    let spacing = spacing(first.len());
    let eps = spacing * ADJACENCY_EPSILON_FACTOR;

    let one_step = |d: f64| (d - spacing).abs() <= eps;
    let same = |d: f64| d <= eps;
    let d_lat = (lat1 - lat2).abs();
    let d_lon = (lon1 - lon2).abs();

    Ok((one_step(d_lat) && same(d_lon)) || (one_step(d_lon) && same(d_lat)) || (one_step(d_lat) && one_step(d_lon)))
}
