use crate::code::{AngularUnit, GeoCode};
use crate::codec::decode;

/// Equatorial radius used for distances, in meters.
pub const EARTH_RADIUS_M: f64 = 6_378_100.0;

/// Approximate great-circle distance between two cell centers (haversine).
///
/// With [`AngularUnit::Radians`] the central angle is returned; otherwise the
/// result is in meters.
pub fn distance(start: &GeoCode, end: &GeoCode, unit: AngularUnit) -> f64 {
    let (lat1, lon1) = decode(start, AngularUnit::Radians);
    let (lat2, lon2) = decode(end, AngularUnit::Radians);
    let d_lat = lat2 - lat1;
    let d_lon = lon2 - lon1;
    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    match unit {
        AngularUnit::Radians => c,
        AngularUnit::Degrees => EARTH_RADIUS_M * c,
    }
}

/// Approximate initial bearing from `start` to `end`, in (-180, 180] degrees or radians.
pub fn bearing(start: &GeoCode, end: &GeoCode, unit: AngularUnit) -> f64 {
    let (lat1, lon1) = decode(start, AngularUnit::Radians);
    let (lat2, lon2) = decode(end, AngularUnit::Radians);
    let d_lon = lon2 - lon1;
    let y = d_lon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();
    unit.express_radians(y.atan2(x))
}
