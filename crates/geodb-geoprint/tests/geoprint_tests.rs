use geodb_core::Error;
use geodb_geoprint::{
    adjacent, bearing, bounding_box, decode, distance, encode, encode_default, encode_with_box, error, format,
    location_term, neighbor_codes, neighbors, size, AngularUnit, Direction, GeoCode, DEFAULT_PRECISION,
};

const PORTLAND: (f64, f64) = (7.0625, -95.677068); // near the rain
const LONDON: (f64, f64) = (51.500152, -0.126236); // near the prime meridian
const QUITO: (f64, f64) = (-0.220862, -78.510439); // near the equator
const BARROW: (f64, f64) = (74.295556, -156.766389); // high latitude
const MCMURDO: (f64, f64) = (-75.85, 166.666667); // near the penguins
const PARIS: (f64, f64) = (48.8566, 2.3522);

const POINTS: [(f64, f64); 5] = [PORTLAND, LONDON, QUITO, BARROW, MCMURDO];

fn code(s: &str) -> GeoCode {
    GeoCode::parse(s).expect("valid geoprint")
}

fn close(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol
}

#[test]
fn encodes_reference_points() {
    let expected = [
        "watttatcttttgctacgaagt",
        "wccttcttcttacaacgagagt",
        "wtaacaaaaatatacccagtct",
        "waacgaggcagagcgctggatc",
        "etttatcgtgggacaacactcc",
    ];
    for ((lat, lon), want) in POINTS.iter().zip(expected) {
        let h = encode(*lat, *lon, DEFAULT_PRECISION, AngularUnit::Degrees);
        assert_eq!(h.as_str(), want);
        assert_eq!(h.len(), DEFAULT_PRECISION);
    }
    assert!(encode_default(LONDON.0, LONDON.1).as_str().starts_with('w'), "negative longitude is western");
    assert!(encode_default(PARIS.0, PARIS.1).as_str().starts_with('e'));
}

#[test]
fn hemisphere_split_at_zero() {
    assert_eq!(encode(0.0, 0.0, 3, AngularUnit::Degrees).as_str(), "ega");
    assert_eq!(encode(-1.0, -1.0, 3, AngularUnit::Degrees).as_str(), "wtc");
    assert_eq!(encode(10.0, 10.0, 0, AngularUnit::Degrees).as_str(), "e", "precision below 1 keeps the marker");
    assert_eq!(decode(&code("e"), AngularUnit::Degrees), (0.0, 90.0));
    assert_eq!(decode(&code("w"), AngularUnit::Degrees), (0.0, -90.0));
}

#[test]
fn radians_match_degrees() {
    let (lat, lon) = PORTLAND;
    let h = encode_default(lat, lon);
    let h2 = encode(lat.to_radians(), lon.to_radians(), DEFAULT_PRECISION, AngularUnit::Radians);
    assert_eq!(h, h2);

    let (rlat, rlon) = decode(&h, AngularUnit::Radians);
    let e = error(&h, AngularUnit::Radians);
    assert!((lat.to_radians() - rlat).abs() <= e);
    assert!((lon.to_radians() - rlon).abs() <= e);
}

#[test]
fn every_prefix_decodes_within_error() {
    for (lat, lon) in POINTS {
        let h = encode_default(lat, lon);
        for len in 1..h.len() {
            let prefix = h.truncate(len);
            let (dlat, dlon) = decode(&prefix, AngularUnit::Degrees);
            let e = error(&prefix, AngularUnit::Degrees);
            assert!((dlat - lat).abs() < e, "lat {prefix}");
            assert!((dlon - lon).abs() < e, "lon {prefix}");
        }
    }
}

#[test]
fn prefix_boxes_nest() {
    for (lat, lon) in POINTS {
        let h = encode_default(lat, lon);
        let full = bounding_box(&h, AngularUnit::Degrees);
        assert!(full.contains_point(lat, lon));
        for len in 1..h.len() {
            let outer = bounding_box(&h.truncate(len), AngularUnit::Degrees);
            assert!(outer.contains(&full), "{} contains {}", h.truncate(len), h);
            assert!(outer != full);
            assert!((outer.lat_max - outer.lat_min) > (full.lat_max - full.lat_min));
        }
    }
}

#[test]
fn truncated_code_equals_lower_precision_encode() {
    let (lat, lon) = BARROW;
    let h = encode_default(lat, lon);
    for len in 1..=h.len() {
        assert_eq!(h.truncate(len), encode(lat, lon, len, AngularUnit::Degrees));
        assert!(h.starts_with(&h.truncate(len)));
    }
}

#[test]
fn encode_with_box_reports_cell() {
    let (h, cell) = encode_with_box(PORTLAND.0, PORTLAND.1, 8, AngularUnit::Degrees);
    assert_eq!(h.as_str(), "watttatc");
    assert_eq!((cell.lat_min, cell.lon_min), (7.03125, -97.03125));
    assert_eq!((cell.lat_max, cell.lon_max), (8.4375, -95.625));
    assert_eq!(cell, bounding_box(&h, AngularUnit::Degrees));
    assert_eq!(cell.center(), decode(&h, AngularUnit::Degrees));
}

#[test]
fn error_and_size_halve_per_character() {
    assert_eq!(error(&code("watt"), AngularUnit::Degrees), 11.25);
    assert_eq!(error(&code("w"), AngularUnit::Degrees), 90.0);
    assert_eq!(size(&code("watttatc")), 156_250.0);
    assert_eq!(size(&code("e")), 20_000_000.0);
    assert!(close(error(&code("watt"), AngularUnit::Radians), 11.25f64.to_radians(), 1e-15));
}

#[test]
fn distance_and_bearing_london_paris() {
    let london = encode_default(LONDON.0, LONDON.1);
    let paris = encode_default(PARIS.0, PARIS.1);
    assert_eq!(paris.as_str(), "eaagggatcgcaccagggtcgt");

    assert!(close(distance(&london, &paris, AngularUnit::Degrees), 343_200.306_471_290_9, 1e-3));
    assert!(close(distance(&london, &paris, AngularUnit::Radians), 0.053_809_176_160_814_49, 1e-12));
    assert!(close(bearing(&london, &paris, AngularUnit::Degrees), 148.061_313_195_712_44, 1e-9));
    assert!(close(bearing(&london, &paris, AngularUnit::Radians), 2.584_157_410_091_709_7, 1e-12));
    assert_eq!(distance(&london, &london, AngularUnit::Degrees), 0.0);
}

#[test]
fn labeled_neighbors_follow_table() {
    let h = code("watttatc");
    let got: Vec<(Direction, String)> =
        neighbors(&h).into_iter().map(|n| (n.direction, n.code.to_string())).collect();
    let want = [
        (Direction::North, "watttcga"),
        (Direction::South, "watttata"),
        (Direction::East, "watttact"),
        (Direction::NorthEast, "watttcag"),
        (Direction::SouthEast, "watttacg"),
        (Direction::West, "watttatt"),
        (Direction::NorthWest, "watttcgg"),
        (Direction::SouthWest, "watttatg"),
    ];
    assert_eq!(got.len(), want.len());
    for ((gd, gc), (wd, wc)) in got.iter().zip(want) {
        assert_eq!((*gd, gc.as_str()), (wd, wc));
    }
    assert_eq!(neighbor_codes(&h).len(), 8);
    assert_eq!(Direction::NorthEast.label(), "NE");
    assert!(close(Direction::West.radial(), 3.0 * std::f64::consts::PI / 2.0, 1e-15));
}

#[test]
fn neighbors_are_adjacent() {
    for (lat, lon) in POINTS {
        let h = encode_default(lat, lon);
        for len in 7..h.len() {
            let ph = h.truncate(len);
            for n in neighbors(&ph) {
                assert!(adjacent(&ph, &n.code).expect("same precision"), "{ph} -> {}", n.code);
                assert!(adjacent(&n.code, &ph).expect("same precision"), "symmetric {ph}");
            }
        }
    }
}

#[test]
fn polar_neighbors_collapse_onto_border_cells() {
    let cell = encode(89.99, 10.0, 8, AngularUnit::Degrees);
    assert_eq!(cell.as_str(), "eaaaaccc");
    let by_label: Vec<(&str, String)> =
        neighbors(&cell).iter().map(|n| (n.direction.label(), n.code.to_string())).collect();
    assert_eq!(
        by_label,
        vec![
            ("N", "eaaacaaa".to_string()),
            ("S", "eaaaacca".to_string()),
            ("E", "eaaaaccc".to_string()),
            ("NE", "eaaacaaa".to_string()),
            ("SE", "eaaaacca".to_string()),
            ("W", "eaaaacct".to_string()),
            ("NW", "eaaacaag".to_string()),
            ("SW", "eaaaaccg".to_string()),
        ]
    );
    // The step past the pole re-encodes into the cell itself, which is not adjacent to itself.
    let east = &neighbors(&cell)[2];
    assert_eq!(east.direction, Direction::East);
    assert_eq!(east.code, cell);
    assert_eq!(adjacent(&cell, &east.code), Ok(false));
    assert_eq!(neighbor_codes(&cell).len(), 6);
}

#[test]
fn adjacency_edge_cases() {
    let portland = encode_default(PORTLAND.0, PORTLAND.1);
    let london = encode_default(LONDON.0, LONDON.1);
    assert_eq!(adjacent(&portland, &london), Ok(false));
    assert_eq!(adjacent(&portland, &portland), Ok(false));
    assert_eq!(adjacent(&code("wa"), &code("wa")), Ok(false), "equal codes short-circuit");

    assert!(matches!(adjacent(&code("wa"), &code("wc")), Err(Error::PrecisionMismatch(_))));
    assert!(matches!(adjacent(&code("watt"), &code("wat")), Err(Error::PrecisionMismatch(_))));

    // Cells on each side of the prime meridian touch.
    let west = encode(10.0, -0.001, 10, AngularUnit::Degrees);
    let east = encode(10.0, 0.001, 10, AngularUnit::Degrees);
    assert_eq!(adjacent(&west, &east), Ok(true));
    assert_eq!(adjacent(&east, &west), Ok(true));
}

#[test]
fn format_trims_to_known_digits() {
    let london = encode_default(LONDON.0, LONDON.1);
    assert_eq!(format(&london), ("51.5".to_string(), "-0.126".to_string()));
    assert_eq!(format(&london.truncate(5)), ("51".to_string(), "-6".to_string()));
    assert_eq!(format(&code("watttatc")), ("8".to_string(), "-96".to_string()));
    assert_eq!(format(&code("watt")), ("11".to_string(), "-101".to_string()));
    // All-zero decimals leave no dangling point.
    let ten = encode(10.0, 10.0, 21, AngularUnit::Degrees);
    assert_eq!(ten.as_str(), "eagggcccgggcccgggcccg");
    assert_eq!(format(&ten), ("10".to_string(), "10".to_string()));
}

#[test]
fn parse_rejects_malformed_codes() {
    assert!(matches!(GeoCode::parse(""), Err(Error::InvalidGeoprint(_))));
    assert!(matches!(GeoCode::parse("xgat"), Err(Error::InvalidGeoprint(_))));
    assert!(matches!(GeoCode::parse("wgAt"), Err(Error::InvalidGeoprint(_))), "case is significant");
    assert!(matches!("wgxt".parse::<GeoCode>(), Err(Error::InvalidGeoprint(_))));
    assert_eq!("egatc".parse::<GeoCode>().map(String::from), Ok("egatc".to_string()));
}

#[test]
fn serde_uses_plain_string() {
    let h = code("watttatc");
    let json = serde_json::to_string(&h).expect("serialize");
    assert_eq!(json, "\"watttatc\"");
    let back: GeoCode = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, h);
    assert!(serde_json::from_str::<GeoCode>("\"wxyz\"").is_err());
}

#[test]
fn location_terms_are_prefixed_and_bounded() {
    let h = encode_default(PORTLAND.0, PORTLAND.1);
    assert_eq!(location_term(&h), Ok("loc_watttatcttttgctacgaagt".to_string()));

    let long = encode(PORTLAND.0, PORTLAND.1, 237, AngularUnit::Degrees);
    assert!(matches!(location_term(&long), Err(Error::InvalidTerm(_))));
    assert!(location_term(&long.truncate(236)).is_ok());
}
