use std::env;
use std::path::{Path, PathBuf};

use anyhow::Context;
use geodb_core::config::{resolve_with_base, Config, Settings};
use geodb_core::traits::{PlaceIndexer, ProximitySearch};
use geodb_core::types::Place;
use geodb_geoprint::{self as geoprint, AngularUnit, GeoCode};
use geodb_text::{PlaceSearchEngine, TantivyPlaceIndexer};

const USAGE: &str = "\
Usage: geodb <command> [args...]

  encode <lat> <lon> [precision]   geoprint of a point
  decode <code>                    cell center, bounds and error
  neighbors <code>                 the eight labeled neighbor cells
  adjacent <code> <code>           whether two cells touch
  distance <code> <code>           great-circle distance in meters
  bearing <code> <code>            initial bearing in degrees
  format <code>                    center rounded to the known digits
  ingest <places.json>             index a JSON array of {id, name, lat, lon}
  near <lat> <lon> [precision] [limit]";

fn parse_args() -> (String, Vec<String>) {
    let mut args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() { eprintln!("{}", USAGE); std::process::exit(1); }
    let cmd = args.remove(0);
    (cmd, args)
}

fn arg<'a>(args: &'a [String], i: usize, name: &str) -> anyhow::Result<&'a str> {
    args.get(i).map(String::as_str).ok_or_else(|| anyhow::anyhow!("missing <{}>\n\n{}", name, USAGE))
}

fn number<T: std::str::FromStr>(args: &[String], i: usize, name: &str) -> anyhow::Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    arg(args, i, name)?.parse().with_context(|| format!("invalid <{}>", name))
}

fn optional<T: std::str::FromStr>(args: &[String], i: usize, name: &str, default: T) -> anyhow::Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    if args.get(i).is_some() { number(args, i, name) } else { Ok(default) }
}

fn code(args: &[String], i: usize) -> anyhow::Result<GeoCode> {
    Ok(GeoCode::parse(arg(args, i, "code")?)?)
}

fn index_dir(settings: &Settings) -> PathBuf {
    resolve_with_base(Path::new("."), &settings.data.index_dir)
}

fn main() -> anyhow::Result<()> {
    let config = Config::load().map_err(|e| { eprintln!("Error loading config: {}", e); e })?;
    let settings = config.settings()?;
    geodb_core::logging::init(&settings.log.filter);
    let (cmd, args) = parse_args();
    match cmd.as_str() {
        "encode" => {
            let (lat, lon): (f64, f64) = (number(&args, 0, "lat")?, number(&args, 1, "lon")?);
            let precision = optional(&args, 2, "precision", settings.geo.precision)?;
            println!("{}", geoprint::encode(lat, lon, precision, AngularUnit::Degrees));
        }
        "decode" => {
            let c = code(&args, 0)?;
            let (lat, lon) = geoprint::decode(&c, AngularUnit::Degrees);
            let cell = geoprint::bounding_box(&c, AngularUnit::Degrees);
            println!("{} {}", lat, lon);
            println!("box: ({}, {}) .. ({}, {})", cell.lat_min, cell.lon_min, cell.lat_max, cell.lon_max);
            println!("error: ±{}°  size: ~{} m", geoprint::error(&c, AngularUnit::Degrees), geoprint::size(&c));
        }
        "neighbors" => {
            let c = code(&args, 0)?;
            for n in geoprint::neighbors(&c) { println!("{:<2} {}", n.direction, n.code); }
        }
        "adjacent" => {
            let (a, b) = (code(&args, 0)?, code(&args, 1)?);
            println!("{}", geoprint::adjacent(&a, &b)?);
        }
        "distance" => {
            let (a, b) = (code(&args, 0)?, code(&args, 1)?);
            println!("{:.1}", geoprint::distance(&a, &b, AngularUnit::Degrees));
        }
        "bearing" => {
            let (a, b) = (code(&args, 0)?, code(&args, 1)?);
            println!("{:.3}", geoprint::bearing(&a, &b, AngularUnit::Degrees));
        }
        "format" => {
            let (lat, lon) = geoprint::format(&code(&args, 0)?);
            println!("{} {}", lat, lon);
        }
        "ingest" => {
            let path = PathBuf::from(arg(&args, 0, "places.json")?);
            let raw = std::fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
            let places: Vec<Place> = serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))?;
            let dir = index_dir(&settings);
            tracing::info!(places = places.len(), index = %dir.display(), "ingesting");
            let indexer = TantivyPlaceIndexer::create(dir, settings.geo.precision)?;
            let count = indexer.index(&places)?;
            println!("✅ Ingest complete ({} places)", count);
        }
        "near" => {
            let (lat, lon): (f64, f64) = (number(&args, 0, "lat")?, number(&args, 1, "lon")?);
            let precision = optional(&args, 2, "precision", settings.geo.search_precision)?;
            let limit = optional(&args, 3, "limit", 10usize)?;
            let engine = PlaceSearchEngine::open(index_dir(&settings), &settings)?;
            let hits = ProximitySearch::near(&engine, lat, lon, precision, limit)?;
            println!("🔍 Found {} places near {}, {}", hits.len(), lat, lon);
            for (i, hit) in hits.iter().enumerate() {
                println!("  {}. {:>10.1} m  id={}  name={}  code={}", i + 1, hit.distance_m, hit.id, hit.name, hit.code);
            }
        }
        other => {
            eprintln!("Unknown command: {}\n\n{}", other, USAGE);
            std::process::exit(1);
        }
    }
    Ok(())
}
