use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use country_geojson::filter::{self, ExclusionList};
use country_geojson::models::FeatureCollection;
use country_geojson::stats::SizeReport;
use country_geojson::{Client, Config, Download, inspect, storage};
use serde_json::Value;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(
    name = "country-geojson",
    version,
    about = "Fetch, inspect & simplify the geo-countries GeoJSON dataset"
)]
struct Cli {
    #[command(flatten)]
    source: SourceArgs,
    /// JSON file overriding the built-in configuration (URL, exclusion list, sample sizes).
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Defaults to `simplify`.
    #[command(subcommand)]
    cmd: Option<Command>,
}

#[derive(Args, Debug)]
struct SourceArgs {
    /// Dataset URL (default: the geo-countries dataset on GitHub).
    #[arg(long, global = true, conflicts_with = "input")]
    url: Option<String>,
    /// Read a local GeoJSON file instead of downloading.
    #[arg(short, long, global = true)]
    input: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Keep real countries only, strip properties to `name`, and save the result.
    Simplify(SimplifyArgs),
    /// Print city-like features, the property key census, and sample features.
    Inspect,
    /// Compare `ADMIN` with `name` and list non-country looking features.
    CheckAdmin,
}

#[derive(Args, Debug, Default)]
struct SimplifyArgs {
    /// Output path (default: countries-simple.geojson).
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let mut cfg = match &cli.config {
        Some(p) => Config::from_path(p).with_context(|| format!("load config {}", p.display()))?,
        None => Config::default(),
    };
    if let Some(url) = cli.source.url.clone() {
        cfg.url = url;
    }

    let loaded = load(&cfg, &cli.source)?;
    match cli.cmd.unwrap_or(Command::Simplify(SimplifyArgs::default())) {
        Command::Simplify(args) => cmd_simplify(&cfg, loaded, args),
        Command::Inspect => {
            cmd_inspect(&cfg, &loaded.collection);
            Ok(())
        }
        Command::CheckAdmin => {
            cmd_check_admin(&cfg, &loaded.collection);
            Ok(())
        }
    }
}

fn load(cfg: &Config, source: &SourceArgs) -> Result<Download> {
    let loaded = match &source.input {
        Some(path) => {
            eprintln!("Reading GeoJSON from: {}", path.display());
            storage::read_geojson(path).with_context(|| format!("read {}", path.display()))?
        }
        None => {
            eprintln!("Downloading GeoJSON from: {}", cfg.url);
            Client::with_timeout(cfg.request_timeout_secs.map(Duration::from_secs))
                .context("build http client")?
                .fetch(&cfg.url)
                .with_context(|| format!("GET {}", cfg.url))?
        }
    };
    log::info!("loaded {} bytes", loaded.bytes);
    eprintln!(
        "Loaded GeoJSON with {} features",
        loaded.collection.features.len()
    );
    Ok(loaded)
}

fn cmd_simplify(cfg: &Config, loaded: Download, args: SimplifyArgs) -> Result<()> {
    let input = loaded.collection;
    let exclusions = ExclusionList::new(cfg.exclusions.iter().cloned());
    let out = filter::simplify(&input, &exclusions);

    for c in out.excluded.iter().take(cfg.excluded_sample) {
        println!(
            "  Excluding: {} (has_iso={}, is_non_country={})",
            c.name, c.has_iso, c.is_excluded
        );
    }

    let output = args.output.unwrap_or_else(|| cfg.output.clone());
    storage::save_geojson(&out.collection, &output)
        .with_context(|| format!("write {}", output.display()))?;

    let size = SizeReport::measure(&input, &out.collection).context("measure output size")?;
    println!(
        "\nFiltered: {} -> {} features",
        input.features.len(),
        out.collection.features.len()
    );
    println!("  Excluded {} non-country features", out.excluded_count);
    println!("\nSimplified GeoJSON saved to {}", output.display());
    println!("  {}", size.describe());
    println!("  Size reduction: {:.1}%", size.reduction_percent());

    println!("\nSample country names:");
    for f in out.collection.features.iter().take(cfg.name_sample) {
        println!("  - {}", filter::feature_name(&f.properties));
    }
    Ok(())
}

/// `['a', 'b']`, the same listing the original scripts printed.
fn fmt_keys(props: &country_geojson::models::Properties) -> String {
    let keys: Vec<String> = props.keys().map(|k| format!("'{k}'")).collect();
    format!("[{}]", keys.join(", "))
}

/// Strings print bare, everything else as compact JSON.
fn fmt_value(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn cmd_inspect(cfg: &Config, fc: &FeatureCollection) {
    println!("Found city-like features:");
    for m in inspect::find_by_keywords(fc, &cfg.city_keywords) {
        let props = &m.feature.properties;
        println!("\n  Name: {}", m.name);
        println!("  All properties: {}", fmt_keys(props));
        for (key, value) in props {
            println!("    {}: {}", key, fmt_value(value));
        }
    }

    println!("\n\nAll unique property keys in GeoJSON:");
    for key in inspect::property_keys(fc) {
        println!("  - {key}");
    }

    println!("\n\nSample features (first 5):");
    for (i, feature) in fc.features.iter().take(5).enumerate() {
        let props = &feature.properties;
        println!(
            "\n  Feature {}: {}",
            i + 1,
            inspect::display_name(props, filter::UNKNOWN_NAME)
        );
        println!("    Properties: {}", fmt_keys(props));
        for (key, value) in props {
            // geometry lives outside `properties`; the skip only matters for datasets that nest it
            if key != "geometry" && key != "coordinates" {
                println!("      {}: {}", key, fmt_value(value));
            }
        }
    }
}

fn cmd_check_admin(cfg: &Config, fc: &FeatureCollection) {
    println!("Total features: {}\n", fc.features.len());

    let report = inspect::admin_differences(fc);
    println!("Has ADMIN property: {}", report.has_admin);
    println!("Features where ADMIN != name: {}\n", report.differences.len());
    if !report.differences.is_empty() {
        println!("Sample differences:");
        for (name, admin) in report.differences.iter().take(10) {
            println!("  name: \"{name}\" -> ADMIN: \"{admin}\"");
        }
    }

    let hits = inspect::find_by_keywords(fc, &cfg.non_country_keywords).len();
    let names = inspect::non_country_names(fc, &cfg.non_country_keywords);
    println!("\nNon-country features found: {hits}");
    for name in names.iter().take(20) {
        println!("  - {name}");
    }
}
