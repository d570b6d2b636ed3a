//! Operational CLI: registry inspection and chart ingest, wrapping
//! `chart-registry`/`chart-ingest` the way the original parsing CLI wrapped
//! `s57-parse`/`s57-interp`.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use chart_model::DatasetKind;
use chart_registry::Registry;

#[derive(Parser)]
#[command(name = "chart-cli")]
#[command(about = "Ingest charts and inspect the dataset registry", long_about = None)]
struct Cli {
    /// Registry SQLite database path
    #[arg(long, global = true, default_value = "charts.sqlite")]
    db: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Walk one or more directories for `*.meta.json` sidecars and register
    /// what's found
    Scan {
        #[arg(value_name = "DIR")]
        paths: Vec<PathBuf>,

        /// Also register the synthetic community OSM basemap entry
        #[arg(long)]
        with_osm: bool,
    },

    /// Encode S-57 `.000` cells under a directory into MBTiles and register
    IngestEnc {
        #[arg(value_name = "CELLS_DIR")]
        cells_dir: PathBuf,
        #[arg(long, value_name = "DIR")]
        out_dir: PathBuf,
        #[arg(long, default_value = "ogr2ogr")]
        converter: String,
        #[arg(long, default_value_t = 5)]
        minzoom: u8,
        #[arg(long, default_value_t = 14)]
        maxzoom: u8,
    },

    /// Decode a CM93 cell database, then encode and register the result
    IngestCm93 {
        #[arg(value_name = "DB_DIR")]
        db_dir: PathBuf,
        #[arg(long, value_name = "DIR")]
        staging_dir: PathBuf,
        #[arg(long, value_name = "DIR")]
        out_dir: PathBuf,
        #[arg(long, default_value = "cm93_convert")]
        decoder: String,
        #[arg(long, default_value = "ogr2ogr")]
        converter: String,
        #[arg(long, default_value_t = 5)]
        minzoom: u8,
        #[arg(long, default_value_t = 14)]
        maxzoom: u8,
    },

    /// Register a pre-built GeoTIFF raster
    IngestGeotiff {
        #[arg(value_name = "TIF")]
        tif_path: PathBuf,
        #[arg(long, value_name = "DIR")]
        out_dir: PathBuf,
        #[arg(long, default_value = "gdalinfo")]
        probe_tool: String,
    },

    /// List registered datasets
    List {
        #[arg(long)]
        kind: Option<String>,
        #[arg(long)]
        query: Option<String>,
        #[arg(long, default_value_t = 0)]
        page: usize,
        #[arg(long, default_value_t = 50)]
        page_size: usize,
    },

    /// Show one dataset by id
    Show {
        #[arg(value_name = "ID")]
        id: String,
    },

    /// Rebuild the object-class/attribute-class dictionary tables
    PopulateDict,
}

fn parse_kind(s: &str) -> Option<DatasetKind> {
    match s.to_lowercase().as_str() {
        "enc" => Some(DatasetKind::Enc),
        "cm93" => Some(DatasetKind::Cm93),
        "geotiff" => Some(DatasetKind::Geotiff),
        "osm" => Some(DatasetKind::Osm),
        _ => None,
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let registry = match Registry::open(&cli.db) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("failed to open registry at {}: {e}", cli.db.display());
            std::process::exit(1);
        }
    };

    let result = run(&registry, cli.command);
    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(registry: &Registry, command: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Scan { paths, with_osm } => {
            let report = registry.scan(&paths, with_osm)?;
            println!("registered {}, skipped {}", report.registered, report.skipped);
        }
        Commands::IngestEnc { cells_dir, out_dir, converter, minzoom, maxzoom } => {
            match chart_ingest::ingest_enc(registry, &converter, &cells_dir, &out_dir, minzoom, maxzoom)? {
                Some(record) => println!("registered {}", record.id),
                None => println!("SKIP: {converter} unavailable or failed"),
            }
        }
        Commands::IngestCm93 { db_dir, staging_dir, out_dir, decoder, converter, minzoom, maxzoom } => {
            match chart_ingest::ingest_cm93(registry, &decoder, &converter, &db_dir, &staging_dir, &out_dir, minzoom, maxzoom)? {
                Some(record) => println!("registered {}", record.id),
                None => println!("SKIP: {decoder} unavailable or failed"),
            }
        }
        Commands::IngestGeotiff { tif_path, out_dir, probe_tool } => {
            match chart_ingest::ingest_geotiff(registry, &probe_tool, &tif_path, &out_dir)? {
                Some(record) => println!("registered {}", record.id),
                None => println!("SKIP: {probe_tool} unavailable or failed"),
            }
        }
        Commands::List { kind, query, page, page_size } => {
            let kind = kind.as_deref().and_then(parse_kind);
            for record in registry.list(kind, query.as_deref(), page, page_size) {
                println!("{}\t{:?}\t{}", record.id, record.kind, record.name);
            }
        }
        Commands::Show { id } => match registry.get(&id) {
            Some(record) => println!("{record:#?}"),
            None => println!("not found: {id}"),
        },
        Commands::PopulateDict => {
            registry.populate_dictionary()?;
            println!("dictionary rebuilt");
        }
    }
    Ok(())
}
