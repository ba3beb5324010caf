//! walkgrid — campus walking-ETA table builder.
//!
//! ```text
//! walkgrid collect --input buildings.csv --output buildings_coords.csv
//! walkgrid grid    --spacing 100
//! walkgrid build   --buildings buildings_coords.csv --output knn.json
//! ```
//!
//! `collect` fills building coordinates from the TMAP POI search, `grid`
//! previews the sample grid and its API budget, and `build` runs the
//! rank → enrich pipeline.  Every finished point is appended to the
//! `--checkpoint` file, so rerunning the same command after an interruption
//! picks up where it stopped.

mod progress;

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use wg_buildings::{collect_coordinates, load_buildings_csv, write_buildings_csv, CollectOptions, LoadOptions, PoiIndex};
use wg_output::{JsonLinesWriter, JsonWriter, OutputObserver};
use wg_pipeline::{EtaOrder, PipelineBuilder, PipelineConfig};
use wg_routing::{EtaProvider, StraightLineEta, TmapClient, TmapConfig};
use wg_spatial::{grid_shape, BoundaryCorners};

use progress::Progress;

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "walkgrid", version, about = "Campus grid → nearest buildings with walking ETA")]
struct Cli {
    /// Log at DEBUG instead of INFO.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fill missing building coordinates from the POI search API.
    Collect(CollectArgs),
    /// Print the grid shape and request budget for a spacing.
    Grid(GridArgs),
    /// Build the nearest-building ETA table.
    Build(BuildArgs),
}

#[derive(clap::Args, Debug)]
struct ApiArgs {
    /// TMAP application key.
    #[arg(long, env = "TMAP_APP_KEY", hide_env_values = true)]
    app_key: Option<String>,

    /// Override the API base URL.
    #[arg(long, default_value = TmapConfig::DEFAULT_BASE_URL)]
    base_url: String,

    /// Per-request timeout in seconds.
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,
}

impl ApiArgs {
    fn client(&self) -> Result<TmapClient> {
        let Some(key) = self.app_key.as_deref() else {
            bail!("an app key is required: pass --app-key or set TMAP_APP_KEY");
        };
        let config = TmapConfig {
            base_url: self.base_url.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
            ..TmapConfig::new(key)
        };
        TmapClient::new(config).context("creating TMAP client")
    }
}

#[derive(clap::Args, Debug)]
struct CollectArgs {
    /// Building CSV (동번호, 동(건물)명, optional 위도/경도/지도URL).
    #[arg(long, value_name = "PATH")]
    input: PathBuf,

    /// Where to write the CSV with coordinates.
    #[arg(long, value_name = "PATH")]
    output: PathBuf,

    /// POI search keyword; hits must contain it.
    #[arg(long, default_value = "서울대학교")]
    keyword: String,

    /// Number of result pages to fetch.
    #[arg(long, default_value_t = 3)]
    pages: u32,

    /// Lookup attempts per building on transient failures.
    #[arg(long, default_value_t = 2)]
    max_attempts: u32,

    /// Re-query buildings that already have coordinates.
    #[arg(long)]
    overwrite: bool,

    /// Keep rows whose number carries an exclusion marker.
    #[arg(long)]
    keep_all: bool,

    #[command(flatten)]
    api: ApiArgs,
}

#[derive(clap::Args, Debug)]
struct GridArgs {
    /// Target spacing between grid points, in metres.
    #[arg(long, default_value_t = 100.0)]
    spacing: f64,

    /// Neighbors per point, for the request estimate.
    #[arg(short, long, default_value_t = 5)]
    k: usize,

    /// JSON file with left/right/top/bottom corners.
    #[arg(long, value_name = "PATH")]
    boundary: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
struct BuildArgs {
    /// Building CSV with coordinates.
    #[arg(long, value_name = "PATH")]
    buildings: PathBuf,

    /// Final JSON table.
    #[arg(long, value_name = "PATH", default_value = "knn.json")]
    output: PathBuf,

    /// JSON-lines checkpoint, appended per point.
    #[arg(long, value_name = "PATH", default_value = "knn.jsonl")]
    checkpoint: PathBuf,

    /// Discard any existing checkpoint.
    #[arg(long)]
    fresh: bool,

    /// Neighbors per grid point.
    #[arg(short, long, default_value_t = 5)]
    k: usize,

    /// Target spacing between grid points, in metres.
    #[arg(long, default_value_t = 100.0)]
    spacing: f64,

    /// Neighbor order: slowest-first or fastest-first.
    #[arg(long, default_value_t = EtaOrder::SlowestFirst)]
    order: EtaOrder,

    /// JSON file with left/right/top/bottom corners.
    #[arg(long, value_name = "PATH")]
    boundary: Option<PathBuf>,

    /// Use straight-line walking time instead of the routing API.
    #[arg(long)]
    offline: bool,

    /// Print progress every N points.
    #[arg(long, default_value_t = 50)]
    progress_every: usize,

    #[command(flatten)]
    api: ApiArgs,
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { tracing::Level::DEBUG } else { tracing::Level::INFO })
        .init();

    match cli.command {
        Command::Collect(args) => collect(args),
        Command::Grid(args) => grid(args),
        Command::Build(args) => build(args),
    }
}

fn load_boundary(path: Option<&Path>) -> Result<BoundaryCorners> {
    let Some(path) = path else {
        return Ok(BoundaryCorners::SNU_GWANAK);
    };
    let file = File::open(path).with_context(|| format!("opening boundary {}", path.display()))?;
    let boundary: BoundaryCorners = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing boundary {}", path.display()))?;
    boundary.validate()?;
    Ok(boundary)
}

// ── collect ───────────────────────────────────────────────────────────────────

fn collect(args: CollectArgs) -> Result<()> {
    let options = if args.keep_all { LoadOptions::keep_all() } else { LoadOptions::default() };
    let table = load_buildings_csv(&args.input, &options)
        .with_context(|| format!("loading {}", args.input.display()))?;
    println!("Loaded {} buildings ({} already located)", table.len(), table.located_count());

    let mut client = args.api.client()?;
    let mut index = PoiIndex::build(&mut client, &args.keyword, 1..=args.pages)?;
    println!("POI index: {} numbered buildings for {:?}", index.len(), args.keyword);

    let collect_options = CollectOptions {
        max_attempts:       args.max_attempts,
        overwrite_existing: args.overwrite,
    };
    let (table, report) = collect_coordinates(&table, &mut index, &collect_options)?;

    write_buildings_csv(&args.output, &table)
        .with_context(|| format!("writing {}", args.output.display()))?;

    println!(
        "Kept {}  |  found {}  |  not found {}  |  failed {}",
        report.kept,
        report.found,
        report.not_found.len(),
        report.failed.len(),
    );
    if !report.not_found.is_empty() {
        let numbers: Vec<String> = report.not_found.iter().map(ToString::to_string).collect();
        println!("Not found: {}", numbers.join(", "));
    }
    for (number, reason) in &report.failed {
        println!("Failed {number}: {reason}");
    }
    println!("Wrote {}", args.output.display());
    Ok(())
}

// ── grid ──────────────────────────────────────────────────────────────────────

fn grid(args: GridArgs) -> Result<()> {
    let boundary = load_boundary(args.boundary.as_deref())?;
    let shape = grid_shape(&boundary, args.spacing)?;
    let bounds = boundary.bounds();

    println!("Boundary:");
    for (name, p) in boundary.corners() {
        println!("  {name:<6} {p}");
    }
    println!(
        "Extent: {:.0} m N-S × {:.0} m E-W",
        bounds.lat_extent_m(),
        bounds.lon_extent_m(),
    );
    println!("Grid @ {} m: {} × {} = {} points", args.spacing, shape.n_lat, shape.n_lon, shape.point_count());
    let Some(requests) = shape.point_count().checked_mul(args.k) else {
        bail!("request count for {} points at k={} overflows", shape.point_count(), args.k);
    };
    println!("Routing requests at k={}: {requests}", args.k);
    Ok(())
}

// ── build ─────────────────────────────────────────────────────────────────────

fn build(args: BuildArgs) -> Result<()> {
    let table = load_buildings_csv(&args.buildings, &LoadOptions::default())
        .with_context(|| format!("loading {}", args.buildings.display()))?;
    println!("Loaded {} buildings ({} located)", table.len(), table.located_count());

    let boundary = load_boundary(args.boundary.as_deref())?;
    let config = PipelineConfig { k: args.k, spacing_m: args.spacing, order: args.order };

    let (checkpoint, restored) = if args.fresh {
        (JsonLinesWriter::create(&args.checkpoint)?, Vec::new())
    } else {
        JsonLinesWriter::resume(&args.checkpoint)
            .with_context(|| format!("reading checkpoint {}", args.checkpoint.display()))?
    };

    let provider: Box<dyn EtaProvider> = if args.offline {
        println!("Offline mode: straight-line walking time at {} m/s", StraightLineEta::WALK_MPS);
        Box::new(StraightLineEta::default())
    } else {
        Box::new(args.api.client()?)
    };

    let mut pipeline = PipelineBuilder::new(config, table, boundary, provider)
        .resume_from(restored)
        .build()
        .context("preparing pipeline (use --fresh if the checkpoint is from another grid)")?;
    println!(
        "Grid: {} points  |  k: {}  |  order: {}  |  requests to go: {}",
        pipeline.grid.len(),
        pipeline.config.k,
        pipeline.config.order,
        pipeline.call_budget(),
    );

    let mut observer = (
        Progress::new(args.progress_every),
        (OutputObserver::new(JsonWriter::new(&args.output)), OutputObserver::new(checkpoint)),
    );
    let results = pipeline.run(&mut observer)?;

    let (progress, (mut json, mut jsonl)) = observer;
    if let Some(e) = jsonl.take_error() {
        return Err(e).with_context(|| format!("writing checkpoint {}", args.checkpoint.display()));
    }
    if let Some(e) = json.take_error() {
        return Err(e).with_context(|| format!("writing {}", args.output.display()));
    }

    println!(
        "Wrote {} points to {} ({} unreachable neighbors)",
        results.len(),
        args.output.display(),
        progress.unreachable(),
    );
    Ok(())
}
