//! Cluster a file of 2-D points with DBSCAN and write the largest clusters.
//!
//! Usage: `dbscan <input> <n_clusters> <eps> <min_pts>`
//!
//! Each input line is `id x y` (tab or whitespace separated). The `n_clusters`
//! largest clusters are written to `<input-stem>_cluster_<i>.txt`, one point
//! id per line, next to the input unless `--output-dir` is given.

use std::path::PathBuf;

use clap::Parser;
use dbscan_rs::{io, Dbscan, DbscanConfig, PointStore};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// Density-based clustering of 2-D points
#[derive(Parser)]
#[command(name = "dbscan")]
#[command(version)]
#[command(about = "Cluster 2-D points with DBSCAN and write the largest clusters")]
struct Cli {
    /// Input file with one `id x y` record per line
    input: PathBuf,

    /// Number of clusters to write, largest first
    n_clusters: usize,

    /// Neighbourhood radius (strict: points exactly eps apart are not neighbours)
    #[arg(allow_negative_numbers = true)]
    eps: f64,

    /// Minimum neighbour count for a core point; negative values behave as 0
    #[arg(allow_negative_numbers = true)]
    min_pts: i64,

    /// Directory for the cluster files (defaults to the input's directory)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    let points = io::read_points_from_path(&cli.input)?;
    let store = PointStore::new(points)?;

    let min_pts = usize::try_from(cli.min_pts.max(0))?;
    let config = DbscanConfig::new(cli.eps, min_pts);
    info!(eps = config.eps, min_pts = config.min_pts, "running DBSCAN");

    let mut dbscan = Dbscan::with_config(config);
    dbscan.fit(&store);

    let clustering = dbscan.clustering().ok_or("no clustering after fit")?;
    let ranked = clustering.ranked();
    info!(
        clusters = ranked.len(),
        noise = clustering.noise_points().len(),
        sizes = ?ranked.sizes(),
        "clustering complete"
    );

    let top = ranked.top(cli.n_clusters)?;
    let written = io::write_top_clusters(&cli.input, top, cli.output_dir.as_deref())?;

    for (path, cluster) in written.iter().zip(top) {
        eprintln!("{} ({} points)", path.display(), cluster.len());
    }

    Ok(())
}
