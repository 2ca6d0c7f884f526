use std::{
    fs::File,
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::{Parser, Subcommand};
use geo_types::Geometry;
use geozero::ToJson;
use log::{error, info, warn};
use maxseq::{
    OverlayError,
    ellipse::{Bearing, EllipseParams, EllipseSpec, EllipseStyle, compute_ellipse_for},
    input::{read_paths, read_pois},
    marker::{self, MarkerDescriptor, TagEntry},
    popup::{PathPopup, PoiPopup},
    types::PathResult,
};
use memmap2::{Mmap, MmapOptions};
use serde::Serialize;

#[derive(Parser)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Clone)]
enum Commands {
    /// Print the marker of each tag.
    Classify {
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Print the tags shown in the legend.
    Legend,

    /// Print markers and popups for the points of interest in a geojson file.
    Pois { in_file: PathBuf },

    /// Print uncertainty ellipses for the paths in a geojson file.
    Ellipse {
        in_file: PathBuf,

        /// Read ellipse params from a json file.
        #[arg(short, long)]
        params: Option<PathBuf>,

        /// Slack factor on the shortest-path distance. Overrides the params file.
        #[arg(short, long, value_name = "FLOAT")]
        max_dist_factor: Option<f64>,

        /// Use the planar angle instead of the spherical bearing.
        #[arg(long)]
        planar: bool,

        /// Number of vertices of the outline polygon.
        #[arg(short, long, default_value_t = 64)]
        segments: usize,

        /// Color of the path the ellipse belongs to.
        #[arg(short, long, default_value = "#3388ff")]
        color: String,
    },
}

#[derive(Serialize)]
struct TagOutput<'a> {
    name: &'a str,
    common: bool,
    marker: MarkerDescriptor,
}

#[derive(Serialize)]
struct PoiOutput<'a> {
    id: i64,
    name: &'a str,
    lat: f64,
    lon: f64,
    marker: MarkerDescriptor,
    popup: String,
}

#[derive(Serialize)]
struct EllipseOutput<'a> {
    path: usize,
    ellipse: EllipseSpec,
    style: &'a EllipseStyle,
    popup: String,
    outline: serde_json::Value,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(tracing_subscriber::filter::LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .finish();

    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Could not set up logging: {err}");
    }
    if let Err(err) = tracing_log::LogTracer::init() {
        eprintln!("Could not forward log records: {err}");
    }

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> Result<(), OverlayError> {
    match command {
        Commands::Classify { names } => {
            for name in names.iter() {
                print_json(&TagOutput {
                    name,
                    common: marker::is_common_tag(name),
                    marker: marker::classify(name),
                })?;
            }
        }
        Commands::Legend => {
            let entries: Vec<&TagEntry> = marker::legend().collect();
            print_json(&entries)?;
        }
        Commands::Pois { in_file } => {
            info!("Reading points of interest from {:?}", in_file);
            let in_file_mmap = map_file(&in_file)?;

            for poi in read_pois(in_file_mmap.as_ref())? {
                print_json(&PoiOutput {
                    id: poi.id(),
                    name: poi.name(),
                    lat: poi.lat(),
                    lon: poi.lon(),
                    marker: marker::classify(poi.name()),
                    popup: PoiPopup::new(&poi).to_html(),
                })?;
            }
        }
        Commands::Ellipse {
            in_file,
            params,
            max_dist_factor,
            planar,
            segments,
            color,
        } => {
            let params = ellipse_params(params.as_deref(), max_dist_factor, planar)?;
            info!(
                "Slack factor {} using {}",
                params.max_dist_factor, params.bearing
            );

            let in_file_mmap = map_file(&in_file)?;
            let style = EllipseStyle::for_path_color(&color);

            for (idx, path) in read_paths(in_file_mmap.as_ref())?.iter().enumerate() {
                if let Some(output) = ellipse_output(idx, path, &params, &style, segments)? {
                    print_json(&output)?;
                }
            }
        }
    }

    Ok(())
}

/// Loads the params file if given, then applies the command line overrides.
fn ellipse_params(
    params_file: Option<&Path>,
    max_dist_factor: Option<f64>,
    planar: bool,
) -> Result<EllipseParams, OverlayError> {
    let mut params = match params_file {
        Some(params_file) => serde_json::from_reader(File::open(params_file)?)?,
        None => EllipseParams::default(),
    };
    if let Some(max_dist_factor) = max_dist_factor {
        params.max_dist_factor = max_dist_factor;
    }
    if planar {
        params.bearing = Bearing::Planar;
    }
    params.validate()?;
    Ok(params)
}

/// `None` if no ellipse can be computed for the path.
fn ellipse_output<'a>(
    idx: usize,
    path: &PathResult,
    params: &EllipseParams,
    style: &'a EllipseStyle,
    segments: usize,
) -> Result<Option<EllipseOutput<'a>>, OverlayError> {
    let ellipse = match compute_ellipse_for(path, params) {
        Ok(ellipse) => ellipse,
        Err(err) => {
            warn!("No ellipse for path {}: {}", idx, err);
            return Ok(None);
        }
    };

    let outline = Geometry::Polygon(ellipse.outline(segments)).to_json()?;
    Ok(Some(EllipseOutput {
        path: idx,
        ellipse,
        style,
        popup: PathPopup::new(path).to_string(),
        outline: serde_json::from_str(&outline)?,
    }))
}

fn map_file(path: &Path) -> Result<Mmap, OverlayError> {
    let file = File::open(path)?;
    let mmap = unsafe { MmapOptions::new().map(&file)? };
    Ok(mmap)
}

fn print_json<T: Serialize>(value: &T) -> Result<(), OverlayError> {
    println!("{}", serde_json::to_string(value)?);
    Ok(())
}
