use clap::{Parser, ValueEnum};
use edgemap::io::load_gray_image;
use edgemap::pgm::{load_pgm, save_pgm};
use edgemap::{
    compute_gradients, max_interior, normalize, EngineConfig, OwnedImage, Traversal,
    DEFAULT_TILE_SIZE,
};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Sobel edge-magnitude mapper for grayscale rasters")]
struct Cli {
    /// Input raster (PGM by default; PNG/JPEG are converted to grayscale).
    input: PathBuf,
    /// Output PGM path.
    output: PathBuf,
    /// Worker count; 1 runs strictly sequentially.
    #[arg(long, default_value_t = 1)]
    threads: usize,
    /// Interior traversal order.
    #[arg(long, value_enum, default_value_t = TraversalArg::RowMajor)]
    traversal: TraversalArg,
    /// Tile edge length for tiled traversal.
    #[arg(long, default_value_t = DEFAULT_TILE_SIZE)]
    tile_size: usize,
    /// Print a JSON run summary to stdout.
    #[arg(long)]
    stats: bool,
    /// Enable tracing output for performance profiling.
    #[arg(long)]
    trace: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum TraversalArg {
    RowMajor,
    Tiled,
}

#[derive(Debug, Serialize)]
struct RunStats {
    width: usize,
    height: usize,
    threads: usize,
    traversal: &'static str,
    tile_size: Option<usize>,
    max_gradient: u16,
    sobel_ms: f64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env().add_directive("edgemap=info".parse()?))
            .with_target(false)
            .init();
    }

    let config = EngineConfig {
        threads: cli.threads,
        traversal: match cli.traversal {
            TraversalArg::RowMajor => Traversal::RowMajor,
            TraversalArg::Tiled => Traversal::Tiled {
                tile_size: cli.tile_size,
            },
        },
    };
    config.validate()?;

    let is_pgm = cli
        .input
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pgm"));
    let image = if is_pgm {
        load_pgm(&cli.input)?
    } else {
        load_gray_image(&cli.input)?
    };

    let start = Instant::now();
    let mut plane = compute_gradients(image.view(), &config)?;
    let sobel_ms = start.elapsed().as_secs_f64() * 1e3;

    let max_gradient = max_interior(&plane);
    normalize(&mut plane, &config)?;

    if cli.stats {
        let stats = RunStats {
            width: image.width(),
            height: image.height(),
            threads: cli.threads,
            traversal: match cli.traversal {
                TraversalArg::RowMajor => "row-major",
                TraversalArg::Tiled => "tiled",
            },
            tile_size: match config.traversal {
                Traversal::Tiled { tile_size } => Some(tile_size),
                Traversal::RowMajor => None,
            },
            max_gradient,
            sobel_ms,
        };
        println!("{}", serde_json::to_string_pretty(&stats)?);
    }

    let (width, height) = (plane.width(), plane.height());
    let output = OwnedImage::new(plane.into_samples(), width, height)?;
    save_pgm(&cli.output, output.view())?;

    Ok(())
}
