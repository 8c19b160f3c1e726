use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use argentic::export;
use argentic::models::AppConfig;
use argentic::services::{PrintSession, ReadinessReport};

#[derive(Parser)]
#[command(name = "argentic")]
#[command(about = "Digital enlarger - prints 16-bit negatives through a transparent LCD")]
struct Cli {
    /// Path to config.yaml (defaults apply when omitted)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Process a negative and export the dither frame cycle
    Print {
        /// 16-bit grayscale TIFF negative
        image: PathBuf,

        /// Tone LUT: a file path, or a bare name resolved in the LUT directory
        #[arg(short, long)]
        lut: PathBuf,

        /// Directory to write the frame PNGs into
        #[arg(short, long, default_value = "frames")]
        output: PathBuf,

        /// Exposure time in seconds
        #[arg(short, long)]
        exposure: Option<f64>,

        /// Frames per dither cycle
        #[arg(short, long)]
        frames: Option<usize>,

        /// Stamp the diagnostic frame marker on every frame
        #[arg(long)]
        marker: bool,
    },
    /// Report how a negative would print, without processing it
    Inspect {
        /// 16-bit grayscale TIFF negative
        image: PathBuf,
    },
    /// List LUT files in the configured LUT directory
    Luts,
}

fn main() -> anyhow::Result<()> {
    // Minimal logging for CLI
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "argentic=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let cli = Cli::parse();
    let config = AppConfig::load_or_default(cli.config.as_deref());

    match cli.command {
        Commands::Print {
            image,
            lut,
            output,
            exposure,
            frames,
            marker,
        } => run_print_command(config, &image, &lut, &output, exposure, frames, marker),
        Commands::Inspect { image } => run_inspect_command(&config, &image),
        Commands::Luts => run_luts_command(&config),
    }
}

fn run_print_command(
    mut config: AppConfig,
    image: &PathBuf,
    lut: &PathBuf,
    output: &PathBuf,
    exposure: Option<f64>,
    frames: Option<usize>,
    marker: bool,
) -> anyhow::Result<()> {
    if let Some(count) = frames {
        config.frame_count = count;
    }
    if marker {
        config.frame_marker = true;
    }
    let exposure = Duration::from_secs_f64(exposure.unwrap_or(config.exposure_seconds));

    let mut session = PrintSession::new(config, lut)?;
    let summary = session.start(image, exposure)?;

    println!(
        "Printing {}x{} negative on {}x{} canvas",
        summary.source_size.0, summary.source_size.1, summary.canvas_size.0, summary.canvas_size.1
    );
    println!(
        "{} frames, {} ms each",
        summary.frame_count,
        summary.frame_interval.as_millis()
    );

    let frame_set = session
        .frames()
        .ok_or_else(|| anyhow::anyhow!("print job produced no frames"))?;
    let paths = export::write_frames(frame_set, output)?;
    println!("Wrote {} frames to {}", paths.len(), output.display());

    Ok(())
}

fn run_inspect_command(config: &AppConfig, image: &PathBuf) -> anyhow::Result<()> {
    let report = ReadinessReport::analyze(image, config)?;

    println!("Source:   {}x{}", report.source_size.0, report.source_size.1);
    println!("Canvas:   {}x{}", report.canvas_size.0, report.canvas_size.1);
    if report.native_resolution() {
        println!("Placement: native resolution at offset ({}, {})", report.offset.0, report.offset.1);
    } else {
        println!(
            "Placement: downscaled x{:.3} to {}x{} at offset ({}, {})",
            report.scale,
            report.placed_size.0,
            report.placed_size.1,
            report.offset.0,
            report.offset.1
        );
    }
    println!(
        "Values:   {} .. {}",
        report.value_range.0, report.value_range.1
    );
    println!(
        "Cycle:    {} frames, {} ms each",
        report.frame_count,
        report.frame_interval.as_millis()
    );

    Ok(())
}

fn run_luts_command(config: &AppConfig) -> anyhow::Result<()> {
    let Some(dir) = &config.lut_dir else {
        println!("No LUT directory configured (set lut_dir in config.yaml)");
        return Ok(());
    };

    let mut names: Vec<String> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e.eq_ignore_ascii_case("tif") || e.eq_ignore_ascii_case("tiff"))
        })
        .filter_map(|path| path.file_name().map(|n| n.to_string_lossy().into_owned()))
        .collect();
    names.sort();

    if names.is_empty() {
        println!("No LUT files in {}", dir.display());
    } else {
        for name in names {
            println!("{name}");
        }
    }

    Ok(())
}
