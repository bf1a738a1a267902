use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use harmonic::models::Settings;
use harmonic::services::ExtractionService;
use harmonic_colors::color::MIN_TEXT_CONTRAST;
use harmonic_colors::{contrast_ratio, Rgb, Side};

#[derive(Parser)]
#[command(name = "harmonic")]
#[command(about = "Harmonic - background and legible text colors from image swatches")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract background and text colors from a swatch map
    Extract {
        /// Swatch map file (YAML, or JSON with a .json extension)
        map: PathBuf,

        /// Settings file (defaults to ./harmonic.yaml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Side the background is sampled from: left, top, right or bottom
        #[arg(short, long)]
        side: Option<Side>,

        /// Where the text area starts along the split axis (e.g. 0.4)
        #[arg(short, long)]
        fraction: Option<f32>,

        /// Downsample target in pixels (e.g. 22500)
        #[arg(long)]
        resize_area: Option<u32>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the WCAG contrast ratio of two colors
    Contrast {
        /// Text color as hex RGB (e.g. "#767676")
        foreground: Rgb,

        /// Background color as hex RGB (e.g. "#ffffff")
        background: Rgb,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "harmonic=warn,harmonic_colors=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    match cli.command {
        Some(Commands::Extract {
            map,
            config,
            side,
            fraction,
            resize_area,
            json,
        }) => {
            let overrides = Settings {
                side,
                fraction,
                resize_area,
                ..Settings::default()
            };
            run_extract_command(&map, config.as_deref(), overrides, json)
        }
        Some(Commands::Contrast {
            foreground,
            background,
        }) => {
            run_contrast_command(foreground, background);
            Ok(())
        }
        None => {
            run_status_command();
            Ok(())
        }
    }
}

fn run_extract_command(
    map: &Path,
    config: Option<&Path>,
    overrides: Settings,
    json: bool,
) -> anyhow::Result<()> {
    let settings = match config {
        Some(path) => Settings::load(path)?,
        None => {
            let default_path = Path::new(Settings::FILE_NAME);
            if default_path.exists() {
                Settings::load(default_path)?
            } else {
                Settings::default()
            }
        }
    };

    let service = ExtractionService::new(settings.overridden_by(overrides))?;
    let colors = service.extract_file(map)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&colors)?);
    } else {
        println!("background: {}", colors.background_color);
        println!("primary:    {}", colors.first_foreground_color);
        println!("secondary:  {}", colors.second_foreground_color);
    }
    Ok(())
}

fn run_contrast_command(foreground: Rgb, background: Rgb) {
    let ratio = contrast_ratio(foreground, background);
    let verdict = if ratio >= MIN_TEXT_CONTRAST {
        "passes"
    } else {
        "fails"
    };
    println!("{ratio:.2}:1 ({verdict} {MIN_TEXT_CONTRAST}:1 for body text)");
}

fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    println!("Harmonic v{VERSION}");
    println!("Background and legible text colors from image swatches\n");

    let settings = Path::new(Settings::FILE_NAME);
    println!("Settings:");
    if settings.exists() {
        println!("  {} (found)", Settings::FILE_NAME);
    } else {
        println!("  {} (not found, using defaults)", Settings::FILE_NAME);
    }

    println!("\nUsage:");
    println!("  harmonic extract <MAP> [--side S] [--fraction F] [--json]");
    println!("  harmonic contrast <FOREGROUND> <BACKGROUND>");
    println!("\nRun 'harmonic --help' for details.");
}
