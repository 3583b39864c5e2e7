use std::path::PathBuf;

use clap::{Parser, Subcommand};
use env_logger::Env;

use gpml::PlateId;
use paleogeo::style::{EllipseStyle, MarkerStyle, PolygonStyle};
use paleogeo::utils::chain::ChainArgs;
use paleogeo::{OutputFormat, commands, utils};

#[derive(Parser)]
#[command(name = "paleogeo")]
#[command(about = "Rotate GPlates plate polygons and paleomagnetic poles to past positions", long_about = None)]
#[command(version)]
struct Cli {
    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List feature members with their shape and plate ID
    Plates {
        /// GPML feature collection (.gpml or gzip-compressed .gpmlz)
        #[arg(value_hint = clap::ValueHint::FilePath)]
        file: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Extract plate polygons and rotate them to a past position
    Rotate {
        /// GPML feature collection (.gpml or gzip-compressed .gpmlz)
        #[arg(value_hint = clap::ValueHint::FilePath)]
        file: PathBuf,

        /// Plate ID to extract (repeatable)
        #[arg(short, long = "plate", value_name = "ID", required = true)]
        plates: Vec<PlateId>,

        #[command(flatten)]
        chain: ChainArgs,

        /// Reverse the vertex order of each ring before rotating
        #[arg(long)]
        reverse: bool,

        #[command(flatten)]
        style: PolygonStyle,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Rotate a paleomagnetic pole, carrying its A95
    Pole {
        /// Pole longitude in degrees
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,

        /// Pole latitude in degrees
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        /// Radius of the 95% confidence circle in degrees
        #[arg(long)]
        a95: f64,

        #[command(flatten)]
        chain: ChainArgs,

        #[command(flatten)]
        style: MarkerStyle,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Rotate a Kent mean direction and its confidence ellipse
    Kent {
        /// JSON record with dec, inc, Zdec, Zinc, Edec, Einc, Zeta, Eta
        #[arg(value_hint = clap::ValueHint::FilePath)]
        file: PathBuf,

        #[command(flatten)]
        chain: ChainArgs,

        #[command(flatten)]
        style: EllipseStyle,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize color handling (respects NO_COLOR)
    utils::color::init_color(cli.no_color);

    // Initialize logger with default level (overridden by RUST_LOG)
    let env = Env::default().default_filter_or("warn");
    env_logger::Builder::from_env(env).init();

    match cli.command {
        Commands::Plates { file, format } => commands::plates::execute(&file, format),

        Commands::Rotate {
            file,
            plates,
            chain,
            reverse,
            style,
            format,
        } => commands::rotate::execute(&file, &plates, &chain, reverse, &style, format),

        Commands::Pole {
            lon,
            lat,
            a95,
            chain,
            style,
            format,
        } => commands::pole::execute(gpml::Pole { lon, lat, a95 }, &chain, &style, format),

        Commands::Kent {
            file,
            chain,
            style,
            format,
        } => commands::kent::execute(&file, &chain, &style, format),
    }
}
