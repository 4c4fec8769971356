//! Command-line interface implementation
//!
//! This module provides the CLI entry point and dispatches to submodules
//! for specific command implementations.

mod decode;
mod encode;
mod info;
mod random;

use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use crate::color::MetricName;
use crate::config::{self, BinvisConfig, CliOverrides, MAX_SCALE};
use crate::curve::Layout;
use crate::region::Region;
use crate::schemes::SchemeName;

pub use info::SchemeAction;

/// Exit codes
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// Binvis - view a binary file as a Hilbert-curve image, edit it, and write the edits back
#[derive(Parser)]
#[command(name = "binvis")]
#[command(about = "Binvis - render binary files as images and rebuild them from edited images")]
#[command(version)]
pub struct Cli {
    /// Config file (default: nearest binvis.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Layout options shared by encode and decode. Both sides must agree.
#[derive(Args, Debug, Default, Clone)]
pub struct LayoutArgs {
    /// Color scheme: categorical, magnitude, detail
    #[arg(long, value_enum)]
    pub scheme: Option<SchemeName>,

    /// Curve side (2, 4, ..., 256); default picks the smallest that fits
    #[arg(long)]
    pub size: Option<u32>,

    /// First byte offset of the region
    #[arg(long)]
    pub start: Option<usize>,

    /// End byte offset of the region (exclusive, clamped to file length)
    #[arg(long)]
    pub end: Option<usize>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a binary file to a PNG
    Encode {
        /// Binary file to render
        input: PathBuf,

        /// Output PNG (default: {input}.png; a directory gets {input}.png inside it)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        layout: LayoutArgs,

        /// Draw each byte cell as an NxN block (1-64)
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=MAX_SCALE as i64))]
        scale: Option<u8>,
    },

    /// Apply an edited PNG back onto the original binary
    Decode {
        /// Edited PNG
        image: PathBuf,

        /// The binary file the PNG was rendered from
        #[arg(long)]
        original: PathBuf,

        /// Output file (default: {original}.edited)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        layout: LayoutArgs,

        /// Match off-palette colors to the nearest scheme color instead of failing
        #[arg(long)]
        closest: bool,

        /// Only accept scheme colors, overriding `closest = true` in the config
        #[arg(long, conflicts_with = "closest")]
        exact: bool,

        /// Color difference metric for --closest
        #[arg(long, value_enum)]
        metric: Option<MetricName>,

        /// Seed for choosing among bytes that share a color
        #[arg(long)]
        seed: Option<u64>,

        /// Report changes without writing the output file
        #[arg(long)]
        dry_run: bool,

        /// Print the change report as JSON
        #[arg(long)]
        json: bool,
    },

    /// List and inspect color schemes
    Schemes {
        #[command(subcommand)]
        action: SchemeAction,
    },

    /// Write random bytes spread evenly over a scheme's colors
    Random {
        /// Number of bytes to generate
        len: usize,

        /// Output file
        #[arg(short, long)]
        output: PathBuf,

        /// Color scheme whose classes are sampled
        #[arg(long, value_enum)]
        scheme: Option<SchemeName>,

        /// RNG seed (default: OS entropy)
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Run the CLI application
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Encode { input, output, layout, scale } => {
            let overrides = layout.overrides(CliOverrides { scale, ..Default::default() });
            encode::run_encode(&input, output.as_deref(), config_path, &overrides)
        }
        Commands::Decode {
            image,
            original,
            output,
            layout,
            closest,
            exact,
            metric,
            seed,
            dry_run,
            json,
        } => {
            let overrides = layout.overrides(CliOverrides {
                closest: lookup_override(closest, exact),
                metric,
                seed,
                ..Default::default()
            });
            decode::run_decode(
                &image,
                &original,
                output.as_deref(),
                config_path,
                &overrides,
                dry_run,
                json,
            )
        }
        Commands::Schemes { action } => info::run_schemes(action),
        Commands::Random { len, output, scheme, seed } => {
            let overrides = CliOverrides { scheme, seed, ..Default::default() };
            random::run_random(len, &output, config_path, &overrides)
        }
    }
}

impl LayoutArgs {
    fn overrides(&self, base: CliOverrides) -> CliOverrides {
        CliOverrides {
            scheme: self.scheme,
            curve_size: self.size,
            start: self.start,
            end: self.end,
            ..base
        }
    }
}

/// `--closest` and `--exact` override `decode.closest`; neither keeps the config value.
fn lookup_override(closest: bool, exact: bool) -> Option<bool> {
    match (closest, exact) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    // Ignore the error if a subscriber is already installed.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Load the config file and apply CLI overrides, reporting failures to stderr.
pub(crate) fn resolve_config(
    config_path: Option<&Path>,
    overrides: &CliOverrides,
) -> Result<BinvisConfig, ExitCode> {
    config::load_config(config_path)
        .and_then(|config| config::merge_cli_overrides(config, overrides))
        .map_err(|e| {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_INVALID_ARGS)
        })
}

/// Build the grid layout for a buffer of `len` bytes under `config`.
pub(crate) fn resolve_layout(config: &BinvisConfig, len: usize) -> Result<Layout, ExitCode> {
    let invalid = |e: crate::error::BinvisError| {
        eprintln!("Error: {}", e);
        ExitCode::from(EXIT_INVALID_ARGS)
    };
    let region = Region::clamped(config.region.start, config.region.end, len).map_err(invalid)?;
    let policy = config.size_policy().map_err(invalid)?;
    Ok(Layout::with_policy(policy, region))
}
