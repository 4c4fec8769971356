//! Decode command implementation

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::Path;
use std::process::ExitCode;

use crate::config::CliOverrides;
use crate::decode::{decode, DecodeOptions, DecodeReport};
use crate::output::{downscale_blocks, generate_output_path, load_grid, read_binary, write_binary};
use crate::schemes::Lookup;

use super::{resolve_config, resolve_layout, EXIT_ERROR, EXIT_SUCCESS};

/// Changes listed in human-readable output before truncating.
const MAX_LISTED_CHANGES: usize = 20;

/// Execute the decode command
pub fn run_decode(
    image_path: &Path,
    original_path: &Path,
    output: Option<&Path>,
    config_path: Option<&Path>,
    overrides: &CliOverrides,
    dry_run: bool,
    json: bool,
) -> ExitCode {
    let config = match resolve_config(config_path, overrides) {
        Ok(config) => config,
        Err(code) => return code,
    };

    let original = match read_binary(original_path) {
        Ok(data) => data,
        Err(e) => {
            eprintln!("Error: Cannot read original file '{}': {}", original_path.display(), e);
            return ExitCode::from(EXIT_ERROR);
        }
    };
    let image = match load_grid(image_path) {
        Ok(image) => image,
        Err(e) => {
            eprintln!("Error: Cannot read image '{}': {}", image_path.display(), e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let layout = match resolve_layout(&config, original.len()) {
        Ok(layout) => layout,
        Err(code) => return code,
    };

    // Images written with --scale come back as blocks of identical cells.
    let grid = if image.dimensions() == layout.dimensions() {
        image
    } else {
        match downscale_blocks(&image, layout.dimensions()) {
            Some(grid) => {
                tracing::debug!(
                    from = ?image.dimensions(),
                    to = ?layout.dimensions(),
                    "collapsed scaled image"
                );
                grid
            }
            None => image,
        }
    };

    let scheme = config.render.scheme.build();
    let options = DecodeOptions {
        lookup: if config.decode.closest { Lookup::Closest } else { Lookup::Exact },
        metric: config.decode.metric.metric(),
    };
    let mut rng = match config.decode.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let (data, report) = match decode(&grid, &original, &layout, &scheme, options, &mut rng) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Error: {}", e);
            if !config.decode.closest {
                eprintln!("Hint: use --closest to map off-palette colors to the nearest class");
            }
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let output_path = generate_output_path(original_path, output, "edited");
    if !dry_run {
        if let Err(e) = write_binary(&data, &output_path) {
            eprintln!("Error: Failed to write '{}': {}", output_path.display(), e);
            return ExitCode::from(EXIT_ERROR);
        }
    }

    if json {
        match serde_json::to_string_pretty(&report) {
            Ok(s) => println!("{}", s),
            Err(e) => {
                eprintln!("Error: Failed to serialize report: {}", e);
                return ExitCode::from(EXIT_ERROR);
            }
        }
    } else {
        print_report(&report);
        if dry_run {
            println!("Dry run: {} not written", output_path.display());
        } else {
            println!("Saved: {}", output_path.display());
        }
    }

    ExitCode::from(EXIT_SUCCESS)
}

fn print_report(report: &DecodeReport) {
    println!(
        "{} edited pixel(s), {} byte(s) changed",
        report.edited_pixels,
        report.changed_bytes()
    );
    for change in report.changes.iter().take(MAX_LISTED_CHANGES) {
        println!("  0x{:08x}: {:02x} -> {:02x}", change.offset, change.old, change.new);
    }
    if report.changed_bytes() > MAX_LISTED_CHANGES {
        println!("  ... {} more", report.changed_bytes() - MAX_LISTED_CHANGES);
    }
}
