//! Encode command implementation

use std::path::Path;
use std::process::ExitCode;

use crate::config::CliOverrides;
use crate::encode::encode;
use crate::output::{generate_output_path, read_binary, save_png, scale_image};

use super::{resolve_config, resolve_layout, EXIT_ERROR, EXIT_SUCCESS};

/// Execute the encode command
pub fn run_encode(
    input: &Path,
    output: Option<&Path>,
    config_path: Option<&Path>,
    overrides: &CliOverrides,
) -> ExitCode {
    let config = match resolve_config(config_path, overrides) {
        Ok(config) => config,
        Err(code) => return code,
    };

    let data = match read_binary(input) {
        Ok(data) => data,
        Err(e) => {
            eprintln!("Error: Cannot read input file '{}': {}", input.display(), e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let layout = match resolve_layout(&config, data.len()) {
        Ok(layout) => layout,
        Err(code) => return code,
    };
    let scheme = config.render.scheme.build();

    let grid = match encode(&data, &layout, &scheme) {
        Ok(grid) => grid,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };
    let image = scale_image(grid, config.render.scale);

    let output_path = generate_output_path(input, output, "png");
    if let Err(e) = save_png(&image, &output_path) {
        eprintln!("Error: Failed to write '{}': {}", output_path.display(), e);
        return ExitCode::from(EXIT_ERROR);
    }

    let region = layout.region();
    println!(
        "Saved: {} ({}x{}, bytes {}..{}, {} scheme)",
        output_path.display(),
        image.width(),
        image.height(),
        region.start(),
        region.end(),
        scheme.name()
    );
    ExitCode::from(EXIT_SUCCESS)
}
