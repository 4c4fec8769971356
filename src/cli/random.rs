//! Random command implementation

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::Path;
use std::process::ExitCode;

use crate::config::CliOverrides;
use crate::output::write_binary;
use crate::synth::random_buffer;

use super::{resolve_config, EXIT_ERROR, EXIT_INVALID_ARGS, EXIT_SUCCESS};

/// Execute the random command
pub fn run_random(
    len: usize,
    output: &Path,
    config_path: Option<&Path>,
    overrides: &CliOverrides,
) -> ExitCode {
    if len == 0 {
        eprintln!("Error: length must be at least 1");
        return ExitCode::from(EXIT_INVALID_ARGS);
    }

    let config = match resolve_config(config_path, overrides) {
        Ok(config) => config,
        Err(code) => return code,
    };

    let scheme = config.render.scheme.build();
    let mut rng = match config.decode.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let data = random_buffer(len, &scheme, &mut rng);

    if let Err(e) = write_binary(&data, output) {
        eprintln!("Error: Failed to write '{}': {}", output.display(), e);
        return ExitCode::from(EXIT_ERROR);
    }
    println!("Saved: {} ({} bytes, {} scheme)", output.display(), len, scheme.name());
    ExitCode::from(EXIT_SUCCESS)
}
