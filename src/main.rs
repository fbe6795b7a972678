// pwaicons - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Configuration loading (platform default or --config)
// 3. Logging initialisation (debug mode support)
// 4. Icon generation with per-icon progress on stdout

use clap::Parser;
use pwaicons::app::generate::{self, Progress};
use pwaicons::platform::config::{self, AppConfig, PlatformPaths};
use pwaicons::util;
use std::path::PathBuf;
use std::process::ExitCode;

/// pwaicons - SVG icon set generator for Progressive Web Apps.
///
/// With no arguments, writes the canonical PWA sizes
/// (72, 96, 128, 144, 152, 192, 384, 512) as icon-{size}x{size}.svg
/// into the current directory.
#[derive(Parser, Debug)]
#[command(name = "pwaicons", version, about)]
struct Cli {
    /// Directory to write icons into (must exist).
    output_dir: Option<PathBuf>,

    /// Icon size in pixels; repeat or comma-separate to list several.
    #[arg(
        short = 's',
        long = "size",
        value_delimiter = ',',
        allow_negative_numbers = true
    )]
    sizes: Vec<i64>,

    /// Also write the PWA manifest icons fragment.
    #[arg(short = 'm', long = "manifest")]
    manifest: bool,

    /// Config file to use instead of the platform default.
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

/// Merge CLI overrides onto the loaded config. CLI wins.
fn apply_cli(mut config: AppConfig, cli: &Cli) -> AppConfig {
    if let Some(ref dir) = cli.output_dir {
        config.output_dir = dir.clone();
    }
    if !cli.sizes.is_empty() {
        config.sizes = cli.sizes.clone();
    }
    if cli.manifest {
        config.manifest_enabled = true;
    }
    config
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Config is read before logging so that [logging] level can apply; the
    // loader's own events are dropped, its warnings are replayed below.
    let (config_path, required) = match cli.config {
        Some(ref path) => (path.clone(), true),
        None => (PlatformPaths::resolve().config_file(), false),
    };
    let loaded = config::load_config(&config_path, required);

    let config_level = loaded
        .as_ref()
        .ok()
        .and_then(|(c, _)| c.log_level.clone());
    util::logging::init(cli.debug, config_level.as_deref());

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "pwaicons starting"
    );

    let (config, warnings) = match loaded {
        Ok(loaded) => loaded,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load configuration");
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };
    for warning in &warnings {
        tracing::warn!(warning = %warning, "Config warning");
    }

    let config = apply_cli(config, &cli);

    let result = generate::generate_all(&config.sizes, &config.output_dir, |event| match event {
        Progress::Written { size, path } => {
            println!("Created {} ({})", path.display(), size.dimensions());
        }
        Progress::Failed { size, error } => {
            eprintln!("Failed size {size}: {error}");
        }
        Progress::Completed { count } => {
            println!("All {count} SVG icons generated.");
        }
    });

    let icons = match result {
        Ok(icons) => icons,
        Err(e) => {
            tracing::error!(error = %e, "Icon generation incomplete");
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if config.manifest_enabled {
        match generate::write_manifest(
            &icons,
            &config.output_dir,
            &config.manifest_file_name,
            &config.manifest_src_prefix,
        ) {
            Ok(path) => println!("Created {}", path.display()),
            Err(e) => {
                tracing::error!(error = %e, "Failed to write manifest fragment");
                eprintln!("Error: {e}");
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_keeps_defaults() {
        let cli = Cli::parse_from(["pwaicons"]);
        let config = apply_cli(AppConfig::default(), &cli);
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn sizes_accept_repeats_and_commas() {
        let cli = Cli::parse_from(["pwaicons", "-s", "72,96", "--size", "512"]);
        assert_eq!(cli.sizes, vec![72, 96, 512]);
    }

    #[test]
    fn cli_overrides_config() {
        let cli = Cli::parse_from(["pwaicons", "out", "-s", "48", "--manifest"]);
        let config = apply_cli(AppConfig::default(), &cli);
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.sizes, vec![48]);
        assert!(config.manifest_enabled);
    }

    #[test]
    fn negative_sizes_reach_the_renderer() {
        let cli = Cli::parse_from(["pwaicons", "--size", "-5"]);
        assert_eq!(cli.sizes, vec![-5]);
    }
}
