//! Main CLI application for the toroidal Game of Life

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::time::Instant;
use toroidal_life::{
    config::{CliOverrides, Settings},
    patterns::{Entity, Heading, Pattern, Placement, Reflection},
    simulation::{run_batch, seed_range, Simulation},
    utils::{ColorOutput, Frame, GridFormatter, ProgressIndicator},
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "toroidal_life")]
#[command(about = "Conway's Game of Life on a wrap-around grid")]
#[command(version = "0.1.0")]
struct Cli {
    /// Verbose logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a scenario for a number of generations
    Run {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Number of generations (overrides config)
        #[arg(short, long)]
        generations: Option<usize>,

        /// Random fill seed (overrides config)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Random fill percentage (overrides config)
        #[arg(short = 'f', long)]
        random_fill: Option<u8>,

        /// Output directory (overrides config)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Record every generation to the output directory
        #[arg(long)]
        save_frames: bool,

        /// Print the final grid
        #[arg(long)]
        show_grid: bool,
    },

    /// Create default and example scenario files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },

    /// Report whether the configured starting grid repeats
    Period {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Maximum generations to search (overrides config)
        #[arg(short, long)]
        max: Option<usize>,
    },

    /// Run many seeded random scenarios in parallel
    Batch {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Number of runs
        #[arg(short, long, default_value_t = 8)]
        runs: usize,

        /// First seed; runs use consecutive seeds
        #[arg(short, long, default_value_t = 0)]
        base_seed: u64,

        /// Random fill percentage (overrides config)
        #[arg(short = 'f', long)]
        random_fill: Option<u8>,

        /// Output directory (overrides config)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Run {
            config, generations, seed, random_fill, output, save_frames, show_grid
        } => {
            let overrides = CliOverrides {
                generations,
                seed,
                random_fill,
                output_dir: output,
                save_frames,
            };
            run_command(config, overrides, show_grid)
        }
        Commands::Setup { directory, force } => {
            setup_command(directory, force)
        }
        Commands::Period { config, max } => {
            period_command(config, max)
        }
        Commands::Batch { config, runs, base_seed, random_fill, output } => {
            batch_command(config, runs, base_seed, random_fill, output)
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Load configuration, falling back to the built-in demo board
fn load_settings(config_path: &Path) -> Result<Settings> {
    if config_path.exists() {
        Settings::from_file(&config_path.to_path_buf())
            .with_context(|| format!("Failed to load config from {}", config_path.display()))
    } else {
        println!("{}", ColorOutput::warning(&format!(
            "Config file {} not found, using defaults", config_path.display()
        )));
        Ok(Settings::default())
    }
}

fn run_command(config_path: PathBuf, overrides: CliOverrides, show_grid: bool) -> Result<()> {
    println!("{}", ColorOutput::info("🔄 Starting Game of Life run"));

    let mut settings = load_settings(&config_path)?;
    settings.merge_with_cli(&overrides);
    settings.validate()
        .context("Configuration validation failed")?;

    let save_frames = settings.output.save_frames;
    let generations = settings.simulation.generations;
    let output_dir = settings.output.output_directory.clone();
    let format = settings.output.format;

    let mut simulation = Simulation::from_settings(settings)
        .context("Failed to build starting grid")?;

    let mut frames = Vec::new();
    let mut progress = ProgressIndicator::new(generations);
    let summary = simulation.run(|generation, grid| {
        if save_frames {
            frames.push(Frame::capture(generation, grid));
        }
        progress.update(generation);
    });
    progress.finish();

    println!("\n{}", GridFormatter::format_summary(&summary));

    if show_grid {
        println!("{}", GridFormatter::format_grid_compact(simulation.grid()));
    }

    println!("{}", ColorOutput::info("💾 Saving run..."));
    GridFormatter::save_run(&summary, &frames, &output_dir, &format)
        .context("Failed to save run")?;

    println!("{}", ColorOutput::success(&format!(
        "✅ Run saved to {}", output_dir.display()
    )));

    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("🛠️  Setting up scenario files..."));

    let config_dir = directory.join("config");
    let output_dir = directory.join("output/runs");

    for dir in [&config_dir, &output_dir] {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    // Create default configuration
    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        Settings::default().to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    let examples_dir = config_dir.join("examples");
    std::fs::create_dir_all(&examples_dir)?;

    // A lone glider on the smallest board it can circle
    let mut glider = Settings::default();
    glider.simulation.width = 5;
    glider.simulation.height = 5;
    glider.simulation.generations = 20;
    glider.placements = vec![Placement::new(0, 0, Entity::Glider { heading: Heading::DownRight })];
    glider.to_file(&examples_dir.join("glider_5x5.yaml"))?;

    // Random soup with a hand-drawn R-pentomino in the middle
    let mut soup = Settings::default();
    soup.simulation.width = 64;
    soup.simulation.height = 64;
    soup.simulation.generations = 200;
    soup.simulation.random_fill = Some(20);
    soup.simulation.seed = Some(1);
    soup.placements = vec![Placement::new(30, 30, Entity::Custom {
        rows: Pattern::new([" **", "** ", " * "]),
        reflection: Reflection::Neutral,
    })];
    soup.to_file(&examples_dir.join("soup.yaml"))?;

    println!("Created example configurations in: {}", examples_dir.display());

    println!("\n{}", ColorOutput::success("✅ Setup complete!"));
    println!("\nNext steps:");
    println!("1. Edit configuration files in {}", config_dir.display());
    println!("2. Run: cargo run -- run --config config/default.yaml");

    Ok(())
}

fn period_command(config_path: PathBuf, max: Option<usize>) -> Result<()> {
    println!("{}", ColorOutput::info("🔍 Searching for a period..."));

    let mut settings = load_settings(&config_path)?;
    if let Some(max) = max {
        settings.simulation.period_search = max;
    }
    let limit = settings.simulation.period_search;

    let simulation = Simulation::from_settings(settings)
        .context("Failed to build starting grid")?;

    println!("Starting Grid ({}x{}), {} living cells",
             simulation.initial().width(),
             simulation.initial().height(),
             simulation.initial().living_count());

    match simulation.initial_period() {
        Some(period) => println!("{}", ColorOutput::success(&format!(
            "✅ Starting grid repeats after {} generations", period
        ))),
        None => println!("{}", ColorOutput::warning(&format!(
            "❌ No repeat within {} generations", limit
        ))),
    }

    Ok(())
}

fn batch_command(
    config_path: PathBuf,
    runs: usize,
    base_seed: u64,
    random_fill: Option<u8>,
    output_dir: Option<PathBuf>,
) -> Result<()> {
    println!("{}", ColorOutput::info(&format!("🎲 Running {} seeded scenarios...", runs)));

    let mut settings = load_settings(&config_path)?;
    settings.merge_with_cli(&CliOverrides {
        random_fill,
        output_dir,
        ..Default::default()
    });

    let start_time = Instant::now();
    let summaries = run_batch(&settings, &seed_range(base_seed, runs))
        .context("Batch run failed")?;

    println!("{}", ColorOutput::success(&format!(
        "✅ Finished {} runs in {:.3}s", summaries.len(), start_time.elapsed().as_secs_f64()
    )));
    println!("\n{}", GridFormatter::format_batch_summary(&summaries));

    GridFormatter::save_batch(&summaries, &settings.output.output_directory)
        .context("Failed to save batch summary")?;
    println!("Summary saved to {}", settings.output.output_directory.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from([
            "toroidal_life",
            "run",
            "--config", "test.yaml",
            "--generations", "5",
            "--seed", "9",
        ]);
        assert!(cli.is_ok());

        let cli = Cli::try_parse_from(["toroidal_life", "-v", "batch", "--runs", "3"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Batch { runs: 3, base_seed: 0, .. }));
    }

    #[test]
    fn test_setup_command() {
        let temp_dir = tempdir().unwrap();
        let result = setup_command(temp_dir.path().to_path_buf(), false);

        assert!(result.is_ok());
        assert!(temp_dir.path().join("config/default.yaml").exists());

        let glider = Settings::from_file(&temp_dir.path().join("config/examples/glider_5x5.yaml"))
            .unwrap();
        let simulation = Simulation::from_settings(glider).unwrap();
        assert_eq!(simulation.initial_period(), Some(20));
    }

    #[test]
    fn test_run_command_saves_frames() {
        let temp_dir = tempdir().unwrap();
        setup_command(temp_dir.path().to_path_buf(), false).unwrap();

        let output = temp_dir.path().join("out");
        let overrides = CliOverrides {
            output_dir: Some(output.clone()),
            save_frames: true,
            ..Default::default()
        };
        run_command(temp_dir.path().join("config/examples/glider_5x5.yaml"), overrides, false)
            .unwrap();

        let frames = std::fs::read_to_string(output.join("frames.txt")).unwrap();
        assert_eq!(frames.matches("Generation ").count(), 20);
    }
}
