//! Configuration settings for a toroidal Life scenario

use crate::patterns::{Entity, Heading, Placement, Reflection};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub placements: Vec<Placement>,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub width: usize,
    pub height: usize,
    pub generations: usize,
    /// Seed for the random fill; a fresh one is drawn when absent
    #[serde(default)]
    pub seed: Option<u64>,
    /// Percentage chance for each cell to start alive before placements
    #[serde(default)]
    pub random_fill: Option<u8>,
    /// How many generations to search when classifying the final state
    #[serde(default = "default_period_search")]
    pub period_search: usize,
}

fn default_period_search() -> usize {
    60
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub save_frames: bool,
    pub output_directory: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            simulation: SimulationConfig {
                width: 120,
                height: 100,
                generations: 1000,
                seed: None,
                random_fill: None,
                period_search: default_period_search(),
            },
            placements: demo_placements(),
            output: OutputConfig {
                format: OutputFormat::Text,
                save_frames: false,
                output_directory: PathBuf::from("output/runs"),
            },
        }
    }
}

/// Still lifes, oscillators, gliders and two guns spread over a 120x100 board
fn demo_placements() -> Vec<Placement> {
    let glider = |heading| Entity::Glider { heading };
    let gun = |reflection| Entity::GliderGun { reflection };

    vec![
        Placement::new(0, 0, Entity::Block),
        Placement::new(20, 0, Entity::Block),
        Placement::new(0, 10, Entity::Block),
        Placement::new(10, 10, Entity::Beehive),
        Placement::new(30, 80, Entity::Beehive),
        Placement::new(20, 10, Entity::Boat),
        Placement::new(30, 15, Entity::Boat),
        Placement::new(10, 15, Entity::Blinker),
        Placement::new(30, 10, Entity::Toad),
        Placement::new(10, 0, glider(Heading::DownRight)),
        Placement::new(70, 0, glider(Heading::DownRight)),
        Placement::new(120, 0, glider(Heading::DownLeft)),
        Placement::new(20, 30, glider(Heading::UpLeft)),
        Placement::new(40, 28, glider(Heading::UpRight)),
        Placement::new(20, 50, gun(Reflection::Neutral)),
        Placement::new(70, 40, gun(Reflection::YReflection)),
    ]
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &PathBuf) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.simulation.width == 0 || self.simulation.height == 0 {
            anyhow::bail!(
                "Grid dimensions must be positive, got {}x{}",
                self.simulation.width,
                self.simulation.height
            );
        }

        if self.simulation.generations == 0 {
            anyhow::bail!("Number of generations must be positive");
        }

        if let Some(fill) = self.simulation.random_fill {
            if fill > 100 {
                anyhow::bail!("Random fill must be a percentage in 0..=100, got {}", fill);
            }
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(generations) = cli_overrides.generations {
            self.simulation.generations = generations;
        }
        if let Some(seed) = cli_overrides.seed {
            self.simulation.seed = Some(seed);
        }
        if let Some(random_fill) = cli_overrides.random_fill {
            self.simulation.random_fill = Some(random_fill);
        }
        if let Some(ref output_dir) = cli_overrides.output_dir {
            self.output.output_directory = output_dir.clone();
        }
        if cli_overrides.save_frames {
            self.output.save_frames = true;
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub generations: Option<usize>,
    pub seed: Option<u64>,
    pub random_fill: Option<u8>,
    pub output_dir: Option<PathBuf>,
    pub save_frames: bool,
}
