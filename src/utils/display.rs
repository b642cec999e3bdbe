//! Display and output formatting utilities

use crate::config::OutputFormat;
use crate::game_of_life::Grid;
use crate::simulation::RunSummary;
use anyhow::{Context, Result};
use itertools::Itertools;
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use std::time::{Duration, Instant};

/// One recorded generation, already rendered as text
#[derive(Debug, Clone, Serialize)]
pub struct Frame {
    pub generation: usize,
    pub living_cells: usize,
    pub cells: String,
}

impl Frame {
    pub fn capture(generation: usize, grid: &Grid) -> Self {
        Self {
            generation,
            living_cells: grid.living_count(),
            cells: grid.render(),
        }
    }
}

#[derive(Serialize)]
struct RunReport<'a> {
    summary: &'a RunSummary,
    frames: &'a [Frame],
}

/// Format grids and run results for display
pub struct GridFormatter;

impl GridFormatter {
    /// Format a grid in compact form
    pub fn format_grid_compact(grid: &Grid) -> String {
        grid.rows()
            .map(|row| {
                row.iter()
                    .map(|&cell| if cell == 1 { '█' } else { '·' })
                    .collect::<String>()
            })
            .join("\n")
            + "\n"
    }

    /// Format a grid with coordinates
    pub fn format_grid_with_coords(grid: &Grid) -> String {
        let mut output = String::new();

        // Header with column numbers
        output.push_str("   ");
        for x in 0..grid.width() {
            output.push_str(&format!("{:2}", x % 10));
        }
        output.push('\n');

        // Rows with row numbers
        for (y, row) in grid.rows().enumerate() {
            output.push_str(&format!("{:2} ", y));
            for &cell in row {
                output.push_str(if cell == 1 { "██" } else { "··" });
            }
            output.push('\n');
        }

        output
    }

    /// Format a run summary for console output
    pub fn format_summary(summary: &RunSummary) -> String {
        let mut output = String::new();

        output.push_str(&format!("Grid: {}x{}\n", summary.width, summary.height));
        if let Some(seed) = summary.seed {
            output.push_str(&format!("Seed: {}\n", seed));
        }
        output.push_str(&format!("Generations: {}\n", summary.generations));
        output.push_str(&format!(
            "Living Cells: {} → {}\n",
            summary.initial_living_cells, summary.final_living_cells
        ));
        output.push_str(&format!("Density: {:.1}%\n", summary.final_density() * 100.0));
        match summary.final_period {
            Some(period) => output.push_str(&format!(
                "Final State: {} (repeats after {} generations)\n",
                summary.classification(),
                period
            )),
            None => output.push_str(&format!("Final State: {}\n", summary.classification())),
        }
        output.push_str(&format!("Run Time: {:.3}s\n", summary.elapsed.as_secs_f64()));

        output
    }

    /// Format multiple run summaries as a table
    pub fn format_batch_summary(summaries: &[RunSummary]) -> String {
        let mut output = String::new();

        output.push_str("Batch Summary:\n");
        output.push_str("Seed                 | Start  | End    | Period | State\n");
        output.push_str("---------------------|--------|--------|--------|---------\n");

        for summary in summaries {
            let seed = summary.seed.map_or_else(|| "-".to_string(), |seed| seed.to_string());
            let period = summary
                .final_period
                .map_or_else(|| "-".to_string(), |period| period.to_string());

            output.push_str(&format!(
                "{:20} | {:6} | {:6} | {:>6} | {}\n",
                seed,
                summary.initial_living_cells,
                summary.final_living_cells,
                period,
                summary.classification()
            ));
        }

        output
    }

    /// Save a run and its recorded frames based on output format
    pub fn save_run<P: AsRef<Path>>(
        summary: &RunSummary,
        frames: &[Frame],
        output_dir: P,
        format: &OutputFormat,
    ) -> Result<()> {
        let output_dir = output_dir.as_ref();
        std::fs::create_dir_all(output_dir)
            .with_context(|| format!("Failed to create directory: {}", output_dir.display()))?;

        match format {
            OutputFormat::Text => {
                let summary_path = output_dir.join("run_summary.txt");
                std::fs::write(&summary_path, Self::format_summary(summary))
                    .with_context(|| format!("Failed to write {}", summary_path.display()))?;

                if !frames.is_empty() {
                    let frames_path = output_dir.join("frames.txt");
                    std::fs::write(&frames_path, Self::create_visual_evolution(frames))
                        .with_context(|| format!("Failed to write {}", frames_path.display()))?;
                }
            }
            OutputFormat::Json => {
                let report_path = output_dir.join("run.json");
                let json = serde_json::to_string_pretty(&RunReport { summary, frames })
                    .context("Failed to serialize run report")?;
                std::fs::write(&report_path, json)
                    .with_context(|| format!("Failed to write {}", report_path.display()))?;
            }
        }

        Ok(())
    }

    /// Save a batch of summaries as JSON
    pub fn save_batch<P: AsRef<Path>>(summaries: &[RunSummary], output_dir: P) -> Result<()> {
        let output_dir = output_dir.as_ref();
        std::fs::create_dir_all(output_dir)
            .with_context(|| format!("Failed to create directory: {}", output_dir.display()))?;

        let summary_path = output_dir.join("batch_summary.json");
        let summary_json = serde_json::to_string_pretty(summaries)?;
        std::fs::write(&summary_path, summary_json)
            .with_context(|| format!("Failed to write {}", summary_path.display()))?;

        Ok(())
    }

    /// Create a visual representation of the evolution
    fn create_visual_evolution(frames: &[Frame]) -> String {
        let mut output = String::new();

        for frame in frames {
            output.push_str(&format!(
                "Generation {} (Living: {}):\n",
                frame.generation, frame.living_cells
            ));
            output.push_str(&frame.cells);
            output.push('\n');
        }

        output
    }
}

const REDRAW_INTERVAL: Duration = Duration::from_millis(100);

/// Console progress for a run, redrawn at most every 100ms
pub struct ProgressIndicator {
    generations: usize,
    reached: usize,
    last_draw: Instant,
    started: Instant,
}

impl ProgressIndicator {
    pub fn new(generations: usize) -> Self {
        let now = Instant::now();
        Self {
            generations,
            reached: 0,
            last_draw: now,
            started: now,
        }
    }

    /// Record that `generation` has been reached
    pub fn update(&mut self, generation: usize) {
        self.reached = generation;

        if self.last_draw.elapsed() >= REDRAW_INTERVAL {
            print!("\r{}", self.status_line());
            std::io::stdout().flush().ok();
            self.last_draw = Instant::now();
        }
    }

    /// Share of the run completed, in `0.0..=1.0`
    pub fn fraction(&self) -> f64 {
        if self.generations == 0 {
            return 1.0;
        }
        self.reached.min(self.generations) as f64 / self.generations as f64
    }

    pub fn status_line(&self) -> String {
        format!(
            "Generation {}/{} ({:.1}%)",
            self.reached,
            self.generations,
            self.fraction() * 100.0
        )
    }

    /// Mark the run complete and print the final line
    pub fn finish(&mut self) {
        self.reached = self.generations;
        println!(
            "\r{} in {:.1}s",
            self.status_line(),
            self.started.elapsed().as_secs_f64()
        );
    }
}

/// ANSI coloring for status messages
pub struct ColorOutput;

impl ColorOutput {
    /// Wrap `text` in `color` when `enabled`, otherwise return it unchanged
    pub fn paint(text: &str, color: Color, enabled: bool) -> String {
        if enabled {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    // NO_COLOR and dumb terminals get plain text
    fn enabled() -> bool {
        std::env::var_os("NO_COLOR").is_none()
            && std::env::var("TERM").map_or(true, |term| term != "dumb")
    }

    pub fn success(text: &str) -> String {
        Self::paint(text, Color::Green, Self::enabled())
    }

    pub fn warning(text: &str) -> String {
        Self::paint(text, Color::Yellow, Self::enabled())
    }

    pub fn info(text: &str) -> String {
        Self::paint(text, Color::Blue, Self::enabled())
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}
