//! Command-line interface for advancing Game of Life patterns on a toroidal board

use crate::engine::grid::Grid;
use crate::io::configuration::{
    DEFAULT_GENERATIONS, DEFAULT_HEIGHT, DEFAULT_SEED, DEFAULT_WIDTH, OUTPUT_SUFFIX,
    PATTERN_EXTENSIONS, RANDOM_FILL_PROBABILITY, SOUP_STEM,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::progress::ProgressManager;
use crate::patterns;
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "lifegrid")]
#[command(
    author,
    version,
    about = "Advance Game of Life patterns on a toroidal grid"
)]
/// Command-line arguments for the pattern runner
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Input pattern file or directory to process (empty board when omitted)
    #[arg(value_name = "TARGET")]
    pub target: Option<PathBuf>,

    /// Number of generations to advance
    #[arg(short, long, default_value_t = DEFAULT_GENERATIONS)]
    pub generations: usize,

    /// Random seed for reproducible fills
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Fill the board randomly before running
    #[arg(short, long)]
    pub random: bool,

    /// Overlay a named pattern at the board center before running
    #[arg(short, long)]
    pub pattern: Option<String>,

    /// Board height in cells (defaults to the input's height)
    #[arg(short = 'H', long)]
    pub height: Option<usize>,

    /// Board width in cells (defaults to the input's width)
    #[arg(short = 'w', long)]
    pub width: Option<usize>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates board runs with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process the target according to CLI arguments
    ///
    /// With no target, runs a default-sized board seeded by `--random` or
    /// `--pattern` and writes the result to the working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if target validation, board setup, or file I/O
    /// fails.
    pub fn process(&mut self) -> Result<()> {
        let Some(target) = self.cli.target.clone() else {
            // A board with no input has nothing to evolve unless seeded
            if !self.cli.random && self.cli.pattern.is_none() {
                return Err(invalid_parameter(
                    "target",
                    &"<none>",
                    &"an input file, --random, or --pattern is required",
                ));
            }

            let height = self.cli.height.unwrap_or(DEFAULT_HEIGHT);
            let width = self.cli.width.unwrap_or(DEFAULT_WIDTH);
            let output = PathBuf::from(format!("{SOUP_STEM}{OUTPUT_SUFFIX}.life"));
            self.run_board(Grid::new(height, width), &output)?;

            if let Some(ref pm) = self.progress_manager {
                pm.finish();
            }
            return Ok(());
        };

        let files = Self::collect_files(&target, self.cli.skip_existing(), self.cli.quiet)?;

        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for file in &files {
            let grid = Grid::from_text_file(file)?;
            let output_path = Self::output_path(file);
            self.run_board(grid, &output_path)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn run_board(&mut self, mut grid: Grid, output_path: &Path) -> Result<()> {
        if self.cli.height.is_some() || self.cli.width.is_some() {
            let height = self.cli.height.unwrap_or_else(|| grid.height());
            let width = self.cli.width.unwrap_or_else(|| grid.width());
            grid.resize(height, width);
        }

        if self.cli.random {
            let mut rng = StdRng::seed_from_u64(self.cli.seed);
            grid.randomize(&mut rng, RANDOM_FILL_PROBABILITY);
        }

        if let Some(name) = self.cli.pattern.as_deref() {
            let figure = patterns::by_name(name)?;
            let at_row = grid.height().saturating_sub(figure.height()) / 2;
            let at_col = grid.width().saturating_sub(figure.width()) / 2;
            grid.or_with_at(&figure, at_row, at_col);
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(output_path, self.cli.generations);
        }

        for generation in 1..=self.cli.generations {
            grid.step();
            if let Some(ref pm) = self.progress_manager {
                pm.update_generation(generation);
            }
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(grid.population());
        }

        grid.write_text_file(output_path)
    }

    fn collect_files(target: &Path, skip_existing: bool, quiet: bool) -> Result<Vec<PathBuf>> {
        if target.is_file() {
            if Self::is_pattern_file(target) {
                if Self::should_process_file(target, skip_existing, quiet) {
                    Ok(vec![target.to_path_buf()])
                } else {
                    Ok(vec![])
                }
            } else {
                Err(invalid_parameter(
                    "target",
                    &target.display(),
                    &"target file must be a pattern file (.life, .cells, or .txt)",
                ))
            }
        } else if target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(target)? {
                let path = entry?.path();
                if Self::is_pattern_file(&path)
                    && Self::should_process_file(&path, skip_existing, quiet)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &target.display(),
                &"target must be a pattern file or directory",
            ))
        }
    }

    fn is_pattern_file(path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| PATTERN_EXTENSIONS.contains(&ext))
    }

    // Allow print for user feedback on skipped files
    #[allow(clippy::print_stderr)]
    fn should_process_file(input_path: &Path, skip_existing: bool, quiet: bool) -> bool {
        if !skip_existing {
            return true;
        }

        let output_path = Self::output_path(input_path);
        if output_path.exists() {
            if !quiet {
                eprintln!("Skipping: {} (output exists)", input_path.display());
            }
            false
        } else {
            true
        }
    }

    fn output_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let extension = input_path.extension().unwrap_or_default();
        let output_name = format!(
            "{}{}.{}",
            stem.to_string_lossy(),
            OUTPUT_SUFFIX,
            extension.to_string_lossy()
        );

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}
