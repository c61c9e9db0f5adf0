//! Command-line interface for filling grid files and querying word lists

use crate::algorithm::solver::{LedgerScope, Solver, SolverConfig};
use crate::dictionary::WordIndex;
use crate::io::configuration::{
    DEFAULT_MAX_DEPTH, DEFAULT_MAX_EVICTIONS_PER_WORD, DEFAULT_MAX_REPAIR_PASSES,
    DEFAULT_MAX_STEPS, DEFAULT_RETRY_LIMIT, EMPTY, GRID_EXTENSION, OUTPUT_SUFFIX,
};
use crate::io::error::{FillError, Result, file_system, invalid_parameter};
use crate::io::events::TracingObserver;
use crate::io::progress::ProgressManager;
use crate::io::puzzle::{load_grid, output_path, write_grid};
use crate::io::wordlist::load_words;
use clap::{ArgAction, Args, Parser, Subcommand};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{Level, info, warn};

#[derive(Parser, Debug)]
#[command(name = "crossfill")]
#[command(author, version, about = "Fill crossword grids from a word list")]
/// Command-line arguments for the crossword filler
pub struct Cli {
    /// Operation to run
    #[command(subcommand)]
    pub command: Command,

    /// Only log warnings and errors, and hide progress
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Log more detail (-v for placements, -vv for grid snapshots)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

impl Cli {
    /// Log level selected by the verbosity flags
    pub const fn log_level(&self) -> Level {
        if self.quiet {
            return Level::WARN;
        }
        match self.verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Available operations
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fill a grid file, or every grid file in a directory
    Fill(FillArgs),
    /// Check words against a word list, or list matches for `?` patterns
    Lookup(LookupArgs),
}

/// Arguments for `fill`
#[derive(Args, Debug)]
pub struct FillArgs {
    /// Grid file or directory of grid files
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Word list, one word per line
    #[arg(short, long, value_name = "FILE")]
    pub dictionary: PathBuf,

    /// Output file, or directory for batch fills
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Seed for shuffling equally ranked candidates
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Failed placements tolerated at one slot
    #[arg(long, default_value_t = DEFAULT_RETRY_LIMIT)]
    pub retry_limit: usize,

    /// Deepest search stack allowed
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,

    /// Times a single word may be evicted
    #[arg(long, default_value_t = DEFAULT_MAX_EVICTIONS_PER_WORD)]
    pub max_evictions: usize,

    /// Repair passes allowed over complete but invalid grids
    #[arg(long, default_value_t = DEFAULT_MAX_REPAIR_PASSES)]
    pub max_repairs: usize,

    /// Search steps before giving up on a grid
    #[arg(long, default_value_t = DEFAULT_MAX_STEPS)]
    pub max_steps: usize,

    /// Let removed words return once the branch that removed them is abandoned
    #[arg(long)]
    pub scoped_ledger: bool,

    /// Process grids even if their output exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl FillArgs {
    /// Solver limits from the command line
    pub const fn solver_config(&self) -> SolverConfig {
        SolverConfig {
            retry_limit: self.retry_limit,
            max_depth: self.max_depth,
            max_evictions_per_word: self.max_evictions,
            max_repair_passes: self.max_repairs,
            max_steps: self.max_steps,
            ledger_scope: if self.scoped_ledger {
                LedgerScope::Branch
            } else {
                LedgerScope::Global
            },
            seed: self.seed,
        }
    }

    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }
}

/// Arguments for `lookup`
#[derive(Args, Debug)]
pub struct LookupArgs {
    /// Word list, one word per line
    #[arg(short, long, value_name = "FILE")]
    pub dictionary: PathBuf,

    /// Words or `?` patterns to look up
    #[arg(value_name = "WORD", required = true)]
    pub words: Vec<String>,
}

/// Orchestrates batch filling of grid files with progress tracking
pub struct FileProcessor {
    args: FillArgs,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a processor, showing progress unless `quiet`
    pub fn new(args: FillArgs, quiet: bool) -> Self {
        let progress_manager = (!quiet).then(ProgressManager::new);
        Self {
            args,
            progress_manager,
        }
    }

    /// Fill every target grid, writing each solved grid to its output
    ///
    /// Unsolved grids are logged and counted; the remaining grids are still
    /// processed.
    ///
    /// # Errors
    ///
    /// Returns an error if the limits or inputs are invalid, if an output
    /// cannot be written, or `Unsolved` if any grid could not be filled
    pub fn process(&mut self) -> Result<()> {
        let config = self.args.solver_config();
        config.validate()?;

        let files = self.collect_files()?;
        if files.is_empty() {
            info!("no grids to fill");
            return Ok(());
        }
        let index = load_words(&self.args.dictionary)?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        let mut failed = 0;
        for file in &files {
            if !self.process_file(file, &index, config)? {
                failed += 1;
            }
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        if failed > 0 {
            return Err(FillError::Unsolved {
                failed,
                total: files.len(),
            });
        }
        Ok(())
    }

    /// Grid files named by the target, minus earlier outputs
    ///
    /// # Errors
    ///
    /// Returns an error if the target does not exist or cannot be listed
    pub fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.args.target;
        if target.is_file() {
            return Ok(if self.should_process_file(target) {
                vec![target.clone()]
            } else {
                vec![]
            });
        }
        if !target.is_dir() {
            return Err(invalid_parameter(
                "target",
                &target.display(),
                &"must be a grid file or directory",
            ));
        }

        let mut files = Vec::new();
        let entries = std::fs::read_dir(target).map_err(|err| file_system(target, "list", err))?;
        for entry in entries {
            let path = entry.map_err(|err| file_system(target, "list", err))?.path();
            let is_grid = path.extension().and_then(|s| s.to_str()) == Some(GRID_EXTENSION);
            let is_output = path
                .file_stem()
                .and_then(|s| s.to_str())
                .is_some_and(|stem| stem.ends_with(OUTPUT_SUFFIX));
            if is_grid && !is_output && self.should_process_file(&path) {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }

    fn should_process_file(&self, input: &Path) -> bool {
        if !self.args.skip_existing() {
            return true;
        }
        let output = self.output_for(input);
        if output.exists() {
            info!(path = %input.display(), "skipping, output exists");
            false
        } else {
            true
        }
    }

    fn output_for(&self, input: &Path) -> PathBuf {
        let default = output_path(input);
        match &self.args.output {
            Some(dir) if dir.is_dir() => dir.join(default.file_name().unwrap_or_default()),
            Some(file) => file.clone(),
            None => default,
        }
    }

    // Returns whether the grid was filled
    fn process_file(&self, input: &Path, index: &WordIndex, config: SolverConfig) -> Result<bool> {
        let start_time = Instant::now();
        let mut grid = load_grid(input)?;
        info!(
            path = %input.display(),
            rows = grid.rows(),
            cols = grid.cols(),
            "filling grid"
        );

        let progress = self.progress_manager.as_ref().map(|pm| pm.observer(input));
        let mut observer = (TracingObserver::new(), progress);
        let report = Solver::new(index, config).solve(&mut grid, &mut observer)?;
        let elapsed = start_time.elapsed();

        if let (Some(pm), Some(progress)) = (&self.progress_manager, &observer.1) {
            pm.complete_file(progress, report.is_success(), elapsed);
        }

        if !report.is_success() {
            warn!(
                path = %input.display(),
                status = ?report.status,
                steps = report.stats.steps,
                "grid could not be filled"
            );
            return Ok(false);
        }

        let output = self.output_for(input);
        write_grid(&grid, &output)?;
        let words: Vec<&str> = report
            .placements
            .iter()
            .map(|placement| placement.word.as_str())
            .collect();
        info!(
            path = %output.display(),
            ?elapsed,
            ?words,
            "grid filled"
        );
        Ok(true)
    }
}

/// Report dictionary membership, or pattern matches, for each word
///
/// # Errors
///
/// Returns an error if the word list cannot be loaded or `out` fails
pub fn run_lookup(args: &LookupArgs, out: &mut impl Write) -> Result<()> {
    let index = load_words(&args.dictionary)?;
    for word in &args.words {
        if word.contains(EMPTY) {
            let matches = index.matching(word);
            writeln!(out, "{word}: {} matches", matches.len())?;
            for found in matches {
                writeln!(out, "  {found}")?;
            }
        } else if index.contains(word) {
            writeln!(out, "{word}: found")?;
        } else {
            writeln!(out, "{word}: missing")?;
        }
    }
    Ok(())
}

/// Dispatch a parsed command line
///
/// # Errors
///
/// Returns the first error raised by the selected command
pub fn run(cli: Cli) -> Result<()> {
    let quiet = !cli.should_show_progress();
    match cli.command {
        Command::Fill(args) => FileProcessor::new(args, quiet).process(),
        Command::Lookup(args) => run_lookup(&args, &mut std::io::stdout().lock()),
    }
}
