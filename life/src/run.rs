//! Orchestration for a single `life` invocation: load, simulate, write.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{Level, debug, info, trace, warn};

use crate::core::cell_set::CellSet;
use crate::core::generation::{Transition, simulate};
use crate::io::config::load_config;
use crate::io::life_file::{CellOrder, LifeFileError, read_cells, write_cells};

/// Caller-supplied options for one run. Unset values fall back to the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// `.Life 1.06` file holding the initial generation.
    pub input: PathBuf,
    /// Generations to run; overrides the config file.
    pub iterations: Option<u64>,
    /// Write the result here instead of to stdout.
    pub output: Option<PathBuf>,
    /// Force sorted output regardless of config.
    pub sorted: bool,
    /// Optional TOML config with run defaults.
    pub config: Option<PathBuf>,
}

/// Summary of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    pub initial_population: usize,
    pub final_population: usize,
    pub generations_run: u64,
    pub settled_at: Option<u64>,
}

/// Run the simulation and write the result to `--output` or stdout.
pub fn run_life(options: &RunOptions) -> Result<RunOutcome> {
    match &options.output {
        Some(path) => run_with_writer(options, |cells, order| {
            write_cells_atomic(path, cells, order)
                .with_context(|| format!("write {}", path.display()))
        }),
        None => run_with_writer(options, |cells, order| {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            write_cells(&mut out, cells, order)?;
            Ok(())
        }),
    }
}

/// Run the simulation and write the result into `writer`.
pub fn run_life_to<W: Write>(options: &RunOptions, writer: &mut W) -> Result<RunOutcome> {
    run_with_writer(options, |cells, order| {
        write_cells(writer, cells, order)?;
        Ok(())
    })
}

fn run_with_writer<F>(options: &RunOptions, emit: F) -> Result<RunOutcome>
where
    F: FnOnce(&CellSet, CellOrder) -> Result<()>,
{
    let cfg = load_config(options.config.as_deref()).context("loading config failed")?;
    let iterations = options.iterations.unwrap_or(cfg.iterations);
    let order = if options.sorted {
        CellOrder::Sorted
    } else {
        cfg.cell_order()
    };

    info!(input = %options.input.display(), iterations, "starting simulation");
    let initial = read_cells(&options.input).context("parsing cells failed")?;
    let initial_population = initial.len();

    let outcome = simulate(initial, iterations, log_generation);
    if let Some(generation) = outcome.settled_at {
        info!(
            generation,
            population = outcome.cells.len(),
            "population settled, skipping remaining generations"
        );
    }

    emit(&outcome.cells, order).context("printing cells failed")?;

    info!(
        generations_run = outcome.generations_run,
        population = outcome.cells.len(),
        "simulation finished"
    );
    Ok(RunOutcome {
        initial_population,
        final_population: outcome.cells.len(),
        generations_run: outcome.generations_run,
        settled_at: outcome.settled_at,
    })
}

fn log_generation(generation: u64, snapshot: &CellSet, changes: &Transition) {
    debug!(
        generation,
        population = snapshot.len(),
        dying = changes.dying.len(),
        birthed = changes.birthed.len(),
        "generation computed"
    );
    if !tracing::enabled!(Level::TRACE) {
        return;
    }
    for cell in &changes.dying {
        trace!(generation, %cell, "cell is dying");
    }
    for cell in &changes.birthed {
        trace!(generation, %cell, "cell is being born");
    }
}

/// Write cells to `path` via a sibling temp file and rename.
fn write_cells_atomic(
    path: &Path,
    cells: &CellSet,
    order: CellOrder,
) -> Result<(), LifeFileError> {
    let mut buf = Vec::new();
    write_cells(&mut buf, cells, order)?;
    let tmp_path = tmp_path_for(path);
    let written = fs::write(&tmp_path, &buf).and_then(|()| fs::rename(&tmp_path, path));
    if let Err(err) = written {
        discard_tmp(&tmp_path);
        return Err(LifeFileError::Write(err));
    }
    debug!(path = %path.display(), population = cells.len(), "cells written");
    Ok(())
}

fn discard_tmp(tmp_path: &Path) {
    match fs::remove_file(tmp_path) {
        Ok(()) => {}
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => warn!(path = %tmp_path.display(), err = %err, "failed to remove temp output"),
    }
}

fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
