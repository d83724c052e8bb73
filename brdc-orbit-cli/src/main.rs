#[macro_use]
extern crate log;

use env_logger::{Builder, Target};
use itertools::Itertools;
use std::path::Path;
use thiserror::Error;
use walkdir::WalkDir;

use brdc_orbit::prelude::{Epoch, EphemerisBook, KeplerSolver, Trajectory, SV};

mod cli; // command line interface
mod export; // CSV export
mod input; // JSON ephemeris input
mod plot; // HTML rendering

use cli::Cli;

#[derive(Debug, Error)]
pub enum Error {
    #[error("i/o error: {0}")]
    StdioError(#[from] std::io::Error),
    #[error("json error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("csv error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("propagation error: {0}")]
    OrbitError(#[from] brdc_orbit::prelude::Error),
    #[error("invalid satellite \"{0}\"")]
    InvalidSV(String),
    #[error("invalid epoch \"{0}\"")]
    InvalidEpoch(String),
    #[error("no ephemeris loaded")]
    NoEphemeris,
}

/*
 * Loads all ephemeris files and directories passed by user
 */
fn build_book(cli: &Cli) -> EphemerisBook {
    let mut book = EphemerisBook::new();
    /* load all directories recursively, one by one */
    if let Some(dir) = cli.input_base_dir() {
        let walkdir = WalkDir::new(dir).max_depth(5);
        for entry in walkdir.into_iter().filter_map(|e| e.ok()) {
            let path = entry.path();
            if path.is_dir() || path.extension().map_or(true, |ext| ext != "json") {
                continue;
            }
            if let Err(e) = input::load(&mut book, path) {
                warn!("failed to load \"{}\": {}", path.to_string_lossy(), e);
            }
        }
    }
    // load individual files, if any
    for filepath in cli.input_files() {
        if let Err(e) = input::load(&mut book, filepath) {
            warn!("failed to load \"{}\": {}", filepath, e);
        }
    }
    book
}

/*
 * Median time of issue of this satellite
 */
fn median_toe(book: &EphemerisBook, sv: SV) -> Option<Epoch> {
    let toes = book.ephemerides(sv).map(|eph| eph.toe).collect::<Vec<_>>();
    toes.get(toes.len() / 2).copied()
}

pub fn main() -> Result<(), Error> {
    // Cli
    let cli = Cli::new();

    let mut builder = Builder::from_default_env();
    builder
        .target(Target::Stdout)
        .format_timestamp_secs()
        .format_module_path(false);
    if cli.quiet() {
        builder.filter_level(log::LevelFilter::Off);
    }
    builder.init();

    let book = build_book(&cli);
    if book.is_empty() {
        error!("no ephemeris loaded");
        return Err(Error::NoEphemeris);
    }
    info!("loaded {} ephemerides", book.len());

    let selected = cli.sv()?;
    let satellites = if selected.is_empty() {
        book.sv().sorted().collect::<Vec<_>>()
    } else {
        selected
    };

    let sampling = cli.sampling();
    let solver = KeplerSolver::default();
    let start = cli.epoch()?;

    let mut trajectories = Vec::with_capacity(satellites.len());

    for sv in satellites.iter() {
        let t0 = match start.or_else(|| median_toe(&book, *sv)) {
            Some(t0) => t0,
            None => {
                warn!("{}: no ephemeris", sv);
                continue;
            },
        };
        match Trajectory::from_book(&book, *sv, t0, &sampling, &solver) {
            Ok(trajectory) => {
                if !trajectory.converged() {
                    warn!("{}: kepler solver did not always converge", sv);
                }
                info!(
                    "{}: {} epochs (max. {} kepler iterations)",
                    sv,
                    trajectory.len(),
                    trajectory.max_kepler_iterations()
                );
                trajectories.push(trajectory);
            },
            Err(e) => error!("{}: {}", sv, e),
        }
    }

    if let Some(path) = cli.csv_path() {
        let path = Path::new(path);
        let multiple = trajectories.len() > 1;
        for trajectory in trajectories.iter() {
            let path = export::csv_path(path, trajectory.sv, multiple);
            export::write_trajectory(trajectory, &path)?;
            info!("{}: \"{}\" generated", trajectory.sv, path.to_string_lossy());
        }
    }

    if let Some(path) = cli.html_path() {
        let plot = plot::plot_trajectories(&trajectories);
        plot.write_html(path);
        info!("\"{}\" generated", path);
    }

    if cli.csv_path().is_none() && cli.html_path().is_none() && !cli.quiet() {
        for trajectory in trajectories.iter() {
            for (t, position) in trajectory.iter() {
                println!(
                    "{},{},{:.3},{:.3},{:.3}",
                    t, trajectory.sv, position.x, position.y, position.z
                );
            }
        }
    }

    Ok(())
}
