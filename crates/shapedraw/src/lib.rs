//! Command-line front end for shapedraw.
//!
//! `main` only forwards process arguments and stdout here, so the exit
//! statuses can be driven from tests.

use std::io::Write;

use anyhow::{Context, Result};

use shapedraw_engine::config::DrawerConfig;
use shapedraw_engine::logging::init_logging;
use shapedraw_engine::source::read_lines;
use shapedraw_engine::ShapeDrawer;

/// Input was read and every valid shape rendered.
pub const EXIT_OK: u8 = 0;
/// The input file could not be read or output could not be written.
pub const EXIT_FAILURE: u8 = 1;
/// The command line was not understood.
pub const EXIT_USAGE: u8 = 2;

pub const USAGE: &str = "usage: shapedraw [-v|--verbose] [-q|--quiet] [--color=auto|always|never] [FILE]";

/// Runs the whole program against `args` (program name excluded) and
/// returns the process exit status.
pub fn run<I, S, W>(args: I, out: &mut W) -> u8
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
    W: Write + ?Sized,
{
    let config = match DrawerConfig::from_args(args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("shapedraw: {:#}", e);
            eprintln!("{}", USAGE);
            return EXIT_USAGE;
        }
    };

    init_logging(config.logging.clone());

    match draw(&config, out) {
        Ok(_) => EXIT_OK,
        Err(e) => {
            log::error!("{:#}", e);
            EXIT_FAILURE
        }
    }
}

/// Reads the configured input, logs rejected lines at warn level, and
/// renders the collected shapes to `out`. Returns the number rendered.
pub fn draw<W: Write + ?Sized>(config: &DrawerConfig, out: &mut W) -> Result<usize> {
    let lines = read_lines(&config.input)?;

    let mut drawer = ShapeDrawer::new();
    let accepted = drawer.ingest_with(&lines, |diag| log::warn!("{}", diag));
    log::info!(
        "{}: {} shape(s) from {} line(s)",
        config.input.display(),
        accepted,
        lines.len()
    );

    drawer.render_all(out).context("failed to write shapes to stdout")?;
    out.flush().context("failed to flush stdout")?;
    Ok(accepted)
}
