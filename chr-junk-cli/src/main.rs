//! chr-junk CLI
//!
//! Extracts the CHR ROM tiles of an iNES cartridge image into a PNG
//! tilesheet or a directory of per-tile PNGs.

use std::io::Write;

use clap::Parser;
use log::LevelFilter;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

mod cli_types;
mod error;
mod extract;
mod progress;

use cli_types::Cli;
pub(crate) use error::CliError;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    init_logger(cli.quiet, cli.verbose);

    if let Err(e) = extract::run_extract(&cli) {
        log::debug!("{:?} error", e.kind());
        eprintln!(
            "{} {}",
            "Error:".if_supports_color(Stderr, |t| t.red()),
            e
        );
        std::process::exit(1);
    }
}

/// Install `env_logger` with plain status lines. `RUST_LOG` overrides the
/// level chosen by `--quiet` / `--verbose`.
fn init_logger(quiet: bool, verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .target(env_logger::Target::Stdout)
        .format(|buf, record| match record.level() {
            log::Level::Info => writeln!(buf, "{}", record.args()),
            log::Level::Warn => writeln!(
                buf,
                "{} {}",
                "Warning:".if_supports_color(owo_colors::Stream::Stdout, |t| t.yellow()),
                record.args()
            ),
            log::Level::Error => writeln!(
                buf,
                "{} {}",
                "Error:".if_supports_color(owo_colors::Stream::Stdout, |t| t.red()),
                record.args()
            ),
            level => writeln!(buf, "[{}] {}", level, record.args()),
        })
        .init();
}
