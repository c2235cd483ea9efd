use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use chr_junk_core::util::format_bytes;
use chr_junk_core::{Palette, RomImage, TileSpec, decode_tiles};
use chr_junk_export::{Metadata, OutputMode, PngSink, compose, write_metadata};

use crate::CliError;
use crate::cli_types::Cli;
use crate::progress::BarProgress;

/// Run the full extraction: ROM -> tiles -> image(s) -> optional metadata.
pub(crate) fn run_extract(cli: &Cli) -> Result<(), CliError> {
    // Configuration is validated before the ROM is touched
    let spec = TileSpec::new(cli.width, cli.height)?;
    let palette = match &cli.palette {
        Some(path) => Palette::load(path).map_err(|e| {
            CliError::config(format!(
                "Failed to parse the palette file {}: {}",
                path.display(),
                e
            ))
        })?,
        None => Palette::default(),
    };
    let mode = if cli.dir {
        OutputMode::Directory(cli.output.clone())
    } else {
        OutputMode::Sheet(cli.output.clone())
    };

    let tiles = {
        let rom = RomImage::open(&cli.input)?;
        log::debug!(
            "{}: {} PRG bank(s), CHR ROM {}",
            cli.input.display(),
            rom.prg_bank_count(),
            format_bytes(rom.chr_data().len() as u64),
        );
        decode_tiles(&rom.into_chr_data(), &spec)?
    };
    log::debug!("{} tiles of {}x{}", tiles.len(), spec.width(), spec.height());

    let progress = BarProgress::new(tiles.len(), cli.quiet);
    let records = compose(
        &tiles,
        &palette,
        &spec,
        &mode,
        &mut PngSink::new(),
        &progress,
    )?;
    drop(tiles);

    match &mode {
        OutputMode::Sheet(path) => log::info!(
            "Tilesheet saved to {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
        ),
        OutputMode::Directory(dir) => log::info!(
            "Exported {} tiles to directory: {}",
            records.len(),
            dir.display().if_supports_color(Stdout, |t| t.cyan()),
        ),
    }

    if let Some(metadata_path) = &cli.metadata {
        let metadata = Metadata::new(&spec, records);
        write_metadata(metadata_path, cli.format, &metadata)?;
        log::info!(
            "Metadata file generated at {}",
            metadata_path
                .display()
                .if_supports_color(Stdout, |t| t.cyan()),
        );
    }

    Ok(())
}

#[cfg(test)]
#[path = "tests/extract_tests.rs"]
mod tests;
