//! CLI type definitions.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use chr_junk_export::MetadataFormat;

#[derive(Parser, Debug)]
#[command(name = "chr-junk", version)]
#[command(about = "Extract CHR ROM tiles from NES ROMs as PNG images", long_about = None)]
#[command(disable_help_flag = true)]
pub(crate) struct Cli {
    /// Input ROM in iNES format
    pub input: PathBuf,

    /// Output PNG file, or output directory with --dir
    pub output: PathBuf,

    /// Export every tile as its own PNG inside the output directory
    #[arg(short = 'd', long = "dir")]
    pub dir: bool,

    /// Palette file with 4 lines of "R G B" (0-255)
    #[arg(short = 'p', long)]
    pub palette: Option<PathBuf>,

    /// Tile width in pixels (at most 8)
    #[arg(short = 'w', long, default_value_t = 8, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// Tile height in pixels
    #[arg(short = 'h', long, default_value_t = 8, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,

    /// Write tile metadata to this file
    #[arg(short = 'm', long)]
    pub metadata: Option<PathBuf>,

    /// Metadata format: json or xml
    #[arg(short = 'f', long, default_value = "json")]
    pub format: MetadataFormat,

    /// Only show warnings and errors (suppress normal output)
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    #[allow(dead_code)]
    help: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["chr-junk", "game.nes", "out.png"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("game.nes"));
        assert_eq!(cli.output, PathBuf::from("out.png"));
        assert!(!cli.dir);
        assert_eq!(cli.width, 8);
        assert_eq!(cli.height, 8);
        assert_eq!(cli.format, MetadataFormat::Json);
        assert!(cli.palette.is_none());
        assert!(cli.metadata.is_none());
    }

    #[test]
    fn test_all_options() {
        let cli = Cli::try_parse_from([
            "chr-junk", "game.nes", "tiles", "-d", "-p", "pal.txt", "-w", "4", "-h", "16", "-m",
            "meta.xml", "-f", "xml",
        ])
        .unwrap();
        assert!(cli.dir);
        assert_eq!(cli.palette, Some(PathBuf::from("pal.txt")));
        assert_eq!(cli.width, 4);
        assert_eq!(cli.height, 16);
        assert_eq!(cli.metadata, Some(PathBuf::from("meta.xml")));
        assert_eq!(cli.format, MetadataFormat::Xml);
    }

    #[test]
    fn test_long_dir_flag() {
        let cli = Cli::try_parse_from(["chr-junk", "--dir", "game.nes", "tiles"]).unwrap();
        assert!(cli.dir);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(Cli::try_parse_from(["chr-junk", "a.nes", "b.png", "-w", "0"]).is_err());
        assert!(Cli::try_parse_from(["chr-junk", "a.nes", "b.png", "-h", "-3"]).is_err());
        assert!(Cli::try_parse_from(["chr-junk", "a.nes", "b.png", "-w", "abc"]).is_err());
        assert!(Cli::try_parse_from(["chr-junk", "a.nes", "b.png", "-f", "yaml"]).is_err());
        assert!(Cli::try_parse_from(["chr-junk", "a.nes"]).is_err());
    }

    #[test]
    fn test_help_is_long_only() {
        let err = Cli::try_parse_from(["chr-junk", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }
}
