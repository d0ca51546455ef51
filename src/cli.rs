//! Command-line argument parsing
//!
//! Supports:
//! - Dumping the structural regions of a source file
//! - Text or JSON output
//! - An explicit settings file instead of the default config location

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::structure::{LineIndex, RegionDescriptor, RenderMode};
use crate::theme::Palette;

/// Print structural highlight regions for a source file
#[derive(Parser, Debug)]
#[command(name = "structured-highlights", version, about)]
pub struct CliArgs {
    /// Source file to analyze
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Settings file to use for colors (defaults to the config directory)
    #[arg(long, value_name = "PATH")]
    pub settings: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One line per region, with lines and resolved colors
    Text,
    /// Regions as a JSON array
    Json,
}

/// Render regions as text, one per line, in paint order
pub fn format_regions(
    regions: &[RegionDescriptor],
    source: &str,
    palette: &dyn Palette,
) -> String {
    let lines = LineIndex::new(source);
    let mut out = String::new();

    for region in regions {
        let (first, last) = lines.line_span(region);
        let paint = match region.mode {
            RenderMode::FullLine => palette
                .color(region.effective)
                .with_opacity(palette.opacity(region.role)),
            RenderMode::ExactRange => palette.highlight_color(region.effective),
        };
        out.push_str(&format!(
            "{:<10} {:>8}→{:<8} {}..{} lines {}-{} {}\n",
            format!("{:?}", region.role),
            region.declared.label(),
            region.effective.label(),
            region.start,
            region.end,
            first + 1,
            last + 1,
            paint.to_hex(),
        ));
    }

    out
}
