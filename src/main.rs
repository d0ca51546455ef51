use anyhow::{bail, Context, Result};
use clap::Parser;

use structured_highlights::cli::{format_regions, CliArgs, OutputFormat};
use structured_highlights::{HighlightSettings, LanguageId, StructurePass};

fn main() -> Result<()> {
    structured_highlights::tracing::init();

    let args = CliArgs::parse();

    let language = LanguageId::from_path(&args.file);
    if !language.has_structure() {
        bail!(
            "No structure support for {} ({})",
            args.file.display(),
            language.display_name()
        );
    }

    let source = std::fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;

    let settings = match &args.settings {
        Some(path) => HighlightSettings::load_from(path),
        None => HighlightSettings::load(),
    };

    let mut pass = StructurePass::new();
    let highlights = pass.run(&source, language, 0);
    tracing::info!(
        "{}: {} regions",
        args.file.display(),
        highlights.regions.len()
    );

    match args.format {
        OutputFormat::Text => {
            print!(
                "{}",
                format_regions(&highlights.regions, &source, &settings)
            );
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&highlights.regions)
                .context("Failed to serialize regions")?;
            println!("{}", json);
        }
    }

    Ok(())
}
