use std::path::Path;

use anyhow::Context;

use crate::{
    output::write_atomically,
    render::{summary, summary_json, Render},
};

#[derive(Debug, clap::Args)]
pub struct CommonArgs {
    /// Log progress to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Print the summary as a JSON object
    #[arg(long)]
    pub json: bool,
}

pub fn init_logging(verbose: bool) {
    let verbosity = if verbose {
        log::LevelFilter::Info
    } else {
        log::LevelFilter::Error
    };
    pretty_env_logger::formatted_builder()
        .filter_level(verbosity)
        .init();
}

/// Renders `image`, writes it to `path` and prints the one-line summary.
/// Nothing is written when rendering fails.
pub fn emit(image: &impl Render, path: &Path, args: &CommonArgs) -> anyhow::Result<()> {
    let bytes = image.render()?;
    write_atomically(path, &bytes)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    if args.json {
        println!("{}", summary_json(path, image, bytes.len()));
    } else {
        println!("{}", summary(path, image, bytes.len()));
    }
    Ok(())
}
