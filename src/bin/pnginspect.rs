use std::{fs, path::PathBuf};

use anyhow::Context;
use clap::Parser;
use grid_png::{
    cli::{init_logging, CommonArgs},
    decode,
    decoder::describe_chunks,
};

/// List the chunks of a PNG file and check that its pixels decode
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// PNG file to inspect
    file: PathBuf,

    #[command(flatten)]
    common: CommonArgs,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.common.verbose);
    let bytes =
        fs::read(&cli.file).with_context(|| format!("Failed to read {}", cli.file.display()))?;
    let chunks = describe_chunks(&bytes)?;
    let image = decode(&bytes).context("Failed to decode pixel data")?;

    if cli.common.json {
        let summary = serde_json::json!({
            "path": cli.file.display().to_string(),
            "bytes": bytes.len(),
            "width": image.width(),
            "height": image.height(),
            "palette": image.palette.colors().iter().map(|c| c.to_string()).collect::<Vec<_>>(),
            "chunks": chunks,
        });
        println!("{summary}");
    } else {
        for line in &chunks {
            println!("{line}");
        }
        println!(
            "{}: {}x{} decoded ({} bytes)",
            cli.file.display(),
            image.width(),
            image.height(),
            bytes.len()
        );
    }
    Ok(())
}
