use std::path::PathBuf;

use clap::Parser;
use grid_png::{
    cli::{emit, init_logging, CommonArgs},
    Canvas, Color, SolidImage,
};

/// Generate a solid-color PNG
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Hex color (e.g. f97316 or #ffffff)
    color: Color,

    /// Dimensions as WxH (e.g. 1200x630)
    dims: Canvas,

    /// Output file path
    output: PathBuf,

    #[command(flatten)]
    common: CommonArgs,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.common.verbose);
    let image = SolidImage {
        canvas: cli.dims,
        color: cli.color,
    };
    emit(&image, &cli.output, &cli.common)
}
