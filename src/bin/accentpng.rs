use std::path::PathBuf;

use clap::Parser;
use grid_png::{
    cli::{emit, init_logging, CommonArgs},
    Canvas, Color, SquareImage,
};

/// Generate a two-color PNG with an accent square in the top-left corner
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Main/background hex color (e.g. ffffff)
    main: Color,

    /// Accent square hex color (e.g. 2563eb)
    accent: Color,

    /// Dimensions as WxH (e.g. 1200x630)
    dims: Canvas,

    /// Accent square size in pixels (e.g. 90)
    square: u32,

    /// Output file path
    output: PathBuf,

    #[command(flatten)]
    common: CommonArgs,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.common.verbose);
    let image = SquareImage {
        canvas: cli.dims,
        main: cli.main,
        accent: cli.accent,
        square: cli.square,
    };
    emit(&image, &cli.output, &cli.common)
}
