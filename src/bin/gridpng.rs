use std::path::PathBuf;

use clap::Parser;
use grid_png::{
    cli::{emit, init_logging, CommonArgs},
    Canvas, CellPos, Color, GridImage, DEFAULT_GRID_COLOR,
};

/// Generate a PNG with an accent cell and an optional centered grid
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Main/background hex color (e.g. ffffff)
    main: Color,

    /// Accent cell hex color (e.g. 2563eb)
    accent: Color,

    /// Dimensions as WxH (e.g. 1200x630)
    dims: Canvas,

    /// Output file path
    output: PathBuf,

    /// Accent cell as CxR
    #[arg(long, default_value_t = CellPos::default())]
    accent_cell: CellPos,

    /// Grid line color
    #[arg(long, default_value_t = DEFAULT_GRID_COLOR)]
    grid_color: Color,

    /// Draw the grid lines
    #[arg(long)]
    render_grid: bool,

    /// Grid cell size in pixels
    #[arg(long, default_value_t = 90)]
    cell: u32,

    #[command(flatten)]
    common: CommonArgs,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.common.verbose);
    let image = GridImage {
        canvas: cli.dims,
        main: cli.main,
        accent: cli.accent,
        cell: cli.cell,
        accent_cell: cli.accent_cell,
        grid: cli.render_grid.then_some(cli.grid_color),
    };
    emit(&image, &cli.output, &cli.common)
}
