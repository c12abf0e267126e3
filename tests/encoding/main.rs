use std::collections::HashSet;

use grid_png::{
    chunks::iter_chunks,
    cli::{emit, CommonArgs},
    decode,
    decoder::describe_chunks,
    Canvas, CellPos, Color, DecodedImage, Error, GridImage, Render, SolidImage, SquareImage,
    DEFAULT_GRID_COLOR, SIGNATURE,
};

const WHITE: Color = Color::new(0xff, 0xff, 0xff);
const BLACK: Color = Color::new(0, 0, 0);
const BLUE: Color = Color::new(0x25, 0x63, 0xeb);
const ORANGE: Color = Color::new(0xf9, 0x73, 0x16);

fn canvas(width: u32, height: u32) -> Canvas {
    Canvas::new(width, height).unwrap()
}

fn scenario_a() -> GridImage {
    GridImage {
        canvas: canvas(512, 512),
        main: WHITE,
        accent: BLUE,
        cell: 85,
        accent_cell: CellPos { col: 3, row: 2 },
        grid: None,
    }
}

fn scenario_b() -> GridImage {
    GridImage {
        canvas: canvas(1200, 630),
        main: BLACK,
        accent: ORANGE,
        cell: 90,
        accent_cell: CellPos { col: 7, row: 3 },
        grid: Some(DEFAULT_GRID_COLOR),
    }
}

fn distinct_rows(image: &DecodedImage) -> usize {
    image
        .indices()
        .chunks(image.width() as usize)
        .collect::<HashSet<_>>()
        .len()
}

/// Bit-at-a-time CRC-32, independent of the table-driven one in the crate.
fn reference_crc(bytes: &[u8]) -> u32 {
    let mut crc = !0u32;
    for &b in bytes {
        crc ^= b as u32;
        for _ in 0..8 {
            let mask = (crc & 1).wrapping_neg();
            crc = (crc >> 1) ^ (0xedb88320 & mask);
        }
    }
    !crc
}

#[test]
fn scenario_a_accent_cell_without_grid() {
    let image = scenario_a();
    let layout = image.layout().unwrap();
    assert_eq!((layout.full_cols, layout.full_rows), (6, 6));
    assert_eq!((layout.h_margin, layout.v_margin), (1, 1));

    let decoded = decode(&image.render().unwrap()).unwrap();
    assert_eq!(decoded.header.bit_depth, 1);
    assert_eq!(decoded.palette.colors(), [BLUE, WHITE]);

    assert_eq!(decoded.pixel(256, 171), Some(BLUE));
    assert_eq!(decoded.pixel(340, 255), Some(BLUE));
    assert_eq!(decoded.pixel(255, 171), Some(WHITE));
    assert_eq!(decoded.pixel(256, 170), Some(WHITE));
    assert_eq!(decoded.pixel(341, 200), Some(WHITE));
    assert_eq!(decoded.pixel(300, 256), Some(WHITE));
    assert_eq!(decoded.pixel(0, 0), Some(WHITE));

    let accent_pixels = decoded.indices().iter().filter(|&&i| i == 0).count();
    assert_eq!(accent_pixels, 85 * 85);
    assert!(distinct_rows(&decoded) <= 2);
}

#[test]
fn scenario_b_accent_cell_over_grid() {
    let image = scenario_b();
    let layout = image.layout().unwrap();
    assert_eq!((layout.full_cols, layout.h_margin), (13, 15));
    assert_eq!((layout.full_rows, layout.v_margin), (7, 0));

    let decoded = decode(&image.render().unwrap()).unwrap();
    assert_eq!(decoded.header.bit_depth, 2);
    assert_eq!(
        decoded.palette.colors(),
        [ORANGE, BLACK, DEFAULT_GRID_COLOR]
    );

    let gray = Some(DEFAULT_GRID_COLOR);
    // Accent cell spans x 645..735, y 270..360.
    assert_eq!(decoded.pixel(700, 300), Some(ORANGE));
    assert_eq!(decoded.pixel(734, 359), Some(ORANGE));
    assert_eq!(decoded.pixel(735, 300), gray);
    // Line pixels inside the cell are covered by the accent.
    assert_eq!(decoded.pixel(645, 270), Some(ORANGE));
    assert_eq!(decoded.pixel(700, 270), Some(ORANGE));
    // Lines straddle each boundary, outer edges included.
    assert_eq!(decoded.pixel(644, 300), gray);
    assert_eq!(decoded.pixel(700, 269), gray);
    assert_eq!(decoded.pixel(14, 300), gray);
    assert_eq!(decoded.pixel(15, 300), gray);
    assert_eq!(decoded.pixel(1185, 300), gray);
    assert_eq!(decoded.pixel(100, 0), gray);
    // Margins and cell interiors are background.
    assert_eq!(decoded.pixel(13, 300), Some(BLACK));
    assert_eq!(decoded.pixel(1199, 300), Some(BLACK));
    assert_eq!(decoded.pixel(100, 300), Some(BLACK));
    assert_eq!(decoded.pixel(100, 629), Some(BLACK));

    assert_eq!(distinct_rows(&decoded), 4);
}

#[test]
fn scenario_c_solid() {
    let image = SolidImage {
        canvas: canvas(16, 16),
        color: ORANGE,
    };
    let decoded = decode(&image.render().unwrap()).unwrap();
    assert_eq!(decoded.header.bit_depth, 1);
    assert_eq!(decoded.palette.colors(), [ORANGE]);
    for y in 0..16 {
        for x in 0..16 {
            assert_eq!(decoded.pixel(x, y), Some(ORANGE));
        }
    }
}

#[test]
fn accent_square_flush_top_left() {
    let image = SquareImage {
        canvas: canvas(21, 13),
        main: WHITE,
        accent: BLUE,
        square: 10,
    };
    let decoded = decode(&image.render().unwrap()).unwrap();
    assert_eq!(decoded.header.bit_depth, 1);
    assert_eq!(decoded.pixel(0, 0), Some(BLUE));
    assert_eq!(decoded.pixel(9, 9), Some(BLUE));
    assert_eq!(decoded.pixel(10, 0), Some(WHITE));
    assert_eq!(decoded.pixel(0, 10), Some(WHITE));
    assert_eq!(decoded.pixel(20, 12), Some(WHITE));
}

#[test]
fn palette_size_picks_bit_depth() {
    let mut image = scenario_b();
    image.canvas = canvas(33, 17);
    image.cell = 5;
    image.accent_cell = CellPos { col: 5, row: 2 };
    let decoded = decode(&image.render().unwrap()).unwrap();
    assert_eq!(decoded.header.bit_depth, 2);
    assert_eq!(decoded.palette.colors().len(), 3);

    image.grid = None;
    let decoded = decode(&image.render().unwrap()).unwrap();
    assert_eq!(decoded.header.bit_depth, 1);
    assert_eq!(decoded.palette.colors().len(), 2);
}

#[test]
fn output_is_deterministic() {
    for image in [scenario_a(), scenario_b()] {
        let first = image.render().unwrap();
        assert_eq!(first, image.render().unwrap());
    }
}

#[test]
fn chunks_are_framed_and_checksummed() {
    let bytes = scenario_b().render().unwrap();
    assert_eq!(&bytes[..8], SIGNATURE);

    let mut pos = 8;
    let mut types = vec![];
    while pos < bytes.len() {
        let len = u32::from_be_bytes(bytes[pos..pos + 4].try_into().unwrap()) as usize;
        let body = &bytes[pos + 4..pos + 8 + len];
        let crc = &bytes[pos + 8 + len..pos + 12 + len];
        let crc = u32::from_be_bytes(crc.try_into().unwrap());
        assert_eq!(crc, reference_crc(body));
        types.push(String::from_utf8(body[..4].to_vec()).unwrap());
        pos += 12 + len;
    }
    assert_eq!(pos, bytes.len());
    assert_eq!(types, ["IHDR", "PLTE", "IDAT", "IEND"]);

    let raw: Vec<_> = iter_chunks(&bytes[8..]).collect::<Result<_, _>>().unwrap();
    assert_eq!(raw[0].data.len(), 13);
    assert_eq!(raw[1].data.len(), 9);
    assert!(raw[3].data.is_empty());
}

#[test]
fn chunk_listing() {
    let lines = describe_chunks(&scenario_a().render().unwrap()).unwrap();
    assert_eq!(lines.len(), 4);
    insta::assert_snapshot!(&lines[0], @"IHDR 13 bytes: 512x512, 1-bit IndexedColor");
    insta::assert_snapshot!(&lines[1], @"PLTE 6 bytes: #2563eb #ffffff");
    assert!(lines[2].starts_with("IDAT "));
    insta::assert_snapshot!(&lines[3], @"IEND 0 bytes");
}

#[test]
fn odd_widths_decode() {
    for width in [1, 3, 7, 9, 13] {
        let image = GridImage {
            canvas: canvas(width, 6),
            main: WHITE,
            accent: ORANGE,
            cell: 1,
            accent_cell: CellPos {
                col: width - 1,
                row: 5,
            },
            grid: Some(BLACK),
        };
        let decoded = decode(&image.render().unwrap()).unwrap();
        assert_eq!(decoded.indices().len(), width as usize * 6);
        assert_eq!(decoded.pixel(width - 1, 5), Some(ORANGE));
    }
}

#[test]
fn cell_outside_grid_fails() {
    let mut image = scenario_b();
    image.canvas = canvas(600, 600);
    let err = image.render().unwrap_err();
    assert!(matches!(
        err,
        Error::CellOutOfRange {
            col: 7,
            row: 3,
            cols: 6,
            rows: 6
        }
    ));

    image.grid = None;
    assert!(image.render().is_err());
}

#[test]
fn failed_render_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("grid.png");
    let args = CommonArgs {
        verbose: false,
        json: false,
    };

    let mut image = scenario_b();
    image.accent_cell = CellPos { col: 13, row: 0 };
    assert!(emit(&image, &path, &args).is_err());
    assert!(!path.exists());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);

    image.accent_cell = CellPos { col: 12, row: 6 };
    emit(&image, &path, &args).unwrap();
    assert_eq!(std::fs::read(&path).unwrap(), image.render().unwrap());
}
