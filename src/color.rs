use std::{fmt, str::FromStr};

use crate::{error::Error, parse};

/// An opaque RGB color, one byte per channel.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Hash)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}
impl Color {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    pub const fn to_bytes(self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }
}

/// Grid line color used when none is requested.
pub const DEFAULT_GRID_COLOR: Color = Color::new(0xaa, 0xaa, 0xaa);

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

impl FromStr for Color {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse::color(s)
    }
}
