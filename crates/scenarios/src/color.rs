use std::fmt;

use serde::{Deserialize, Serialize};

/// An RGB colour used to tell scenarios apart in a comparative series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Colours assigned to scenarios in order, cycling once exhausted.
pub const PALETTE: [Color; 5] = [
    Color::rgb(75, 192, 192),
    Color::rgb(255, 99, 132),
    Color::rgb(255, 205, 86),
    Color::rgb(54, 162, 235),
    Color::rgb(153, 102, 255),
];

impl Color {
    /// Creates a colour from its red, green, and blue channels.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Returns the palette colour for the scenario at `index`.
    #[must_use]
    pub fn from_palette(index: usize) -> Self {
        PALETTE[index % PALETTE.len()]
    }
}

/// Formats as a CSS colour, e.g. `rgb(75, 192, 192)`.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}
