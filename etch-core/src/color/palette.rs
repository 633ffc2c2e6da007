//! Fixed drawing palette

/// Named drawing color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Color {
    Black,
    Red,
    Green,
    Blue,
    Cyan,
    Yellow,
    Magenta,
    White,
}

/// Palette in cycling order
pub const PALETTE: [Color; 8] = [
    Color::Black,
    Color::Red,
    Color::Green,
    Color::Blue,
    Color::Cyan,
    Color::Yellow,
    Color::Magenta,
    Color::White,
];

/// Number of palette entries
pub const PALETTE_LEN: usize = PALETTE.len();

impl Color {
    /// 8-bit per channel RGB value
    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            Color::Black => (0x00, 0x00, 0x00),
            Color::Red => (0xFF, 0x00, 0x00),
            Color::Green => (0x00, 0xFF, 0x00),
            Color::Blue => (0x00, 0x00, 0xFF),
            Color::Cyan => (0x00, 0xFF, 0xFF),
            Color::Yellow => (0xFF, 0xFF, 0x00),
            Color::Magenta => (0xFF, 0x00, 0xFF),
            Color::White => (0xFF, 0xFF, 0xFF),
        }
    }
}
