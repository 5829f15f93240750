use colored::Color;

pub const PRIMARY: Color = Color::BrightCyan;
pub const SECONDARY: Color = Color::Cyan;
pub const ACCENT: Color = Color::BrightYellow;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;
pub const VALUE: Color = Color::BrightWhite;
pub const ZONE_IN: Color = Color::BrightRed;
pub const ZONE_OUT: Color = Color::BrightGreen;
pub const REJECTED: Color = Color::Yellow;
pub const COEF_POSITIVE: Color = Color::Green;
pub const COEF_NEGATIVE: Color = Color::Magenta;
