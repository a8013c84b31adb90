use hexsync::color::Rgb;
use ratatui::style::Color;

/// Colors for chrome that does not follow the picked color.
pub struct Theme;

impl Theme {
    /// Popup border color
    pub fn secondary() -> Color {
        Color::Cyan
    }

    /// Headings
    pub fn accent() -> Color {
        Color::LightBlue
    }

    /// Normal text inside popups
    pub fn text() -> Color {
        Color::White
    }

    /// Terminal color for a picked color.
    pub fn rgb(rgb: Rgb) -> Color {
        Color::Rgb(rgb.r, rgb.g, rgb.b)
    }
}
