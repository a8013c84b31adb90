mod state;

use crossterm::event::KeyCode;
use hexsync::color::Rgb;

pub use state::App;

/// Possible input events the app reacts to.
pub enum AppEvent {
    Tick,
    KeyPress(KeyCode),
}

/// The editable fields, in focus order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputField {
    Red,
    Green,
    Blue,
    Hex,
}

pub const FIELDS: [InputField; 4] = [
    InputField::Red,
    InputField::Green,
    InputField::Blue,
    InputField::Hex,
];

impl InputField {
    pub fn label(self) -> &'static str {
        match self {
            InputField::Red => "R",
            InputField::Green => "G",
            InputField::Blue => "B",
            InputField::Hex => "Hex",
        }
    }

    pub fn next(self) -> Self {
        let index = FIELDS.iter().position(|f| *f == self).unwrap_or(0);
        FIELDS[(index + 1) % FIELDS.len()]
    }

    pub fn prev(self) -> Self {
        let index = FIELDS.iter().position(|f| *f == self).unwrap_or(0);
        FIELDS[(index + FIELDS.len() - 1) % FIELDS.len()]
    }

    pub fn is_channel(self) -> bool {
        self != InputField::Hex
    }
}

/// What fills the terminal behind the input panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Backdrop {
    Solid(Rgb),
    /// Animated static shown while the input is not a valid color.
    Noise,
}
