//! Color values shared by the codec and the contrast selector.
mod codec;
mod contrast;
mod error;

use std::fmt;
use std::str::FromStr;

pub use codec::{
    expand_short_hex, hex_to_rgb, is_valid_hex, parse_channel, rgb_to_hex, rgb_to_hex_fields,
};
pub use contrast::{best_foreground_for, foreground_for_contrast, luminance};
pub use error::InvalidInput;

/// An sRGB color with 8 bits per channel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Encode as six uppercase hex digits, e.g. `3F51B5`.
    pub fn to_hex(self) -> String {
        codec::encode(self)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = InvalidInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        hex_to_rgb(s)
    }
}

impl TryFrom<(i64, i64, i64)> for Rgb {
    type Error = InvalidInput;

    fn try_from((r, g, b): (i64, i64, i64)) -> Result<Self, Self::Error> {
        Ok(Rgb::new(
            codec::check_channel(r)?,
            codec::check_channel(g)?,
            codec::check_channel(b)?,
        ))
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Rgb::new(r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_six_digit_hex() {
        assert_eq!(Rgb::new(63, 81, 181).to_string(), "3F51B5");
        assert_eq!(format!("{}", Rgb::BLACK), "000000");
    }

    #[test]
    fn parses_from_str() {
        let rgb: Rgb = "fff".parse().unwrap();
        assert_eq!(rgb, Rgb::WHITE);
        assert!("#FFF".parse::<Rgb>().is_err());
    }

    #[test]
    fn try_from_tuple_rejects_out_of_range() {
        assert_eq!(Rgb::try_from((1, 2, 3)), Ok(Rgb::new(1, 2, 3)));
        assert_eq!(
            Rgb::try_from((0, 300, 0)),
            Err(InvalidInput::ChannelOutOfRange(300))
        );
    }
}
