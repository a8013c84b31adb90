use super::{InvalidInput, Rgb};

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Value of a single hex digit, case-insensitive.
fn nibble(c: char) -> Option<u8> {
    match c {
        '0'..='9' => Some(c as u8 - b'0'),
        'a'..='f' => Some(c as u8 - b'a' + 10),
        'A'..='F' => Some(c as u8 - b'A' + 10),
        _ => None,
    }
}

fn check_hex(hex: &str) -> Result<(), InvalidInput> {
    let len = hex.chars().count();
    if len != 3 && len != 6 {
        return Err(InvalidInput::HexLength(len));
    }
    match hex.chars().find(|c| nibble(*c).is_none()) {
        Some(bad) => Err(InvalidInput::HexDigit(bad)),
        None => Ok(()),
    }
}

/// Whether `hex` is a 3 or 6 digit hex color without a `#` prefix.
pub fn is_valid_hex(hex: &str) -> bool {
    check_hex(hex).is_ok()
}

/// Double every character of a short hex color: `A1B` becomes `AA11BB`.
pub fn expand_short_hex(hex: &str) -> String {
    hex.chars().flat_map(|c| [c, c]).collect()
}

/// Decode a hex color string.
///
/// Accepts exactly 3 or 6 digits in either case. The short form is expanded
/// digit by digit before decoding, so `FFF` and `FFFFFF` decode the same.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb, InvalidInput> {
    check_hex(hex)?;

    let normalized = if hex.len() == 3 {
        expand_short_hex(hex)
    } else {
        hex.to_string()
    };

    // check_hex guarantees six ASCII digits from here on
    let digits: Vec<u8> = normalized.chars().filter_map(nibble).collect();
    let channel = |i: usize| digits[i] * 16 + digits[i + 1];

    Ok(Rgb::new(channel(0), channel(2), channel(4)))
}

pub(super) fn check_channel(value: i64) -> Result<u8, InvalidInput> {
    u8::try_from(value).map_err(|_| InvalidInput::ChannelOutOfRange(value))
}

/// Parse a user-entered channel such as `" 63"`.
///
/// An empty field is invalid, which keeps it distinct from `0`.
pub fn parse_channel(raw: &str) -> Result<u8, InvalidInput> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InvalidInput::EmptyChannel);
    }
    let value = trimmed
        .parse::<i64>()
        .map_err(|_| InvalidInput::NotANumber(trimmed.to_string()))?;
    check_channel(value)
}

pub(super) fn encode(rgb: Rgb) -> String {
    let mut out = String::with_capacity(6);
    for c in [rgb.r, rgb.g, rgb.b] {
        out.push(HEX_DIGITS[(c / 16) as usize] as char);
        out.push(HEX_DIGITS[(c % 16) as usize] as char);
    }
    out
}

/// Encode three channels as six uppercase hex digits.
///
/// Never emits the short form: `(255, 255, 255)` is `FFFFFF`.
pub fn rgb_to_hex(r: i64, g: i64, b: i64) -> Result<String, InvalidInput> {
    let rgb = Rgb::try_from((r, g, b))?;
    Ok(encode(rgb))
}

/// [`rgb_to_hex`] for raw text fields, validated with [`parse_channel`].
pub fn rgb_to_hex_fields(r: &str, g: &str, b: &str) -> Result<String, InvalidInput> {
    let rgb = Rgb::new(parse_channel(r)?, parse_channel(g)?, parse_channel(b)?);
    Ok(encode(rgb))
}
