use thiserror::Error;

/// The one failure mode of the codec: the input does not describe a color.
///
/// Variants only record why the input was rejected; callers are expected to
/// treat them all the same way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInput {
    #[error("empty color channel")]
    EmptyChannel,
    #[error("color channel `{0}` is not a whole number")]
    NotANumber(String),
    #[error("color channel {0} is outside 0..=255")]
    ChannelOutOfRange(i64),
    #[error("hex color must have 3 or 6 digits, got {0}")]
    HexLength(usize),
    #[error("`{0}` is not a hex digit")]
    HexDigit(char),
}
