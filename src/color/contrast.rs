use super::Rgb;

/// Perceived brightness in `0.0..=1.0` using the Rec. 601 luma weights.
pub fn luminance(rgb: Rgb) -> f64 {
    (0.299 * f64::from(rgb.r) + 0.587 * f64::from(rgb.g) + 0.114 * f64::from(rgb.b)) / 255.0
}

/// Black below a contrast of one half, white from one half up.
pub fn foreground_for_contrast(contrast: f64) -> Rgb {
    if contrast < 0.5 { Rgb::BLACK } else { Rgb::WHITE }
}

/// Pick black or white, whichever reads better on `background`.
pub fn best_foreground_for(background: Rgb) -> Rgb {
    foreground_for_contrast(1.0 - luminance(background))
}
