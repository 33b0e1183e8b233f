//! Score-to-colour mapping.
//!
//! Low scores map to green, high scores to red: the score is rescaled from
//! [0, 1000] onto hues [140, 0] and clamped to [0, 120].

use crate::config::{
    HUE_AT_SCORE_MAX, HUE_AT_SCORE_MIN, HUE_CLAMP_MAX, HUE_CLAMP_MIN, HUE_SCORE_MAX,
    HUE_SCORE_MIN,
};

/// Clamps `x` between `min` and `max`.
pub fn clamp(x: f64, min: f64, max: f64) -> f64 {
    if x < min {
        min
    } else if x > max {
        max
    } else {
        x
    }
}

/// Normalizes `x` from `[min, max]` onto `[0, 1]`.
pub fn normalize(x: f64, min: f64, max: f64) -> f64 {
    (x - min) / (max - min)
}

/// Expands a normalized `x` onto `[min, max]`.
pub fn expand(x: f64, min: f64, max: f64) -> f64 {
    x * (max - min) + min
}

/// Translates `x` from the number line `[a, b]` onto `[c, d]`.
pub fn translate(x: f64, a: f64, b: f64, c: f64, d: f64) -> f64 {
    expand(normalize(x, a, b), c, d)
}

/// Hue in degrees (0 = red, 120 = green) for a score.
pub fn score_to_hue(score: i64) -> f64 {
    #[allow(clippy::cast_precision_loss)] // Scores are far below 2^53
    let hue = translate(
        score as f64,
        HUE_SCORE_MIN,
        HUE_SCORE_MAX,
        HUE_AT_SCORE_MIN,
        HUE_AT_SCORE_MAX,
    );
    clamp(hue, HUE_CLAMP_MIN, HUE_CLAMP_MAX)
}

/// Converts HSL (hue in degrees, saturation and lightness in `[0, 1]`) to RGB.
pub fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> (u8, u8, u8) {
    let h = hue.rem_euclid(360.0) / 60.0;
    let c = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let m = lightness - c / 2.0;

    let (r, g, b) = match h as u8 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let to_byte = |v: f64| (clamp(v + m, 0.0, 1.0) * 255.0).round() as u8;
    (to_byte(r), to_byte(g), to_byte(b))
}
