//! The two gamma conventions used by the simulators.
//!
//! The Brettel model runs on the piecewise sRGB transfer function. The
//! confusion-line model was fit against a flat 2.2 power law instead. The
//! two are numerically distinct approximations and must not be unified,
//! because each model's published constants assume its own gamma.

use std::sync::LazyLock;

use crate::color::{Color, Color8, LinearRgb};

/// Exponent of the flat power-law gamma.
pub const GAMMA: f32 = 2.2;

// Evaluated per channel per color in hot paths, so trade 256 entries of
// memory for the transcendental calls.
static POW_TABLE: LazyLock<[f32; 256]> = LazyLock::new(|| {
    let mut table = [0.0f32; 256];
    for (i, entry) in table.iter_mut().enumerate() {
        *entry = (i as f32 / 255.0).powf(GAMMA);
    }
    table
});

/// Flat 2.2 linearization via the precomputed lookup table.
pub fn linearize_2_2(v: u8) -> f32 {
    POW_TABLE[v as usize]
}

/// Inverse of the flat 2.2 gamma. Clamps to [0,1] before the power law and
/// rounds to the nearest 8-bit value.
pub fn delinearize_2_2(v: f32) -> u8 {
    (255.0 * v.clamp(0.0, 1.0).powf(1.0 / GAMMA)).round() as u8
}

/// Piecewise sRGB linearization of all three channels.
pub fn linear_from_srgb(c: Color8) -> LinearRgb {
    LinearRgb::from_encoding(Color::from_format(c))
}

/// Encodes a linear color back to 8-bit sRGB. Channels are clamped to [0,1]
/// first, so intermediate overshoot can never leave the 8-bit range.
pub fn srgb_from_linear(l: LinearRgb) -> Color8 {
    let (r, g, b) = l.into_components();
    let clamped = LinearRgb::from_components((
        r.clamp(0.0, 1.0),
        g.clamp(0.0, 1.0),
        b.clamp(0.0, 1.0),
    ));
    Color::from_encoding(clamped).into_format()
}
