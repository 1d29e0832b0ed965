//! Percentage-matrix color mixing, with anomaly blending.
//!
//! This family works directly on the 0-255 encoded values (no
//! linearization), which is what its published percentage matrices assume.

use crate::color::{Color8, Dichromacy, UnknownDeficiencyType, Vision};

/// Weight of the fully-blind color in the [`anomylize`] blend; the original
/// keeps weight 1, so the result sits about 64% of the way toward the
/// deficiency.
pub const ANOMALY_STRENGTH: f32 = 1.75;

// Row-major percentage mixes. Only the full "-opia" forms have matrices;
// the "-omaly" forms are blends of these with the original.
fn mix_percent(axis: Dichromacy) -> [f32; 9] {
    match axis {
        Dichromacy::Protan => [
            56.667, 43.333, 0.0, //
            55.833, 44.167, 0.0, //
            0.0, 24.167, 75.833,
        ],
        Dichromacy::Deutan => [
            62.5, 37.5, 0.0, //
            70.0, 30.0, 0.0, //
            0.0, 30.0, 70.0,
        ],
        Dichromacy::Tritan => [
            95.0, 5.0, 0.0, //
            0.0, 43.333, 56.667, //
            0.0, 47.5, 52.5,
        ],
    }
}

fn channel(v: f32) -> u8 {
    v.clamp(0., 255.).round() as u8
}

fn apply_mix(c: Color8, m: [f32; 9]) -> Color8 {
    let (r, g, b) = (c.red as f32, c.green as f32, c.blue as f32);
    Color8::new(
        channel((m[0] * r + m[1] * g + m[2] * b) / 100.0),
        channel((m[3] * r + m[4] * g + m[5] * b) / 100.0),
        channel((m[6] * r + m[7] * g + m[8] * b) / 100.0),
    )
}

/// Blends a fully color-blind rendition back toward the original, giving the
/// fixed partial ("-omaly") severity of this model.
pub fn anomylize(original: Color8, fully_blind: Color8) -> Color8 {
    let d = ANOMALY_STRENGTH + 1.0;
    let mix = |a: u8, b: u8| channel((ANOMALY_STRENGTH * b as f32 + a as f32) / d);
    Color8::new(
        mix(original.red, fully_blind.red),
        mix(original.green, fully_blind.green),
        mix(original.blue, fully_blind.blue),
    )
}

/// ITU-R 601 luma, rounded and replicated across channels.
pub fn monochrome(c: Color8) -> Color8 {
    let z = channel(c.red as f32 * 0.299 + c.green as f32 * 0.587 + c.blue as f32 * 0.114);
    Color8::new(z, z, z)
}

/// Matrix-model rendition of a named vision type.
pub fn simulate(c: Color8, v: Vision) -> Color8 {
    use Vision::*;
    match v {
        Normal => c,
        Protanopia => apply_mix(c, mix_percent(Dichromacy::Protan)),
        Deuteranopia => apply_mix(c, mix_percent(Dichromacy::Deutan)),
        Tritanopia => apply_mix(c, mix_percent(Dichromacy::Tritan)),
        Protanomaly => anomylize(c, simulate(c, Protanopia)),
        Deuteranomaly => anomylize(c, simulate(c, Deuteranopia)),
        Tritanomaly => anomylize(c, simulate(c, Tritanopia)),
        Achromatopsia => monochrome(c),
        Achromatomaly => anomylize(c, monochrome(c)),
    }
}

/// String-label surface of [`simulate`]; unknown labels fail instead of
/// being silently passed through.
pub fn simulate_label(c: Color8, label: &str) -> Result<Color8, UnknownDeficiencyType> {
    Ok(simulate(c, label.parse()?))
}
