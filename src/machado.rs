//! Confusion-line dichromat simulation in CIE XYZ chromaticity.
//!
//! Unlike the Brettel model this one works through a flat 2.2 gamma (see
//! [`crate::gamma`]): the anchor and convergence constants below were fit
//! against that transfer, not the piecewise sRGB one.

use crate::color::{Color8, Dichromacy};
use crate::gamma::{delinearize_2_2, linearize_2_2};

struct ConfusionLine {
    // Chromaticity of the confusion-point anchor.
    anchor_u: f32,
    anchor_v: f32,
    // Neutral convergence line: v = am * u + ayi.
    am: f32,
    ayi: f32,
}

// White chromaticity the neutral axis runs through.
const WHITE_X: f32 = 0.312713;
const WHITE_Y: f32 = 0.329016;
const WHITE_Z: f32 = 0.358271;

// Row-major RGB -> XYZ and its inverse.
const XYZ_FROM_RGB: [f32; 9] = [
    0.430574, 0.341550, 0.178325, //
    0.222015, 0.706655, 0.071330, //
    0.020183, 0.129553, 0.939180,
];
const RGB_FROM_XYZ: [f32; 9] = [
    3.063218, -1.393325, -0.475802, //
    -0.969243, 1.875966, 0.041555, //
    0.067871, -0.228834, 1.069251,
];

fn confusion_line(axis: Dichromacy) -> ConfusionLine {
    match axis {
        Dichromacy::Protan => ConfusionLine {
            anchor_u: 0.735,
            anchor_v: 0.265,
            am: 1.273463,
            ayi: -0.073894,
        },
        Dichromacy::Deutan => ConfusionLine {
            anchor_u: 1.14,
            anchor_v: -0.14,
            am: 0.968437,
            ayi: 0.003331,
        },
        Dichromacy::Tritan => ConfusionLine {
            anchor_u: 0.171,
            anchor_v: -0.003,
            am: 0.062921,
            ayi: 0.292119,
        },
    }
}

/// Simulates the full dichromatic deficiency on one color.
///
/// Luminance (the Y of XYZ) is never altered; the chromaticity is slid along
/// the viewer's confusion line to its intersection with the neutral
/// convergence line, and the result is pulled back into gamut by a single
/// additive step along the unaffected direction rather than by per-channel
/// clipping.
pub fn simulate(c: Color8, axis: Dichromacy) -> Color8 {
    let line = confusion_line(axis);

    let cr = linearize_2_2(c.red);
    let cg = linearize_2_2(c.green);
    let cb = linearize_2_2(c.blue);

    let cx = XYZ_FROM_RGB[0] * cr + XYZ_FROM_RGB[1] * cg + XYZ_FROM_RGB[2] * cb;
    let cy = XYZ_FROM_RGB[3] * cr + XYZ_FROM_RGB[4] * cg + XYZ_FROM_RGB[5] * cb;
    let cz = XYZ_FROM_RGB[6] * cr + XYZ_FROM_RGB[7] * cg + XYZ_FROM_RGB[8] * cb;

    let sum = cx + cy + cz;
    let (cu, cv) = if sum == 0.0 {
        (0.0, 0.0)
    } else {
        (cx / sum, cy / sum)
    };

    // Neutral point at the same luminance.
    let nx = WHITE_X * cy / WHITE_Y;
    let nz = WHITE_Z * cy / WHITE_Y;

    // Slope of the confusion line through the test color. The branch picks
    // the anchor side that avoids a degenerate difference near the anchor.
    let clm = if cu < line.anchor_u {
        (line.anchor_v - cv) / (line.anchor_u - cu)
    } else {
        (cv - line.anchor_v) / (cu - line.anchor_u)
    };
    let clyi = cv - cu * clm;

    // Intersect with the neutral convergence line.
    let du = (line.ayi - clyi) / (clm - line.am);
    let dv = clm * du + clyi;

    // Rebuild XYZ, keeping Y.
    let sx = du * cy / dv;
    let sy = cy;
    let sz = (1.0 - (du + dv)) * cy / dv;

    let mut sr = RGB_FROM_XYZ[0] * sx + RGB_FROM_XYZ[1] * sy + RGB_FROM_XYZ[2] * sz;
    let mut sg = RGB_FROM_XYZ[3] * sx + RGB_FROM_XYZ[4] * sy + RGB_FROM_XYZ[5] * sz;
    let mut sb = RGB_FROM_XYZ[6] * sx + RGB_FROM_XYZ[7] * sy + RGB_FROM_XYZ[8] * sz;

    // Deviation of the neutral point from the simulated one, as RGB deltas.
    let dx = nx - sx;
    let dz = nz - sz;
    let dr = RGB_FROM_XYZ[0] * dx + RGB_FROM_XYZ[2] * dz;
    let dg = RGB_FROM_XYZ[3] * dx + RGB_FROM_XYZ[5] * dz;
    let db = RGB_FROM_XYZ[6] * dx + RGB_FROM_XYZ[8] * dz;

    // Largest in-range step toward the nearest boundary, applied to every
    // channel so the confusion-line direction is preserved.
    let adjust = boundary_step(dr, sr)
        .max(boundary_step(dg, sg))
        .max(boundary_step(db, sb));

    sr += adjust * dr;
    sg += adjust * dg;
    sb += adjust * db;

    Color8::new(delinearize_2_2(sr), delinearize_2_2(sg), delinearize_2_2(sb))
}

// Fractional step along delta that brings value to its nearest boundary
// (0 for a negative channel, 1 otherwise), or 0 when the channel needs no
// step or an out-of-range one.
fn boundary_step(delta: f32, value: f32) -> f32 {
    if delta == 0.0 {
        return 0.0;
    }
    let target = if value < 0.0 { 0.0 } else { 1.0 };
    let step = (target - value) / delta;
    if (0.0..=1.0).contains(&step) {
        step
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_values() {
        let red = Color8::new(255, 0, 0);
        assert_eq!(simulate(red, Dichromacy::Protan), Color8::new(144, 129, 33));

        let green = Color8::new(0, 128, 0);
        assert_eq!(simulate(green, Dichromacy::Deutan), Color8::new(137, 104, 28));
        assert_eq!(simulate(green, Dichromacy::Protan), Color8::new(123, 110, 0));

        let blue = Color8::new(0, 0, 255);
        assert_eq!(simulate(blue, Dichromacy::Tritan), Color8::new(0, 86, 89));
    }

    // These inputs reconstruct with a negative channel, so the additive
    // correction has to walk the color back to the gamut boundary instead
    // of leaving the channel to be clipped by the encode.
    #[test]
    fn gamut_correction_pulls_negative_channels_to_zero() {
        let red = Color8::new(255, 0, 0);
        assert_eq!(simulate(red, Dichromacy::Deutan), Color8::new(162, 122, 0));

        let blue = Color8::new(0, 0, 255);
        assert_eq!(simulate(blue, Dichromacy::Protan), Color8::new(0, 74, 156));
        assert_eq!(simulate(blue, Dichromacy::Deutan), Color8::new(0, 80, 132));

        let navy = Color8::new(0, 0, 51);
        assert_eq!(simulate(navy, Dichromacy::Protan), Color8::new(0, 15, 31));
    }

    #[test]
    fn black_exercises_zero_sum_guard() {
        // X+Y+Z is exactly 0 for black; the chromaticity falls back to (0,0).
        for axis in [Dichromacy::Protan, Dichromacy::Deutan, Dichromacy::Tritan] {
            assert_eq!(simulate(Color8::new(0, 0, 0), axis), Color8::new(0, 0, 0));
        }
    }

    #[test]
    fn white_is_a_fixed_point() {
        for axis in [Dichromacy::Protan, Dichromacy::Deutan, Dichromacy::Tritan] {
            let c = simulate(Color8::new(255, 255, 255), axis);
            assert_eq!(c, Color8::new(255, 255, 255), "{}", axis);
        }
    }

    #[test]
    fn boundary_step_selection() {
        assert_eq!(boundary_step(0.0, 0.5), 0.0);
        // A negative channel steps to 0.
        assert_eq!(boundary_step(0.5, -0.25), 0.5);
        // A non-negative channel steps to 1.
        assert_eq!(boundary_step(0.5, 0.75), 0.5);
        assert_eq!(boundary_step(-0.5, 1.25), 0.5);
        // Steps outside [0,1] are discarded.
        assert_eq!(boundary_step(0.1, 0.25), 0.0);
        assert_eq!(boundary_step(-0.5, 0.25), 0.0);
    }
}
