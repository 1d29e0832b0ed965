//! Brettel, Viénot & Mollon dichromat simulation in linear RGB.

use crate::color::{Color8, Dichromacy, LinearRgb, Vision};
use crate::gamma::{linear_from_srgb, srgb_from_linear};

/// Fixed partial severity used for the "-omaly" vision types.
pub const PARTIAL_SEVERITY: f32 = 0.6;

pub struct BrettelParams {
    rgb_cvd_from_rgb_1: [f32; 9],
    rgb_cvd_from_rgb_2: [f32; 9],
    separation_plane_normal: [f32; 3],
}

fn brettel_params(axis: Dichromacy) -> BrettelParams {
    match axis {
        Dichromacy::Protan => BrettelParams {
            rgb_cvd_from_rgb_1: [
                0.1451, 1.20165, -0.34675, 0.10447, 0.85316, 0.04237, 0.00429, -0.00603, 1.00174,
            ],
            rgb_cvd_from_rgb_2: [
                0.14115, 1.16782, -0.30897, 0.10495, 0.8573, 0.03776, 0.00431, -0.00586, 1.00155,
            ],
            separation_plane_normal: [0.00048, 0.00416, -0.00464],
        },
        Dichromacy::Deutan => BrettelParams {
            rgb_cvd_from_rgb_1: [
                0.36198, 0.86755, -0.22953, 0.26099, 0.64512, 0.09389, -0.01975, 0.02686, 0.99289,
            ],
            rgb_cvd_from_rgb_2: [
                0.37009, 0.8854, -0.25549, 0.25767, 0.63782, 0.10451, -0.0195, 0.02741, 0.99209,
            ],
            separation_plane_normal: [-0.00293, -0.00645, 0.00938],
        },
        Dichromacy::Tritan => BrettelParams {
            rgb_cvd_from_rgb_1: [
                1.01354, 0.14268, -0.15622, -0.01181, 0.87561, 0.13619, 0.07707, 0.81208, 0.11085,
            ],
            rgb_cvd_from_rgb_2: [
                0.93337, 0.19999, -0.13336, 0.05809, 0.82565, 0.11626, -0.37923, 1.13825, 0.24098,
            ],
            separation_plane_normal: [0.0396, -0.02831, -0.01129],
        },
    }
}

/// Simulates a dichromatic deficiency on one color.
///
/// Severity 0 reproduces the input (up to gamma round-trip rounding) and 1 is
/// the full deficiency. Values outside [0,1] are not clamped; they
/// extrapolate linearly along the original-to-simulated segment, and the
/// output is still confined to valid 8-bit sRGB by the final encode.
pub fn simulate(c_srgb: Color8, axis: Dichromacy, severity: f32) -> Color8 {
    let params = brettel_params(axis);

    let separation_plane_normal = params.separation_plane_normal;
    let rgb_cvd_from_rgb_1 = params.rgb_cvd_from_rgb_1;
    let rgb_cvd_from_rgb_2 = params.rgb_cvd_from_rgb_2;

    let rgb = linear_from_srgb(c_srgb).into_components();

    // Check on which plane we should project by comparing with the separation plane normal.
    let dot_with_sep_plane = rgb.0 * separation_plane_normal[0]
        + rgb.1 * separation_plane_normal[1]
        + rgb.2 * separation_plane_normal[2];
    let rgb_cvd_from_rgb = if dot_with_sep_plane >= 0. {
        rgb_cvd_from_rgb_1
    } else {
        rgb_cvd_from_rgb_2
    };

    // Transform to the full dichromat projection plane.
    let mut rgb_cvd = (0., 0., 0.);
    rgb_cvd.0 =
        rgb_cvd_from_rgb[0] * rgb.0 + rgb_cvd_from_rgb[1] * rgb.1 + rgb_cvd_from_rgb[2] * rgb.2;
    rgb_cvd.1 =
        rgb_cvd_from_rgb[3] * rgb.0 + rgb_cvd_from_rgb[4] * rgb.1 + rgb_cvd_from_rgb[5] * rgb.2;
    rgb_cvd.2 =
        rgb_cvd_from_rgb[6] * rgb.0 + rgb_cvd_from_rgb[7] * rgb.1 + rgb_cvd_from_rgb[8] * rgb.2;

    // Apply the severity factor as a linear interpolation.
    // It's the same to do it in the RGB space or in the LMS
    // space since it's a linear transform.
    rgb_cvd.0 = rgb_cvd.0 * severity + rgb.0 * (1.0 - severity);
    rgb_cvd.1 = rgb_cvd.1 * severity + rgb.1 * (1.0 - severity);
    rgb_cvd.2 = rgb_cvd.2 * severity + rgb.2 * (1.0 - severity);

    // Go back to sRGB
    srgb_from_linear(LinearRgb::from_components(rgb_cvd))
}

/// ITU-R 601 luma replicated across channels, blended with the original by
/// severity. Works directly on the 0-255 encoded values.
pub fn monochrome_with_severity(c: Color8, severity: f32) -> Color8 {
    let (r, g, b) = (c.red as f32, c.green as f32, c.blue as f32);
    let z = (r * 0.299 + g * 0.587 + b * 0.114).round();
    let mix = |z: f32, v: f32| (z * severity + (1.0 - severity) * v).clamp(0., 255.).round() as u8;
    Color8::new(mix(z, r), mix(z, g), mix(z, b))
}

/// Brettel rendition of a named vision type, with the conventional severity
/// for each: 1.0 for the "-opia" forms, [`PARTIAL_SEVERITY`] for "-omaly".
/// The achromatopsias fall back to luma since they have no confusion axis.
pub fn simulate_vision(c: Color8, v: Vision) -> Color8 {
    use Vision::*;
    match v {
        Normal => c,
        Achromatomaly => monochrome_with_severity(c, PARTIAL_SEVERITY),
        Achromatopsia => monochrome_with_severity(c, 1.0),
        Protanopia => simulate(c, Dichromacy::Protan, 1.0),
        Deuteranopia => simulate(c, Dichromacy::Deutan, 1.0),
        Tritanopia => simulate(c, Dichromacy::Tritan, 1.0),
        Protanomaly => simulate(c, Dichromacy::Protan, PARTIAL_SEVERITY),
        Deuteranomaly => simulate(c, Dichromacy::Deutan, PARTIAL_SEVERITY),
        Tritanomaly => simulate(c, Dichromacy::Tritan, PARTIAL_SEVERITY),
    }
}
