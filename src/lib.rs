//! Color vision deficiency (CVD) simulation.
//!
//! Three independent per-color simulation families over 8-bit sRGB input.
//! [`brettel`] projects onto one of two planes in linear RGB and takes an
//! explicit severity in [0,1]. [`machado`] intersects a confusion line in
//! XYZ chromaticity and always applies the full effect. [`matrix`] applies
//! fixed percentage mixing matrices to the encoded values, with "-omaly"
//! blends and monochromacy. No family depends on another; [`simulate`]
//! selects one by [`Model`].

pub mod brettel;
pub mod color;
pub mod gamma;
pub mod machado;
pub mod matrix;

pub use crate::color::{Color8, Dichromacy, UnknownDeficiencyType, Vision};

/// The three interchangeable simulation strategies.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Model {
    Brettel,
    Machado,
    Matrix,
}

impl Model {
    pub const ALL: [Model; 3] = [Model::Brettel, Model::Machado, Model::Matrix];

    pub fn name(self) -> &'static str {
        match self {
            Model::Brettel => "brettel",
            Model::Machado => "machado",
            Model::Matrix => "matrix",
        }
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Simulates a named vision type on one color under the chosen model.
///
/// `Normal` is the identity everywhere. The "-omaly" forms are each model's
/// fixed partial rendition: Brettel at severity
/// [`brettel::PARTIAL_SEVERITY`], the other two blended through
/// [`matrix::anomylize`]. The achromatopsias have no confusion axis, so the
/// Brettel family renders them with its severity-blended luma and the other
/// families with the matrix-model monochrome.
pub fn simulate(c: Color8, vision: Vision, model: Model) -> Color8 {
    use Vision::*;
    match model {
        Model::Brettel => brettel::simulate_vision(c, vision),
        Model::Matrix => matrix::simulate(c, vision),
        Model::Machado => match vision {
            Normal => c,
            Achromatopsia => matrix::monochrome(c),
            Achromatomaly => matrix::anomylize(c, matrix::monochrome(c)),
            Protanopia => machado::simulate(c, Dichromacy::Protan),
            Deuteranopia => machado::simulate(c, Dichromacy::Deutan),
            Tritanopia => machado::simulate(c, Dichromacy::Tritan),
            Protanomaly => matrix::anomylize(c, machado::simulate(c, Dichromacy::Protan)),
            Deuteranomaly => matrix::anomylize(c, machado::simulate(c, Dichromacy::Deutan)),
            Tritanomaly => matrix::anomylize(c, machado::simulate(c, Dichromacy::Tritan)),
        },
    }
}
