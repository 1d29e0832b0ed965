use std::{fmt::Display, str::FromStr};

use palette as p;
use thiserror::Error;

/// 8-bit sRGB color, the input and output of every simulation.
pub type Color8 = p::rgb::Rgb<p::encoding::srgb::Srgb, u8>;
pub type Color = p::rgb::Rgb<p::encoding::srgb::Srgb, f32>;
pub type LinearRgb = p::rgb::Rgb<p::encoding::Linear<p::encoding::srgb::Srgb>, f32>;

#[track_caller]
pub fn rgb(s: &str) -> Color8 {
    Color8::from_str(s).expect("invalid rgb color")
}

pub fn hex(c: Color8) -> String {
    format!("#{:x}", c)
}

/// The three dichromatic confusion axes shared by the Brettel and
/// confusion-line models.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Dichromacy {
    Protan,
    Deutan,
    Tritan,
}

impl Display for Dichromacy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Dichromacy::Protan => "protan",
            Dichromacy::Deutan => "deutan",
            Dichromacy::Tritan => "tritan",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Dichromacy {
    type Err = UnknownDeficiencyType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "protan" => Ok(Dichromacy::Protan),
            "deutan" => Ok(Dichromacy::Deutan),
            "tritan" => Ok(Dichromacy::Tritan),
            _ => Err(UnknownDeficiencyType(s.to_string())),
        }
    }
}

/// Named vision types. The "-omaly" variants are partial forms of the
/// matching "-opia", synthesized by blending with the original color.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Vision {
    Normal,
    Protanopia,
    Protanomaly,
    Deuteranopia,
    Deuteranomaly,
    Tritanopia,
    Tritanomaly,
    Achromatopsia,
    Achromatomaly,
}

impl Vision {
    pub const ALL: [Vision; 9] = [
        Vision::Normal,
        Vision::Protanopia,
        Vision::Protanomaly,
        Vision::Deuteranopia,
        Vision::Deuteranomaly,
        Vision::Tritanopia,
        Vision::Tritanomaly,
        Vision::Achromatopsia,
        Vision::Achromatomaly,
    ];

    /// The confusion axis of this vision type, if it has one.
    pub fn dichromacy(self) -> Option<Dichromacy> {
        use Vision::*;
        match self {
            Protanopia | Protanomaly => Some(Dichromacy::Protan),
            Deuteranopia | Deuteranomaly => Some(Dichromacy::Deutan),
            Tritanopia | Tritanomaly => Some(Dichromacy::Tritan),
            Normal | Achromatopsia | Achromatomaly => None,
        }
    }

    pub fn name(self) -> &'static str {
        use Vision::*;
        match self {
            Normal => "normal",
            Protanopia => "protanopia",
            Protanomaly => "protanomaly",
            Deuteranopia => "deuteranopia",
            Deuteranomaly => "deuteranomaly",
            Tritanopia => "tritanopia",
            Tritanomaly => "tritanomaly",
            Achromatopsia => "achromatopsia",
            Achromatomaly => "achromatomaly",
        }
    }
}

impl Display for Vision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Vision {
    type Err = UnknownDeficiencyType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        for v in Vision::ALL {
            if s == v.name() {
                return Ok(v);
            }
        }
        Err(UnknownDeficiencyType(s.to_string()))
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown deficiency type: {0:?}")]
pub struct UnknownDeficiencyType(pub String);
