//! Facelet colors.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};

use crate::Direction;

/// Color of a facelet on a standard Rubik's cube.
#[derive(
    Serialize, Deserialize, EnumIter, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
#[serde(rename_all = "snake_case")]
pub enum FaceColor {
    /// Painted on the top face.
    Yellow,
    /// Painted on the bottom face.
    White,
    /// Painted on the forward face.
    Blue,
    /// Painted on the back face.
    Green,
    /// Painted on the left face.
    Red,
    /// Painted on the right face.
    Orange,
}
impl fmt::Display for FaceColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
impl FaceColor {
    /// Color of plastic that has no sticker.
    pub const INTERIOR_RGB: Rgb = Rgb {
        rgb: [0x20, 0x20, 0x20],
    };

    /// Returns the color painted on the outer face in `direction` of a solved
    /// cube.
    pub fn home(direction: Direction) -> Self {
        match direction {
            Direction::Top => FaceColor::Yellow,
            Direction::Bottom => FaceColor::White,
            Direction::Forward => FaceColor::Blue,
            Direction::Back => FaceColor::Green,
            Direction::Left => FaceColor::Red,
            Direction::Right => FaceColor::Orange,
        }
    }
    /// Returns the outer face on which this color is painted on a solved cube.
    pub fn home_direction(self) -> Direction {
        match self {
            FaceColor::Yellow => Direction::Top,
            FaceColor::White => Direction::Bottom,
            FaceColor::Blue => Direction::Forward,
            FaceColor::Green => Direction::Back,
            FaceColor::Red => Direction::Left,
            FaceColor::Orange => Direction::Right,
        }
    }

    /// Returns the human-friendly name of the color.
    pub fn name(self) -> &'static str {
        match self {
            FaceColor::Yellow => "Yellow",
            FaceColor::White => "White",
            FaceColor::Blue => "Blue",
            FaceColor::Green => "Green",
            FaceColor::Red => "Red",
            FaceColor::Orange => "Orange",
        }
    }
    /// Returns a single uppercase letter identifying the color.
    pub fn letter(self) -> char {
        match self {
            FaceColor::Yellow => 'Y',
            FaceColor::White => 'W',
            FaceColor::Blue => 'B',
            FaceColor::Green => 'G',
            FaceColor::Red => 'R',
            FaceColor::Orange => 'O',
        }
    }
    /// Returns the display color.
    pub fn rgb(self) -> Rgb {
        let rgb = match self {
            FaceColor::Yellow => [0xe7, 0xd7, 0x20],
            FaceColor::White => [0xc6, 0xb5, 0xb6],
            FaceColor::Blue => [0x3d, 0x4f, 0xe7],
            FaceColor::Green => [0x1f, 0xe7, 0x61],
            FaceColor::Red => [0xe7, 0x15, 0x32],
            FaceColor::Orange => [0xe7, 0x76, 0x25],
        };
        Rgb { rgb }
    }

    /// Returns an iterator over all six colors.
    pub fn iter() -> impl Iterator<Item = FaceColor> {
        <Self as IntoEnumIterator>::iter()
    }
}

/// 8-bit sRGB color, written in hex like `#ff00ff` or `#f0f`.
///
/// Deserializes from its hex string, so that hosts can read color overrides
/// from settings files.
#[derive(Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(try_from = "String")]
pub struct Rgb {
    /// sRGB component values.
    pub rgb: [u8; 3],
}
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", hex::encode(self.rgb))
    }
}
impl FromStr for Rgb {
    type Err = hex::FromHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim().trim_start_matches('#');
        let mut rgb = [0_u8; 3];
        if digits.len() == 3 {
            let doubled: String = digits.chars().flat_map(|c| [c, c]).collect();
            hex::decode_to_slice(doubled, &mut rgb)?;
        } else {
            hex::decode_to_slice(digits, &mut rgb)?;
        }
        Ok(Self { rgb })
    }
}
impl TryFrom<String> for Rgb {
    type Error = hex::FromHexError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
