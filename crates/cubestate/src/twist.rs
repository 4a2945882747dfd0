//! Slice twists and their notation.
//!
//! A twist is written as an axis letter, a layer index, and an optional `'`
//! for the clockwise direction. For example, `Z2` turns layer 2 along Z
//! counterclockwise (as seen from above) and `x0'` turns layer 0 along X
//! clockwise (as seen from the right).

use std::fmt;
use std::str::FromStr;

use serde::de::Error;
use serde::{Deserialize, Serialize};

use crate::{Axis, InvalidLayerError, ParseTwistError, Sign};

/// Direction of a quarter turn, as seen from the positive end of the axis
/// looking toward the origin.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TurnDirection {
    /// Counterclockwise (`turns = +1`).
    #[default]
    Ccw,
    /// Clockwise (`turns = -1`).
    Cw,
}
impl TryFrom<i32> for TurnDirection {
    type Error = InvalidLayerError;

    fn try_from(turns: i32) -> Result<Self, Self::Error> {
        match turns {
            1 => Ok(TurnDirection::Ccw),
            -1 => Ok(TurnDirection::Cw),
            _ => Err(InvalidLayerError::Turns(turns)),
        }
    }
}
impl From<TurnDirection> for Sign {
    fn from(direction: TurnDirection) -> Self {
        direction.sign()
    }
}
impl TurnDirection {
    /// Returns the sign of this rotation, according to the mathematical
    /// convention of counterclockwise being positive and clockwise being
    /// negative.
    pub fn sign(self) -> Sign {
        match self {
            TurnDirection::Ccw => Sign::Pos,
            TurnDirection::Cw => Sign::Neg,
        }
    }
    /// Returns `+1` or `-1`.
    pub fn turns(self) -> i32 {
        self.sign().int()
    }
    /// Returns the reverse direction.
    #[must_use]
    pub fn rev(self) -> Self {
        match self {
            TurnDirection::Ccw => TurnDirection::Cw,
            TurnDirection::Cw => TurnDirection::Ccw,
        }
    }
    /// Returns the notation suffix for this direction.
    pub fn symbol(self) -> &'static str {
        match self {
            TurnDirection::Ccw => "",
            TurnDirection::Cw => "'",
        }
    }
}

/// Quarter turn of a single slice.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct SliceTwist {
    /// Axis perpendicular to the slice.
    pub axis: Axis,
    /// Coordinate of the slice along `axis`.
    pub layer: u16,
    /// Direction of the turn.
    pub direction: TurnDirection,
}
impl fmt::Display for SliceTwist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.axis, self.layer, self.direction.symbol())
    }
}
impl FromStr for SliceTwist {
    type Err = ParseTwistError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let axis_char = chars.next().ok_or(ParseTwistError::Empty)?;
        let axis: Axis = axis_char.to_string().parse()?;

        let rest = chars.as_str();
        let (digits, direction) = match rest.strip_suffix('\'') {
            Some(digits) => (digits, TurnDirection::Cw),
            None => (rest, TurnDirection::Ccw),
        };
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(ParseTwistError::Layer(s.to_owned()));
        }
        let layer = digits
            .parse()
            .map_err(|_| ParseTwistError::Layer(s.to_owned()))?;

        Ok(Self {
            axis,
            layer,
            direction,
        })
    }
}
impl Serialize for SliceTwist {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.to_string().serialize(serializer)
    }
}
impl<'de> Deserialize<'de> for SliceTwist {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<Self>().map_err(D::Error::custom)
    }
}
impl SliceTwist {
    /// Constructs a twist.
    pub fn new(axis: Axis, layer: u16, direction: TurnDirection) -> Self {
        Self {
            axis,
            layer,
            direction,
        }
    }
    /// Returns the twist that undoes this one.
    #[must_use]
    pub fn rev(self) -> Self {
        Self {
            direction: self.direction.rev(),
            ..self
        }
    }
}

/// Parses a whitespace-separated sequence of twists, such as `Z2 X0' Y1`.
pub fn parse_twists(s: &str) -> Result<Vec<SliceTwist>, ParseTwistError> {
    s.split_whitespace().map(str::parse).collect()
}

/// Returns the sequence of twists that undoes `twists`.
pub fn invert_twists(twists: &[SliceTwist]) -> Vec<SliceTwist> {
    twists.iter().rev().map(|twist| twist.rev()).collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_twist_notation() {
        let twist = SliceTwist::new(Axis::Z, 2, TurnDirection::Ccw);
        assert_eq!(twist.to_string(), "Z2");
        assert_eq!("Z2".parse::<SliceTwist>(), Ok(twist));
        assert_eq!("z2".parse::<SliceTwist>(), Ok(twist));
        assert_eq!(
            " x10' ".parse::<SliceTwist>(),
            Ok(SliceTwist::new(Axis::X, 10, TurnDirection::Cw)),
        );
        assert_eq!(twist.rev().to_string(), "Z2'");
    }

    #[test]
    fn test_twist_notation_errors() {
        assert_eq!("".parse::<SliceTwist>(), Err(ParseTwistError::Empty));
        assert_eq!(
            "W1".parse::<SliceTwist>(),
            Err(ParseTwistError::Axis(InvalidLayerError::Axis("W".to_owned()))),
        );
        assert!(matches!("X".parse::<SliceTwist>(), Err(ParseTwistError::Layer(_))));
        assert!(matches!("X-1".parse::<SliceTwist>(), Err(ParseTwistError::Layer(_))));
        assert!(matches!("X1''".parse::<SliceTwist>(), Err(ParseTwistError::Layer(_))));
        assert!(matches!("X99999".parse::<SliceTwist>(), Err(ParseTwistError::Layer(_))));
    }

    #[test]
    fn test_turn_direction_from_turns() {
        assert_eq!(TurnDirection::try_from(1), Ok(TurnDirection::Ccw));
        assert_eq!(TurnDirection::try_from(-1), Ok(TurnDirection::Cw));
        assert_eq!(TurnDirection::try_from(2), Err(InvalidLayerError::Turns(2)));
        assert_eq!(TurnDirection::try_from(0), Err(InvalidLayerError::Turns(0)));
    }

    #[test]
    fn test_parse_and_invert_sequence() {
        let twists = parse_twists("Z2 X0' Y1").expect("valid twists");
        assert_eq!(twists.len(), 3);
        let inverse = invert_twists(&twists);
        let inverse_str: Vec<String> = inverse.iter().map(ToString::to_string).collect();
        assert_eq!(inverse_str, ["Y1'", "X0", "Z2'"]);
    }
}
