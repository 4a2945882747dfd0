//! Axes and directions in the cube's coordinate frame.
//!
//! Z is up and Y is forward. The frame is right-handed, so the cross product
//! X × Y = Z.

use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{EnumCount, EnumIter, IntoEnumIterator};

use crate::{InvalidLayerError, Sign};

/// 3-dimensional axis.
#[derive(
    Serialize, Deserialize, EnumIter, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
pub enum Axis {
    /// X axis (right).
    X = 0,
    /// Y axis (forward).
    Y = 1,
    /// Z axis (up).
    Z = 2,
}
impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
impl FromStr for Axis {
    type Err = InvalidLayerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "X" | "x" => Ok(Axis::X),
            "Y" | "y" => Ok(Axis::Y),
            "Z" | "z" => Ok(Axis::Z),
            other => Err(InvalidLayerError::Axis(other.to_owned())),
        }
    }
}
impl Axis {
    /// Returns an integer index for this axis; X = 0, Y = 1, Z = 2.
    pub fn int(self) -> usize {
        self as usize
    }
    /// Returns the uppercase symbol for this axis.
    pub fn symbol(self) -> char {
        match self {
            Axis::X => 'X',
            Axis::Y => 'Y',
            Axis::Z => 'Z',
        }
    }

    /// Returns the perpendicular axes from this one, using the right-hand
    /// rule. (The cross product of the returned axes is the input.)
    ///
    /// A positive quarter turn about this axis takes the first returned axis
    /// to the second.
    pub fn perpendiculars(self) -> [Axis; 2] {
        use Axis::*;
        match self {
            X => [Y, Z], // X+ => rotate from Y+ to Z+.
            Y => [Z, X], // Y+ => rotate from Z+ to X+.
            Z => [X, Y], // Z+ => rotate from X+ to Y+.
        }
    }

    /// Returns an iterator over all axes.
    pub fn iter() -> impl Iterator<Item = Axis> {
        <Self as IntoEnumIterator>::iter()
    }
}

/// One of the six global face directions.
#[derive(
    Serialize,
    Deserialize,
    EnumIter,
    EnumCount,
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Direction {
    /// +X
    Right = 0,
    /// -X
    Left = 1,
    /// +Y
    Forward = 2,
    /// -Y
    Back = 3,
    /// +Z
    Top = 4,
    /// -Z
    Bottom = 5,
}
impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
impl Direction {
    /// Returns the direction along `axis` with sign `sign`.
    pub fn new(axis: Axis, sign: Sign) -> Self {
        use Direction::*;

        match (axis, sign) {
            (Axis::X, Sign::Pos) => Right,
            (Axis::X, Sign::Neg) => Left,
            (Axis::Y, Sign::Pos) => Forward,
            (Axis::Y, Sign::Neg) => Back,
            (Axis::Z, Sign::Pos) => Top,
            (Axis::Z, Sign::Neg) => Bottom,
        }
    }

    /// Returns the axis this direction points along.
    pub fn axis(self) -> Axis {
        use Direction::*;

        match self {
            Right | Left => Axis::X,
            Forward | Back => Axis::Y,
            Top | Bottom => Axis::Z,
        }
    }
    /// Returns whether this direction points toward the positive or negative
    /// end of its axis.
    pub fn sign(self) -> Sign {
        use Direction::*;

        match self {
            Right | Forward | Top => Sign::Pos,
            Left | Back | Bottom => Sign::Neg,
        }
    }
    /// Returns the direction pointing the other way along the same axis.
    #[must_use]
    pub fn opposite(self) -> Self {
        Self::new(self.axis(), -self.sign())
    }

    /// Returns a human-friendly lowercase name.
    pub fn name(self) -> &'static str {
        use Direction::*;

        match self {
            Right => "right",
            Left => "left",
            Forward => "forward",
            Back => "back",
            Top => "top",
            Bottom => "bottom",
        }
    }

    /// Returns the direction after a quarter turn about `axis`. A positive
    /// `sign` is counterclockwise when viewed from the positive end of `axis`.
    ///
    /// Directions along `axis` are unchanged.
    #[must_use]
    pub fn rotated(self, axis: Axis, sign: Sign) -> Self {
        let [u, v] = axis.perpendiculars();
        if self.axis() == u {
            Self::new(v, self.sign() * sign)
        } else if self.axis() == v {
            Self::new(u, -self.sign() * sign)
        } else {
            self
        }
    }

    /// Returns an iterator over all six directions.
    pub fn iter() -> impl Iterator<Item = Direction> {
        <Self as IntoEnumIterator>::iter()
    }
}

/// Value for each of the six directions.
#[derive(Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct PerDirection<T>(pub [T; Direction::COUNT]);
impl<T> Index<Direction> for PerDirection<T> {
    type Output = T;

    fn index(&self, direction: Direction) -> &Self::Output {
        &self.0[direction as usize]
    }
}
impl<T> IndexMut<Direction> for PerDirection<T> {
    fn index_mut(&mut self, direction: Direction) -> &mut Self::Output {
        &mut self.0[direction as usize]
    }
}
impl<T> PerDirection<T> {
    /// Returns an iterator over each direction and its value.
    pub fn iter(&self) -> impl Iterator<Item = (Direction, &T)> {
        Direction::iter().zip(&self.0)
    }
}
impl PerDirection<Direction> {
    /// Returns the 24 rotations of the whole cube, each as the direction that
    /// every direction is sent to. Reflections are excluded.
    pub(crate) fn rotations() -> Vec<Self> {
        let mut identity = PerDirection([Direction::Right; Direction::COUNT]);
        for direction in Direction::iter() {
            identity[direction] = direction;
        }

        // Close the set under quarter turns about each axis.
        let mut rotations = vec![identity];
        let mut i = 0;
        while let Some(&current) = rotations.get(i) {
            for axis in Axis::iter() {
                let mut next = current;
                for direction in Direction::iter() {
                    next[direction] = current[direction].rotated(axis, Sign::Pos);
                }
                if !rotations.contains(&next) {
                    rotations.push(next);
                }
            }
            i += 1;
        }
        rotations
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_perpendiculars_are_right_handed() {
        for axis in Axis::iter() {
            let [u, v] = axis.perpendiculars();
            assert_ne!(u, axis);
            assert_ne!(v, axis);
            assert_ne!(u, v);
            // Cyclic order X -> Y -> Z -> X.
            assert_eq!((axis.int() + 1) % 3, u.int());
            assert_eq!((axis.int() + 2) % 3, v.int());
        }
    }

    #[test]
    fn test_direction_rotation_about_z() {
        use Direction::*;

        let turn = |d: Direction| d.rotated(Axis::Z, Sign::Pos);
        assert_eq!(turn(Right), Forward);
        assert_eq!(turn(Forward), Left);
        assert_eq!(turn(Left), Back);
        assert_eq!(turn(Back), Right);
        assert_eq!(turn(Top), Top);
        assert_eq!(turn(Bottom), Bottom);
    }

    #[test]
    fn test_direction_rotation_inverse() {
        for axis in Axis::iter() {
            for d in Direction::iter() {
                assert_eq!(d, d.rotated(axis, Sign::Pos).rotated(axis, Sign::Neg));
                let mut quad = d;
                for _ in 0..4 {
                    quad = quad.rotated(axis, Sign::Pos);
                }
                assert_eq!(d, quad);
            }
        }
    }

    #[test]
    fn test_axis_parse() {
        assert_eq!("x".parse::<Axis>(), Ok(Axis::X));
        assert_eq!("Z".parse::<Axis>(), Ok(Axis::Z));
        assert_eq!(
            "W".parse::<Axis>(),
            Err(InvalidLayerError::Axis("W".to_owned())),
        );
    }

    #[test]
    fn test_direction_axis_sign_round_trip() {
        for d in Direction::iter() {
            assert_eq!(d, Direction::new(d.axis(), d.sign()));
            assert_eq!(d.opposite().axis(), d.axis());
            assert_ne!(d.opposite(), d);
        }
    }

    #[test]
    fn test_rotations_of_whole_cube() {
        let rotations = PerDirection::rotations();
        assert_eq!(rotations.len(), 24);
        for rotation in &rotations {
            // Opposite directions stay opposite.
            for direction in Direction::iter() {
                assert_eq!(rotation[direction.opposite()], rotation[direction].opposite());
            }
        }
        // Mirroring X is not a rotation.
        let mut mirror = rotations[0];
        mirror[Direction::Right] = Direction::Left;
        mirror[Direction::Left] = Direction::Right;
        assert!(!rotations.contains(&mirror));
    }
}
