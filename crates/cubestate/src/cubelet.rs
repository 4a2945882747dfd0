//! Cubelets: the unit sub-cubes of the puzzle.

use std::fmt;
use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::{Axis, Direction, FaceColor, PerDirection, Sign};

/// Stable identity of a cubelet.
///
/// IDs are assigned once at construction, in the order of initial position
/// with Z as the most significant coordinate and X the least.
#[derive(
    Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
#[serde(transparent)]
pub struct CubeletId(pub u32);
impl fmt::Display for CubeletId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
impl CubeletId {
    /// Returns the ID as an index into a list of cubelets.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Lattice position of a cubelet. Each coordinate is in the range `0..size`.
#[derive(
    Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
#[serde(transparent)]
pub struct Position(pub [u16; 3]);
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z] = self.0;
        write!(f, "({x}, {y}, {z})")
    }
}
impl Index<Axis> for Position {
    type Output = u16;

    fn index(&self, axis: Axis) -> &u16 {
        &self.0[axis.int()]
    }
}
impl IndexMut<Axis> for Position {
    fn index_mut(&mut self, axis: Axis) -> &mut u16 {
        &mut self.0[axis.int()]
    }
}
impl Position {
    /// Constructs a position from its coordinates.
    pub const fn new(x: u16, y: u16, z: u16) -> Self {
        Self([x, y, z])
    }

    /// Returns the X coordinate.
    pub fn x(self) -> u16 {
        self[Axis::X]
    }
    /// Returns the Y coordinate.
    pub fn y(self) -> u16 {
        self[Axis::Y]
    }
    /// Returns the Z coordinate.
    pub fn z(self) -> u16 {
        self[Axis::Z]
    }

    /// Returns whether every coordinate is in the range `0..size`.
    pub fn is_within(self, size: u16) -> bool {
        self.0.iter().all(|&c| c < size)
    }
    /// Returns whether the position is on the outer layer in `direction`.
    pub fn is_on_boundary(self, direction: Direction, size: u16) -> bool {
        let c = self[direction.axis()];
        match direction.sign() {
            Sign::Pos => c == size - 1,
            Sign::Neg => c == 0,
        }
    }

    /// Returns the position after a quarter turn about the line through the
    /// centers of the slices along `axis`, in a cube of size `size`.
    ///
    /// A positive `sign` is counterclockwise when viewed from the positive end
    /// of `axis`. The coordinate along `axis` is unchanged.
    #[must_use]
    pub fn rotated(self, axis: Axis, sign: Sign, size: u16) -> Self {
        let [u, v] = axis.perpendiculars();
        let max = size - 1;
        let mut ret = self;
        match sign {
            Sign::Pos => {
                ret[u] = max - self[v];
                ret[v] = self[u];
            }
            Sign::Neg => {
                ret[u] = self[v];
                ret[v] = max - self[u];
            }
        }
        ret
    }
}

/// Color (or `None` for no sticker) facing each of the six directions.
pub type Facelets = PerDirection<Option<FaceColor>>;

/// One of the N³ unit sub-cubes of a cube.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cubelet {
    id: CubeletId,
    position: Position,
    facelets: Facelets,
}
impl Cubelet {
    /// Constructs a cubelet with the canonical paint for its position.
    pub(crate) fn new_painted(id: CubeletId, position: Position, size: u16) -> Self {
        let mut facelets = Facelets::default();
        for direction in Direction::iter() {
            if position.is_on_boundary(direction, size) {
                facelets[direction] = Some(FaceColor::home(direction));
            }
        }
        Self {
            id,
            position,
            facelets,
        }
    }
    pub(crate) fn from_parts(id: CubeletId, position: Position, facelets: Facelets) -> Self {
        Self {
            id,
            position,
            facelets,
        }
    }

    /// Returns the cubelet's stable ID.
    pub fn id(&self) -> CubeletId {
        self.id
    }
    /// Returns the cubelet's current position.
    pub fn position(&self) -> Position {
        self.position
    }
    /// Returns the colors facing each direction.
    pub fn facelets(&self) -> &Facelets {
        &self.facelets
    }
    /// Returns the color facing `direction`, if any.
    pub fn color(&self, direction: Direction) -> Option<FaceColor> {
        self.facelets[direction]
    }
    /// Returns the cubelet's colors, in direction order. Interior cubelets
    /// return an empty list and corners return three colors.
    pub fn colors(&self) -> SmallVec<[FaceColor; 3]> {
        self.facelets.0.iter().flatten().copied().collect()
    }
    /// Returns whether the cubelet has no stickers at all.
    pub fn is_interior(&self) -> bool {
        self.facelets.0.iter().all(Option::is_none)
    }

    /// Applies a quarter turn about `axis` to the cubelet's position and
    /// facelets.
    pub(crate) fn rotate(&mut self, axis: Axis, sign: Sign, size: u16) {
        self.position = self.position.rotated(axis, sign, size);
        let mut new_facelets = Facelets::default();
        for (direction, &color) in self.facelets.iter() {
            new_facelets[direction.rotated(axis, sign)] = color;
        }
        self.facelets = new_facelets;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_position_rotation_about_z() {
        let p = Position::new(0, 0, 2);
        assert_eq!(p.rotated(Axis::Z, Sign::Pos, 3), Position::new(2, 0, 2));
        assert_eq!(p.rotated(Axis::Z, Sign::Neg, 3), Position::new(0, 2, 2));
        // The center of an odd slice is a fixed point.
        let center = Position::new(1, 1, 0);
        assert_eq!(center.rotated(Axis::Z, Sign::Pos, 3), center);
    }

    #[test]
    fn test_position_rotation_cycles() {
        for size in 2..=5 {
            for axis in Axis::iter() {
                for x in 0..size {
                    for y in 0..size {
                        for z in 0..size {
                            let p = Position::new(x, y, z);
                            let mut q = p;
                            for _ in 0..4 {
                                q = q.rotated(axis, Sign::Pos, size);
                                assert!(q.is_within(size));
                                assert_eq!(q[axis], p[axis]);
                            }
                            assert_eq!(q, p);
                            let there = p.rotated(axis, Sign::Pos, size);
                            assert_eq!(there.rotated(axis, Sign::Neg, size), p);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_corner_paint() {
        let cubelet = Cubelet::new_painted(CubeletId(0), Position::new(0, 0, 0), 3);
        assert_eq!(cubelet.color(Direction::Left), Some(FaceColor::Red));
        assert_eq!(cubelet.color(Direction::Back), Some(FaceColor::Green));
        assert_eq!(cubelet.color(Direction::Bottom), Some(FaceColor::White));
        assert_eq!(cubelet.colors().len(), 3);

        let core = Cubelet::new_painted(CubeletId(13), Position::new(1, 1, 1), 3);
        assert!(core.is_interior());
    }
}
