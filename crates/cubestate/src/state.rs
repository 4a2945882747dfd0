//! Logical state of an N×N×N cube.

use std::ops::Index;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{
    Axis, CubeError, Cubelet, CubeletId, Direction, FaceColor, InvalidLayerError,
    InvalidSizeError, MAX_SIZE, MIN_SIZE, Position, Sign, SliceTwist, TurnDirection,
    snapshot::CubeSnapshot,
};

/// State of an N×N×N Rubik's cube: the position and facelet orientation of
/// every cubelet.
///
/// The only mutation is a quarter turn of one slice. Every other method is a
/// pure read.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(into = "CubeSnapshot", try_from = "CubeSnapshot")]
pub struct CubeState {
    size: u16,
    /// Cubelets, indexed by ID.
    cubelets: Box<[Cubelet]>,
    /// Cubelet at each position, indexed by `x + N * (y + N * z)`.
    grid: Box<[CubeletId]>,
}
impl Index<CubeletId> for CubeState {
    type Output = Cubelet;

    fn index(&self, id: CubeletId) -> &Self::Output {
        &self.cubelets[id.index()]
    }
}
impl CubeState {
    /// Constructs a solved cube with `size` layers along each axis.
    pub fn new(size: i32) -> Result<Self, InvalidSizeError> {
        let size = validate_size(size)?;

        let cubelets = (0..size)
            .cartesian_product(0..size)
            .cartesian_product(0..size)
            .enumerate()
            .map(|(i, ((z, y), x))| {
                Cubelet::new_painted(CubeletId(i as u32), Position::new(x, y, z), size)
            })
            .collect_vec();
        let grid = cubelets.iter().map(|cubelet| cubelet.id()).collect();

        log::debug!("constructed {size}x{size}x{size} cube");

        Ok(Self {
            size,
            cubelets: cubelets.into_boxed_slice(),
            grid,
        })
    }

    /// Constructs a cube from cubelets that have already been validated.
    ///
    /// `cubelets` must be sorted by ID and their positions must be a
    /// bijection onto the lattice.
    pub(crate) fn from_validated_cubelets(size: u16, cubelets: Vec<Cubelet>) -> Self {
        let mut grid = vec![CubeletId::default(); cubelets.len()].into_boxed_slice();
        for cubelet in &cubelets {
            grid[grid_index(size, cubelet.position())] = cubelet.id();
        }
        Self {
            size,
            cubelets: cubelets.into_boxed_slice(),
            grid,
        }
    }

    /// Returns the number of layers along each axis.
    pub fn size(&self) -> u16 {
        self.size
    }
    /// Returns the number of cubelets, which is always `size³`.
    pub fn cubelet_count(&self) -> usize {
        self.cubelets.len()
    }
    /// Returns the cubelet with the given ID, or `None` if there is none.
    pub fn cubelet(&self, id: CubeletId) -> Option<&Cubelet> {
        self.cubelets.get(id.index())
    }
    /// Returns an iterator over all cubelets in order of ID.
    pub fn cubelets(&self) -> impl Iterator<Item = &Cubelet> {
        self.cubelets.iter()
    }
    /// Returns the current position of a cubelet.
    pub fn position_of(&self, id: CubeletId) -> Option<Position> {
        self.cubelet(id).map(Cubelet::position)
    }

    /// Returns the cubelet at a lattice position, or `None` if the position
    /// is outside the cube.
    pub fn cubelet_at(&self, x: u16, y: u16, z: u16) -> Option<CubeletId> {
        self.cubelet_at_pos(Position::new(x, y, z))
    }
    /// Returns the cubelet at a lattice position, or `None` if the position
    /// is outside the cube.
    pub fn cubelet_at_pos(&self, pos: Position) -> Option<CubeletId> {
        pos.is_within(self.size)
            .then(|| self.grid[grid_index(self.size, pos)])
    }

    /// Returns the color that a cubelet shows in `direction`, or `None` if it
    /// has no sticker facing that way (or if there is no such cubelet).
    pub fn facelet_color(&self, id: CubeletId, direction: Direction) -> Option<FaceColor> {
        self.cubelet(id)?.color(direction)
    }

    /// Returns the N² cubelets whose coordinate along `axis` is `layer`.
    ///
    /// The order is ascending by the two other coordinates, taken in the
    /// order of [`Axis::perpendiculars()`] with the second one most
    /// significant.
    pub fn slice_members(
        &self,
        axis: Axis,
        layer: i32,
    ) -> Result<Vec<CubeletId>, InvalidLayerError> {
        let layer = self.validate_layer(layer)?;
        Ok(self.slice_members_unchecked(axis, layer))
    }
    fn slice_members_unchecked(&self, axis: Axis, layer: u16) -> Vec<CubeletId> {
        let [u, v] = axis.perpendiculars();
        let mut pos = Position::default();
        pos[axis] = layer;
        (0..self.size)
            .cartesian_product(0..self.size)
            .map(|(v_coord, u_coord)| {
                pos[u] = u_coord;
                pos[v] = v_coord;
                self.grid[grid_index(self.size, pos)]
            })
            .collect()
    }

    /// Rotates the slice along `axis` at `layer` by a quarter turn.
    ///
    /// `turns = +1` turns the slice counterclockwise as seen from the positive
    /// end of `axis` looking toward the origin; `turns = -1` turns it
    /// clockwise. Any other value is rejected. On error, the cube is left
    /// unchanged.
    pub fn rotate_slice(
        &mut self,
        axis: Axis,
        layer: i32,
        turns: i32,
    ) -> Result<(), InvalidLayerError> {
        let direction = TurnDirection::try_from(turns)?;
        let layer = self.validate_layer(layer)?;
        self.rotate_slice_unchecked(axis, layer, direction);
        Ok(())
    }

    /// Applies a single twist. On error, the cube is left unchanged.
    pub fn twist(&mut self, twist: SliceTwist) -> Result<(), InvalidLayerError> {
        self.validate_twist(twist)?;
        self.rotate_slice_unchecked(twist.axis, twist.layer, twist.direction);
        Ok(())
    }

    /// Applies a sequence of twists in order.
    ///
    /// Every twist is validated before any is applied, so on error the cube is
    /// left unchanged.
    pub fn apply_twists(&mut self, twists: &[SliceTwist]) -> Result<(), InvalidLayerError> {
        for &twist in twists {
            self.validate_twist(twist)?;
        }
        for &twist in twists {
            self.rotate_slice_unchecked(twist.axis, twist.layer, twist.direction);
        }
        Ok(())
    }

    /// Rotates whichever slice along `axis` currently contains the cubelet
    /// `id`, and returns the twist that was applied.
    pub fn rotate_slice_through(
        &mut self,
        id: CubeletId,
        axis: Axis,
        turns: i32,
    ) -> Result<SliceTwist, CubeError> {
        let direction = TurnDirection::try_from(turns)?;
        let position = self.position_of(id).ok_or(CubeError::UnknownCubelet(id))?;
        let twist = SliceTwist::new(axis, position[axis], direction);
        self.rotate_slice_unchecked(twist.axis, twist.layer, twist.direction);
        Ok(twist)
    }

    /// Rotates a slice without checking that `layer` is in range.
    pub(crate) fn rotate_slice_unchecked(
        &mut self,
        axis: Axis,
        layer: u16,
        direction: TurnDirection,
    ) {
        let size = self.size;
        let sign: Sign = direction.into();
        let members = self.slice_members_unchecked(axis, layer);
        for &id in &members {
            self.cubelets[id.index()].rotate(axis, sign, size);
        }
        for &id in &members {
            let new_position = self.cubelets[id.index()].position();
            self.grid[grid_index(size, new_position)] = id;
        }
        log::trace!(
            "rotated {} cubelets in slice {}",
            members.len(),
            SliceTwist::new(axis, layer, direction),
        );
    }

    /// Returns the colors on the outer face in `direction`, as seen from
    /// outside the cube.
    ///
    /// Rows go from top to bottom and columns from left to right, where "up"
    /// on each face is the second axis of [`Axis::perpendiculars()`]. On the
    /// top face, for example, the first row is the forward edge.
    pub fn face_grid(&self, direction: Direction) -> Vec<Vec<Option<FaceColor>>> {
        let axis = direction.axis();
        let [u, v] = axis.perpendiculars();
        let max = self.size - 1;
        let mut pos = Position::default();
        pos[axis] = match direction.sign() {
            Sign::Pos => max,
            Sign::Neg => 0,
        };
        (0..self.size)
            .map(|row| {
                pos[v] = max - row;
                (0..self.size)
                    .map(|col| {
                        pos[u] = match direction.sign() {
                            Sign::Pos => col,
                            Sign::Neg => max - col,
                        };
                        self[self.grid[grid_index(self.size, pos)]].color(direction)
                    })
                    .collect()
            })
            .collect()
    }

    /// Returns whether every outer face shows a single color.
    pub fn is_solved(&self) -> bool {
        Direction::iter().all(|direction| {
            let grid = self.face_grid(direction);
            let first = grid[0][0];
            first.is_some() && grid.iter().flatten().all(|&color| color == first)
        })
    }

    fn validate_layer(&self, layer: i32) -> Result<u16, InvalidLayerError> {
        u16::try_from(layer)
            .ok()
            .filter(|&l| l < self.size)
            .ok_or(InvalidLayerError::OutOfRange {
                layer,
                size: self.size,
            })
    }
    fn validate_twist(&self, twist: SliceTwist) -> Result<(), InvalidLayerError> {
        if twist.layer < self.size {
            Ok(())
        } else {
            Err(InvalidLayerError::OutOfRange {
                layer: twist.layer.into(),
                size: self.size,
            })
        }
    }
}

/// Checks that a requested cube size is supported.
pub(crate) fn validate_size(size: i32) -> Result<u16, InvalidSizeError> {
    u16::try_from(size)
        .ok()
        .filter(|s| (MIN_SIZE..=MAX_SIZE).contains(s))
        .ok_or(InvalidSizeError { size })
}

fn grid_index(size: u16, pos: Position) -> usize {
    let n = size as usize;
    let [x, y, z] = pos.0.map(usize::from);
    x + n * (y + n * z)
}
