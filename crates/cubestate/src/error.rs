use thiserror::Error;

use crate::{MAX_SIZE, MIN_SIZE};

/// Error produced when constructing a cube with an unsupported size.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[error(
    "invalid cube size {size}; size must be between {min} and {max}",
    min = MIN_SIZE,
    max = MAX_SIZE
)]
pub struct InvalidSizeError {
    /// Requested size.
    pub size: i32,
}

/// Error produced when a slice rotation or slice query is malformed.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum InvalidLayerError {
    /// Layer index out of range
    #[error("layer {layer} is out of range for a cube of size {size}")]
    OutOfRange {
        /// Requested layer index.
        layer: i32,
        /// Size of the cube.
        size: u16,
    },
    /// Turn count other than +1 or -1
    #[error("invalid turn count {0}; only single quarter turns (+1 or -1) are supported")]
    Turns(i32),
    /// Unknown axis name
    #[error("invalid axis {0:?}; expected X, Y, or Z")]
    Axis(String),
}

/// Error produced by a cube operation.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum CubeError {
    /// Invalid size
    #[error(transparent)]
    InvalidSize(#[from] InvalidSizeError),
    /// Invalid layer, axis, or turn count
    #[error(transparent)]
    InvalidLayer(#[from] InvalidLayerError),
    /// Cubelet ID out of range
    #[error("no cubelet with ID {0}")]
    UnknownCubelet(crate::CubeletId),
}

/// Error produced when parsing twist notation.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParseTwistError {
    /// Empty twist
    #[error("empty twist")]
    Empty,
    /// Unknown axis
    #[error(transparent)]
    Axis(#[from] InvalidLayerError),
    /// Missing or malformed layer number
    #[error("bad layer number in twist {0:?}")]
    Layer(String),
}

/// Error produced when restoring a cube from a snapshot.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SnapshotError {
    /// Invalid size
    #[error(transparent)]
    InvalidSize(#[from] InvalidSizeError),
    /// Wrong number of cubelets
    #[error("expected {expected} cubelets, got {actual}")]
    CubeletCount {
        /// Number of cubelets for the snapshot's size.
        expected: usize,
        /// Number of cubelets in the snapshot.
        actual: usize,
    },
    /// Cubelet ID out of range or repeated
    #[error("cubelet ID {0} is out of range or appears more than once")]
    BadId(u32),
    /// Position out of range
    #[error("cubelet {id} has position {position:?} outside the cube")]
    PositionOutOfRange {
        /// Cubelet ID.
        id: u32,
        /// Position from the snapshot.
        position: [u16; 3],
    },
    /// Two cubelets at the same position
    #[error("cubelets {0} and {1} occupy the same position")]
    PositionCollision(u32, u32),
    /// Colored facelet facing into the cube
    #[error("cubelet {id} has a colored facelet facing {direction} into the cube")]
    HiddenFacelet {
        /// Cubelet ID.
        id: u32,
        /// Direction of the facelet.
        direction: crate::Direction,
    },
    /// Colors that are not a rotation of the cubelet's original paint
    #[error("cubelet {id} does not show the colors it was painted with")]
    Repainted {
        /// Cubelet ID.
        id: u32,
    },
}
