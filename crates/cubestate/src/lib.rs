//! Logical state engine for N×N×N Rubik's cubes.
//!
//! A [`CubeState`] tracks the lattice position of each of its N³ cubelets and
//! the color each cubelet shows in each of the six global directions. The
//! only mutation is a quarter turn of one slice ([`CubeState::rotate_slice()`]).
//! Presentation (meshes, materials, animation) is left to the caller, which
//! can read positions and colors back after each rotation.
//!
//! # Coordinates
//!
//! Positions are integer lattice points `(x, y, z)` with each coordinate in
//! `0..N`. Z is up, Y is forward, and X is right. A turn with `turns = +1` is
//! counterclockwise when viewed from the positive end of its axis looking
//! toward the origin.
//!
//! ```
//! use cubestate::{Axis, CubeState, Direction, FaceColor};
//!
//! let mut cube = CubeState::new(3)?;
//! let corner = cube.cubelet_at(0, 0, 2).expect("in range");
//! cube.rotate_slice(Axis::Z, 2, 1)?;
//! assert_eq!(cube.cubelet_at(2, 0, 2), Some(corner));
//! assert_eq!(cube.facelet_color(corner, Direction::Back), Some(FaceColor::Red));
//! # Ok::<(), cubestate::CubeError>(())
//! ```

mod axis;
mod color;
mod cubelet;
mod error;
mod scramble;
mod sign;
mod snapshot;
mod state;
mod twist;


pub use axis::{Axis, Direction, PerDirection};
pub use color::{FaceColor, Rgb};
pub use cubelet::{Cubelet, CubeletId, Facelets, Position};
pub use error::{CubeError, InvalidLayerError, InvalidSizeError, ParseTwistError, SnapshotError};
pub use scramble::{ScrambleParams, ScrambledCube};
pub use sign::Sign;
pub use snapshot::{CubeSnapshot, CubeletSnapshot};
pub use state::CubeState;
pub use twist::{SliceTwist, TurnDirection, invert_twists, parse_twists};

/// Smallest supported cube size.
pub const MIN_SIZE: u16 = 2;
/// Largest supported cube size.
pub const MAX_SIZE: u16 = 64;
/// Size of a standard Rubik's cube.
pub const DEFAULT_SIZE: u16 = 3;
