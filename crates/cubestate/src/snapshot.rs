//! Serializable snapshots of a cube's state.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::state::validate_size;
use crate::{
    CubeState, Cubelet, CubeletId, Direction, FaceColor, Facelets, PerDirection, Position,
    SnapshotError,
};

/// Plain-data snapshot of a [`CubeState`]: every cubelet's ID, position, and
/// colored facelets.
///
/// Restoring a snapshot with [`CubeState::try_from()`] checks that it
/// describes a valid cube.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct CubeSnapshot {
    /// Number of layers along each axis.
    pub size: u16,
    /// Every cubelet, in order of ID.
    pub cubelets: Vec<CubeletSnapshot>,
}

/// Snapshot of a single cubelet.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct CubeletSnapshot {
    /// Stable ID.
    pub id: CubeletId,
    /// Lattice position.
    pub position: Position,
    /// Color facing each direction that has a sticker.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub facelets: BTreeMap<Direction, FaceColor>,
}

impl From<&Cubelet> for CubeletSnapshot {
    fn from(cubelet: &Cubelet) -> Self {
        Self {
            id: cubelet.id(),
            position: cubelet.position(),
            facelets: cubelet
                .facelets()
                .iter()
                .filter_map(|(direction, color)| Some((direction, (*color)?)))
                .collect(),
        }
    }
}

impl From<&CubeState> for CubeSnapshot {
    fn from(cube: &CubeState) -> Self {
        Self {
            size: cube.size(),
            cubelets: cube.cubelets().map(CubeletSnapshot::from).collect(),
        }
    }
}
impl From<CubeState> for CubeSnapshot {
    fn from(cube: CubeState) -> Self {
        Self::from(&cube)
    }
}

impl TryFrom<CubeSnapshot> for CubeState {
    type Error = SnapshotError;

    fn try_from(snapshot: CubeSnapshot) -> Result<Self, Self::Error> {
        restore(snapshot).inspect_err(|e| log::warn!("rejected cube snapshot: {e}"))
    }
}

impl CubeState {
    /// Returns a plain-data snapshot of the cube.
    pub fn snapshot(&self) -> CubeSnapshot {
        CubeSnapshot::from(self)
    }
}

fn restore(snapshot: CubeSnapshot) -> Result<CubeState, SnapshotError> {
    let size = validate_size(snapshot.size.into())?;
    let expected = usize::from(size).pow(3);
    if snapshot.cubelets.len() != expected {
        return Err(SnapshotError::CubeletCount {
            expected,
            actual: snapshot.cubelets.len(),
        });
    }

    let n = usize::from(size);
    let rotations = PerDirection::rotations();
    let mut by_id: Vec<Option<Cubelet>> = vec![None; expected];
    let mut occupant: Vec<Option<u32>> = vec![None; expected];

    for CubeletSnapshot {
        id,
        position,
        facelets,
    } in snapshot.cubelets
    {
        let slot = by_id
            .get_mut(id.index())
            .filter(|slot| slot.is_none())
            .ok_or(SnapshotError::BadId(id.0))?;

        if !position.is_within(size) {
            return Err(SnapshotError::PositionOutOfRange {
                id: id.0,
                position: position.0,
            });
        }
        let [x, y, z] = position.0.map(usize::from);
        let cell = &mut occupant[x + n * (y + n * z)];
        if let Some(other) = *cell {
            return Err(SnapshotError::PositionCollision(other, id.0));
        }
        *cell = Some(id.0);

        let mut cubelet_facelets = Facelets::default();
        for (direction, color) in facelets {
            if !position.is_on_boundary(direction, size) {
                return Err(SnapshotError::HiddenFacelet {
                    id: id.0,
                    direction,
                });
            }
            cubelet_facelets[direction] = Some(color);
        }

        let home = Cubelet::new_painted(id, home_position(id, size), size);
        let is_reoriented = rotations.iter().any(|rotation| {
            Direction::iter().all(|d| cubelet_facelets[rotation[d]] == home.color(d))
        });
        if !is_reoriented {
            return Err(SnapshotError::Repainted { id: id.0 });
        }

        *slot = Some(Cubelet::from_parts(id, position, cubelet_facelets));
    }

    // Every slot is filled: there are exactly `expected` distinct IDs below
    // `expected`.
    let cubelets = by_id.into_iter().flatten().collect();
    Ok(CubeState::from_validated_cubelets(size, cubelets))
}

/// Returns the position where the cubelet `id` starts out in a solved cube.
fn home_position(id: CubeletId, size: u16) -> Position {
    let n = u32::from(size);
    // IDs are below `size³`, so each coordinate fits.
    let coord = |c: u32| c as u16;
    Position::new(coord(id.0 % n), coord(id.0 / n % n), coord(id.0 / (n * n)))
}
