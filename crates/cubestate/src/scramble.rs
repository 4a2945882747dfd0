use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::{Axis, CubeState, InvalidSizeError, SliceTwist, TurnDirection};

/// Parameters to deterministically generate a twist sequence to scramble a
/// cube.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScrambleParams {
    /// Random seed. The same seed always produces the same scramble for a
    /// given cube size and length.
    pub seed: String,
    /// Number of twists to apply.
    pub length: u32,
}
impl ScrambleParams {
    /// Generates new scramble parameters with a random seed.
    pub fn new(length: u32) -> Self {
        let seed = rand::rng().random::<u64>().to_string();
        Self { seed, length }
    }
    /// Constructs scramble parameters with a specific seed.
    pub fn with_seed(seed: impl Into<String>, length: u32) -> Self {
        Self {
            seed: seed.into(),
            length,
        }
    }

    fn rng(&self) -> rand_chacha::ChaCha12Rng {
        let mut sha256 = Sha256::new();
        sha256.update(self.seed.len().to_le_bytes());
        sha256.update(self.seed.as_bytes());
        rand_chacha::ChaCha12Rng::from_seed(sha256.finalize().into())
    }
}

/// Output of scrambling a cube.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ScrambledCube {
    /// Parameters used to generate the scramble.
    pub params: ScrambleParams,
    /// Scramble twists applied.
    pub twists: Vec<SliceTwist>,
    /// State of the cube after scrambling.
    pub state: CubeState,
}

impl CubeState {
    /// Constructs a new scrambled cube.
    pub fn new_scrambled(
        size: i32,
        params: ScrambleParams,
    ) -> Result<ScrambledCube, InvalidSizeError> {
        let mut state = Self::new(size)?;
        let twists = state.scramble(&params);
        Ok(ScrambledCube {
            params,
            twists,
            state,
        })
    }

    /// Applies a random sequence of twists and returns it.
    ///
    /// No twist immediately undoes the one before it.
    pub fn scramble(&mut self, params: &ScrambleParams) -> Vec<SliceTwist> {
        const AXES: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];
        const DIRECTIONS: [TurnDirection; 2] = [TurnDirection::Ccw, TurnDirection::Cw];

        let mut rng = params.rng();
        let size = self.size();
        let mut twists: Vec<SliceTwist> = Vec::with_capacity(params.length as usize);
        while twists.len() < params.length as usize {
            let (Some(&axis), Some(&direction)) =
                (AXES.choose(&mut rng), DIRECTIONS.choose(&mut rng))
            else {
                break;
            };
            let twist = SliceTwist::new(axis, rng.random_range(0..size), direction);
            if twists.last().is_some_and(|&prev| prev == twist.rev()) {
                continue;
            }
            twists.push(twist);
        }

        log::debug!(
            "scrambling {size}x{size}x{size} cube with {} twists from seed {:?}",
            twists.len(),
            params.seed,
        );

        // Every layer was drawn from `0..size`.
        for &twist in &twists {
            self.rotate_slice_unchecked(twist.axis, twist.layer, twist.direction);
        }
        twists
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::invert_twists;

    #[test]
    fn test_scramble_is_deterministic() {
        let params = ScrambleParams::with_seed("hello", 40);
        let a = CubeState::new_scrambled(4, params.clone()).expect("valid size");
        let b = CubeState::new_scrambled(4, params).expect("valid size");
        assert_eq!(a, b);
        assert_eq!(a.twists.len(), 40);
    }

    #[test]
    fn test_scramble_depends_on_seed() {
        let scramble =
            |seed: &str| CubeState::new_scrambled(3, ScrambleParams::with_seed(seed, 30));
        let a = scramble("a").expect("valid size");
        let b = scramble("b").expect("valid size");
        assert_ne!(a.twists, b.twists);
    }

    #[test]
    fn test_scramble_never_undoes_previous_twist() {
        let params = ScrambleParams::with_seed("pairs", 200);
        let scrambled = CubeState::new_scrambled(2, params).expect("valid size");
        for pair in scrambled.twists.windows(2) {
            assert_ne!(pair[0].rev(), pair[1]);
        }
    }

    #[test]
    fn test_scramble_then_invert_is_solved() {
        let params = ScrambleParams::with_seed("undo", 60);
        let mut scrambled = CubeState::new_scrambled(5, params).expect("valid size");
        assert!(!scrambled.state.is_solved());
        let inverse = invert_twists(&scrambled.twists);
        scrambled.state.apply_twists(&inverse).expect("valid twists");
        assert_eq!(scrambled.state, CubeState::new(5).expect("valid size"));
    }

    #[test]
    fn test_empty_scramble() {
        let params = ScrambleParams::with_seed("none", 0);
        let scrambled = CubeState::new_scrambled(3, params).expect("valid size");
        assert!(scrambled.twists.is_empty());
        assert!(scrambled.state.is_solved());
    }
}
