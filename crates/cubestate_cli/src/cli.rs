use std::io::{IsTerminal, Read};
use std::path::PathBuf;

use cubestate::{CubeState, FaceColor, ScrambleParams, SliceTwist};
use eyre::{Context, Result};
use itertools::Itertools;
use serde::Serialize;

use crate::render;
use crate::settings::Settings;

/// Rubik's cube state engine
///
/// Cubes are read and written as JSON snapshots. Twists are written as an
/// axis, a layer, and an optional `'` for clockwise, such as `Z2` or `x0'`.
#[derive(Debug, clap::Parser)]
#[command(version)]
pub(crate) struct Args {
    /// Settings file (YAML). Defaults to `cubestate.yaml`, if it exists.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub subcommand: Subcommand,
}

/// Where to get the starting cube.
#[derive(clap::Args, Debug)]
pub(crate) struct CubeSource {
    /// Size of a new solved cube.
    #[arg(short, long, conflicts_with = "from")]
    size: Option<i32>,
    /// Snapshot to start from, use '-' for stdin.
    #[arg(short, long, value_parser)]
    from: Option<clio::Input>,
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum Subcommand {
    /// Print a solved cube as JSON.
    New {
        /// Number of layers along each axis.
        #[arg(short, long)]
        size: Option<i32>,
    },
    /// Apply twists to a cube and print the result as JSON.
    Twist {
        #[command(flatten)]
        cube: CubeSource,
        /// Twists to apply, such as `Z2 X0'`.
        twists: Vec<String>,
    },
    /// Scramble a new cube and print the twists and the result as JSON.
    Scramble {
        /// Number of layers along each axis.
        #[arg(short, long)]
        size: Option<i32>,
        /// Random seed. A random one is chosen if omitted.
        #[arg(long)]
        seed: Option<String>,
        /// Number of twists.
        #[arg(short, long)]
        length: Option<u32>,
    },
    /// Apply twists to a cube and print its faces.
    Show {
        #[command(flatten)]
        cube: CubeSource,
        /// Twists to apply, such as `Z2 X0'`.
        twists: Vec<String>,
    },
}

pub(crate) fn exec(subcommand: Subcommand, settings: &Settings) -> Result<()> {
    match subcommand {
        Subcommand::New { size } => {
            let cube = new_cube(size.unwrap_or(settings.size))?;
            write_json_output(&cube)
        }

        Subcommand::Twist { cube, twists } => {
            let cube = load_twisted_cube(cube, &twists, settings)?;
            write_json_output(&cube)
        }

        Subcommand::Scramble { size, seed, length } => {
            let length = length.unwrap_or(settings.scramble_length);
            let params = match seed {
                Some(seed) => ScrambleParams::with_seed(seed, length),
                None => ScrambleParams::new(length),
            };
            let size = size.unwrap_or(settings.size);
            let scrambled = CubeState::new_scrambled(size, params)
                .wrap_err_with(|| format!("error constructing cube of size {size}"))?;
            write_json_output(&scrambled)
        }

        Subcommand::Show { cube, twists } => {
            let cube = load_twisted_cube(cube, &twists, settings)?;
            let color = settings.color_output && std::io::stdout().is_terminal();
            let palette = |c: FaceColor| settings.rgb(c);
            let palette = color.then_some(&palette as render::Palette<'_>);
            print!("{}", render::render_faces(&cube, palette));
            Ok(())
        }
    }
}

fn new_cube(size: i32) -> Result<CubeState> {
    CubeState::new(size).wrap_err_with(|| format!("error constructing cube of size {size}"))
}

fn load_twisted_cube(
    source: CubeSource,
    twists: &[String],
    settings: &Settings,
) -> Result<CubeState> {
    let twists: Vec<SliceTwist> = cubestate::parse_twists(&twists.iter().join(" "))
        .wrap_err("error parsing twists")?;

    let mut cube = match source.from {
        Some(mut input) => {
            let mut buffer = String::new();
            input
                .read_to_string(&mut buffer)
                .wrap_err("error reading snapshot")?;
            serde_json::from_str::<CubeState>(&buffer).wrap_err("error deserializing snapshot")?
        }
        None => new_cube(source.size.unwrap_or(settings.size))?,
    };

    cube.apply_twists(&twists).wrap_err("error applying twists")?;
    log::info!("applied {} twists", twists.len());
    Ok(cube)
}

fn write_json_output<T: Serialize>(value: &T) -> Result<()> {
    serde_json::to_writer_pretty(std::io::stdout(), value)
        .wrap_err("error serializing data and writing to stdout")?;
    println!();
    Ok(())
}
