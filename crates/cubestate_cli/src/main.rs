//! Command-line host for the `cubestate` engine.
//!
//! Builds cubes, applies twists, scrambles, and prints the result as a JSON
//! snapshot or as a text layout of the six faces.

mod cli;
mod render;
mod settings;

fn main() -> eyre::Result<()> {
    use clap::Parser;

    color_eyre::install()?;

    // Initialize logging.
    env_logger::builder().init();

    let args = cli::Args::parse();
    let settings = settings::Settings::load(args.config.as_deref());
    log::debug!("using settings {settings:?}");

    cli::exec(args.subcommand, &settings)
}
