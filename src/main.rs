//! Windowed demo: move the cube with the number keys, `NumpadEnter` and
//! `Space`.
use std::path::PathBuf;

use anyhow::Context;
use bevy::log::LogPlugin;
use bevy::prelude::*;
use clap::Parser;
use nudge::{init_logging, spawn_world_system, MovementPlugin, MoverSettings};

/// Showcase of the basic ways to move a single object
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// JSON file overriding the mover settings
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let settings = match args.config {
        Some(path) => MoverSettings::load(&path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => MoverSettings::default(),
    };
    log::info!("starting with {settings:?}");

    let exit = App::new()
        .add_plugins(DefaultPlugins.build().disable::<LogPlugin>())
        .add_plugins(MovementPlugin)
        .insert_resource(settings)
        .add_systems(Startup, spawn_world_system)
        .run();

    if let AppExit::Error(code) = exit {
        anyhow::bail!("app exited with code {code}");
    }
    Ok(())
}
