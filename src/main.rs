//! Demo driver running a hovering pet in the sandbox host.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use hoverpet::prelude::*;
use hoverpet::{init_logging, PetProfile};

/// Fly a hovering pet through a scripted sandbox scenario
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
    /// Number of ticks to simulate
    #[arg(short, long, default_value_t = 60)]
    ticks: u64,
    /// JSON pet profile with rewards and properties
    #[arg(short, long)]
    profile: Option<PathBuf>,
}

/// Tick at which the pet is set on the target.
const PROVOKE_AT: u64 = 20;

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let profile = match &args.profile {
        Some(path) => PetProfile::load(path)
            .with_context(|| format!("loading profile {}", path.display()))?,
        None => PetProfile::default(),
    };

    let owner = SandboxEntity::new(Location::at(0.0, 65.0, 0.0), 20.0, EntityKind::Player);
    let zombie = SandboxEntity::new(Location::at(4.0, 65.0, 3.0), 12.0, EntityKind::Creature);
    let mut host = SandboxHost::new(64).with_owner(owner);
    host.config = profile.rewards;

    let state = PetState::new(
        PetDescriptor::ender_dragon(),
        PetAttributes {
            scale: 3.0,
            speed: 1.0,
            attack_damage: 4.0,
        },
        Location::at(-4.0, 68.0, 2.0),
    )?;
    let mut pet = HoveringPet::new(state);
    pet.configure(&mut host, &profile.properties)
        .context("applying pet properties")?;

    for tick in 0..args.ticks {
        host.walk_owner(DVec3::new(0.05, 0.0, 0.0));
        if tick == PROVOKE_AT {
            host.target = Some(zombie);
            pet.provoke();
        }
        pet.tick(&mut host, tick);
        let position = pet.state().location.position;
        info!(
            "tick {tick:>3} {:?} pos ({:.2}, {:.2}, {:.2}) yaw {:.1}",
            pet.mode(),
            position.x,
            position.y,
            position.z,
            pet.state().location.yaw
        );
    }

    info!(
        "done: {} strikes, {} level points",
        host.damage_log.len(),
        host.level_points
    );
    Ok(())
}
