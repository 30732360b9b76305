//! Behaviour tests for ridden pets using rust-rspec.
//!
//! The rider is the pet's owner; their facing and the input axes decide the
//! pet's motion, and `Flying-Height` caps how high the pet may climb.

use approx::assert_relative_eq;
use hoverpet::prelude::*;
use test_utils::{pet_at, sandbox_with_owner, PetWorld};

/// A mounted pet twelve blocks above flat ground with a ceiling of twenty.
fn mounted(descriptor: PetDescriptor, yaw: f64, pitch: f64) -> PetWorld {
    let mut host = sandbox_with_owner(60, (0.0, 72.0, 0.0));
    if let Some(owner) = host.owner.as_mut() {
        owner.location = owner.location.facing(yaw, pitch);
    }
    let mut pet = pet_at(descriptor, (0.0, 72.0, 0.0));
    pet.fly_height = 20.0;
    pet.mount();
    PetWorld::new(host, pet)
}

fn ride(world: &mut PetWorld, input_x: f64, input_z: f64) {
    world.pet.ride_step(&mut world.host, input_x, input_z);
}

#[test]
fn rider_steers_level_flight() {
    rspec::run(&rspec::given(
        "a phantom ridden by an owner looking south",
        mounted(PetDescriptor::new("Phantom"), 0.0, 0.0),
        |ctx| {
            ctx.then("the tick leaves steering to the rider", |world| {
                let mut world = world.clone();
                assert_eq!(world.pet.mode(), PetMode::Riding);
                assert!(!world.step());
                assert_eq!(world.host.movement_updates, 0);
            });

            ctx.when("the rider presses forward", |ctx| {
                ctx.before_each(|world| ride(world, 0.0, 1.0));
                ctx.then("the pet flies half a block along the facing", |world| {
                    assert_relative_eq!(world.position().z, 0.5, epsilon = 1e-9);
                    assert_relative_eq!(world.position().x, 0.0, epsilon = 1e-9);
                    assert_relative_eq!(world.position().y, 72.0);
                    assert_eq!(world.host.movement_updates, 1);
                });
            });

            ctx.when("the rider presses back", |ctx| {
                ctx.before_each(|world| ride(world, 0.0, -1.0));
                ctx.then("the pet reverses", |world| {
                    assert_relative_eq!(world.position().z, -0.5, epsilon = 1e-9);
                });
            });

            ctx.when("the rider presses forward and right together", |ctx| {
                ctx.before_each(|world| ride(world, 1.0, 1.0));
                ctx.then("strafing wins over forward travel", |world| {
                    assert_relative_eq!(world.position().x, 0.5, epsilon = 1e-9);
                    assert_relative_eq!(world.position().z, 0.0, epsilon = 1e-9);
                });
            });

            ctx.when("the rider dismounts", |ctx| {
                ctx.before_each(|world| {
                    world.pet.state_mut().dismount();
                    assert!(world.step());
                });
                ctx.then("the pet hovers back above its owner", |world| {
                    assert_eq!(world.pet.mode(), PetMode::Calm);
                    assert!(world.pet.state().motion.y > 0.0);
                });
            });
        },
    ));
}

#[test]
fn flying_height_caps_climbing() {
    rspec::run(&rspec::given(
        "a phantom ridden by an owner looking sixty degrees up",
        mounted(PetDescriptor::new("Phantom"), 0.0, -60.0),
        |ctx| {
            ctx.when("the pet is below its ceiling", |ctx| {
                ctx.before_each(|world| ride(world, 0.0, 1.0));
                ctx.then("it climbs while flying forward", |world| {
                    let climb = 0.3 * 60_f64.to_radians().sin() / 2.0;
                    assert_relative_eq!(world.pet.state().motion.y, climb, epsilon = 1e-9);
                    assert_relative_eq!(world.position().y, 72.0 + climb, epsilon = 1e-9);
                    assert_relative_eq!(world.position().z, 0.25, epsilon = 1e-9);
                });
            });

            ctx.when("the ceiling drops beneath the pet mid-climb", |ctx| {
                ctx.before_each(|world| {
                    ride(world, 0.0, 1.0);
                    world.pet.state_mut().fly_height = 5.0;
                    ride(world, 0.0, 1.0);
                });
                ctx.then("it keeps its previous vertical motion", |world| {
                    let climb = 0.3 * 60_f64.to_radians().sin() / 2.0;
                    assert_relative_eq!(world.pet.state().motion.y, climb, epsilon = 1e-9);
                    assert_relative_eq!(world.position().y, 72.0 + 2.0 * climb, epsilon = 1e-9);
                });
            });

            ctx.when("the pet starts above its ceiling", |ctx| {
                ctx.before_each(|world| {
                    world.pet.state_mut().fly_height = 5.0;
                    ride(world, 0.0, 0.0);
                });
                ctx.then("it does not climb", |world| {
                    assert_relative_eq!(world.pet.state().motion.y, 0.0);
                    assert_relative_eq!(world.position().y, 72.0);
                });
            });
        },
    ));
}

#[test]
fn descending_ignores_the_ceiling() {
    let mut world = mounted(PetDescriptor::new("Phantom"), 0.0, 60.0);
    world.pet.state_mut().fly_height = 0.0;
    ride(&mut world, 0.0, 0.0);
    let drop = 0.3 * 60_f64.to_radians().sin() / 2.0;
    assert_relative_eq!(world.pet.state().motion.y, -drop, epsilon = 1e-9);
    assert_relative_eq!(world.position().y, 72.0 - drop, epsilon = 1e-9);
}

#[test]
fn dragon_rides_facing_backwards() {
    let mut world = mounted(PetDescriptor::ender_dragon(), 90.0, 10.0);
    ride(&mut world, 0.0, 1.0);
    assert_relative_eq!(world.pet.state().location.yaw, 270.0);
    assert_relative_eq!(world.pet.state().location.pitch, 10.0);
}

#[test]
fn ride_input_without_owner_is_ignored() {
    let mut world = mounted(PetDescriptor::new("Phantom"), 0.0, 0.0);
    world.host.owner = None;
    ride(&mut world, 0.0, 1.0);
    assert_relative_eq!(world.position().z, 0.0);
    assert_eq!(world.host.movement_updates, 0);
}
