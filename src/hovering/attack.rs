//! Attack step for angry hovering pets.

use glam::DVec3;
use log::debug;

use super::HoveringPet;
use crate::damage::{DamageCause, DamageEvent};
use crate::host::{EntityKind, PetHost};
use crate::{
    ATTACK_COOLDOWN_TICKS, ATTACK_REACH_PADDING, OWNER_LEASH_RANGE, TARGET_HOVER_OFFSET,
    TARGET_LEASH_RANGE,
};

impl HoveringPet {
    /// Chases the target and strikes it when in reach and off cooldown.
    ///
    /// Combat is abandoned once the pet strays more than 25 blocks from its
    /// owner or 15 blocks from its target. The cooldown ticks down on every
    /// call, including the one that resets it.
    pub fn attack_step<H: PetHost + ?Sized>(&mut self, host: &mut H) {
        if !host.attack_requirements_met(&mut self.state) {
            return;
        }
        let Some(target) = host.target() else {
            return;
        };

        self.follow(
            host,
            target.location.position,
            DVec3::new(0.0, TARGET_HOVER_OFFSET, 0.0),
        );

        let target_distance = self.state.location.distance(&target.location);
        let reach = self.state.scale() + ATTACK_REACH_PADDING;

        if target_distance <= reach && self.state.waiting_time == 0 && target.alive {
            self.strike(host, target.kind);
            self.state.waiting_time = ATTACK_COOLDOWN_TICKS;
        } else {
            let owner_far = match host.owner() {
                Some(owner) => self.state.location.distance(&owner.location) > OWNER_LEASH_RANGE,
                None => true,
            };
            if owner_far || target_distance > TARGET_LEASH_RANGE {
                debug!("target out of leash range at {target_distance:.2} blocks");
                self.calm_down(host);
            }
        }

        self.state.waiting_time = self.state.waiting_time.saturating_sub(1);
    }

    fn strike<H: PetHost + ?Sized>(&mut self, host: &mut H, victim: EntityKind) {
        let mut event = DamageEvent::new(DamageCause::EntityAttack, self.state.attack_damage);
        host.dispatch_damage(&mut event);
        if event.is_cancelled() {
            debug!("strike cancelled by a listener");
            return;
        }

        let killed = !host.target().is_some_and(|target| target.alive);
        if !killed {
            return;
        }

        let rewards = host.pets_config();
        let points = match victim {
            EntityKind::Player => rewards.player_experience_points,
            EntityKind::Creature => rewards.entity_experience_points,
        };
        debug!("target killed; awarding {points} level points");
        host.add_level_points(&mut self.state, points);
        self.calm_down(host);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PetsConfig;
    use crate::geometry::Location;
    use crate::host::{EntitySnapshot, MockPetHost};
    use crate::pet::{PetAttributes, PetDescriptor, PetMode, PetState};
    use mockall::predicate::{always, eq};
    use rstest::{fixture, rstest};

    /// Builds an angry pet at the origin with scale 1 (reach 2.1).
    #[fixture]
    fn angry() -> HoveringPet {
        let state = PetState::new(
            PetDescriptor::new("Phantom"),
            PetAttributes {
                attack_damage: 6.0,
                ..PetAttributes::default()
            },
            Location::at(0.0, 0.0, 0.0),
        )
        .expect("valid attributes");
        let mut pet = HoveringPet::new(state);
        pet.provoke();
        pet
    }

    fn entity(x: f64, y: f64, z: f64, kind: EntityKind) -> EntitySnapshot {
        EntitySnapshot::living(Location::at(x, y, z), kind)
    }

    /// Host whose `move_pet` does not move the pet, so distances stay put.
    fn stationary_host(target: EntitySnapshot) -> MockPetHost {
        let mut host = MockPetHost::new();
        host.expect_attack_requirements_met().return_const(true);
        host.expect_owner()
            .return_const(Some(entity(0.0, 0.0, 0.0, EntityKind::Player)));
        host.expect_move_pet().return_const(());
        host.expect_target().return_const(Some(target));
        host
    }

    #[rstest]
    fn in_reach_strike_fires_and_sets_cooldown(mut angry: HoveringPet) {
        let mut host = stationary_host(entity(2.0, 0.0, 0.0, EntityKind::Creature));
        host.expect_dispatch_damage()
            .times(1)
            .withf(|event| {
                event.cause() == DamageCause::EntityAttack && (event.amount() - 6.0).abs() < 1e-12
            })
            .return_const(());
        host.expect_add_level_points().never();

        angry.attack_step(&mut host);

        assert_eq!(angry.state().waiting_time, ATTACK_COOLDOWN_TICKS - 1);
        assert_eq!(angry.mode(), PetMode::Angry);
    }

    #[rstest]
    fn cancelled_strike_still_starts_cooldown(mut angry: HoveringPet) {
        let mut host = stationary_host(entity(2.0, 0.0, 0.0, EntityKind::Creature));
        host.expect_dispatch_damage()
            .times(1)
            .returning(DamageEvent::cancel);
        host.expect_add_level_points().never();

        angry.attack_step(&mut host);

        assert_eq!(angry.state().waiting_time, 11);
        assert_eq!(angry.mode(), PetMode::Angry);
    }

    #[rstest]
    #[case::cooling_down(2.0, 5, 4)]
    #[case::out_of_reach(2.2, 0, 0)]
    fn no_strike_without_reach_and_cooldown(
        mut angry: HoveringPet,
        #[case] distance: f64,
        #[case] waiting: u32,
        #[case] expected_wait: u32,
    ) {
        angry.state_mut().waiting_time = waiting;
        let mut host = stationary_host(entity(distance, 0.0, 0.0, EntityKind::Creature));
        host.expect_dispatch_damage().never();
        angry.attack_step(&mut host);
        assert_eq!(angry.state().waiting_time, expected_wait);
        assert_eq!(angry.mode(), PetMode::Angry);
    }

    #[rstest]
    fn strike_lands_at_exactly_full_reach(mut angry: HoveringPet) {
        let reach = angry.state().scale() + ATTACK_REACH_PADDING;
        let mut host = stationary_host(entity(reach, 0.0, 0.0, EntityKind::Creature));
        host.expect_dispatch_damage().times(1).return_const(());
        angry.attack_step(&mut host);
        assert_eq!(angry.state().waiting_time, ATTACK_COOLDOWN_TICKS - 1);
    }

    #[rstest]
    #[case::target_at_leash(
        entity(TARGET_LEASH_RANGE, 0.0, 0.0, EntityKind::Creature),
        entity(0.0, 0.0, 0.0, EntityKind::Player)
    )]
    #[case::owner_at_leash(
        entity(5.0, 0.0, 0.0, EntityKind::Creature),
        entity(-OWNER_LEASH_RANGE, 0.0, 0.0, EntityKind::Player)
    )]
    fn pet_stays_angry_at_exact_leash_range(
        mut angry: HoveringPet,
        #[case] target: EntitySnapshot,
        #[case] owner: EntitySnapshot,
    ) {
        let mut host = MockPetHost::new();
        host.expect_attack_requirements_met().return_const(true);
        host.expect_move_pet().return_const(());
        host.expect_target().return_const(Some(target));
        host.expect_owner().return_const(Some(owner));
        host.expect_dispatch_damage().never();
        host.expect_release_target().never();

        angry.attack_step(&mut host);

        assert_eq!(angry.mode(), PetMode::Angry);
    }

    #[rstest]
    fn dead_target_is_not_struck(mut angry: HoveringPet) {
        let mut corpse = entity(1.0, 0.0, 0.0, EntityKind::Creature);
        corpse.alive = false;
        let mut host = stationary_host(corpse);
        host.expect_dispatch_damage().never();
        angry.attack_step(&mut host);
    }

    #[rstest]
    #[case::player(EntityKind::Player, 40)]
    #[case::creature(EntityKind::Creature, 4)]
    fn kill_awards_points_and_calms(
        mut angry: HoveringPet,
        #[case] kind: EntityKind,
        #[case] points: u32,
    ) {
        let victim = entity(2.0, 0.0, 0.0, kind);
        let mut host = MockPetHost::new();
        host.expect_attack_requirements_met().return_const(true);
        host.expect_move_pet().return_const(());
        let mut reads = 0;
        host.expect_target().returning(move || {
            reads += 1;
            // Alive until the strike has been dispatched.
            (reads == 1).then_some(victim)
        });
        host.expect_dispatch_damage().times(1).return_const(());
        host.expect_pets_config().return_const(PetsConfig {
            player_experience_points: 40,
            entity_experience_points: 4,
        });
        host.expect_add_level_points()
            .with(always(), eq(points))
            .times(1)
            .return_const(());
        host.expect_release_target().times(1).return_const(());

        angry.attack_step(&mut host);

        assert_eq!(angry.mode(), PetMode::Calm);
        assert_eq!(angry.state().waiting_time, 11);
    }

    #[rstest]
    #[case::target_fled(entity(16.0, 0.0, 0.0, EntityKind::Creature), entity(0.0, 0.0, 0.0, EntityKind::Player))]
    #[case::owner_far(entity(5.0, 0.0, 0.0, EntityKind::Creature), entity(-26.0, 0.0, 0.0, EntityKind::Player))]
    fn leash_break_calms_pet(
        mut angry: HoveringPet,
        #[case] target: EntitySnapshot,
        #[case] owner: EntitySnapshot,
    ) {
        let mut host = MockPetHost::new();
        host.expect_attack_requirements_met().return_const(true);
        host.expect_move_pet().return_const(());
        host.expect_target().return_const(Some(target));
        host.expect_owner().return_const(Some(owner));
        host.expect_release_target().times(1).return_const(());

        angry.attack_step(&mut host);

        assert_eq!(angry.mode(), PetMode::Calm);
    }

    #[rstest]
    fn unmet_requirements_skip_the_step(mut angry: HoveringPet) {
        angry.state_mut().waiting_time = 3;
        let mut host = MockPetHost::new();
        host.expect_attack_requirements_met().return_const(false);
        host.expect_move_pet().never();
        angry.attack_step(&mut host);
        assert_eq!(angry.state().waiting_time, 3);
    }

    #[rstest]
    fn tick_runs_attack_step_when_angry(mut angry: HoveringPet) {
        let mut host = stationary_host(entity(2.0, 0.0, 0.0, EntityKind::Creature));
        host.expect_base_tick().return_const(crate::host::TickFlow::Continue);
        host.expect_dispatch_damage().times(1).return_const(());
        host.expect_update_movement().times(1).return_const(());
        assert!(angry.tick(&mut host, 3));
        assert_eq!(angry.state().waiting_time, 11);
    }
}
