use std::collections::BTreeSet;

use glam::Vec3;
use starblaster_common::{EntityId, Millis};
use starblaster_input::{Action, InputSource};

use crate::collectible::Collectible;
use crate::collision::{CollisionRule, has_collided};
use crate::entity::{EntityKind, Sphere};
use crate::random::RandomSource;
use crate::world::{DespawnReason, World, WorldEvent};

impl World {
    /// Run one frame of the simulation at time `now`.
    ///
    /// Stages run in a fixed order: steer the ship, run spawners, drop
    /// out-of-range projectiles, drop planets behind the camera, resolve
    /// collisions, then integrate positions. Presenting is left to the caller.
    pub fn step<I, R>(&mut self, now: Millis, input: &I, rng: &mut R)
    where
        I: InputSource + ?Sized,
        R: RandomSource + ?Sized,
    {
        let span = tracing::trace_span!("step", tick = self.tick + 1, now);
        let _enter = span.enter();

        self.steer_ship(input);
        self.run_spawners(now, input, rng);
        self.despawn_far_projectiles();
        self.despawn_passed_planets();
        self.resolve_projectile_hits();
        self.resolve_pickups(now);
        self.integrate(now);

        self.tick += 1;
        self.event_log.push(WorldEvent::Stepped {
            tick: self.tick,
            now,
        });
    }

    fn steer_ship<I: InputSource + ?Sized>(&mut self, input: &I) {
        let speed = self.gameplay.ship_speed;
        let bounds = self.bounds;
        let origin = self.ship.origin();
        let motion = &mut self.ship.motion;

        let left = input.is_active(Action::MoveLeft);
        let right = input.is_active(Action::MoveRight);
        if left && !right && bounds.room_left(origin.x) {
            motion.move_left(speed);
        } else if right && !left && bounds.room_right(origin.x) {
            motion.move_right(speed);
        } else {
            motion.stop_x_movement();
        }

        let up = input.is_active(Action::MoveUp);
        let down = input.is_active(Action::MoveDown);
        if up && !down && bounds.room_up(origin.y) {
            motion.move_up(speed);
        } else if down && !up && bounds.room_down(origin.y) {
            motion.move_down(speed);
        } else {
            motion.stop_y_movement();
        }
    }

    fn run_spawners<I, R>(&mut self, now: Millis, input: &I, rng: &mut R)
    where
        I: InputSource + ?Sized,
        R: RandomSource + ?Sized,
    {
        if input.is_active(Action::Fire) && self.timers.bullet.ready(now) {
            let mut bullet = Sphere::projectile(
                self.gameplay.bullet_size,
                self.ship.origin(),
                self.gameplay.bullet_color,
            );
            bullet.motion.move_back(self.config.bullet_speed);
            self.insert_projectile(bullet);
            self.timers.bullet.mark(now);
        }

        if self.timers.planet.ready(now) {
            let spread = self.config.planet_spawn_spread;
            let [min_radius, max_radius] = self.config.planet_radius_range;
            let offset = Vec3::new(
                rng.random_range(-spread, spread) * 10.0,
                rng.random_range(-spread, spread) * 10.0,
                -self.config.planet_spawn_depth,
            );
            let radius = rng.random_range(min_radius, max_radius) * 10.0;
            let mut planet = Sphere::planet(radius, self.config.camera_position + offset, rng);
            planet.motion.move_forth(self.config.planet_speed);
            self.insert_planet(planet);
            self.timers.planet.mark(now);
        }

        // at most one collectible lives at a time
        if self.collectibles.is_empty() && self.timers.collectible.ready(now) {
            let spread = self.config.collectible_spawn_spread;
            let offset = Vec3::new(
                rng.random_range(-spread, spread) * 10.0,
                rng.random_range(-spread, spread) * 10.0,
                -self.config.collectible_depth,
            );
            let collectible = Collectible::new(
                self.config.collectible_size,
                self.config.camera_position + offset,
                rng,
            );
            self.insert_collectible(collectible);
            self.timers.collectible.mark(now);
        }
    }

    fn despawn_far_projectiles(&mut self) {
        let camera_z = self.config.camera_position.z;
        let far_bound = self.config.far_bound;
        let events = &mut self.event_log;
        self.projectiles.retain(|p| {
            let keep = camera_z - p.origin().z <= far_bound;
            if !keep {
                log_despawn(events, p.body.id, EntityKind::Projectile, DespawnReason::OutOfRange);
            }
            keep
        });
    }

    fn despawn_passed_planets(&mut self) {
        let camera_z = self.config.camera_position.z;
        let events = &mut self.event_log;
        self.planets.retain(|p| {
            let keep = p.origin().z <= camera_z;
            if !keep {
                log_despawn(events, p.body.id, EntityKind::Planet, DespawnReason::PassedCamera);
            }
            keep
        });
    }

    /// Every overlapping (projectile, planet) pair recolors the planet. A
    /// projectile touching several planets tints all of them and is removed
    /// once.
    fn resolve_projectile_hits(&mut self) {
        let mut hits = Vec::new();
        for projectile in &self.projectiles {
            for (index, planet) in self.planets.iter().enumerate() {
                if has_collided(CollisionRule::SphereToSphere(projectile, planet)) {
                    hits.push((projectile.body.id, index));
                }
            }
        }
        if hits.is_empty() {
            return;
        }

        let color = self.gameplay.bullet_color;
        let mut spent = BTreeSet::new();
        for (projectile, index) in hits {
            let planet = &mut self.planets[index];
            planet.recolor(color);
            tracing::debug!(
                projectile = %projectile.short(),
                planet = %planet.body.id.short(),
                %color,
                "planet hit"
            );
            self.event_log.push(WorldEvent::PlanetHit {
                projectile,
                planet: planet.body.id,
                color,
            });
            spent.insert(projectile);
        }

        let events = &mut self.event_log;
        self.projectiles.retain(|p| {
            let keep = !spent.contains(&p.body.id);
            if !keep {
                log_despawn(events, p.body.id, EntityKind::Projectile, DespawnReason::Hit);
            }
            keep
        });
    }

    fn resolve_pickups(&mut self, now: Millis) {
        let threshold = self.config.pickup_radius;
        let consumed: Vec<usize> = self
            .collectibles
            .iter()
            .enumerate()
            .filter(|(_, collectible)| {
                has_collided(CollisionRule::EntityToShip {
                    ship: &self.ship,
                    entity: *collectible,
                    threshold,
                })
            })
            .map(|(index, _)| index)
            .collect();

        // remove back to front so earlier indices stay valid
        for index in consumed.into_iter().rev() {
            let collectible = self.collectibles.remove(index);
            let id = collectible.body.id;
            self.gameplay
                .apply(collectible.pickup, self.config.base_ship_speed);
            tracing::info!(
                pickup = %collectible.pickup,
                bullet_size = self.gameplay.bullet_size,
                ship_speed = self.gameplay.ship_speed,
                "collectible picked up"
            );
            self.event_log.push(WorldEvent::PickedUp {
                id,
                pickup: collectible.pickup,
            });
            log_despawn(
                &mut self.event_log,
                id,
                EntityKind::Collectible,
                DespawnReason::Consumed,
            );
            self.timers.collectible.mark(now);
        }
    }

    fn integrate(&mut self, now: Millis) {
        self.ship.update_position(now);
        for projectile in &mut self.projectiles {
            projectile.update_position(now);
        }
        for planet in &mut self.planets {
            planet.update_position(now);
        }
    }
}

fn log_despawn(events: &mut Vec<WorldEvent>, id: EntityId, kind: EntityKind, reason: DespawnReason) {
    tracing::debug!(id = %id.short(), %kind, ?reason, "despawned");
    events.push(WorldEvent::Despawned { id, kind, reason });
}
