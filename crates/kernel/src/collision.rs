//! Collision Detector: pure proximity tests under two named rules.
//!
//! The sphere-to-sphere rule only accepts [`Spherical`] values, so an entity
//! without a radius cannot be passed to it.

use glam::Vec3;

use crate::collectible::Collectible;
use crate::entity::{Body, Ship, Sphere};

/// Anything with an origin in camera space.
pub trait Positioned {
    fn origin(&self) -> Vec3;
}

/// Anything with an origin and a collision radius.
pub trait Spherical: Positioned {
    fn radius(&self) -> f32;
}

impl Positioned for Vec3 {
    fn origin(&self) -> Vec3 {
        *self
    }
}

impl Positioned for Body {
    fn origin(&self) -> Vec3 {
        self.origin
    }
}

impl Positioned for Ship {
    fn origin(&self) -> Vec3 {
        self.body.origin
    }
}

impl Positioned for Sphere {
    fn origin(&self) -> Vec3 {
        self.body.origin
    }
}

impl Spherical for Sphere {
    fn radius(&self) -> f32 {
        Sphere::radius(self)
    }
}

impl Positioned for Collectible {
    fn origin(&self) -> Vec3 {
        self.body.origin
    }
}

/// A named collision rule applied to a specific pair.
#[derive(Clone, Copy)]
pub enum CollisionRule<'a> {
    /// Symmetric: distance between origins is at most the radius sum.
    SphereToSphere(&'a dyn Spherical, &'a dyn Spherical),
    /// Asymmetric: distance from the ship is below a fixed pickup threshold.
    EntityToShip {
        ship: &'a Ship,
        entity: &'a dyn Positioned,
        threshold: f32,
    },
}

impl CollisionRule<'_> {
    pub fn name(&self) -> &'static str {
        match self {
            CollisionRule::SphereToSphere(..) => "sphereToSphere",
            CollisionRule::EntityToShip { .. } => "entityToShip",
        }
    }
}

/// Evaluate `rule` for its pair. Deterministic and side-effect free.
pub fn has_collided(rule: CollisionRule<'_>) -> bool {
    match rule {
        CollisionRule::SphereToSphere(a, b) => sphere_to_sphere(a, b),
        CollisionRule::EntityToShip {
            ship,
            entity,
            threshold,
        } => entity_to_ship(ship, entity, threshold),
    }
}

/// Boundary inclusive: touching spheres collide.
pub fn sphere_to_sphere<A, B>(a: &A, b: &B) -> bool
where
    A: Spherical + ?Sized,
    B: Spherical + ?Sized,
{
    a.origin().distance(b.origin()) <= a.radius() + b.radius()
}

/// Strictly below `threshold`, measured from the ship's origin.
pub fn entity_to_ship<E: Positioned + ?Sized>(ship: &Ship, entity: &E, threshold: f32) -> bool {
    ship.origin().distance(entity.origin()) < threshold
}

#[cfg(test)]
mod tests {
    use super::*;
    use starblaster_common::Rgba;

    struct Ball(Vec3, f32);

    impl Positioned for Ball {
        fn origin(&self) -> Vec3 {
            self.0
        }
    }

    impl Spherical for Ball {
        fn radius(&self) -> f32 {
            self.1
        }
    }

    #[test]
    fn touching_spheres_collide() {
        let a = Ball(Vec3::ZERO, 2.0);
        let b = Ball(Vec3::new(3.0, 4.0, 0.0), 3.0);
        assert!(sphere_to_sphere(&a, &b));
        assert!(sphere_to_sphere(&b, &a));
    }

    #[test]
    fn separated_spheres_do_not_collide() {
        let a = Ball(Vec3::ZERO, 2.0);
        let b = Ball(Vec3::new(3.0, 4.0, 0.0), 2.5);
        assert!(!sphere_to_sphere(&a, &b));
    }

    #[test]
    fn sphere_rule_matches_distance_over_a_grid() {
        for step in 0..40 {
            let d = step as f32 * 0.25;
            for (r1, r2) in [(0.0, 0.0), (1.0, 2.0), (0.5, 4.0), (3.0, 3.0)] {
                let a = Ball(Vec3::new(1.0, -2.0, 5.0), r1);
                let b = Ball(Vec3::new(1.0, -2.0 + d, 5.0), r2);
                assert_eq!(sphere_to_sphere(&a, &b), d <= r1 + r2, "d={d} r1={r1} r2={r2}");
            }
        }
    }

    #[test]
    fn zero_radius_spheres_collide_only_when_coincident() {
        let a = Ball(Vec3::ONE, 0.0);
        assert!(sphere_to_sphere(&a, &Ball(Vec3::ONE, 0.0)));
        assert!(!sphere_to_sphere(&a, &Ball(Vec3::new(1.0, 1.0, 1.001), 0.0)));
    }

    #[test]
    fn entity_to_ship_uses_fixed_threshold() {
        let ship = Ship::new(10.0, Vec3::ZERO);
        assert!(entity_to_ship(&ship, &Vec3::new(14.9, 0.0, 0.0), 15.0));
        assert!(!entity_to_ship(&ship, &Vec3::new(15.0, 0.0, 0.0), 15.0));
        assert!(entity_to_ship(&ship, &Vec3::ZERO, 15.0));
    }

    #[test]
    fn named_rules_dispatch() {
        let ship = Ship::new(10.0, Vec3::ZERO);
        let projectile = Sphere::projectile(2.0, Vec3::new(0.0, 0.0, -5.0), Rgba::WHITE);
        let planet = Sphere::projectile(3.0, Vec3::new(0.0, 0.0, -10.0), Rgba::WHITE);

        let rule = CollisionRule::SphereToSphere(&projectile, &planet);
        assert_eq!(rule.name(), "sphereToSphere");
        assert!(has_collided(rule));

        let rule = CollisionRule::EntityToShip {
            ship: &ship,
            entity: &planet,
            threshold: 5.0,
        };
        assert_eq!(rule.name(), "entityToShip");
        assert!(!has_collided(rule));
    }

    #[test]
    fn rules_are_deterministic() {
        let a = Ball(Vec3::new(0.3, 0.7, -1.1), 0.9);
        let b = Ball(Vec3::new(1.1, 0.2, -0.4), 0.4);
        let first = has_collided(CollisionRule::SphereToSphere(&a, &b));
        for _ in 0..10 {
            assert_eq!(has_collided(CollisionRule::SphereToSphere(&a, &b)), first);
        }
    }
}
