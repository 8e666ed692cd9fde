//! Uniform randomness for spawners and attribute generators.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use starblaster_common::Rgba;

/// Uniform real-valued random numbers over `[min, max)`.
pub trait RandomSource {
    fn random_range(&mut self, min: f32, max: f32) -> f32;
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    fn random_range(&mut self, min: f32, max: f32) -> f32 {
        (**self).random_range(min, max)
    }
}

/// `StdRng`-backed source.
#[derive(Debug, Clone)]
pub struct StdRandom(StdRng);

impl StdRandom {
    pub fn from_entropy() -> Self {
        Self(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl RandomSource for StdRandom {
    fn random_range(&mut self, min: f32, max: f32) -> f32 {
        if max <= min {
            return min;
        }
        self.0.gen_range(min..max)
    }
}

/// Replays a fixed cycle of unit samples in `[0, 1)`, scaled into each
/// requested range. An empty cycle always yields `min`.
#[derive(Debug, Clone, Default)]
pub struct FixedRandom {
    samples: Vec<f32>,
    next: usize,
}

impl FixedRandom {
    pub fn new(samples: impl Into<Vec<f32>>) -> Self {
        Self {
            samples: samples.into(),
            next: 0,
        }
    }
}

impl RandomSource for FixedRandom {
    fn random_range(&mut self, min: f32, max: f32) -> f32 {
        if self.samples.is_empty() {
            return min;
        }
        let t = self.samples[self.next % self.samples.len()].clamp(0.0, 1.0);
        self.next = self.next.wrapping_add(1);
        let value = min + (max - min) * t;
        // keep the upper bound exclusive
        if value >= max && max > min {
            max - (max - min) * f32::EPSILON
        } else {
            value
        }
    }
}

/// Uniformly pick one element. Panics on an empty slice.
pub fn select_item<'a, T, R: RandomSource + ?Sized>(rng: &mut R, items: &'a [T]) -> &'a T {
    assert!(!items.is_empty(), "select_item called with no items");
    let index = rng.random_range(0.0, items.len() as f32).floor() as usize;
    &items[index.min(items.len() - 1)]
}

/// Opaque color with each channel in `[0.1, 1.0)`, used for the starting
/// bullet color.
pub fn random_bullet_color<R: RandomSource + ?Sized>(rng: &mut R) -> Rgba {
    let r = rng.random_range(1.0, 10.0) / 10.0;
    let g = rng.random_range(1.0, 10.0) / 10.0;
    let b = rng.random_range(1.0, 10.0) / 10.0;
    Rgba::new(r, g, b, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn std_random_stays_in_range() {
        let mut rng = StdRandom::seeded(7);
        for _ in 0..1000 {
            let v = rng.random_range(-15.0, 15.0);
            assert!((-15.0..15.0).contains(&v));
        }
    }

    #[test]
    fn seeded_sources_repeat() {
        let mut a = StdRandom::seeded(42);
        let mut b = StdRandom::seeded(42);
        for _ in 0..20 {
            assert_eq!(a.random_range(0.0, 1.0), b.random_range(0.0, 1.0));
        }
    }

    #[test]
    fn empty_range_yields_min() {
        let mut rng = StdRandom::seeded(1);
        assert_eq!(rng.random_range(3.0, 3.0), 3.0);
    }

    #[test]
    fn fixed_random_cycles() {
        let mut rng = FixedRandom::new([0.0, 0.5]);
        assert_eq!(rng.random_range(0.0, 10.0), 0.0);
        assert_eq!(rng.random_range(0.0, 10.0), 5.0);
        assert_eq!(rng.random_range(-1.0, 1.0), -1.0);
    }

    #[test]
    fn fixed_random_never_reaches_max() {
        let mut rng = FixedRandom::new([1.0]);
        assert!(rng.random_range(0.0, 3.0) < 3.0);
    }

    #[test]
    fn select_item_covers_every_slot() {
        let items = ["a", "b", "c"];
        let mut rng = FixedRandom::new([0.0, 0.4, 0.99]);
        assert_eq!(*select_item(&mut rng, &items), "a");
        assert_eq!(*select_item(&mut rng, &items), "b");
        assert_eq!(*select_item(&mut rng, &items), "c");
    }

    #[test]
    #[should_panic(expected = "no items")]
    fn select_item_rejects_empty() {
        let items: [u8; 0] = [];
        let mut rng = FixedRandom::default();
        select_item(&mut rng, &items);
    }

    #[test]
    fn bullet_color_is_opaque_and_bright_enough() {
        let mut rng = StdRandom::seeded(3);
        for _ in 0..100 {
            let [r, g, b, a] = random_bullet_color(&mut rng).0;
            for c in [r, g, b] {
                assert!((0.1..1.0).contains(&c));
            }
            assert_eq!(a, 1.0);
        }
    }
}
