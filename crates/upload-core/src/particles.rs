//! Particle records and the store that ages them.
//!
//! A particle lives for `death` frames. Its opacity fades linearly from 1 at
//! birth to 0 at `life == death`; the next `advance` removes it, so a
//! particle is never drawn with a negative alpha.

use crate::constants::DEFAULT_DEATH_MAX;
use glam::Vec2;
use rand::Rng;

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    /// Displacement applied once per frame.
    pub vel: Vec2,
    pub life: u32,
    pub death: f32,
    pub size: f32,
}

impl Particle {
    pub fn opacity(&self) -> f32 {
        if self.death <= 0.0 {
            return 0.0;
        }
        (1.0 - self.life as f32 / self.death).clamp(0.0, 1.0)
    }

    fn is_dead(&self) -> bool {
        self.life as f32 > self.death
    }
}

/// Creation parameters; `None` fields get the random defaults.
#[derive(Clone, Copy, Debug, Default)]
pub struct ParticleSpawn {
    pub pos: Vec2,
    pub vel: Vec2,
    pub death: Option<f32>,
    pub size: Option<f32>,
}

impl ParticleSpawn {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            vel,
            death: None,
            size: None,
        }
    }

    pub fn with_death(mut self, death: f32) -> Self {
        self.death = Some(death);
        self
    }

    pub fn with_size(mut self, size: f32) -> Self {
        self.size = Some(size);
        self
    }
}

#[derive(Clone, Debug, Default)]
pub struct ParticleStore {
    particles: Vec<Particle>,
}

impl ParticleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create<R: Rng + ?Sized>(&mut self, spawn: ParticleSpawn, rng: &mut R) {
        let death = spawn
            .death
            .unwrap_or_else(|| rng.gen::<f32>() * DEFAULT_DEATH_MAX);
        let size = spawn
            .size
            .unwrap_or_else(|| rng.gen_range(1..=2) as f32);
        self.particles.push(Particle {
            pos: spawn.pos,
            vel: spawn.vel,
            life: 0,
            death,
            size,
        });
    }

    /// Moves and ages every particle by one frame, dropping the dead ones.
    pub fn advance(&mut self) {
        self.particles.retain_mut(|p| {
            p.pos += p.vel;
            p.life += 1;
            !p.is_dead()
        });
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }
}
