use crate::constants::{ICON_EDGE_MARGIN, SCATTER_SPREAD, SCATTER_VELOCITY};
use crate::geometry::Rect;
use crate::particles::{ParticleSpawn, ParticleStore};
use glam::Vec2;
use rand::Rng;

/// Uniform value in `[-value / 2, value / 2)`.
#[inline]
pub fn spread<R: Rng + ?Sized>(rng: &mut R, value: f32) -> f32 {
    rng.gen::<f32>() * value - value / 2.0
}

/// Spawns `count` particles falling from the icon's vertical center.
///
/// Both the number of particles and their fall speed scale with `count`,
/// which is what makes the launch stream accelerate.
pub fn emit_icon_particles<R: Rng + ?Sized>(
    store: &mut ParticleStore,
    rng: &mut R,
    icon: Rect,
    count: u32,
) {
    let center = icon.center();
    let span = (icon.width - ICON_EDGE_MARGIN).max(0.0);
    for _ in 0..count {
        let x = center.x + spread(rng, span);
        let vy = rng.gen::<f32>() * 2.0 * count as f32;
        store.create(
            ParticleSpawn::new(Vec2::new(x, center.y), Vec2::new(0.0, vy)),
            rng,
        );
    }
}

/// Spawns `count` short-lived particles scattered around `origin`.
pub fn emit_scatter<R: Rng + ?Sized>(
    store: &mut ParticleStore,
    rng: &mut R,
    origin: Vec2,
    count: u32,
    lifespan: f32,
) {
    for _ in 0..count {
        let pos = origin + Vec2::new(spread(rng, SCATTER_SPREAD), spread(rng, SCATTER_SPREAD));
        let vel = Vec2::new(spread(rng, SCATTER_VELOCITY), spread(rng, SCATTER_VELOCITY));
        store.create(ParticleSpawn::new(pos, vel).with_death(lifespan), rng);
    }
}
