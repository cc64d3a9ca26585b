use crate::geometry::{Rect, SurfaceSize};
use crate::particles::ParticleStore;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn white(a: f32) -> Self {
        Self {
            r: 255,
            g: 255,
            b: 255,
            a,
        }
    }

    pub fn css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// The 2D surface particles are drawn into.
pub trait DrawSink {
    fn clear_rect(&mut self, rect: Rect);
    fn set_fill(&mut self, color: Rgba);
    fn fill_rect(&mut self, rect: Rect);
}

/// Clears the whole surface and draws every particle as a fading white square.
pub fn render<S: DrawSink + ?Sized>(store: &ParticleStore, sink: &mut S, surface: SurfaceSize) {
    sink.clear_rect(surface.full_rect());
    for p in store.iter() {
        sink.set_fill(Rgba::white(p.opacity()));
        sink.fill_rect(Rect::new(p.pos.x, p.pos.y, p.size, p.size));
    }
}
