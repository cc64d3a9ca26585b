use upload_core::{DrawSink, Rect, Rgba};
use web_sys as web;

/// Draws particles into a 2D canvas context.
pub struct CanvasSink {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSink {
    pub fn new(ctx: web::CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl DrawSink for CanvasSink {
    fn clear_rect(&mut self, rect: Rect) {
        self.ctx.clear_rect(
            rect.x as f64,
            rect.y as f64,
            rect.width as f64,
            rect.height as f64,
        );
    }

    fn set_fill(&mut self, color: Rgba) {
        self.ctx.set_fill_style_str(&color.css());
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.ctx.fill_rect(
            rect.x as f64,
            rect.y as f64,
            rect.width as f64,
            rect.height as f64,
        );
    }
}
