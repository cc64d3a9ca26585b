use crate::canvas::CanvasSink;
use crate::constants::MAX_FRAME_DT_SEC;
use crate::dom;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;
use upload_core::UploadWidget;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub widget: UploadWidget,
    pub sink: CanvasSink,
    pub form: web::Element,
    pub icon: web::HtmlElement,
    pub canvas: web::HtmlCanvasElement,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_instant).min(Duration::from_secs_f32(MAX_FRAME_DT_SEC));
        self.last_instant = now;
        self.widget.tick(dt, &mut self.sink);
        self.sync_dom();
    }

    /// Mirrors widget presentation state onto the page.
    pub fn sync_dom(&self) {
        dom::set_active(&self.form, self.widget.is_active());
        dom::apply_icon_transform(&self.icon, &self.widget.icon_transform());
    }

    /// Clears the icon transform, measures the new layout and resets.
    pub fn resize(&mut self) {
        dom::apply_icon_transform(&self.icon, &upload_core::IconTransform::IDENTITY);
        let surface = dom::sync_canvas_size(&self.canvas);
        self.widget.set_icon_layout(dom::icon_layout(&self.icon));
        self.widget.on_resize(surface.width, surface.height);
        log::info!("[frame] resized to {}x{}", surface.width, surface.height);
    }
}

/// Owns the single `requestAnimationFrame` callback driving the widget.
///
/// At most one request is pending at a time. The callback reschedules
/// itself only while the widget wants frames; [`FrameDriver::sync`] restarts
/// it after input or cancels a request the widget no longer needs.
pub struct FrameDriver {
    ctx: Rc<RefCell<FrameContext>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    request: Rc<Cell<Option<i32>>>,
}

impl FrameDriver {
    pub fn new(ctx: Rc<RefCell<FrameContext>>) -> Rc<Self> {
        let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let request: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let tick_clone = tick.clone();
        let request_clone = request.clone();
        let ctx_tick = ctx.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            request_clone.set(None);
            let again = {
                let mut c = ctx_tick.borrow_mut();
                c.frame();
                c.widget.wants_frame()
            };
            if again {
                if let Some(cb) = tick_clone.borrow().as_ref() {
                    request_clone.set(request_frame(cb));
                }
            }
        }) as Box<dyn FnMut()>));
        Rc::new(Self { ctx, tick, request })
    }

    pub fn context(&self) -> &Rc<RefCell<FrameContext>> {
        &self.ctx
    }

    /// Call after any input handled outside the frame callback.
    pub fn sync(&self) {
        let wants = {
            let c = self.ctx.borrow();
            c.sync_dom();
            c.widget.wants_frame()
        };
        match (wants, self.request.get()) {
            (true, None) => {
                self.ctx.borrow_mut().last_instant = Instant::now();
                if let Some(cb) = self.tick.borrow().as_ref() {
                    self.request.set(request_frame(cb));
                }
            }
            (false, Some(id)) => {
                if let Some(w) = web::window() {
                    _ = w.cancel_animation_frame(id);
                }
                self.request.set(None);
            }
            _ => {}
        }
    }
}

fn request_frame(cb: &Closure<dyn FnMut()>) -> Option<i32> {
    let w = web::window()?;
    match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
        Ok(id) => Some(id),
        Err(e) => {
            log::error!("[frame] requestAnimationFrame failed: {:?}", e);
            None
        }
    }
}
