#![cfg(target_arch = "wasm32")]
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use upload_core::{UploadWidget, WidgetConfig};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod canvas;
mod constants;
mod dom;
mod events;
mod frame;
mod style;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("upload-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let form: web::Element = dom::query(&document, constants::FORM_SELECTOR)?;
    let icon: web::HtmlElement = dom::query(&document, constants::ICON_SELECTOR)?;
    let canvas: web::HtmlCanvasElement = dom::query(&document, constants::CANVAS_SELECTOR)?;

    let ctx = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let surface = dom::sync_canvas_size(&canvas);
    let widget = UploadWidget::new(WidgetConfig::default(), surface, dom::icon_layout(&icon))?;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        widget,
        sink: canvas::CanvasSink::new(ctx),
        form,
        icon,
        canvas,
        last_instant: Instant::now(),
    }));
    let driver = frame::FrameDriver::new(frame_ctx);

    events::wire_drag_events(&document, driver.clone());
    events::wire_resize(driver);
    Ok(())
}
