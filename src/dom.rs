use crate::constants::ACTIVE_CLASS;
use crate::style;
use upload_core::{IconTransform, Rect, SurfaceSize};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn query<T: JsCast>(document: &web::Document, selector: &str) -> anyhow::Result<T> {
    document
        .query_selector(selector)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("missing {}", selector))?
        .dyn_into::<T>()
        .map_err(|e| anyhow::anyhow!("{} has the wrong element type: {:?}", selector, e))
}

/// Matches the canvas backing store to its CSS box and returns the new size.
pub fn sync_canvas_size(canvas: &web::HtmlCanvasElement) -> SurfaceSize {
    let w = canvas.offset_width().max(1) as u32;
    let h = canvas.offset_height().max(1) as u32;
    canvas.set_width(w);
    canvas.set_height(h);
    SurfaceSize::new(w as f32, h as f32)
}

/// Reads the icon's layout box; call with the transform cleared.
pub fn icon_layout(icon: &web::HtmlElement) -> Rect {
    let r = icon.get_bounding_client_rect();
    Rect::new(
        r.left() as f32,
        r.top() as f32,
        r.width() as f32,
        r.height() as f32,
    )
}

pub fn set_active(form: &web::Element, active: bool) {
    let cl = form.class_list();
    if active {
        _ = cl.add_1(ACTIVE_CLASS);
    } else {
        _ = cl.remove_1(ACTIVE_CLASS);
    }
}

pub fn apply_icon_transform(icon: &web::HtmlElement, t: &IconTransform) {
    let css = icon.style();
    if style::is_identity(t) {
        _ = css.remove_property("transform");
    } else {
        _ = css.set_property("transform", &style::icon_transform_css(t));
    }
}
