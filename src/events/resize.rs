use crate::frame::FrameDriver;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_resize(driver: Rc<FrameDriver>) {
    let closure = Closure::wrap(Box::new(move || {
        driver.context().borrow_mut().resize();
        driver.sync();
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
