use crate::constants::{DRAG_EVENTS, HIDE_EVENTS, SHOW_EVENTS};
use crate::frame::FrameDriver;
use std::rc::Rc;
use upload_core::DropOutcome;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_drag_events(document: &web::Document, driver: Rc<FrameDriver>) {
    wire_prevent_defaults(document);
    for name in SHOW_EVENTS {
        let driver = driver.clone();
        listen(document, name, move |_ev: web::Event| {
            driver.context().borrow_mut().widget.on_drag_enter();
            driver.sync();
        });
    }
    for name in HIDE_EVENTS {
        let driver = driver.clone();
        listen(document, name, move |_ev: web::Event| {
            driver.context().borrow_mut().widget.on_drag_leave();
            driver.sync();
        });
    }
    wire_drop(document, driver);
}

fn wire_prevent_defaults(document: &web::Document) {
    for name in DRAG_EVENTS {
        listen(document, name, |ev: web::Event| {
            ev.prevent_default();
            ev.stop_propagation();
        });
    }
}

fn wire_drop(document: &web::Document, driver: Rc<FrameDriver>) {
    let closure = Closure::wrap(Box::new(move |ev: web::DragEvent| {
        let files = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .map(|f| f.length() as usize)
            .unwrap_or(0);
        let x = ev.page_x() as f32;
        let y = ev.page_y() as f32;
        let outcome = driver.context().borrow_mut().widget.on_drop(files, x, y);
        match outcome {
            DropOutcome::Accepted { files, .. } => {
                // Uploading the dropped files is left to the hosting page.
                log::info!("[drop] {} file(s) ready for upload", files);
            }
            DropOutcome::Cancelled => log::info!("[drop] nothing dropped"),
            DropOutcome::Ignored => log::debug!("[drop] busy, ignored"),
        }
        driver.sync();
    }) as Box<dyn FnMut(_)>);
    _ = document.add_event_listener_with_callback("drop", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn listen(document: &web::Document, name: &str, handler: impl FnMut(web::Event) + 'static) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
    _ = document.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
    closure.forget();
}
