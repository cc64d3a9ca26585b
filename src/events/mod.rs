pub mod drag;
pub mod resize;

pub use drag::wire_drag_events;
pub use resize::wire_resize;
