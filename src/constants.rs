/// DOM hooks and event names used by the web front-end.
///
/// The page is expected to contain a `.upload` form holding the icon and
/// the canvas the particles are drawn into.
pub const FORM_SELECTOR: &str = ".upload";
pub const ICON_SELECTOR: &str = ".upload__icon";
pub const CANVAS_SELECTOR: &str = ".upload__canvas";

// Presentational toggle on the form; the only CSS coupling
pub const ACTIVE_CLASS: &str = "upload--active";

// Every drag event is default-prevented so the browser never opens the file
pub const DRAG_EVENTS: [&str; 7] = [
    "drag",
    "dragstart",
    "dragend",
    "dragover",
    "dragenter",
    "dragleave",
    "drop",
];
pub const SHOW_EVENTS: [&str; 2] = ["dragover", "dragenter"];
pub const HIDE_EVENTS: [&str; 2] = ["dragleave", "dragend"];

// Upper bound for a single frame delta after a stall (seconds)
pub const MAX_FRAME_DT_SEC: f32 = 0.25;
