pub mod config;
pub mod constants;
pub mod easing;
pub mod emitter;
pub mod geometry;
pub mod motion;
pub mod particles;
pub mod render;
pub mod state;
pub mod timers;
pub mod tween;
pub mod widget;

pub use config::*;
pub use geometry::*;
pub use motion::{IconMotion, IconState, IconTransform};
pub use particles::*;
pub use render::*;
pub use state::*;
pub use widget::*;
