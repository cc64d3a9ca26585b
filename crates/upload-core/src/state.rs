//! Session state shared by the input port, the frame loop and the icon
//! choreography.
//!
//! There is exactly one session per widget and it lives as long as the
//! widget. Only the widget mutates it; hosts read it for presentation.

use crate::constants::INITIAL_ICON_PARTICLES;

/// Whether the per-frame emit/advance/render step is scheduled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FrameLoop {
    #[default]
    Stopped,
    Running,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    /// Set from an accepted drop until the reset; drag and drop input is
    /// ignored meanwhile.
    pub animating_upload: bool,
    /// Idle bob and frame loop are running.
    pub playing_icon_animation: bool,
    /// Idle particles emitted per frame; raised during the launch.
    pub icon_particles_count: u32,
    pub frame_loop: FrameLoop,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            animating_upload: false,
            playing_icon_animation: false,
            icon_particles_count: INITIAL_ICON_PARTICLES,
            frame_loop: FrameLoop::Stopped,
        }
    }
}
