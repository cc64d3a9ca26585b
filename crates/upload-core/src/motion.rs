//! The icon's transform and the tween descriptors that move it.

use crate::constants::{BOB_OFFSET, LAUNCH_ELASTICITY, LAUNCH_SCALE_STEP};
use crate::config::WidgetConfig;
use crate::easing::Easing;
use crate::geometry::Rect;
use crate::tween::{Property, TweenDesc, TweenId, TweenTarget, Track};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IconState {
    /// Bobbing (playing or paused), no launch in progress.
    #[default]
    Idle,
    /// Flying off the surface with an accelerating particle stream.
    Launching,
    /// Launch finished; the reset fires on the next tick.
    ResettingToIdle,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IconTransform {
    pub translate_y: f32,
    pub scale: f32,
}

impl Default for IconTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl IconTransform {
    pub const IDENTITY: Self = Self {
        translate_y: 0.0,
        scale: 1.0,
    };

    pub fn set(&mut self, property: Property, value: f32) {
        match property {
            Property::TranslateY => self.translate_y = value,
            Property::Scale => self.scale = value,
            Property::X | Property::Y => {}
        }
    }
}

#[derive(Debug, Default)]
pub struct IconMotion {
    pub state: IconState,
    /// Untransformed layout box reported by the host.
    pub layout: Rect,
    pub transform: IconTransform,
    /// Handle of the prepared idle bob; stale once a launch removed it.
    pub idle_tween: Option<TweenId>,
}

impl IconMotion {
    pub fn new(layout: Rect) -> Self {
        Self {
            layout,
            ..Self::default()
        }
    }

    /// On-screen box: the layout scaled about its center, then shifted on y.
    pub fn bounds(&self) -> Rect {
        let c = self.layout.center();
        let w = self.layout.width * self.transform.scale;
        let h = self.layout.height * self.transform.scale;
        Rect::new(
            c.x - w / 2.0,
            c.y + self.transform.translate_y - h / 2.0,
            w,
            h,
        )
    }

    pub fn idle_bob(&self, config: &WidgetConfig) -> TweenDesc {
        TweenDesc::new(TweenTarget::Icon)
            .track(Track::new(
                Property::TranslateY,
                self.transform.translate_y,
                BOB_OFFSET,
                config.bob,
                Easing::InOutQuad,
            ))
            .alternate()
            .looping()
            .paused()
    }

    /// Flies the icon above the surface while growing it slightly.
    pub fn launch(&self, config: &WidgetConfig, surface_height: f32) -> TweenDesc {
        let bounds = self.bounds();
        let scale = self.transform.scale;
        TweenDesc::new(TweenTarget::Icon)
            .track(Track::new(
                Property::TranslateY,
                self.transform.translate_y,
                -surface_height / 2.0 - bounds.height,
                config.launch_translate,
                Easing::InBack,
            ))
            .track(Track::new(
                Property::Scale,
                scale,
                scale + LAUNCH_SCALE_STEP,
                config.launch_scale,
                Easing::OutElastic {
                    elasticity: LAUNCH_ELASTICITY,
                },
            ))
    }
}
