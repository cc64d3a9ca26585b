//! The upload widget: input port, drop orchestration and the frame loop.
//!
//! Hosts forward drag/drop/resize input to the `on_*` methods and call
//! [`UploadWidget::tick`] once per animation frame while
//! [`UploadWidget::wants_frame`] is true. Everything else (tweens, timeouts,
//! the particle loop) runs inside `tick`, on the host's single UI thread.

use crate::config::{ConfigError, WidgetConfig};
use crate::constants::{DROP_JITTER, INITIAL_ICON_PARTICLES};
use crate::easing::Easing;
use crate::emitter::{emit_icon_particles, emit_scatter, spread};
use crate::geometry::{Rect, SurfaceSize};
use crate::motion::{IconMotion, IconState, IconTransform};
use crate::particles::ParticleStore;
use crate::render::{render, DrawSink};
use crate::state::{FrameLoop, SessionState};
use crate::timers::{TimerAction, TimerQueue};
use crate::tween::{Property, TweenDesc, TweenEngine, TweenEvent, TweenTarget, Track, Values};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropOutcome {
    /// An upload animation is already in flight.
    Ignored,
    /// Nothing was dropped; the widget was hidden.
    Cancelled,
    /// `files` were accepted, the first `animated` of them got a travel
    /// sequence. The files are ready to be handed to an upload step.
    Accepted { files: usize, animated: usize },
}

pub struct UploadWidget {
    config: WidgetConfig,
    session: SessionState,
    particles: ParticleStore,
    tweens: TweenEngine,
    timers: TimerQueue,
    icon: IconMotion,
    surface: SurfaceSize,
    active: bool,
    pending_clear: bool,
    /// Courier whose arrival starts the launch: the one with the longest delay.
    launch_slot: Option<usize>,
    rng: StdRng,
    tween_events: Vec<TweenEvent>,
    timer_actions: Vec<TimerAction>,
}

impl UploadWidget {
    pub fn new(
        config: WidgetConfig,
        surface: SurfaceSize,
        icon_layout: Rect,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut widget = Self {
            config,
            session: SessionState::default(),
            particles: ParticleStore::new(),
            tweens: TweenEngine::new(),
            timers: TimerQueue::new(),
            icon: IconMotion::new(icon_layout),
            surface,
            active: false,
            pending_clear: false,
            launch_slot: None,
            rng,
            tween_events: Vec::new(),
            timer_actions: Vec::new(),
        };
        widget.preseed();
        widget.arm_idle_tween();
        log::info!(
            "[upload] ready surface={}x{} particles={}",
            surface.width,
            surface.height,
            widget.particles.len()
        );
        Ok(widget)
    }

    // ---------------- Input port ----------------

    pub fn on_drag_enter(&mut self) {
        if self.session.animating_upload {
            return;
        }
        self.active = true;
        self.play_icon_animation();
    }

    pub fn on_drag_leave(&mut self) {
        if self.session.animating_upload {
            return;
        }
        self.active = false;
        self.pause_icon_animation();
    }

    pub fn on_drop(&mut self, file_count: usize, x: f32, y: f32) -> DropOutcome {
        if self.session.animating_upload {
            log::debug!("[upload] drop ignored, animation in flight");
            return DropOutcome::Ignored;
        }
        let animated = file_count.min(self.config.max_animated_files);
        if animated == 0 {
            self.active = false;
            self.pause_icon_animation();
            return DropOutcome::Cancelled;
        }

        self.session.animating_upload = true;
        let drop_point = Vec2::new(x, y);
        let icon_center = self.icon.bounds().center();
        for slot in (0..animated).rev() {
            let origin = if slot > 0 {
                drop_point
                    + Vec2::new(
                        spread(&mut self.rng, DROP_JITTER),
                        spread(&mut self.rng, DROP_JITTER),
                    )
            } else {
                drop_point
            };
            self.schedule_courier(slot, origin, icon_center);
        }
        self.launch_slot = Some(animated - 1);
        self.timers
            .schedule(self.config.hide_delay(animated), TimerAction::HideActive);
        log::info!(
            "[upload] drop accepted files={} animated={}",
            file_count,
            animated
        );
        DropOutcome::Accepted {
            files: file_count,
            animated,
        }
    }

    /// Adopts the new surface size and forces a full reset.
    pub fn on_resize(&mut self, width: f32, height: f32) {
        self.active = false;
        self.surface = SurfaceSize::new(width, height);
        self.reset();
    }

    /// Updates the icon's untransformed layout box.
    pub fn set_icon_layout(&mut self, layout: Rect) {
        self.icon.layout = layout;
    }

    // ---------------- Idle animation ----------------

    pub fn play_icon_animation(&mut self) {
        if self.session.playing_icon_animation {
            return;
        }
        self.session.playing_icon_animation = true;
        if let Some(id) = self.icon.idle_tween {
            self.tweens.play(id);
        }
        self.session.frame_loop = FrameLoop::Running;
    }

    pub fn pause_icon_animation(&mut self) {
        if !self.session.playing_icon_animation {
            return;
        }
        self.session.playing_icon_animation = false;
        if let Some(id) = self.icon.idle_tween {
            self.tweens.pause(id);
        }
        self.session.frame_loop = FrameLoop::Stopped;
    }

    /// Returns every piece of state to the idle baseline. Safe to repeat.
    pub fn reset(&mut self) {
        self.session.animating_upload = false;
        self.session.frame_loop = FrameLoop::Stopped;
        self.pause_icon_animation();
        self.tweens.clear();
        self.timers.clear();
        self.launch_slot = None;
        self.icon.state = IconState::Idle;
        self.icon.transform = IconTransform::IDENTITY;
        self.icon.idle_tween = None;
        self.particles.clear();
        self.session.icon_particles_count = INITIAL_ICON_PARTICLES;
        self.pending_clear = true;
        self.preseed();
        self.arm_idle_tween();
        log::debug!("[upload] reset particles={}", self.particles.len());
    }

    // ---------------- Frame ----------------

    /// Advances timers and tweens by `dt`, then runs one emit/advance/render
    /// step if the frame loop is running.
    pub fn tick<S: DrawSink + ?Sized>(&mut self, dt: Duration, sink: &mut S) {
        let mut actions = std::mem::take(&mut self.timer_actions);
        self.timers.advance(dt, &mut actions);
        for action in actions.drain(..) {
            self.handle_timer(action);
        }
        self.timer_actions = actions;

        let mut events = std::mem::take(&mut self.tween_events);
        self.tweens.advance(dt, &mut events);
        for event in events.drain(..) {
            self.handle_tween_event(event);
        }
        self.tween_events = events;

        if self.session.frame_loop == FrameLoop::Running {
            self.step_frame(sink);
        } else if self.pending_clear {
            sink.clear_rect(self.surface.full_rect());
        }
        self.pending_clear = false;
    }

    /// Whether the host should keep scheduling frames.
    pub fn wants_frame(&self) -> bool {
        self.session.frame_loop == FrameLoop::Running
            || self.tweens.has_playing()
            || !self.timers.is_empty()
            || self.pending_clear
    }

    fn step_frame<S: DrawSink + ?Sized>(&mut self, sink: &mut S) {
        emit_icon_particles(
            &mut self.particles,
            &mut self.rng,
            self.icon.bounds(),
            self.session.icon_particles_count,
        );
        self.particles.advance();
        render(&self.particles, sink, self.surface);
    }

    // ---------------- Transitions ----------------

    fn handle_timer(&mut self, action: TimerAction) {
        match action {
            TimerAction::HideActive => self.active = false,
            TimerAction::Reset => self.reset(),
        }
    }

    fn handle_tween_event(&mut self, event: TweenEvent) {
        match event {
            TweenEvent::Update {
                target: TweenTarget::Icon,
                values,
                ..
            } => {
                for (property, value) in values {
                    self.icon.transform.set(property, value);
                }
            }
            TweenEvent::Update {
                target: TweenTarget::Courier(_),
                values,
                ..
            } => {
                if let Some(point) = courier_point(&values) {
                    emit_scatter(
                        &mut self.particles,
                        &mut self.rng,
                        point,
                        self.config.trail_particles_per_tick,
                        self.config.short_lifespan,
                    );
                }
            }
            TweenEvent::Complete {
                target: TweenTarget::Courier(slot),
                ..
            } if self.launch_slot == Some(slot) => self.begin_launch(),
            TweenEvent::Complete {
                target: TweenTarget::Icon,
                ..
            } if self.icon.state == IconState::Launching => {
                self.icon.state = IconState::ResettingToIdle;
                self.timers.schedule(Duration::ZERO, TimerAction::Reset);
            }
            TweenEvent::Complete { .. } => {}
        }
    }

    fn begin_launch(&mut self) {
        self.launch_slot = None;
        self.session.icon_particles_count += self.config.launch_particle_boost;
        self.tweens.remove_target(TweenTarget::Icon);
        self.icon.idle_tween = None;
        let launch = self.icon.launch(&self.config, self.surface.height);
        self.tweens.spawn(launch);
        self.icon.state = IconState::Launching;
        log::info!(
            "[upload] launch emission={}",
            self.session.icon_particles_count
        );
    }

    fn schedule_courier(&mut self, slot: usize, origin: Vec2, target: Vec2) {
        if slot == 0 {
            emit_scatter(
                &mut self.particles,
                &mut self.rng,
                origin,
                self.config.burst_particles,
                self.config.short_lifespan,
            );
        }
        let delay = self.config.stagger * slot as u32;
        let travel = self.config.travel;
        let desc = TweenDesc::new(TweenTarget::Courier(slot))
            .track(Track::new(Property::X, origin.x, target.x, travel, Easing::InQuad).delayed(delay))
            .track(Track::new(Property::Y, origin.y, target.y, travel, Easing::InQuad).delayed(delay));
        self.tweens.spawn(desc);
    }

    fn preseed(&mut self) {
        let bounds = self.icon.bounds();
        for _ in 0..self.config.preseed_cycles {
            emit_icon_particles(
                &mut self.particles,
                &mut self.rng,
                bounds,
                self.session.icon_particles_count,
            );
            self.particles.advance();
        }
    }

    fn arm_idle_tween(&mut self) {
        let bob = self.icon.idle_bob(&self.config);
        self.icon.idle_tween = Some(self.tweens.spawn(bob));
    }

    // ---------------- Accessors ----------------

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn particles(&self) -> &ParticleStore {
        &self.particles
    }

    pub fn icon_state(&self) -> IconState {
        self.icon.state
    }

    pub fn icon_transform(&self) -> IconTransform {
        self.icon.transform
    }

    pub fn icon_bounds(&self) -> Rect {
        self.icon.bounds()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn surface(&self) -> SurfaceSize {
        self.surface
    }

    pub fn pending_tweens(&self) -> usize {
        self.tweens.len()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }
}

fn courier_point(values: &Values) -> Option<Vec2> {
    let mut x = None;
    let mut y = None;
    for &(property, value) in values {
        match property {
            Property::X => x = Some(value),
            Property::Y => y = Some(value),
            Property::TranslateY | Property::Scale => {}
        }
    }
    Some(Vec2::new(x?, y?))
}
