// Host-side scenario tests for the upload widget: drag/drop input, the
// staggered drop sequences, the launch and the reset back to idle.

use std::time::Duration;
use upload_core::render::{DrawSink, Rgba};
use upload_core::{
    DropOutcome, FrameLoop, IconState, IconTransform, Rect, SessionState, SurfaceSize,
    UploadWidget, WidgetConfig,
};

const FRAME: Duration = Duration::from_millis(16);

#[derive(Default)]
struct CountingSink {
    clears: usize,
    fills: usize,
}

impl DrawSink for CountingSink {
    fn clear_rect(&mut self, _rect: Rect) {
        self.clears += 1;
    }
    fn set_fill(&mut self, _color: Rgba) {}
    fn fill_rect(&mut self, _rect: Rect) {
        self.fills += 1;
    }
}

fn make_widget() -> UploadWidget {
    UploadWidget::new(
        WidgetConfig::with_seed(42),
        SurfaceSize::new(800.0, 600.0),
        Rect::new(370.0, 270.0, 60.0, 60.0),
    )
    .expect("default config is valid")
}

/// Ticks frame by frame until `done` holds, returning the elapsed time.
fn run_until(
    widget: &mut UploadWidget,
    sink: &mut CountingSink,
    limit: Duration,
    mut done: impl FnMut(&UploadWidget) -> bool,
) -> Option<Duration> {
    let mut elapsed = Duration::ZERO;
    while elapsed <= limit {
        widget.tick(FRAME, sink);
        elapsed += FRAME;
        if done(widget) {
            return Some(elapsed);
        }
    }
    None
}

#[test]
fn new_widget_is_preseeded_and_idle() {
    let w = make_widget();
    assert!(!w.particles().is_empty());
    assert_eq!(*w.session(), SessionState::default());
    assert_eq!(w.icon_state(), IconState::Idle);
    assert_eq!(w.icon_transform(), IconTransform::IDENTITY);
    assert!(!w.is_active());
    // Idle bob is prepared but not playing, so nothing asks for frames
    assert_eq!(w.pending_tweens(), 1);
    assert!(!w.wants_frame());
}

#[test]
fn invalid_config_is_rejected() {
    let config = WidgetConfig {
        max_animated_files: 0,
        ..WidgetConfig::with_seed(1)
    };
    assert!(UploadWidget::new(config, SurfaceSize::new(1.0, 1.0), Rect::default()).is_err());
}

#[test]
fn drag_enter_and_leave_toggle_idle_animation() {
    let mut w = make_widget();
    let mut sink = CountingSink::default();
    w.on_drag_enter();
    assert!(w.is_active());
    assert!(w.session().playing_icon_animation);
    assert_eq!(w.session().frame_loop, FrameLoop::Running);

    // Repeated dragover must not double-start
    w.on_drag_enter();
    assert_eq!(w.session().frame_loop, FrameLoop::Running);

    for _ in 0..10 {
        w.tick(FRAME, &mut sink);
    }
    assert_eq!(sink.clears, 10);
    assert!(w.icon_transform().translate_y < 0.0, "icon should bob upward");

    w.on_drag_leave();
    assert!(!w.is_active());
    assert!(!w.session().playing_icon_animation);
    assert_eq!(w.session().frame_loop, FrameLoop::Stopped);
    assert!(!w.wants_frame());

    let before = w.particles().len();
    w.tick(FRAME, &mut sink);
    assert_eq!(w.particles().len(), before, "loop must not run when paused");
}

#[test]
fn zero_file_drop_hides_and_pauses() {
    let mut w = make_widget();
    w.on_drag_enter();
    let before = w.particles().len();
    assert_eq!(w.on_drop(0, 100.0, 100.0), DropOutcome::Cancelled);
    assert!(!w.is_active());
    assert!(!w.session().playing_icon_animation);
    assert!(!w.session().animating_upload);
    assert_eq!(w.particles().len(), before);
}

#[test]
fn drop_is_ignored_while_upload_animates() {
    let mut w = make_widget();
    w.on_drag_enter();
    assert_eq!(
        w.on_drop(2, 100.0, 100.0),
        DropOutcome::Accepted {
            files: 2,
            animated: 2
        }
    );
    let particles = w.particles().len();
    let count = w.session().icon_particles_count;
    let tweens = w.pending_tweens();

    assert_eq!(w.on_drop(3, 50.0, 50.0), DropOutcome::Ignored);
    assert_eq!(w.particles().len(), particles);
    assert_eq!(w.session().icon_particles_count, count);
    assert_eq!(w.pending_tweens(), tweens);

    // Drag input is ignored as well
    w.on_drag_leave();
    assert!(w.is_active());
    assert!(w.session().playing_icon_animation);
}

#[test]
fn extra_files_are_accepted_but_not_animated() {
    let mut w = make_widget();
    w.on_drag_enter();
    assert_eq!(
        w.on_drop(7, 10.0, 10.0),
        DropOutcome::Accepted {
            files: 7,
            animated: 3
        }
    );
    // idle bob + three couriers
    assert_eq!(w.pending_tweens(), 4);
}

#[test]
fn primary_burst_is_immediate() {
    let mut w = make_widget();
    let before = w.particles().len();
    w.on_drop(3, 10.0, 10.0);
    assert_eq!(w.particles().len(), before + 20);
}

#[test]
fn launch_waits_for_the_last_staggered_sequence() {
    let mut w = make_widget();
    let mut sink = CountingSink::default();
    w.on_drag_enter();
    w.on_drop(3, 100.0, 500.0);

    let launched = run_until(&mut w, &mut sink, Duration::from_secs(3), |w| {
        w.icon_state() == IconState::Launching
    })
    .expect("launch never started");
    assert!(
        launched >= Duration::from_millis(900),
        "launched after {launched:?}"
    );
    assert!(launched < Duration::from_millis(900) + FRAME * 2);
    assert_eq!(w.session().icon_particles_count, 3);
}

#[test]
fn single_file_launches_after_travel() {
    let mut w = make_widget();
    let mut sink = CountingSink::default();
    w.on_drag_enter();
    w.on_drop(1, 100.0, 500.0);
    let launched = run_until(&mut w, &mut sink, Duration::from_secs(2), |w| {
        w.icon_state() == IconState::Launching
    })
    .expect("launch never started");
    assert!(launched >= Duration::from_millis(500));
    assert!(launched < Duration::from_millis(900));
}

#[test]
fn travel_ticks_leave_a_trail() {
    let mut w = make_widget();
    let mut sink = CountingSink::default();
    // Frame loop stays stopped, so only the courier trail adds particles
    w.on_drop(1, 100.0, 500.0);
    let before = w.particles().len();
    w.tick(FRAME, &mut sink);
    assert_eq!(w.particles().len(), before + 10);
}

#[test]
fn active_styling_is_hidden_after_timeout() {
    let mut w = make_widget();
    let mut sink = CountingSink::default();
    w.on_drag_enter();
    w.on_drop(2, 100.0, 100.0);
    let hidden = run_until(&mut w, &mut sink, Duration::from_secs(3), |w| !w.is_active())
        .expect("active class never removed");
    assert!(hidden >= Duration::from_millis(1800));
    assert!(hidden < Duration::from_millis(1800) + FRAME * 2);
}

#[test]
fn launch_moves_icon_off_surface_then_resets() {
    let mut w = make_widget();
    let mut sink = CountingSink::default();
    w.on_drag_enter();
    w.on_drop(1, 100.0, 500.0);

    run_until(&mut w, &mut sink, Duration::from_secs(2), |w| {
        w.icon_state() == IconState::Launching
    })
    .expect("launch never started");

    // Halfway through the scale track the translate track has finished
    run_until(&mut w, &mut sink, Duration::from_millis(1100), |_| false);
    let t = w.icon_transform();
    assert!((t.translate_y - (-300.0 - 60.0)).abs() < 1.0, "{t:?}");
    assert!(t.scale > 1.0);

    let reset = run_until(&mut w, &mut sink, Duration::from_secs(2), |w| {
        !w.session().animating_upload
    })
    .expect("never reset");
    assert!(reset > Duration::ZERO);
    assert_eq!(*w.session(), SessionState::default());
    assert_eq!(w.icon_state(), IconState::Idle);
    assert_eq!(w.icon_transform(), IconTransform::IDENTITY);
    assert!(!w.particles().is_empty());

    // The reset frame already cleared the surface; the host may stop
    assert!(!w.wants_frame());
    let clears = sink.clears;
    w.tick(FRAME, &mut sink);
    assert_eq!(sink.clears, clears);
}

#[test]
fn launch_completion_passes_through_resetting_state() {
    let mut w = make_widget();
    let mut sink = CountingSink::default();
    w.on_drag_enter();
    w.on_drop(1, 0.0, 0.0);
    let mut seen_resetting = false;
    run_until(&mut w, &mut sink, Duration::from_secs(4), |w| {
        seen_resetting |= w.icon_state() == IconState::ResettingToIdle;
        !w.session().animating_upload
    })
    .expect("never reset");
    assert!(seen_resetting);
}

#[test]
fn reset_twice_matches_reset_once() {
    let mut w = make_widget();
    let mut sink = CountingSink::default();
    w.on_drag_enter();
    w.on_drop(3, 100.0, 100.0);
    run_until(&mut w, &mut sink, Duration::from_millis(1000), |_| false);

    w.reset();
    let once = (
        w.session().clone(),
        w.icon_state(),
        w.icon_transform(),
        w.pending_tweens(),
        w.pending_timers(),
    );
    assert!(!w.particles().is_empty());
    w.reset();
    let twice = (
        w.session().clone(),
        w.icon_state(),
        w.icon_transform(),
        w.pending_tweens(),
        w.pending_timers(),
    );
    assert_eq!(once, twice);
    assert!(!w.particles().is_empty());
    assert_eq!(w.session().icon_particles_count, 1);
    assert!(!w.session().animating_upload);
    assert_eq!(w.pending_tweens(), 1);
    assert_eq!(w.pending_timers(), 0);
}

#[test]
fn resize_mid_upload_cancels_everything() {
    let mut w = make_widget();
    let mut sink = CountingSink::default();
    w.on_drag_enter();
    w.on_drop(3, 100.0, 100.0);
    w.tick(FRAME, &mut sink);

    w.on_resize(1024.0, 768.0);
    assert_eq!(w.surface(), SurfaceSize::new(1024.0, 768.0));
    assert!(!w.is_active());
    assert_eq!(*w.session(), SessionState::default());

    // Stale couriers must not launch the icon later
    run_until(&mut w, &mut sink, Duration::from_secs(3), |_| false);
    assert_eq!(w.icon_state(), IconState::Idle);
    assert_eq!(w.icon_transform(), IconTransform::IDENTITY);

    // A new upload is accepted afterwards
    w.on_drag_enter();
    assert!(matches!(
        w.on_drop(1, 10.0, 10.0),
        DropOutcome::Accepted { .. }
    ));
}

#[test]
fn same_seed_gives_same_particles() {
    let a = make_widget();
    let b = make_widget();
    assert_eq!(a.particles().len(), b.particles().len());
    assert!(a
        .particles()
        .iter()
        .zip(b.particles().iter())
        .all(|(p, q)| p == q));
}
