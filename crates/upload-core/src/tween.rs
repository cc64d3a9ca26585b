//! A small tween engine: declarative descriptors in, value updates and
//! completion events out.
//!
//! Completion is reported as data ([`TweenEvent::Complete`]) rather than
//! through callbacks, so the owner decides what happens next in one place.

use crate::easing::Easing;
use smallvec::SmallVec;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TweenTarget {
    Icon,
    /// Synthetic point travelling from a drop location to the icon.
    Courier(usize),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Property {
    TranslateY,
    Scale,
    X,
    Y,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Normal,
    Alternate,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TweenId(u32);

#[derive(Clone, Copy, Debug)]
pub struct Track {
    pub property: Property,
    pub from: f32,
    pub to: f32,
    pub duration: Duration,
    pub delay: Duration,
    pub easing: Easing,
}

impl Track {
    pub fn new(property: Property, from: f32, to: f32, duration: Duration, easing: Easing) -> Self {
        Self {
            property,
            from,
            to,
            duration,
            delay: Duration::ZERO,
            easing,
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    fn end(&self) -> Duration {
        self.delay + self.duration
    }

    fn value_at(&self, elapsed: Duration) -> f32 {
        let Some(local) = elapsed.checked_sub(self.delay) else {
            return self.from;
        };
        let t = if self.duration.is_zero() {
            1.0
        } else {
            (local.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
        };
        self.from + (self.to - self.from) * self.easing.apply(t)
    }
}

pub type Values = SmallVec<[(Property, f32); 2]>;

#[derive(Clone, Debug)]
pub struct TweenDesc {
    pub target: TweenTarget,
    pub tracks: SmallVec<[Track; 2]>,
    pub direction: Direction,
    pub looping: bool,
    pub autoplay: bool,
}

impl TweenDesc {
    pub fn new(target: TweenTarget) -> Self {
        Self {
            target,
            tracks: SmallVec::new(),
            direction: Direction::Normal,
            looping: false,
            autoplay: true,
        }
    }

    pub fn track(mut self, track: Track) -> Self {
        self.tracks.push(track);
        self
    }

    pub fn alternate(mut self) -> Self {
        self.direction = Direction::Alternate;
        self
    }

    pub fn looping(mut self) -> Self {
        self.looping = true;
        self
    }

    pub fn paused(mut self) -> Self {
        self.autoplay = false;
        self
    }

    fn iteration(&self) -> Duration {
        self.tracks
            .iter()
            .map(Track::end)
            .max()
            .unwrap_or(Duration::ZERO)
    }

    fn start(&self) -> Duration {
        self.tracks
            .iter()
            .map(|t| t.delay)
            .min()
            .unwrap_or(Duration::ZERO)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum TweenEvent {
    Update {
        id: TweenId,
        target: TweenTarget,
        values: Values,
    },
    Complete {
        id: TweenId,
        target: TweenTarget,
    },
}

#[derive(Debug)]
struct Tween {
    id: TweenId,
    desc: TweenDesc,
    elapsed: Duration,
    playing: bool,
}

impl Tween {
    /// Position inside the current iteration, mirrored on odd alternate passes.
    fn local_time(&self, iteration: Duration) -> Duration {
        if !self.desc.looping || iteration.is_zero() {
            return self.elapsed.min(iteration);
        }
        let len = iteration.as_nanos();
        let pass = self.elapsed.as_nanos() / len;
        let within = Duration::from_nanos((self.elapsed.as_nanos() % len) as u64);
        if self.desc.direction == Direction::Alternate && pass % 2 == 1 {
            iteration - within
        } else {
            within
        }
    }

    fn values(&self, local: Duration) -> Values {
        self.desc
            .tracks
            .iter()
            .map(|t| (t.property, t.value_at(local)))
            .collect()
    }
}

#[derive(Debug, Default)]
pub struct TweenEngine {
    tweens: Vec<Tween>,
    next_id: u32,
}

impl TweenEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self, desc: TweenDesc) -> TweenId {
        let id = TweenId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        let playing = desc.autoplay;
        self.tweens.push(Tween {
            id,
            desc,
            elapsed: Duration::ZERO,
            playing,
        });
        id
    }

    pub fn play(&mut self, id: TweenId) {
        if let Some(t) = self.tweens.iter_mut().find(|t| t.id == id) {
            t.playing = true;
        }
    }

    pub fn pause(&mut self, id: TweenId) {
        if let Some(t) = self.tweens.iter_mut().find(|t| t.id == id) {
            t.playing = false;
        }
    }

    pub fn is_playing(&self, id: TweenId) -> bool {
        self.tweens.iter().any(|t| t.id == id && t.playing)
    }

    /// Cancels every tween animating `target`; no completion is reported.
    pub fn remove_target(&mut self, target: TweenTarget) {
        self.tweens.retain(|t| t.desc.target != target);
    }

    pub fn clear(&mut self) {
        self.tweens.clear();
    }

    pub fn has_playing(&self) -> bool {
        self.tweens.iter().any(|t| t.playing)
    }

    pub fn len(&self) -> usize {
        self.tweens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tweens.is_empty()
    }

    /// Advances every playing tween by `dt`, appending events in spawn order.
    pub fn advance(&mut self, dt: Duration, out: &mut Vec<TweenEvent>) {
        for tween in self.tweens.iter_mut().filter(|t| t.playing) {
            tween.elapsed += dt;
            if tween.elapsed < tween.desc.start() {
                continue;
            }
            let iteration = tween.desc.iteration();
            let local = tween.local_time(iteration);
            out.push(TweenEvent::Update {
                id: tween.id,
                target: tween.desc.target,
                values: tween.values(local),
            });
            if !tween.desc.looping && tween.elapsed >= iteration {
                out.push(TweenEvent::Complete {
                    id: tween.id,
                    target: tween.desc.target,
                });
            }
        }
        self.tweens
            .retain(|t| t.desc.looping || !t.playing || t.elapsed < t.desc.iteration());
    }
}
