//! Runtime configuration for [`UploadWidget`](crate::UploadWidget).
//!
//! Defaults reproduce the stock choreography; hosts normally only set `seed`.

use crate::constants::*;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("max_animated_files must be at least 1")]
    NoAnimatedFiles,
    #[error("{0} must be a positive duration")]
    ZeroDuration(&'static str),
    #[error("{name} must be positive and finite, got {value}")]
    InvalidLifespan { name: &'static str, value: f32 },
}

#[derive(Clone, Debug)]
pub struct WidgetConfig {
    pub max_animated_files: usize,
    pub preseed_cycles: u32,
    pub burst_particles: u32,
    pub trail_particles_per_tick: u32,
    pub short_lifespan: f32,
    pub stagger: Duration,
    pub travel: Duration,
    pub hide_base: Duration,
    pub hide_per_file: Duration,
    pub bob: Duration,
    pub launch_translate: Duration,
    pub launch_scale: Duration,
    pub launch_particle_boost: u32,
    /// Fixed seed for reproducible particle layouts; `None` draws from entropy.
    pub seed: Option<u64>,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            max_animated_files: MAX_ANIMATED_FILES,
            preseed_cycles: PRESEED_CYCLES,
            burst_particles: BURST_PARTICLES,
            trail_particles_per_tick: TRAIL_PARTICLES_PER_TICK,
            short_lifespan: SHORT_LIFESPAN,
            stagger: Duration::from_millis(STAGGER_MS),
            travel: Duration::from_millis(TRAVEL_MS),
            hide_base: Duration::from_millis(HIDE_BASE_MS),
            hide_per_file: Duration::from_millis(HIDE_PER_FILE_MS),
            bob: Duration::from_millis(BOB_MS),
            launch_translate: Duration::from_millis(LAUNCH_TRANSLATE_MS),
            launch_scale: Duration::from_millis(LAUNCH_SCALE_MS),
            launch_particle_boost: LAUNCH_PARTICLE_BOOST,
            seed: None,
        }
    }
}

impl WidgetConfig {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_animated_files == 0 {
            return Err(ConfigError::NoAnimatedFiles);
        }
        let durations = [
            ("travel", self.travel),
            ("bob", self.bob),
            ("launch_translate", self.launch_translate),
            ("launch_scale", self.launch_scale),
        ];
        for (name, d) in durations {
            if d.is_zero() {
                return Err(ConfigError::ZeroDuration(name));
            }
        }
        if !(self.short_lifespan.is_finite() && self.short_lifespan > 0.0) {
            return Err(ConfigError::InvalidLifespan {
                name: "short_lifespan",
                value: self.short_lifespan,
            });
        }
        Ok(())
    }

    /// Time after an accepted drop at which the active styling is removed.
    pub fn hide_delay(&self, animated_files: usize) -> Duration {
        self.hide_base + self.hide_per_file * animated_files as u32
    }
}
