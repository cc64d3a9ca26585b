// Tuning constants for the upload widget. Frame counts are per animation
// frame, durations are milliseconds.

// Particle lifespans
pub const DEFAULT_DEATH_MAX: f32 = 200.0; // upper bound of the random default lifespan
pub const SHORT_LIFESPAN: f32 = 60.0; // burst and trail particles

// Idle emission
pub const INITIAL_ICON_PARTICLES: u32 = 1;
pub const PRESEED_CYCLES: u32 = 100; // idle updates applied before the first render
pub const ICON_EDGE_MARGIN: f32 = 10.0; // keeps idle particles inside the icon width

// Drop handling
pub const MAX_ANIMATED_FILES: usize = 3;
pub const BURST_PARTICLES: u32 = 20; // immediate burst, primary slot only
pub const TRAIL_PARTICLES_PER_TICK: u32 = 10;
pub const SCATTER_SPREAD: f32 = 30.0; // position jitter of burst/trail particles
pub const SCATTER_VELOCITY: f32 = 2.0;
pub const DROP_JITTER: f32 = 100.0; // secondary slots land within +-50px
pub const STAGGER_MS: u64 = 200;
pub const TRAVEL_MS: u64 = 500;
pub const HIDE_BASE_MS: u64 = 1500;
pub const HIDE_PER_FILE_MS: u64 = 150;

// Idle bob
pub const BOB_OFFSET: f32 = -10.0;
pub const BOB_MS: u64 = 800;

// Launch
pub const LAUNCH_TRANSLATE_MS: u64 = 1000;
pub const LAUNCH_SCALE_MS: u64 = 2000;
pub const LAUNCH_SCALE_STEP: f32 = 0.1;
pub const LAUNCH_ELASTICITY: f32 = 800.0;
pub const LAUNCH_PARTICLE_BOOST: u32 = 2;
