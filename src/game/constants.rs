pub const ARENA_WIDTH: f64 = 800.0;
pub const ARENA_HEIGHT: f64 = 600.0;

pub const APPLE_COUNT: usize = 50;
pub const APPLE_RADIUS: f64 = 5.0;
pub const HEAD_RADIUS: f64 = 5.0;
pub const APPLE_PICKUP_DISTANCE: f64 = APPLE_RADIUS + HEAD_RADIUS;
pub const PARTICLE_PICKUP_DISTANCE: f64 = 10.0;
pub const LETHAL_DISTANCE: f64 = 10.0;

pub const APPLE_REWARD: i64 = 10;
pub const PARTICLE_REWARD: i64 = 5;

pub const STARTING_TARGET_LEN: usize = 5;
pub const STARTING_SPEED: f64 = 2.0;
pub const MAX_INPUT_SPEED: f64 = 10.0;

pub const PARTICLE_LIFESPAN_TICKS: i64 = 500;
pub const BURST_PER_SEGMENT: usize = 2;
pub const BURST_JITTER: f64 = 10.0;

pub const TICK_RATE_HZ: u64 = 60;
pub const TICK_MICROS: u64 = 1_000_000 / TICK_RATE_HZ;

pub const BOOST_RESET_MS: u64 = 1000;

pub const COLOR_POOL: [&str; 8] = [
  "#ff6b6b",
  "#ffd166",
  "#06d6a0",
  "#4dabf7",
  "#f06595",
  "#845ef7",
  "#20c997",
  "#fcc419",
];
