use std::f32::consts::PI;

// Rotation tuning shared by every rotatable model. Presets override these
// per model where the scenes were tuned by hand.

// Radians of yaw per full viewport width of pointer travel
pub const POINTER_SENSITIVITY: f32 = 0.01 * PI;
// Touch deltas are raw pixels; this scales them before POINTER_SENSITIVITY
pub const TOUCH_MULTIPLIER: f32 = 0.01;
// Radians per wheel delta unit (pixels)
pub const WHEEL_SENSITIVITY: f32 = 0.0005;

// Arrow keys
pub const KEY_STEP: f32 = 0.015 * PI; // instantaneous yaw per keydown
pub const KEY_VELOCITY: f32 = 0.007; // velocity set per keydown (rad/frame)

// Idle decay
pub const DEFAULT_DAMPING: f32 = 0.95; // velocity multiplier per frame
pub const VELOCITY_EPSILON: f32 = 1e-3; // below this the velocity snaps to 0

// Angles beyond this magnitude are folded back by whole turns to keep f32 precision
pub const ANGLE_REWRAP_LIMIT: f32 = 64.0 * PI;

// Aim game timings
pub const AIM_COUNTDOWN_MS: u64 = 3_000;
pub const AIM_ROUND_MS: u64 = 30_000;
pub const AIM_SPAWN_INTERVAL_MS: u64 = 800;
pub const AIM_MIN_SPAWN_INTERVAL_MS: u64 = 1;
pub const AIM_TARGET_LIFETIME_MS: u64 = 1_200;
pub const AIM_MAX_TARGETS: usize = 6;

// Math quiz
pub const QUIZ_ROUND_MS: u64 = 60_000;
pub const QUIZ_MIN_OPERAND: i32 = 1;
pub const QUIZ_MAX_OPERAND: i32 = 12;
// Keeps every product and sum inside i32
pub const QUIZ_OPERAND_LIMIT: i32 = 10_000;

// Score flash shown after a hit/miss or an answer
pub const HIGHLIGHT_FLASH_MS: u64 = 300;
