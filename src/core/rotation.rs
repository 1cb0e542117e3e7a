use super::constants::*;
use glam::Quat;
use std::f32::consts::TAU;

/// Per-model input tuning for a [`RotationController`].
///
/// Fields:
/// - `pointer_sensitivity`: radians of yaw per viewport width of pointer travel
/// - `touch_multiplier`: extra scale on top of `pointer_sensitivity` for touch
///   drags
/// - `wheel_sensitivity`: radians per wheel delta unit
/// - `key_step` / `key_velocity`: yaw added and velocity set per arrow keydown
/// - `damping`: velocity multiplier per idle frame, in (0, 1)
/// - `epsilon`: idle velocity magnitude that snaps to zero
/// - `auto_rotate`: optional constant yaw added on every idle frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotationConfig {
    pub pointer_sensitivity: f32,
    pub touch_multiplier: f32,
    pub wheel_sensitivity: f32,
    pub key_step: f32,
    pub key_velocity: f32,
    pub damping: f32,
    pub epsilon: f32,
    pub auto_rotate: Option<f32>,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            pointer_sensitivity: POINTER_SENSITIVITY,
            touch_multiplier: TOUCH_MULTIPLIER,
            wheel_sensitivity: WHEEL_SENSITIVITY,
            key_step: KEY_STEP,
            key_velocity: KEY_VELOCITY,
            damping: DEFAULT_DAMPING,
            epsilon: VELOCITY_EPSILON,
            auto_rotate: None,
        }
    }
}

/// Arrow keys that rotate a model.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArrowKey {
    Left,
    Right,
}

impl ArrowKey {
    /// Parse a DOM `KeyboardEvent.key` value.
    #[inline]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(ArrowKey::Left),
            "ArrowRight" => Some(ArrowKey::Right),
            _ => None,
        }
    }

    /// Left turns the model towards positive yaw.
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            ArrowKey::Left => 1.0,
            ArrowKey::Right => -1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Gesture {
    Pointer,
    Touch,
    Key(ArrowKey),
}

/// Yaw and angular velocity of one model.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AngularState {
    pub angle: f32,
    pub velocity: f32,
    pub damping: f32,
}

/// What a frame tick hands to the stage classifier and the scene host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameSample {
    pub angle: f32,
    pub velocity: f32,
    /// A drag, touch, key or wheel gesture drove the model this frame.
    pub rotating: bool,
}

/// Converts pointer, touch, wheel and arrow-key input into a damped yaw.
///
/// Input handlers update the angle immediately; [`tick`](Self::tick) runs once
/// per rendered frame and integrates the remaining velocity while no gesture is
/// held. All calls happen on the UI thread, so there is no interior locking.
///
/// Typical usage:
/// - Build with `RotationController::new(preset.rotation_config())`
/// - Forward DOM events to the `on_*` handlers
/// - Call `tick()` from the animation frame and apply `yaw()` to the model
#[derive(Clone, Debug)]
pub struct RotationController {
    config: RotationConfig,
    state: AngularState,
    held: Option<Gesture>,
    last_x: Option<f32>,
    wheel_pulse: bool,
}

impl RotationController {
    pub fn new(config: RotationConfig) -> Self {
        let mut config = config;
        if !(config.damping > 0.0 && config.damping < 1.0) {
            log::warn!(
                "[rotation] damping {} outside (0, 1); using {}",
                config.damping,
                DEFAULT_DAMPING
            );
            config.damping = DEFAULT_DAMPING;
        }
        Self {
            config,
            state: AngularState {
                angle: 0.0,
                velocity: 0.0,
                damping: config.damping,
            },
            held: None,
            last_x: None,
            wheel_pulse: false,
        }
    }

    /// Start from a given yaw instead of zero.
    pub fn with_angle(mut self, angle: f32) -> Self {
        self.set_angle(angle);
        self
    }

    #[inline]
    pub fn angle(&self) -> f32 {
        self.state.angle
    }

    #[inline]
    pub fn velocity(&self) -> f32 {
        self.state.velocity
    }

    /// True while a pointer, touch or arrow-key gesture is held.
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.held.is_some()
    }

    /// Yaw as a rotation about +Y, ready for the host transform.
    #[inline]
    pub fn yaw(&self) -> Quat {
        Quat::from_rotation_y(self.state.angle)
    }

    pub fn set_angle(&mut self, angle: f32) {
        if angle.is_finite() {
            self.state.angle = angle;
        }
    }

    /// Drop any gesture and motion, keeping the current angle.
    pub fn stop(&mut self) {
        self.held = None;
        self.last_x = None;
        self.wheel_pulse = false;
        self.state.velocity = 0.0;
    }

    pub fn on_drag_start(&mut self, pointer_x: f32) {
        self.begin(Gesture::Pointer, pointer_x);
    }

    pub fn on_touch_start(&mut self, touch_x: f32) {
        self.begin(Gesture::Touch, touch_x);
    }

    /// Pointer drag. The delta is normalized by the viewport width; a zero or
    /// non-finite width leaves the angle and velocity untouched. Ignored
    /// unless a pointer drag is held.
    pub fn on_drag_move(&mut self, pointer_x: f32, viewport_width: f32) {
        if self.held != Some(Gesture::Pointer) {
            return;
        }
        if let Some(delta) = self.width_delta(pointer_x, viewport_width) {
            self.apply_step(delta * self.config.pointer_sensitivity);
        }
    }

    /// Touch drag. Same normalization as a pointer drag, scaled again by
    /// `touch_multiplier`.
    pub fn on_touch_move(&mut self, touch_x: f32, viewport_width: f32) {
        if self.held != Some(Gesture::Touch) {
            return;
        }
        if let Some(delta) = self.width_delta(touch_x, viewport_width) {
            self.apply_step(delta * self.config.touch_multiplier * self.config.pointer_sensitivity);
        }
    }

    /// Release a pointer drag. Velocity is kept and decays in `tick`.
    /// Returns whether a pointer drag was held; other gestures are left alone.
    pub fn on_drag_end(&mut self) -> bool {
        self.release(Gesture::Pointer)
    }

    pub fn on_touch_end(&mut self) -> bool {
        self.release(Gesture::Touch)
    }

    /// Wheel acts as an instantaneous drag. The model counts as rotating for
    /// the next frame only, so the velocity still decays afterwards.
    pub fn on_wheel(&mut self, delta_y: f32) {
        if !delta_y.is_finite() {
            return;
        }
        self.apply_step(delta_y * self.config.wheel_sensitivity);
        self.wheel_pulse = true;
    }

    /// Returns whether the key was an arrow key this controller consumed.
    pub fn on_key_down(&mut self, key: &str) -> bool {
        let Some(arrow) = ArrowKey::from_key(key) else {
            return false;
        };
        self.state.angle += arrow.sign() * self.config.key_step;
        self.state.velocity = arrow.sign() * self.config.key_velocity;
        // a pointer or touch drag keeps ownership until it is released
        if matches!(self.held, None | Some(Gesture::Key(_))) {
            self.held = Some(Gesture::Key(arrow));
        }
        true
    }

    /// Releasing an arrow ends a key gesture; a pointer drag in progress is
    /// left alone.
    pub fn on_key_up(&mut self, key: &str) -> bool {
        if ArrowKey::from_key(key).is_none() {
            return false;
        }
        if matches!(self.held, Some(Gesture::Key(_))) {
            self.held = None;
        }
        true
    }

    /// Advance one rendered frame.
    pub fn tick(&mut self) -> FrameSample {
        let rotating = self.held.is_some() || std::mem::take(&mut self.wheel_pulse);
        if self.held.is_none() {
            self.state.velocity *= self.state.damping;
            if self.state.velocity.abs() < self.config.epsilon {
                self.state.velocity = 0.0;
            }
            self.state.angle += self.state.velocity;
            if let Some(spin) = self.config.auto_rotate {
                self.state.angle += spin;
            }
        }
        if self.state.angle.abs() > ANGLE_REWRAP_LIMIT {
            self.state.angle %= TAU;
        }
        FrameSample {
            angle: self.state.angle,
            velocity: self.state.velocity,
            rotating,
        }
    }

    fn begin(&mut self, gesture: Gesture, x: f32) {
        self.held = Some(gesture);
        self.last_x = x.is_finite().then_some(x);
    }

    fn release(&mut self, gesture: Gesture) -> bool {
        if self.held != Some(gesture) {
            return false;
        }
        self.held = None;
        self.last_x = None;
        true
    }

    // Width-normalized delta from the previous sample. The sample is recorded
    // even when the width is unusable, so the next move does not jump.
    fn width_delta(&mut self, x: f32, viewport_width: f32) -> Option<f32> {
        if !x.is_finite() {
            return None;
        }
        let dx = self.last_x.replace(x).map(|prev| x - prev)?;
        (viewport_width.is_finite() && viewport_width > 0.0).then(|| dx / viewport_width)
    }

    fn apply_step(&mut self, step: f32) {
        self.state.angle += step;
        self.state.velocity = step;
    }
}

impl Default for RotationController {
    fn default() -> Self {
        Self::new(RotationConfig::default())
    }
}
