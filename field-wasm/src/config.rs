use crate::math::clamp_finite;

pub const MIN_SMOOTHING: f32 = 0.001;
pub const MAX_SMOOTHING: f32 = 1.0;
pub const MAX_ROTATION_SPEED: f32 = 2.0;
pub const MAX_ATTRACTION: f32 = 1.0;
pub const MAX_SHELL_JITTER: f32 = 0.4;
pub const MAX_DEBRIS_SPIN: f32 = 0.1;

const DEFAULT_ROTATION_SPEED: f32 = 0.05;
const DEFAULT_SMOOTHING: f32 = 0.1;
const DEFAULT_ATTRACTION: f32 = 0.5;
const DEFAULT_SHELL_JITTER: f32 = 0.2;
const DEFAULT_DEBRIS_SPIN: f32 = 0.001;
const DEFAULT_WIREFRAME_SPIN_Y: f32 = 0.1;
const DEFAULT_WIREFRAME_SPIN_X: f32 = 0.05;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldConfig {
    pub rotation_speed: f32,
    pub smoothing: f32,
    pub attraction: f32,
    pub shell_jitter: f32,
    pub debris_spin: f32,
    pub wireframe_spin_y: f32,
    pub wireframe_spin_x: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            rotation_speed: DEFAULT_ROTATION_SPEED,
            smoothing: DEFAULT_SMOOTHING,
            attraction: DEFAULT_ATTRACTION,
            shell_jitter: DEFAULT_SHELL_JITTER,
            debris_spin: DEFAULT_DEBRIS_SPIN,
            wireframe_spin_y: DEFAULT_WIREFRAME_SPIN_Y,
            wireframe_spin_x: DEFAULT_WIREFRAME_SPIN_X,
        }
    }
}

impl FieldConfig {
    pub fn sanitize(&mut self) {
        self.rotation_speed = clamp_finite(
            self.rotation_speed,
            -MAX_ROTATION_SPEED,
            MAX_ROTATION_SPEED,
            DEFAULT_ROTATION_SPEED,
        );
        self.smoothing = clamp_finite(
            self.smoothing,
            MIN_SMOOTHING,
            MAX_SMOOTHING,
            DEFAULT_SMOOTHING,
        );
        self.attraction = clamp_finite(self.attraction, 0.0, MAX_ATTRACTION, DEFAULT_ATTRACTION);
        self.shell_jitter = clamp_finite(
            self.shell_jitter,
            0.0,
            MAX_SHELL_JITTER,
            DEFAULT_SHELL_JITTER,
        );
        self.debris_spin = clamp_finite(
            self.debris_spin,
            -MAX_DEBRIS_SPIN,
            MAX_DEBRIS_SPIN,
            DEFAULT_DEBRIS_SPIN,
        );
        self.wireframe_spin_y = clamp_finite(
            self.wireframe_spin_y,
            -MAX_ROTATION_SPEED,
            MAX_ROTATION_SPEED,
            DEFAULT_WIREFRAME_SPIN_Y,
        );
        self.wireframe_spin_x = clamp_finite(
            self.wireframe_spin_x,
            -MAX_ROTATION_SPEED,
            MAX_ROTATION_SPEED,
            DEFAULT_WIREFRAME_SPIN_X,
        );
    }
}
