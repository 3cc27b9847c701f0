use crate::config::FieldConfig;
use crate::math::{damp_towards, rotate_about_y, shell_point};
use crate::pointer::PointerInfluence;
use crate::rng::{spread, CHANNEL_PHI, CHANNEL_RADIUS, CHANNEL_THETA};

// Linear angle spreads, not a uniform sphere. The pole clustering is intended.
const ANGLE_SPREAD: f32 = 360.0;
const SHELL_RADIUS: f32 = 1.0;

pub struct ParticleField {
    home_x: Vec<f32>,
    home_y: Vec<f32>,
    home_z: Vec<f32>,
    positions: Vec<f32>,
    active_count: usize,
    seed: u32,
}

impl ParticleField {
    pub fn new(allocated: usize, active_count: usize, seed: u32, config: &FieldConfig) -> Self {
        let mut field = Self {
            home_x: Vec::new(),
            home_y: Vec::new(),
            home_z: Vec::new(),
            positions: Vec::new(),
            active_count: 0,
            seed,
        };
        field.rebuild(allocated, active_count, seed, config);
        field
    }

    pub fn rebuild(
        &mut self,
        allocated: usize,
        active_count: usize,
        seed: u32,
        config: &FieldConfig,
    ) {
        self.seed = seed;
        self.active_count = active_count.min(allocated);

        self.home_x.resize(allocated, 0.0);
        self.home_y.resize(allocated, 0.0);
        self.home_z.resize(allocated, 0.0);
        self.positions.resize(allocated * 3, 0.0);

        for i in 0..allocated {
            let key = i as u32;
            let theta = spread(seed, key, CHANNEL_THETA, ANGLE_SPREAD);
            let phi = spread(seed, key, CHANNEL_PHI, ANGLE_SPREAD);
            let r = SHELL_RADIUS + spread(seed, key, CHANNEL_RADIUS, config.shell_jitter);
            let (x, y, z) = shell_point(theta, phi, r);

            self.home_x[i] = x;
            self.home_y[i] = y;
            self.home_z[i] = z;

            let i3 = i * 3;
            self.positions[i3] = x;
            self.positions[i3 + 1] = y;
            self.positions[i3 + 2] = z;
        }
    }

    pub fn step(
        &mut self,
        elapsed: f32,
        pointer: &PointerInfluence,
        config: &FieldConfig,
    ) -> usize {
        let angle = elapsed * config.rotation_speed;
        let (sin, cos) = angle.sin_cos();
        let smoothing = config.smoothing;

        for i in 0..self.active_count {
            let (home_x, home_z) = rotate_about_y(self.home_x[i], self.home_z[i], sin, cos);
            let home_y = self.home_y[i];

            // Pull acts in the screen plane only; depth keeps following home.
            let (fx, fy) = pointer.force_at(home_x, home_y);

            let i3 = i * 3;
            self.positions[i3] = damp_towards(self.positions[i3], home_x + fx, smoothing);
            self.positions[i3 + 1] = damp_towards(self.positions[i3 + 1], home_y + fy, smoothing);
            self.positions[i3 + 2] = damp_towards(self.positions[i3 + 2], home_z, smoothing);
        }

        self.active_count
    }

    pub fn home(&self, i: usize) -> [f32; 3] {
        [self.home_x[i], self.home_y[i], self.home_z[i]]
    }

    pub fn rotated_home(&self, i: usize, angle: f32) -> [f32; 3] {
        let (sin, cos) = angle.sin_cos();
        let (x, z) = rotate_about_y(self.home_x[i], self.home_z[i], sin, cos);
        [x, self.home_y[i], z]
    }

    pub fn current(&self, i: usize) -> [f32; 3] {
        let i3 = i * 3;
        [
            self.positions[i3],
            self.positions[i3 + 1],
            self.positions[i3 + 2],
        ]
    }

    pub fn render_positions(&self) -> &[f32] {
        &self.positions[..self.active_count * 3]
    }

    pub fn buffer(&self) -> &[f32] {
        &self.positions
    }

    pub fn allocated(&self) -> usize {
        self.home_x.len()
    }

    pub fn active_count(&self) -> usize {
        self.active_count
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn release(&mut self) {
        self.home_x = Vec::new();
        self.home_y = Vec::new();
        self.home_z = Vec::new();
        self.positions = Vec::new();
        self.active_count = 0;
    }
}
