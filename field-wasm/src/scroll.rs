use crate::math::{damp_towards, nearly_zero};
use crate::profile::DeviceProfile;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollDepth {
    progress: f32,
    target: f32,
    depth: f32,
}

impl ScrollDepth {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn progress_for(scroll_offset: f32, screen_height: f32, cap: f32) -> f32 {
        if screen_height <= 0.0 || nearly_zero(screen_height) {
            return 0.0;
        }
        (scroll_offset / screen_height).clamp(0.0, cap.max(0.0))
    }

    pub fn target_for(progress: f32, depth_scale: f32) -> f32 {
        progress * depth_scale
    }

    pub fn update(
        &mut self,
        scroll_offset: f32,
        screen_height: f32,
        profile: &DeviceProfile,
        smoothing: f32,
    ) -> f32 {
        self.progress = Self::progress_for(scroll_offset, screen_height, profile.progress_cap);
        self.target = Self::target_for(self.progress, profile.depth_scale);
        debug_assert!(self.target <= profile.max_depth() + f32::EPSILON);
        self.depth = damp_towards(self.depth, self.target, smoothing);
        self.depth
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn depth(&self) -> f32 {
        self.depth
    }
}
