use crate::debris::DebrisField;
use crate::error::SceneError;
use crate::field::ParticleField;
use crate::pointer::{PointerInfluence, Viewport};
use crate::profile::DeviceProfile;
use crate::rng::{derive_seed, entropy_seed, hash_u32};
use crate::scroll::ScrollDepth;
use crate::wireframe::WireframeShell;
use crate::{FieldConfig, Scene, ALLOCATED_PARTICLES, DEBRIS_COUNT, DEBRIS_SALT};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScenePhase {
    Running,
    Reinitializing,
    Disposed,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameInput {
    pub pointer_ndc: [f32; 2],
    pub viewport: Viewport,
    pub scroll_offset: f32,
    pub screen_height: f32,
}

impl FrameInput {
    fn validate(&self) -> Result<(), SceneError> {
        let [pointer_x, pointer_y] = self.pointer_ndc;
        if !pointer_x.is_finite() || !pointer_y.is_finite() {
            return Err(SceneError::InvalidInput { field: "pointer" });
        }
        if !(self.viewport.width.is_finite() && self.viewport.width >= 0.0)
            || !(self.viewport.height.is_finite() && self.viewport.height >= 0.0)
        {
            return Err(SceneError::InvalidInput { field: "viewport" });
        }
        if !self.scroll_offset.is_finite() {
            return Err(SceneError::InvalidInput {
                field: "scroll_offset",
            });
        }
        if !self.screen_height.is_finite() {
            return Err(SceneError::InvalidInput {
                field: "screen_height",
            });
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InteractionState {
    pub elapsed: f64,
    pub frame: u32,
    pub pointer_ndc: [f32; 2],
    pub scroll_progress: f32,
    pub depth: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameStats {
    pub frame: u32,
    pub particles_updated: usize,
    pub depth: f32,
    pub reinitialized: bool,
}

impl Scene {
    pub fn with_config(profile: DeviceProfile, seed: u32, mut config: FieldConfig) -> Scene {
        config.sanitize();
        let seed = if seed == 0 { entropy_seed() } else { seed };
        let field_seed = derive_seed(seed, 0);

        log::info!(
            "hero scene: {} particles of {}, seed {seed:#010x}",
            profile.particle_count,
            ALLOCATED_PARTICLES
        );

        Scene {
            config,
            profile,
            pending_profile: None,
            phase: ScenePhase::Running,
            seed,
            generation: 0,
            state: InteractionState::default(),
            last_skipped: None,
            field: ParticleField::new(
                ALLOCATED_PARTICLES,
                profile.particle_count,
                field_seed,
                &config,
            ),
            depth: ScrollDepth::new(),
            debris: DebrisField::new(DEBRIS_COUNT, hash_u32(field_seed, 0, DEBRIS_SALT)),
            wireframe: WireframeShell::default(),
        }
    }

    pub fn tick_frame(&mut self, dt: f32, input: &FrameInput) -> Result<FrameStats, SceneError> {
        if self.phase == ScenePhase::Disposed {
            return Err(SceneError::Disposed);
        }
        if !dt.is_finite() || dt < 0.0 {
            return Err(SceneError::InvalidInput { field: "dt" });
        }
        input.validate()?;

        let reinitialized = self.apply_pending_profile();

        self.state.elapsed += f64::from(dt);
        self.state.frame = self.state.frame.wrapping_add(1);
        self.state.pointer_ndc = input.pointer_ndc;

        self.state.depth = self.depth.update(
            input.scroll_offset,
            input.screen_height,
            &self.profile,
            self.config.smoothing,
        );
        self.state.scroll_progress = self.depth.progress();

        let [pointer_x, pointer_y] = self.state.pointer_ndc;
        let pointer = PointerInfluence::from_ndc(
            pointer_x,
            pointer_y,
            input.viewport,
            self.profile.force_radius,
            self.config.attraction,
        );
        // Accumulated in f64; f32 only past this point.
        let elapsed = self.state.elapsed as f32;
        let particles_updated = self.field.step(elapsed, &pointer, &self.config);

        self.wireframe.update(elapsed, &self.config);
        if self.profile.show_debris {
            self.debris.step(self.config.debris_spin);
        }

        self.last_skipped = None;
        Ok(FrameStats {
            frame: self.state.frame,
            particles_updated,
            depth: self.state.depth,
            reinitialized,
        })
    }

    // Returns true only for the first skip of a run with the same cause.
    pub(crate) fn note_skipped(&mut self, err: SceneError) -> bool {
        if self.last_skipped == Some(err) {
            return false;
        }
        self.last_skipped = Some(err);
        true
    }

    pub fn request_profile(&mut self, profile: DeviceProfile) {
        if self.phase == ScenePhase::Disposed {
            return;
        }
        if profile == self.profile {
            // Flipped back before the pending change was consumed.
            self.pending_profile = None;
            self.phase = ScenePhase::Running;
            return;
        }
        self.pending_profile = Some(profile);
        self.phase = ScenePhase::Reinitializing;
    }

    fn apply_pending_profile(&mut self) -> bool {
        let Some(profile) = self.pending_profile.take() else {
            return false;
        };

        let previous = self.profile;
        self.generation = self.generation.wrapping_add(1);
        let field_seed = derive_seed(self.seed, self.generation);

        self.profile = profile;
        self.field.rebuild(
            ALLOCATED_PARTICLES,
            profile.particle_count,
            field_seed,
            &self.config,
        );
        if profile.show_debris && !previous.show_debris {
            self.debris = DebrisField::new(DEBRIS_COUNT, hash_u32(field_seed, 0, DEBRIS_SALT));
        }
        self.phase = ScenePhase::Running;

        log::info!(
            "viewport class {:?} -> {:?}: rebuilt {} particles (generation {})",
            previous.class,
            profile.class,
            profile.particle_count,
            self.generation
        );
        true
    }

    pub fn phase(&self) -> ScenePhase {
        self.phase
    }

    pub fn profile(&self) -> &DeviceProfile {
        &self.profile
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn particles(&self) -> &ParticleField {
        &self.field
    }

    pub fn debris(&self) -> &DebrisField {
        &self.debris
    }
}
