use wasm_bindgen::prelude::*;

mod config;
mod debris;
mod error;
mod field;
mod frame;
mod math;
mod pointer;
mod profile;
mod rng;
mod scroll;
mod wireframe;

pub use config::FieldConfig;
pub use debris::{DebrisField, DebrisItem, DebrisShape};
pub use error::SceneError;
pub use field::ParticleField;
pub use frame::{FrameInput, FrameStats, InteractionState, ScenePhase};
pub use pointer::{PointerInfluence, Viewport};
pub use profile::{DeviceProfile, ViewportClass, COMPACT_BREAKPOINT_PX};
pub use scroll::ScrollDepth;
pub use wireframe::WireframeShell;

pub const ALLOCATED_PARTICLES: usize = 4_000;
pub const DEBRIS_COUNT: usize = 20;
const EPSILON: f32 = 1.0e-6;
const DEBRIS_SALT: u32 = 0xdeb2_15ed;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
}

#[wasm_bindgen]
pub struct Scene {
    config: FieldConfig,
    profile: DeviceProfile,
    pending_profile: Option<DeviceProfile>,
    phase: ScenePhase,
    seed: u32,
    generation: u32,
    state: InteractionState,
    last_skipped: Option<SceneError>,
    field: ParticleField,
    depth: ScrollDepth,
    debris: DebrisField,
    wireframe: WireframeShell,
}

#[wasm_bindgen]
impl Scene {
    // seed 0 draws from the platform entropy source
    #[wasm_bindgen(constructor)]
    pub fn new(compact: bool, seed: u32) -> Scene {
        Scene::with_config(DeviceProfile::from_compact(compact), seed, FieldConfig::default())
    }

    #[allow(clippy::too_many_arguments)]
    pub fn tick(
        &mut self,
        dt: f32,
        pointer_x: f32,
        pointer_y: f32,
        viewport_width: f32,
        viewport_height: f32,
        scroll_offset: f32,
        screen_height: f32,
    ) -> bool {
        let input = FrameInput {
            pointer_ndc: [pointer_x, pointer_y],
            viewport: Viewport::new(viewport_width, viewport_height),
            scroll_offset,
            screen_height,
        };

        match self.tick_frame(dt, &input) {
            Ok(_) => true,
            Err(SceneError::Disposed) => false,
            Err(err) => {
                if self.note_skipped(err) {
                    log::warn!("frame {} skipped: {err}", self.state.frame);
                } else {
                    log::debug!("frame {} skipped: {err}", self.state.frame);
                }
                false
            }
        }
    }

    pub fn set_compact(&mut self, compact: bool) {
        self.request_profile(DeviceProfile::from_compact(compact));
    }

    pub fn set_viewport_width(&mut self, css_px: f32) {
        self.request_profile(DeviceProfile::for_class(ViewportClass::from_width(css_px)));
    }

    pub fn set_rotation_speed(&mut self, radians_per_second: f32) {
        self.config.rotation_speed = radians_per_second;
        self.config.sanitize();
    }

    pub fn set_smoothing(&mut self, factor: f32) {
        self.config.smoothing = factor;
        self.config.sanitize();
    }

    pub fn set_attraction(&mut self, attraction: f32) {
        self.config.attraction = attraction;
        self.config.sanitize();
    }

    pub fn set_debris_spin(&mut self, radians_per_frame: f32) {
        self.config.debris_spin = radians_per_frame;
        self.config.sanitize();
    }

    pub fn dispose(&mut self) {
        if self.phase == ScenePhase::Disposed {
            return;
        }
        self.phase = ScenePhase::Disposed;
        self.pending_profile = None;
        self.field.release();
        self.debris.release();
        log::debug!("scene disposed after {} frames", self.state.frame);
    }

    pub fn is_disposed(&self) -> bool {
        self.phase == ScenePhase::Disposed
    }

    pub fn is_compact(&self) -> bool {
        self.profile.class.is_compact()
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn particle_count(&self) -> usize {
        self.field.active_count()
    }

    pub fn positions_ptr(&self) -> *const f32 {
        self.field.render_positions().as_ptr()
    }

    pub fn positions_len(&self) -> usize {
        self.field.render_positions().len()
    }

    pub fn positions(&self) -> Vec<f32> {
        self.field.render_positions().to_vec()
    }

    pub fn elapsed(&self) -> f64 {
        self.state.elapsed
    }

    pub fn frame(&self) -> u32 {
        self.state.frame
    }

    pub fn group_scale(&self) -> f32 {
        self.profile.group_scale
    }

    pub fn group_depth(&self) -> f32 {
        self.state.depth
    }

    pub fn scroll_progress(&self) -> f32 {
        self.state.scroll_progress
    }

    pub fn point_size(&self) -> f32 {
        self.profile.point_size
    }

    pub fn wireframe_rotation_x(&self) -> f32 {
        self.wireframe.rotation_x
    }

    pub fn wireframe_rotation_y(&self) -> f32 {
        self.wireframe.rotation_y
    }

    pub fn wireframe_scale(&self) -> f32 {
        self.wireframe.scale()
    }

    pub fn debris_visible(&self) -> bool {
        self.profile.show_debris && self.phase != ScenePhase::Disposed
    }

    pub fn debris_rotation_y(&self) -> f32 {
        self.debris.rotation_y()
    }

    pub fn debris_count(&self) -> usize {
        self.debris.items().len()
    }

    pub fn debris_offsets(&self) -> Vec<f32> {
        self.debris.offsets()
    }

    pub fn debris_spins(&self) -> Vec<f32> {
        self.debris.spins()
    }

    pub fn debris_scales(&self) -> Vec<f32> {
        self.debris.scales()
    }

    pub fn debris_shapes(&self) -> Vec<u8> {
        self.debris.shapes()
    }
}

#[wasm_bindgen]
pub fn is_compact_width(css_px: f32) -> bool {
    profile::is_compact_width(css_px)
}

#[wasm_bindgen]
pub fn camera_viewport(aspect: f32) -> Vec<f32> {
    let viewport = Viewport::for_default_camera(aspect);
    vec![viewport.width, viewport.height]
}

#[wasm_bindgen]
pub fn wasm_loaded_message() -> String {
    "WASM loaded".to_string()
}
