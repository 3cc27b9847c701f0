use crate::config::FieldConfig;

pub const WIREFRAME_SCALE: f32 = 0.9;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WireframeShell {
    pub rotation_x: f32,
    pub rotation_y: f32,
}

impl WireframeShell {
    pub fn update(&mut self, elapsed: f32, config: &FieldConfig) {
        self.rotation_y = -elapsed * config.wireframe_spin_y;
        self.rotation_x = -elapsed * config.wireframe_spin_x;
    }

    pub fn scale(&self) -> f32 {
        WIREFRAME_SCALE
    }
}

#[cfg(test)]
mod tests {
    use super::WireframeShell;
    use crate::config::FieldConfig;

    #[test]
    fn rotation_tracks_elapsed_time() {
        let mut shell = WireframeShell::default();
        shell.update(10.0, &FieldConfig::default());

        assert!((shell.rotation_y + 1.0).abs() < 1.0e-6);
        assert!((shell.rotation_x + 0.5).abs() < 1.0e-6);
        assert_eq!(shell.scale(), 0.9);
    }
}
