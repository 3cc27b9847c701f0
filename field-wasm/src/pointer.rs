use crate::math::length_2d;

pub const CAMERA_DISTANCE: f32 = 5.0;
pub const CAMERA_FOV_DEG: f32 = 45.0;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn from_camera(fov_deg: f32, distance: f32, aspect: f32) -> Self {
        let height = 2.0 * (fov_deg.to_radians() * 0.5).tan() * distance;
        Self {
            width: height * aspect,
            height,
        }
    }

    pub fn for_default_camera(aspect: f32) -> Self {
        Self::from_camera(CAMERA_FOV_DEG, CAMERA_DISTANCE, aspect)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerInfluence {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub strength: f32,
}

impl PointerInfluence {
    pub fn from_ndc(
        ndc_x: f32,
        ndc_y: f32,
        viewport: Viewport,
        radius: f32,
        strength: f32,
    ) -> Self {
        Self {
            x: ndc_x * viewport.width * 0.5,
            y: ndc_y * viewport.height * 0.5,
            radius,
            strength,
        }
    }

    pub fn influence(&self, dist: f32) -> f32 {
        if self.radius <= 0.0 || dist.is_nan() || dist >= self.radius {
            return 0.0;
        }
        (self.radius - dist) / self.radius
    }

    pub fn attraction(&self, dist: f32) -> f32 {
        self.influence(dist) * self.strength
    }

    // Scales with the offset itself, so there is no singularity at the pointer.
    pub fn force_at(&self, px: f32, py: f32) -> (f32, f32) {
        let dx = self.x - px;
        let dy = self.y - py;
        let attraction = self.attraction(length_2d(dx, dy));
        if attraction == 0.0 {
            return (0.0, 0.0);
        }
        (dx * attraction, dy * attraction)
    }
}

#[cfg(test)]
mod tests {
    use super::{PointerInfluence, Viewport};

    fn at_origin(radius: f32) -> PointerInfluence {
        PointerInfluence {
            x: 0.0,
            y: 0.0,
            radius,
            strength: 0.5,
        }
    }

    #[test]
    fn influence_vanishes_at_the_radius() {
        let pointer = at_origin(1.5);
        assert_eq!(pointer.influence(1.5), 0.0);
        assert_eq!(pointer.influence(3.0), 0.0);
        assert_eq!(pointer.force_at(1.5, 0.0), (0.0, 0.0));
    }

    #[test]
    fn attraction_peaks_at_the_pointer() {
        let pointer = at_origin(1.5);
        assert_eq!(pointer.influence(0.0), 1.0);
        assert_eq!(pointer.attraction(0.0), 0.5);
        assert_eq!(pointer.force_at(0.0, 0.0), (0.0, 0.0));
    }

    #[test]
    fn influence_is_non_increasing_with_distance() {
        let pointer = at_origin(1.0);
        let mut previous = pointer.influence(0.0);
        for step in 1..=200 {
            let current = pointer.influence(step as f32 * 0.005);
            assert!(current <= previous);
            previous = current;
        }
    }

    #[test]
    fn force_points_at_the_pointer_and_stays_bounded() {
        let pointer = PointerInfluence {
            x: 0.4,
            y: -0.2,
            radius: 1.5,
            strength: 0.5,
        };
        let (fx, fy) = pointer.force_at(0.0, 0.0);
        assert!(fx > 0.0 && fy < 0.0);

        let dist = (0.4f32 * 0.4 + 0.2 * 0.2).sqrt();
        assert!((fx * fx + fy * fy).sqrt() <= 0.5 * dist + 1.0e-6);
    }

    #[test]
    fn degenerate_radius_produces_no_force() {
        for radius in [0.0, -1.0] {
            let pointer = at_origin(radius);
            let (fx, fy) = pointer.force_at(0.0, 0.0);
            assert_eq!((fx, fy), (0.0, 0.0));
            assert!(!pointer.influence(0.0).is_nan());
        }
    }

    #[test]
    fn ndc_maps_to_half_viewport() {
        let pointer = PointerInfluence::from_ndc(1.0, -0.5, Viewport::new(8.0, 4.0), 1.5, 0.5);
        assert_eq!(pointer.x, 4.0);
        assert_eq!(pointer.y, -1.0);
    }

    #[test]
    fn default_camera_sees_about_four_units_tall() {
        let viewport = Viewport::for_default_camera(2.0);
        assert!((viewport.height - 4.142_136).abs() < 1.0e-4);
        assert!((viewport.width - 2.0 * viewport.height).abs() < 1.0e-5);
    }
}
