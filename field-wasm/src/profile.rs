pub const COMPACT_BREAKPOINT_PX: f32 = 768.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewportClass {
    Compact,
    Wide,
}

impl ViewportClass {
    pub fn from_compact(is_compact: bool) -> Self {
        if is_compact {
            Self::Compact
        } else {
            Self::Wide
        }
    }

    pub fn from_width(css_px: f32) -> Self {
        Self::from_compact(is_compact_width(css_px))
    }

    pub fn is_compact(self) -> bool {
        matches!(self, Self::Compact)
    }
}

pub fn is_compact_width(css_px: f32) -> bool {
    css_px <= COMPACT_BREAKPOINT_PX
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DeviceProfile {
    pub class: ViewportClass,
    pub particle_count: usize,
    pub force_radius: f32,
    pub group_scale: f32,
    pub progress_cap: f32,
    pub depth_scale: f32,
    pub point_size: f32,
    pub show_debris: bool,
}

impl DeviceProfile {
    pub const COMPACT: Self = Self {
        class: ViewportClass::Compact,
        particle_count: 200,
        force_radius: 1.0,
        group_scale: 0.9,
        progress_cap: 0.5,
        depth_scale: 1.5,
        point_size: 0.02,
        show_debris: false,
    };

    pub const WIDE: Self = Self {
        class: ViewportClass::Wide,
        particle_count: 1_000,
        force_radius: 1.5,
        group_scale: 1.9,
        progress_cap: 1.0,
        depth_scale: 2.5,
        point_size: 0.04,
        show_debris: true,
    };

    pub fn for_class(class: ViewportClass) -> Self {
        match class {
            ViewportClass::Compact => Self::COMPACT,
            ViewportClass::Wide => Self::WIDE,
        }
    }

    pub fn from_compact(is_compact: bool) -> Self {
        Self::for_class(ViewportClass::from_compact(is_compact))
    }

    pub fn max_depth(&self) -> f32 {
        self.progress_cap * self.depth_scale
    }
}
