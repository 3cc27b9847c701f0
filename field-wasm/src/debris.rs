use crate::rng::{
    hash_unit, spread, CHANNEL_DEBRIS_SCALE, CHANNEL_DEBRIS_SIDE, CHANNEL_DEBRIS_SPIN_X,
    CHANNEL_DEBRIS_SPIN_Y, CHANNEL_DEBRIS_X, CHANNEL_DEBRIS_Y, CHANNEL_DEBRIS_Z,
};

const SPREAD_X: f32 = 20.0;
const SIDE_OFFSET_X: f32 = 6.0;
const SPREAD_Y: f32 = 10.0;
const SPREAD_Z: f32 = 10.0;
const BACK_OFFSET_Z: f32 = -2.0;
const MAX_SPIN: f32 = 0.01;
const MIN_SCALE: f32 = 0.2;
const SCALE_RANGE: f32 = 0.3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum DebrisShape {
    Icosahedron = 0,
    Tetrahedron = 1,
}

impl DebrisShape {
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            Self::Icosahedron
        } else {
            Self::Tetrahedron
        }
    }

    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DebrisItem {
    pub offset: [f32; 3],
    pub spin: [f32; 2],
    pub scale: f32,
    pub shape: DebrisShape,
}

impl DebrisItem {
    fn sample(seed: u32, index: usize) -> Self {
        let i = index as u32;
        let side = if hash_unit(seed, i, CHANNEL_DEBRIS_SIDE) > 0.5 {
            SIDE_OFFSET_X
        } else {
            -SIDE_OFFSET_X
        };

        Self {
            offset: [
                spread(seed, i, CHANNEL_DEBRIS_X, SPREAD_X) + side,
                spread(seed, i, CHANNEL_DEBRIS_Y, SPREAD_Y),
                spread(seed, i, CHANNEL_DEBRIS_Z, SPREAD_Z) + BACK_OFFSET_Z,
            ],
            spin: [
                hash_unit(seed, i, CHANNEL_DEBRIS_SPIN_X) * MAX_SPIN,
                hash_unit(seed, i, CHANNEL_DEBRIS_SPIN_Y) * MAX_SPIN,
            ],
            scale: MIN_SCALE + hash_unit(seed, i, CHANNEL_DEBRIS_SCALE) * SCALE_RANGE,
            shape: DebrisShape::for_index(index),
        }
    }
}

pub struct DebrisField {
    items: Vec<DebrisItem>,
    rotation_y: f32,
    frames: u64,
}

impl DebrisField {
    pub fn new(count: usize, seed: u32) -> Self {
        Self {
            items: (0..count).map(|i| DebrisItem::sample(seed, i)).collect(),
            rotation_y: 0.0,
            frames: 0,
        }
    }

    pub fn step(&mut self, spin: f32) {
        self.rotation_y += spin;
        self.frames = self.frames.wrapping_add(1);
    }

    pub fn items(&self) -> &[DebrisItem] {
        &self.items
    }

    pub fn rotation_y(&self) -> f32 {
        self.rotation_y
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn offsets(&self) -> Vec<f32> {
        self.items.iter().flat_map(|item| item.offset).collect()
    }

    pub fn spins(&self) -> Vec<f32> {
        self.items.iter().flat_map(|item| item.spin).collect()
    }

    pub fn scales(&self) -> Vec<f32> {
        self.items.iter().map(|item| item.scale).collect()
    }

    pub fn shapes(&self) -> Vec<u8> {
        self.items.iter().map(|item| item.shape.as_u8()).collect()
    }

    pub fn release(&mut self) {
        self.items = Vec::new();
    }
}
