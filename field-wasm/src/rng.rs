const FALLBACK_SEED: u32 = 0x5eed_1e55;
const UNIT_SCALE: f32 = 1.0 / 16_777_216.0;

pub const CHANNEL_THETA: u32 = 0;
pub const CHANNEL_PHI: u32 = 1;
pub const CHANNEL_RADIUS: u32 = 2;
pub const CHANNEL_DEBRIS_X: u32 = 16;
pub const CHANNEL_DEBRIS_SIDE: u32 = 17;
pub const CHANNEL_DEBRIS_Y: u32 = 18;
pub const CHANNEL_DEBRIS_Z: u32 = 19;
pub const CHANNEL_DEBRIS_SPIN_X: u32 = 20;
pub const CHANNEL_DEBRIS_SPIN_Y: u32 = 21;
pub const CHANNEL_DEBRIS_SCALE: u32 = 22;

const GENERATION_SALT: u32 = 0xa511_e9b3;

pub fn hash_u32(seed: u32, index: u32, channel: u32) -> u32 {
    let mut h = mix(seed ^ 0x9e37_79b9);
    h = mix(h ^ index.wrapping_mul(0x85eb_ca6b));
    mix(h ^ channel.wrapping_mul(0xc2b2_ae35))
}

pub fn hash_unit(seed: u32, index: u32, channel: u32) -> f32 {
    // 24 bits fit exactly in an f32 mantissa.
    (hash_u32(seed, index, channel) >> 8) as f32 * UNIT_SCALE
}

pub fn spread(seed: u32, index: u32, channel: u32, range: f32) -> f32 {
    range * (0.5 - hash_unit(seed, index, channel))
}

pub fn derive_seed(seed: u32, generation: u32) -> u32 {
    if generation == 0 {
        return seed;
    }
    hash_u32(seed, generation, GENERATION_SALT)
}

pub fn entropy_seed() -> u32 {
    match getrandom::u32() {
        Ok(0) => FALLBACK_SEED,
        Ok(seed) => seed,
        Err(err) => {
            log::warn!("entropy unavailable ({err}), using fixed seed");
            FALLBACK_SEED
        }
    }
}

// lowbias32 finalizer
fn mix(mut x: u32) -> u32 {
    x ^= x >> 16;
    x = x.wrapping_mul(0x7feb_352d);
    x ^= x >> 15;
    x = x.wrapping_mul(0x846c_a68b);
    x ^= x >> 16;
    x
}

#[cfg(test)]
mod tests {
    use super::{derive_seed, hash_unit, spread, CHANNEL_PHI, CHANNEL_THETA};

    #[test]
    fn samples_are_pure_functions_of_their_key() {
        for i in 0..64 {
            assert_eq!(hash_unit(7, i, CHANNEL_THETA), hash_unit(7, i, CHANNEL_THETA));
        }
        assert_ne!(hash_unit(7, 3, CHANNEL_THETA), hash_unit(7, 3, CHANNEL_PHI));
        assert_ne!(hash_unit(7, 3, CHANNEL_THETA), hash_unit(8, 3, CHANNEL_THETA));
    }

    #[test]
    fn unit_samples_stay_in_half_open_range() {
        for i in 0..4_000 {
            let u = hash_unit(0xdead_beef, i, CHANNEL_THETA);
            assert!((0.0..1.0).contains(&u));
        }
    }

    #[test]
    fn spread_is_centered_and_bounded() {
        let mut sum = 0.0;
        for i in 0..4_000 {
            let s = spread(11, i, CHANNEL_PHI, 0.2);
            assert!((-0.1..=0.1).contains(&s));
            sum += s;
        }
        assert!((sum / 4_000.0).abs() < 0.01);
    }

    #[test]
    fn generations_get_fresh_seeds() {
        assert_eq!(derive_seed(99, 0), 99);
        assert_ne!(derive_seed(99, 1), derive_seed(99, 2));
    }
}
