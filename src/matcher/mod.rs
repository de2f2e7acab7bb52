//! # Character Matcher
//!
//! Deterministic local character selection: brightness statistics from a
//! central crop of the captured frame are quantized into a feature string,
//! hashed with djb2, and reduced modulo the pool size. Identical inputs
//! always select the identical entry, and near-identical inputs (sensor
//! noise, small lighting shifts) almost always quantize to the same feature
//! string and therefore the same entry.
//!
//! This path is independent of the generative service and needs no I/O,
//! which is what lets the booth keep producing themed keepsakes when the
//! service is unreachable.

pub mod features;
pub mod hash;
pub mod pool;

pub use features::FeatureVector;
pub use hash::djb2;
pub use pool::{CharacterEntry, Gender, CHARACTERS};

use tracing::{debug, warn};

use crate::capture::RgbaFrame;

/// Deterministically select one pool entry for the captured frame.
///
/// The pool must be non-empty; insertion order defines the mapping. The
/// pool is never mutated. Degraded input (a frame whose central crop holds
/// no pixels) falls back to the first entry rather than erroring.
pub fn match_character<'a>(frame: &RgbaFrame, pool: &'a [CharacterEntry]) -> &'a CharacterEntry {
    let Some(features) = FeatureVector::from_frame(frame) else {
        warn!("could not extract features from frame, falling back to first pool entry");
        return &pool[0];
    };

    let feature_string = features.feature_string();
    let hash = djb2(&feature_string);
    let index = hash as usize % pool.len();
    debug!(%feature_string, hash, index, name = pool[index].name, "matched character");

    &pool[index]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::RgbaFrame;

    fn gray_frame(width: u32, height: u32, level: u8) -> RgbaFrame {
        let data = [level, level, level, 255]
            .iter()
            .copied()
            .cycle()
            .take((width * height * 4) as usize)
            .collect();
        RgbaFrame::from_raw(width, height, data)
    }

    #[test]
    fn test_matching_is_deterministic() {
        let frame = gray_frame(64, 64, 100);
        let first = match_character(&frame, CHARACTERS);
        let second = match_character(&frame, CHARACTERS);
        assert_eq!(first.name, second.name);
    }

    #[test]
    fn test_known_frame_selects_known_entry() {
        // Feature string "100,0,0,0,0,14,0,0,0,0" hashes to 449773959,
        // which is 65 modulo the 86-entry pool.
        let frame = gray_frame(64, 64, 100);
        let matched = match_character(&frame, CHARACTERS);
        assert_eq!(matched.name, "Gru");
    }

    #[test]
    fn test_single_entry_pool_is_total() {
        let pool = &CHARACTERS[..1];
        for level in [0u8, 40, 128, 255] {
            let matched = match_character(&gray_frame(48, 48, level), pool);
            assert_eq!(matched.name, CHARACTERS[0].name);
        }
    }

    #[test]
    fn test_empty_crop_falls_back_to_first_entry() {
        // A 1-pixel-wide frame floors the crop width to zero.
        let matched = match_character(&gray_frame(1, 32, 200), CHARACTERS);
        assert_eq!(matched.name, CHARACTERS[0].name);

        let matched = match_character(&gray_frame(0, 0, 0), CHARACTERS);
        assert_eq!(matched.name, CHARACTERS[0].name);
    }

    #[test]
    fn test_tolerates_plus_minus_two_noise() {
        // Deterministic +-2 perturbation of a mid-gray frame. The mean
        // stays within the same multiple-of-5 bucket, the deviation rounds
        // to 0, and every perturbed luma stays inside histogram bin 3, so
        // the feature string (and the match) is unchanged.
        let base = gray_frame(64, 64, 100);
        let noisy_data: Vec<u8> = base
            .data
            .iter()
            .enumerate()
            .map(|(i, v)| {
                if i % 4 == 3 {
                    *v // alpha untouched
                } else {
                    let noise = (i % 5) as i16 - 2;
                    (*v as i16 + noise).clamp(0, 255) as u8
                }
            })
            .collect();
        let noisy = RgbaFrame::from_raw(64, 64, noisy_data);

        let expected = match_character(&base, CHARACTERS);
        let actual = match_character(&noisy, CHARACTERS);
        assert_eq!(expected.name, actual.name);
    }
}
