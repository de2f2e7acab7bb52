//! djb2 string hashing with 32-bit signed wraparound.

/// Hash a feature string with the djb2 variant: seed 5381, then
/// `hash = hash * 33 + byte` under wrapping signed 32-bit arithmetic, with
/// the absolute value taken at the end.
///
/// The overflow behavior is load-bearing: matches must stay stable across
/// sessions and reimplementations, so every step truncates to a signed
/// 32-bit integer and anything other than `i32` wraparound selects
/// different pool entries. `unsigned_abs` keeps the `i32::MIN` edge case
/// well-defined. Feature strings are ASCII, so iterating bytes matches
/// iterating code points.
pub fn djb2(s: &str) -> u32 {
    let mut hash: i32 = 5381;
    for byte in s.bytes() {
        hash = hash
            .wrapping_shl(5)
            .wrapping_add(hash)
            .wrapping_add(i32::from(byte));
    }
    hash.unsigned_abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_feature_string_parity() {
        // Cross-implementation parity vector: this exact value must hold on
        // every platform and language reimplementation.
        assert_eq!(djb2("100,15,0,0,1,2,3,2,1,0"), 1_606_828_719);
    }

    #[test]
    fn test_wraparound_and_abs() {
        // Overflows the signed 32-bit range before the absolute value.
        assert_eq!(djb2("zzzzzzzz"), 405_948_203);
    }

    #[test]
    fn test_empty_string_is_seed() {
        assert_eq!(djb2(""), 5381);
    }

    #[test]
    fn test_stable_across_calls() {
        let s = "0,0,0,0,0,0,0,0,0,0";
        assert_eq!(djb2(s), djb2(s));
    }
}
