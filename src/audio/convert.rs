//! Sample-width conversion
//!
//! The 8-bit and 16-bit mappings are fixed affine formulas evaluated in
//! floating point and truncated toward zero. They are kept bit-exact with the
//! files this crate has to interoperate with, rounding quirks included.

/// Unsigned 8-bit silence level
pub const SILENCE_U8: u8 = 128;

/// Widen an unsigned 8-bit sample (silence 128) to signed 16-bit (silence 0).
///
/// `t = byte / 256 * 65536 - 1`, result `t - 32767`.
#[inline]
pub fn widen_8_to_16(byte: u8) -> i16 {
    let t = f64::from(byte) / 256.0 * 65536.0 - 1.0;
    (t - 32767.0) as i16
}

/// Narrow a signed 16-bit sample to unsigned 8-bit.
///
/// `t = sample / 65536 * 256`, result `t + 128`, truncated as a whole.
#[inline]
pub fn narrow_16_to_8(sample: i16) -> u8 {
    let t = f64::from(sample) / 65536.0 * 256.0;
    (t + 128.0) as u8
}

/// Scale a float sample in `[-range_max, range_max]` to 16-bit.
///
/// Out-of-range input saturates at the i16 bounds; NaN maps to 0.
#[inline]
pub fn normalize_float_to_i16(value: f32, range_max: f32) -> i16 {
    (value / range_max * 32767.0) as i16
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0 => -32768 ; "zero byte is full negative")]
    #[test_case(1 => -32512)]
    #[test_case(127 => -256)]
    #[test_case(128 => 0 ; "silence")]
    #[test_case(129 => 256)]
    #[test_case(255 => 32512 ; "full positive is asymmetric")]
    fn test_widen(byte: u8) -> i16 {
        widen_8_to_16(byte)
    }

    #[test_case(-32768 => 0)]
    #[test_case(-257 => 126)]
    #[test_case(-256 => 127)]
    #[test_case(-1 => 127 ; "small negative truncates below silence")]
    #[test_case(0 => 128 ; "silence")]
    #[test_case(255 => 128)]
    #[test_case(256 => 129)]
    #[test_case(32767 => 255)]
    fn test_narrow(sample: i16) -> u8 {
        narrow_16_to_8(sample)
    }

    #[test]
    fn test_widen_is_linear_in_256_steps() {
        for byte in 0..=255u8 {
            assert_eq!(i32::from(widen_8_to_16(byte)), i32::from(byte) * 256 - 32768);
        }
    }

    #[test]
    fn test_8bit_round_trip_deviation_is_zero() {
        // narrow(widen(b)) is exact for every byte; pinned as a regression.
        let max_deviation = (0..=255u8)
            .map(|b| (i16::from(narrow_16_to_8(widen_8_to_16(b))) - i16::from(b)).abs())
            .max()
            .unwrap();
        assert_eq!(max_deviation, 0);
    }

    #[test]
    fn test_16bit_round_trip_error_is_bounded() {
        for sample in i16::MIN..=i16::MAX {
            let back = widen_8_to_16(narrow_16_to_8(sample));
            let error = (i32::from(sample) - i32::from(back)).abs();
            assert!(error < 256, "sample {} came back as {}", sample, back);
        }
    }

    #[test]
    fn test_normalize_float() {
        assert_eq!(normalize_float_to_i16(0.0, 1.0), 0);
        assert_eq!(normalize_float_to_i16(1.0, 1.0), 32767);
        assert_eq!(normalize_float_to_i16(-1.0, 1.0), -32767);
        assert_eq!(normalize_float_to_i16(0.5, 1.0), 16383);
        assert_eq!(normalize_float_to_i16(-0.5, 1.0), -16383);
        assert_eq!(normalize_float_to_i16(128.0, 256.0), 16383);
    }

    #[test]
    fn test_normalize_float_saturates() {
        assert_eq!(normalize_float_to_i16(2.0, 1.0), i16::MAX);
        assert_eq!(normalize_float_to_i16(-2.0, 1.0), i16::MIN);
        assert_eq!(normalize_float_to_i16(f32::NAN, 1.0), 0);
    }
}
