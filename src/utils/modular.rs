//! Floor-modulo arithmetic for rotor offsets.
//!
//! Rotor offsets routinely go negative when a position is subtracted from a
//! contact index. Rust's `%` truncates toward zero, so every wraparound in the
//! crate goes through [`floor_mod`] instead.

/// Returns `value` reduced into `[0, modulus)`.
///
/// Equivalent to `((value % modulus) + modulus) % modulus` for any sign of
/// `value`.
///
/// # Parameters
/// - `value`: Index or offset to reduce, may be negative.
/// - `modulus`: Alphabet length, must be positive.
///
/// # Returns
/// The least non-negative residue of `value`.
#[inline]
pub fn floor_mod(value: i32, modulus: i32) -> i32 {
    value.rem_euclid(modulus)
}

/// Reduces `value` into `[0, len)` and returns it as a table index.
#[inline]
pub fn wrap_index(value: i32, len: usize) -> usize {
    floor_mod(value, len as i32) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_mod_positive() {
        assert_eq!(floor_mod(0, 26), 0);
        assert_eq!(floor_mod(25, 26), 25);
        assert_eq!(floor_mod(26, 26), 0);
        assert_eq!(floor_mod(53, 26), 1);
    }

    #[test]
    fn test_floor_mod_negative() {
        assert_eq!(floor_mod(-1, 26), 25);
        assert_eq!(floor_mod(-26, 26), 0);
        assert_eq!(floor_mod(-27, 26), 25);
        assert_eq!(floor_mod(-3, 10), 7);
    }

    #[test]
    fn test_floor_mod_matches_index_from_end() {
        // Indexing "from the end" by |i| must land on the same symbol as (i + n) % n.
        let alphabet = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
        let n = alphabet.len() as i32;
        for i in -n..0 {
            let from_end = alphabet[alphabet.len() - i.unsigned_abs() as usize];
            let wrapped = alphabet[((i + n) % n) as usize];
            assert_eq!(from_end, wrapped);
            assert_eq!(alphabet[floor_mod(i, n) as usize], wrapped);
        }
    }

    #[test]
    fn test_wrap_index_odd_lengths() {
        for len in [17usize, 19, 21, 23, 25] {
            assert_eq!(wrap_index(len as i32, len), 0);
            assert_eq!(wrap_index(-1, len), len - 1);
        }
    }
}
