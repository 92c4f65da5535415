//! 32-bit rolling hash over UTF-16 code units.

/// Order-dependent digest of `text`: `h = h * 31 + c` per UTF-16 code unit,
/// with two's-complement wraparound at every step.
pub fn rolling_hash(text: &str) -> i32 {
    text.encode_utf16().fold(0i32, |h, c| {
        h.wrapping_shl(5).wrapping_sub(h).wrapping_add(i32::from(c))
    })
}

/// Reduce the hash of `text` to a roll in `0..100`.
pub fn roll(text: &str) -> u8 {
    // unsigned_abs keeps i32::MIN total (2147483648 % 100 == 48).
    (rolling_hash(text).unsigned_abs() % 100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_zero() {
        assert_eq!(rolling_hash(""), 0);
        assert_eq!(roll(""), 0);
    }

    #[test]
    fn single_char_is_code_unit() {
        assert_eq!(rolling_hash("a"), 97);
        assert_eq!(roll("a"), 97);
    }

    #[test]
    fn known_vectors() {
        assert_eq!(rolling_hash("Pune"), 2_499_228);
        assert_eq!(rolling_hash("Shirur, Pune"), -1_987_558_581);
        assert_eq!(rolling_hash("Jaipur"), -2_083_589_157);
        assert_eq!(rolling_hash("Nagpur, Maharashtra"), 258_852_133);
        assert_eq!(rolling_hash("Bengaluru Urban, Karnataka"), -1_236_179_525);
    }

    #[test]
    fn hashes_utf16_units_not_bytes() {
        // Devanagari: 4 code units, 12 UTF-8 bytes.
        assert_eq!(rolling_hash("पुणे"), 72_241_179);
        // Astral plane char hashes as a surrogate pair.
        let pair = rolling_hash("\u{1F4A7}");
        let expected = 0xD83D_i32.wrapping_mul(31).wrapping_add(0xDCA7);
        assert_eq!(pair, expected);
    }

    #[test]
    fn order_dependent() {
        assert_ne!(rolling_hash("ab"), rolling_hash("ba"));
    }

    #[test]
    fn min_hash_rolls_to_48() {
        let s = "Gwaa\u{F371}!";
        assert_eq!(rolling_hash(s), i32::MIN);
        assert_eq!(roll(s), 48);
        let report = crate::score::score(s);
        assert_eq!(report.estimated_depth, 58);
        assert_eq!(report.estimated_yield, 416);
    }

    #[test]
    fn roll_in_range() {
        let long = "z".repeat(500);
        for s in ["", "x", "Shirur, Pune", "पुणे", "\u{1F4A7}\u{1F4A7}", long.as_str()] {
            assert!(roll(s) < 100);
        }
    }
}
