//! Boolean encoding for the index.
//!
//! The index has no boolean field type, so flags such as "is a historical
//! name" are written as the integers `1` and `0` and must be read back with
//! the same convention.

/// Gets the integer value representing `flag` in the index.
pub const fn boolean_index_value(flag: bool) -> i32 {
    if flag { 1 } else { 0 }
}

/// Decode an integer read from the index back into a flag.
///
/// Only `0` and `1` are valid encodings; anything else yields `None`.
pub const fn decode_boolean_index_value(value: i64) -> Option<bool> {
    match value {
        1 => Some(true),
        0 => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boolean_index_value() {
        assert_eq!(boolean_index_value(true), 1);
        assert_eq!(boolean_index_value(false), 0);
    }

    #[test]
    fn test_decode_boolean_index_value() {
        assert_eq!(decode_boolean_index_value(1), Some(true));
        assert_eq!(decode_boolean_index_value(0), Some(false));
        assert_eq!(decode_boolean_index_value(2), None);
        assert_eq!(decode_boolean_index_value(-1), None);

        for flag in [true, false] {
            assert_eq!(
                decode_boolean_index_value(i64::from(boolean_index_value(flag))),
                Some(flag)
            );
        }
    }
}
