use crate::issuer::issuer_slug;

/// Luhn validation with the issuer-prefix gate.
///
/// A candidate passes only when it is exactly 16 ASCII digits, its 6-digit
/// prefix is a known issuer, and the standard right-to-left mod-10 checksum
/// holds. An unrecognized prefix makes the number invalid regardless of the
/// checksum: a well-formed number from an unknown range is still not a card
/// this scanner can have read correctly.
pub fn luhn_check(candidate: &str) -> bool {
    if candidate.len() != 16
        || !candidate.bytes().all(|b| b.is_ascii_digit())
        || issuer_slug(candidate).is_none()
    {
        return false;
    }

    let mut sum = 0u32;
    let mut alternate = false;
    for b in candidate.bytes().rev() {
        let mut n = u32::from(b - b'0');
        if alternate {
            n *= 2;
            if n > 9 {
                n -= 9;
            }
        }
        sum += n;
        alternate = !alternate;
    }
    sum % 10 == 0
}

/// Public validity surface for an assembled card number.
pub fn is_card_number_valid(candidate: &str) -> bool {
    luhn_check(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    // b_mellat prefix 610433 with a checksum-correct tail.
    const GOOD: &str = "6104331234567890";

    #[test]
    fn known_good_vector_validates() {
        assert!(is_card_number_valid(GOOD));
    }

    #[test]
    fn any_single_digit_flip_fails() {
        // Luhn detects every single-digit substitution.
        for pos in 6..16 {
            let mut bytes = GOOD.as_bytes().to_vec();
            bytes[pos] = if bytes[pos] == b'9' {
                b'0'
            } else {
                bytes[pos] + 1
            };
            let flipped = String::from_utf8(bytes).unwrap();
            assert!(!is_card_number_valid(&flipped), "flip at {pos}: {flipped}");
        }
    }

    #[test]
    fn wrong_length_is_invalid() {
        assert!(!is_card_number_valid(""));
        assert!(!is_card_number_valid("610433123456789"));
        assert!(!is_card_number_valid("61043312345678901"));
    }

    #[test]
    fn non_digits_are_invalid() {
        assert!(!is_card_number_valid("610433123456789a"));
        assert!(!is_card_number_valid("6104 3312 3456 78"));
    }

    #[test]
    fn unknown_prefix_fails_despite_correct_checksum() {
        // Classic checksum-correct test number, prefix not in the table.
        assert!(!is_card_number_valid("4111111111111111"));
    }
}
