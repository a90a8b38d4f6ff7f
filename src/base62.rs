use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::DecodeError;

/// Digit symbols in ascending value order.
pub const ALPHABET: &[u8; 62] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

pub const BASE: u64 = ALPHABET.len() as u64;

/// Number of digits in the encoding of `u64::MAX`, the longest possible output.
pub const MAX_LEN: usize = 11;

const NOT_A_DIGIT: u8 = u8::MAX;

static DIGIT_VALUES: [u8; 128] = digit_values();

const fn digit_values() -> [u8; 128] {
    let mut table = [NOT_A_DIGIT; 128];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
}

/// Symbol for a digit value.
///
/// # Panics
///
/// If `digit` is 62 or more.
#[inline]
pub fn symbol_at(digit: u8) -> char {
    char::from(ALPHABET[digit as usize])
}

/// Digit value of `c`, or `None` if `c` is not part of the alphabet.
#[inline]
pub fn value_of(c: char) -> Option<u8> {
    if !c.is_ascii() {
        return None;
    }
    match DIGIT_VALUES[c as usize] {
        NOT_A_DIGIT => None,
        value => Some(value),
    }
}

/// Encodes `num` with the fewest digits possible. Zero encodes to `"0"`.
pub fn encode(mut num: u64) -> String {
    let mut buf = [0u8; MAX_LEN];
    let mut start = MAX_LEN;
    loop {
        start -= 1;
        buf[start] = ALPHABET[(num % BASE) as usize];
        num /= BASE;
        if num == 0 {
            break;
        }
    }
    buf[start..].iter().map(|&b| char::from(b)).collect()
}

/// Reads `s` as a positional base 62 numeral, most significant digit first.
///
/// Leading zero digits are accepted and do not change the value.
pub fn decode(s: &str) -> Result<u64, DecodeError> {
    if s.is_empty() {
        return Err(DecodeError::EmptyInput);
    }

    let mut num: u64 = 0;
    for c in s.chars() {
        let digit = value_of(c).ok_or(DecodeError::InvalidCharacter(c))?;
        num = num
            .checked_mul(BASE)
            .and_then(|n| n.checked_add(digit as u64))
            .ok_or(DecodeError::Overflow)?;
    }
    Ok(num)
}

/// A `u64` that displays, parses and serializes as its Base62 string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Base62(pub u64);

impl From<u64> for Base62 {
    fn from(value: u64) -> Self {
        Base62(value)
    }
}

impl From<Base62> for u64 {
    fn from(value: Base62) -> Self {
        value.0
    }
}

impl fmt::Display for Base62 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&encode(self.0))
    }
}

impl FromStr for Base62 {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode(s).map(Base62)
    }
}

impl Serialize for Base62 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Base62 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const VECTORS: &[(u64, &str)] = &[
        (0, "0"),
        (1, "1"),
        (10, "A"),
        (61, "z"),
        (62, "10"),
        (3843, "zz"),
        (238327, "zzz"),
        (123456789, "8M0kX"),
        (1 << 32, "4gfFC4"),
        (1 << 48, "1HvWXNAa8"),
        ((1 << 63) - 1, "AzL8n0Y58m7"),
        (u64::MAX, "LygHa16AHYF"),
    ];

    // xorshift64, enough spread to touch every output length
    fn samples() -> impl Iterator<Item = u64> {
        let mut state = 0x9E37_79B9_7F4A_7C15u64;
        std::iter::repeat_with(move || {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            state
        })
        .take(10_000)
    }

    #[test]
    fn base62_test() {
        for &(num, text) in VECTORS {
            assert_eq!(encode(num), text, "encode({num})");
            assert_eq!(decode(text), Ok(num), "decode({text:?})");
        }
    }

    #[test]
    fn round_trip() {
        let edges = (0..64).map(|shift| 1u64 << shift).flat_map(|n| [n - 1, n, n + 1]);
        for num in edges.chain(samples()).chain([u64::MAX - 1, u64::MAX]) {
            assert_eq!(decode(&encode(num)), Ok(num));
        }
    }

    #[test]
    fn powers_of_62() {
        let mut power = 1u64;
        for digits in 1..=MAX_LEN {
            let encoded = encode(power);
            assert_eq!(encoded.len(), digits);
            assert!(encoded.starts_with('1'));
            assert!(encoded[1..].bytes().all(|b| b == b'0'));

            // one below a power of 62 is all 'z'
            if power > 1 {
                assert!(encode(power - 1).bytes().all(|b| b == b'z'));
            }
            match power.checked_mul(BASE) {
                Some(next) => power = next,
                None => break,
            }
        }
    }

    #[test]
    fn no_leading_zero() {
        for num in (1..1000).chain(samples().filter(|&n| n != 0)) {
            let encoded = encode(num);
            assert!(!encoded.starts_with('0'), "{num} -> {encoded}");
            assert!(encoded.len() <= MAX_LEN);
        }
    }

    #[test]
    fn deterministic() {
        assert_eq!(encode(123456789), encode(123456789));
        assert_eq!(decode("8M0kX"), decode("8M0kX"));
    }

    #[test]
    fn alphabet_coverage() {
        for (i, &symbol) in ALPHABET.iter().enumerate() {
            let c = char::from(symbol);
            assert_eq!(decode(c.encode_utf8(&mut [0; 4])), Ok(i as u64));
            assert_eq!(value_of(c), Some(i as u8));
            assert_eq!(symbol_at(i as u8), c);
        }
    }

    #[test]
    fn alphabet_is_distinct() {
        let mut seen = [false; 128];
        for &symbol in ALPHABET {
            assert!(!seen[symbol as usize], "duplicate {}", symbol as char);
            seen[symbol as usize] = true;
        }
        assert_eq!(DIGIT_VALUES.iter().filter(|&&v| v != NOT_A_DIGIT).count(), 62);
    }

    #[test]
    #[should_panic]
    fn symbol_at_out_of_range() {
        symbol_at(62);
    }

    #[test]
    fn case_sensitive() {
        assert_ne!(decode("a"), decode("A"));
        assert_ne!(decode("z"), decode("Z"));
        assert_eq!(decode("a"), Ok(36));
        assert_eq!(decode("A"), Ok(10));
    }

    #[test]
    fn leading_zeros_are_positional() {
        assert_eq!(decode("00A"), Ok(10));
        assert_eq!(decode("0000"), Ok(0));
        assert_eq!(decode("0LygHa16AHYF"), Ok(u64::MAX));
    }

    #[test]
    fn empty_input() {
        assert_eq!(decode(""), Err(DecodeError::EmptyInput));
    }

    #[test]
    fn invalid_characters() {
        assert_eq!(decode("abc!"), Err(DecodeError::InvalidCharacter('!')));
        assert_eq!(decode("hello world"), Err(DecodeError::InvalidCharacter(' ')));
        assert_eq!(decode("123@456"), Err(DecodeError::InvalidCharacter('@')));
        assert_eq!(decode("abc-def"), Err(DecodeError::InvalidCharacter('-')));
        assert_eq!(decode("unicode_🚀"), Err(DecodeError::InvalidCharacter('_')));
        assert_eq!(decode("🚀"), Err(DecodeError::InvalidCharacter('🚀')));
        assert_eq!(decode("é"), Err(DecodeError::InvalidCharacter('é')));
        assert_eq!(value_of('\u{7f}'), None);
    }

    #[test]
    fn overflow() {
        // u64::MAX + 1
        assert_eq!(decode("LygHa16AHYG"), Err(DecodeError::Overflow));
        assert_eq!(decode("zzzzzzzzzzz"), Err(DecodeError::Overflow));
        assert_eq!(decode("100000000000"), Err(DecodeError::Overflow));
        // the numeral overflows before the bad character is reached
        assert_eq!(decode("zzzzzzzzzzzz!"), Err(DecodeError::Overflow));
    }

    #[test]
    fn base62_newtype() {
        let id = Base62(123456789);
        assert_eq!(id.to_string(), "8M0kX");
        assert_eq!("8M0kX".parse::<Base62>(), Ok(id));
        assert_eq!("".parse::<Base62>(), Err(DecodeError::EmptyInput));

        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"8M0kX\"");
        assert_eq!(serde_json::from_str::<Base62>(&json).unwrap(), id);

        let err = serde_json::from_str::<Base62>("\"8M0k!\"").unwrap_err();
        assert!(err.to_string().contains("Invalid character"));
    }
}
