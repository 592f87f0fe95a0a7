/*!
CPF (Cadastro de Pessoas Físicas) numbers.

A CPF has nine base digits followed by two check digits, each derived with a
modulo 11 weighted sum. Display form is `DDD.DDD.DDD-DD`.
*/
use crate::{error::Error, mask};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, str::FromStr};

/// Number of digits in a complete CPF.
pub const LEN: usize = 11;

/// Display mask, 14 characters when complete.
pub const MASK: &str = "###.###.###-##";

/// Check whether `raw` holds a valid CPF.
///
/// Anything but ASCII digits is ignored, so both `52998224725` and `529.982.247-25`
/// are accepted. Sequences of one repeated digit are rejected even though they
/// satisfy the checksum.
pub fn is_valid_cpf(raw: &str) -> bool {
    let digits: Vec<u32> = raw.chars().filter_map(|c| c.to_digit(10)).collect();
    if digits.len() != LEN || digits.iter().all(|&d| d == digits[0]) {
        return false;
    }

    check_digit(&digits[..9]) == digits[9] && check_digit(&digits[..10]) == digits[10]
}

/// Weighted sum of `digits` with weights counting down to 2, scaled by ten and
/// reduced modulo 11. Remainders of 10 collapse to 0.
fn check_digit(digits: &[u32]) -> u32 {
    let sum: u32 = digits
        .iter()
        .rev()
        .zip(2..)
        .map(|(digit, weight)| digit * weight)
        .sum();
    match sum * 10 % 11 {
        10 => 0,
        remainder => remainder,
    }
}

/// Mask `raw` as `DDD.DDD.DDD-DD`, as far as its digits go.
///
/// Safe to call on every keystroke: `1234` gives `123.4`, ten digits give
/// `123.456.789-0`. Digits past the eleventh are dropped.
pub fn format_cpf(raw: &str) -> String {
    mask::apply(raw, MASK)
}

/// A validated CPF, stored as its 11 digits.
///
/// Serializes in display form, which is what the address API stores.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cpf(String);

impl Cpf {
    pub fn digits(&self) -> &str {
        &self.0
    }

    pub fn formatted(&self) -> String {
        format_cpf(&self.0)
    }
}

impl FromStr for Cpf {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if is_valid_cpf(s) {
            Ok(Cpf(mask::digits(s)))
        } else {
            Err(Error::InvalidCpf(s.to_string()))
        }
    }
}

impl TryFrom<&str> for Cpf {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl Serialize for Cpf {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.formatted())
    }
}

impl<'de> Deserialize<'de> for Cpf {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const VALID: &str = "52998224725";

    #[test]
    fn known_valid() {
        assert!(is_valid_cpf(VALID));
        assert!(is_valid_cpf("529.982.247-25"));
        assert!(is_valid_cpf("111.444.777-35"));
    }

    #[test]
    fn remainder_ten_becomes_zero() {
        // first check digit
        assert!(is_valid_cpf("30401198006"));
        // second check digit
        assert!(is_valid_cpf("87623286030"));
    }

    #[test]
    fn repeated_digits_rejected() {
        // passes the checksum, still invalid
        assert!(!is_valid_cpf("11111111111"));
        for d in '0'..='9' {
            let cpf: String = std::iter::repeat(d).take(LEN).collect();
            assert!(!is_valid_cpf(&cpf), "{}", cpf);
        }
    }

    #[test]
    fn wrong_length_rejected() {
        assert!(!is_valid_cpf(""));
        assert!(!is_valid_cpf("5299822472"));
        assert!(!is_valid_cpf("529982247250"));
        assert!(!is_valid_cpf("not a cpf"));
    }

    #[test]
    fn any_single_digit_change_is_detected() {
        for pos in 0..LEN {
            for replacement in b'0'..=b'9' {
                let mut bytes = VALID.as_bytes().to_vec();
                if bytes[pos] == replacement {
                    continue;
                }
                bytes[pos] = replacement;
                let mutated = String::from_utf8(bytes).unwrap();
                assert!(!is_valid_cpf(&mutated), "{}", mutated);
            }
        }
    }

    #[test]
    fn format_complete() {
        assert_eq!("529.982.247-25", format_cpf(VALID));
        assert_eq!("529.982.247-25", format_cpf("529.982.247-25"));
    }

    #[test]
    fn format_partial() {
        assert_eq!("", format_cpf(""));
        assert_eq!("529", format_cpf("529"));
        assert_eq!("529.9", format_cpf("5299"));
        assert_eq!("529.982", format_cpf("529982"));
        assert_eq!("529.982.2", format_cpf("5299822"));
        assert_eq!("529.982.247", format_cpf("529982247"));
        assert_eq!("529.982.247-2", format_cpf("5299822472"));
    }

    #[test]
    fn format_clamps_long_input() {
        let long = "1".repeat(50);
        assert_eq!("111.111.111-11", format_cpf(&long));
    }

    #[test]
    fn parse_and_display() {
        let cpf: Cpf = "529.982.247-25".parse().unwrap();
        assert_eq!(VALID, cpf.digits());
        assert_eq!("529.982.247-25", cpf.to_string());
        assert!(matches!(
            Cpf::try_from("529.982.247-26"),
            Err(Error::InvalidCpf(_))
        ));
    }

    #[test]
    fn serde_uses_display_form() {
        let cpf: Cpf = serde_json::from_str(r#""52998224725""#).unwrap();
        assert_eq!(r#""529.982.247-25""#, serde_json::to_string(&cpf).unwrap());
        assert!(serde_json::from_str::<Cpf>(r#""00000000000""#).is_err());
    }

    proptest! {
        #[test]
        fn validator_is_total(s in ".*") {
            let _ = is_valid_cpf(&s);
        }

        #[test]
        fn format_never_exceeds_mask(s in ".*") {
            prop_assert!(format_cpf(&s).len() <= MASK.len());
        }

        #[test]
        fn format_is_idempotent(s in ".*") {
            let once = format_cpf(&s);
            prop_assert_eq!(format_cpf(&once), once);
        }

        #[test]
        fn prefixes_format_to_prefixes(d in "[0-9]{0,11}") {
            let full = format_cpf(&d);
            for k in 0..=d.len() {
                let partial = format_cpf(&d[..k]);
                prop_assert!(full.starts_with(&partial), "{} / {}", partial, full);
                prop_assert_eq!(mask::digits(&partial), &d[..k]);
            }
        }
    }
}
