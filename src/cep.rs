/*!
CEP (Código de Endereçamento Postal) postal codes.
*/
use crate::{error::Error, mask};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, str::FromStr};

/// Number of digits in a complete CEP.
pub const LEN: usize = 8;

/// Display mask, 9 characters when complete.
pub const MASK: &str = "#####-###";

/// Mask `raw` as `DDDDD-DDD`, as far as its digits go.
pub fn format_cep(raw: &str) -> String {
    mask::apply(raw, MASK)
}

/// A complete CEP, stored as its 8 digits.
///
/// There is no checksum, so any 8 digits parse. The digits are the key for
/// [lookups](crate::Client::lookup_cep).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cep(String);

impl Cep {
    pub fn digits(&self) -> &str {
        &self.0
    }

    pub fn formatted(&self) -> String {
        format_cep(&self.0)
    }
}

impl FromStr for Cep {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = mask::digits(s);
        if digits.len() == LEN {
            Ok(Cep(digits))
        } else {
            Err(Error::InvalidCep(s.to_string()))
        }
    }
}

impl TryFrom<&str> for Cep {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Cep {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl Serialize for Cep {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.formatted())
    }
}

impl<'de> Deserialize<'de> for Cep {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn format_complete() {
        assert_eq!("01310-100", format_cep("01310100"));
        assert_eq!("01310-100", format_cep("01310-100"));
    }

    #[test]
    fn format_partial() {
        assert_eq!("", format_cep(""));
        assert_eq!("0131", format_cep("0131"));
        assert_eq!("01310", format_cep("01310"));
        assert_eq!("01310-1", format_cep("013101"));
    }

    #[test]
    fn format_clamps_long_input() {
        assert_eq!("01310-100", format_cep("0131010099999"));
        assert_eq!("99999-999", format_cep(&"9".repeat(50)));
    }

    #[test]
    fn parse() {
        let cep: Cep = "01310-100".parse().unwrap();
        assert_eq!("01310100", cep.digits());
        assert_eq!("01310-100", cep.to_string());
        assert!(matches!(Cep::try_from("0131-010"), Err(Error::InvalidCep(_))));
        assert!("013101000".parse::<Cep>().is_err());
    }

    #[test]
    fn serde_uses_display_form() {
        let cep: Cep = serde_json::from_str(r#""01310100""#).unwrap();
        assert_eq!(r#""01310-100""#, serde_json::to_string(&cep).unwrap());
    }

    proptest! {
        #[test]
        fn format_never_exceeds_mask(s in ".*") {
            prop_assert!(format_cep(&s).len() <= MASK.len());
        }

        #[test]
        fn format_is_idempotent(s in ".*") {
            let once = format_cep(&s);
            prop_assert_eq!(format_cep(&once), once);
        }

        #[test]
        fn prefixes_format_to_prefixes(d in "[0-9]{0,8}") {
            let full = format_cep(&d);
            for k in 0..=d.len() {
                prop_assert!(full.starts_with(&format_cep(&d[..k])));
            }
        }
    }
}
