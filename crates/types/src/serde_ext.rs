use core::fmt;
use serde::{
    de::{self, Visitor},
    Deserializer,
};

/// Largest magnitude below which every integer is exactly representable as an
/// `f64`.
const MAX_SAFE_FLOAT: f64 = 9_007_199_254_740_992.0;

/// Deserialize a JSON string or number into its decimal string form.
///
/// The relay is not consistent about quoting identifiers and amounts.
/// Integers beyond `u64` arrive as floats and have already lost precision,
/// so floats are only accepted when integral and at most 2^53.
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    struct StringOrNumber;

    impl Visitor<'_> for StringOrNumber {
        type Value = String;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a string or a number")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
            Ok(v.to_owned())
        }

        fn visit_string<E: de::Error>(self, v: String) -> Result<String, E> {
            Ok(v)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_u128<E: de::Error>(self, v: u128) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<String, E> {
            if !v.is_finite() {
                return Err(E::custom("non-finite number"));
            }
            if v.fract() != 0.0 {
                return Err(E::custom(format_args!("{v} is not an integer")));
            }
            if v.abs() > MAX_SAFE_FLOAT {
                return Err(E::custom(format_args!(
                    "{v} is beyond 2^53 and may have lost precision, send it as a string"
                )));
            }
            Ok(format!("{v:.0}"))
        }
    }

    deserializer.deserialize_any(StringOrNumber)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Wrapped(#[serde(deserialize_with = "string_or_number")] String);

    fn parse(json: &str) -> Result<String, serde_json::Error> {
        serde_json::from_str::<Wrapped>(json).map(|w| w.0)
    }

    #[test]
    fn strings_and_integers() {
        assert_eq!(parse("\"q-1\"").unwrap(), "q-1");
        assert_eq!(parse("30000000").unwrap(), "30000000");
        assert_eq!(parse("18446744073709551615").unwrap(), u64::MAX.to_string());
    }

    #[test]
    fn integral_floats_within_2_53() {
        assert_eq!(parse("3e7").unwrap(), "30000000");
        assert_eq!(parse("1500.0").unwrap(), "1500");
        assert_eq!(parse("9007199254740992.0").unwrap(), "9007199254740992");
    }

    #[test]
    fn lossy_floats_rejected() {
        assert!(parse("1.5").is_err());
        assert!(parse("9007199254740994.0").is_err());
        assert!(parse("1e20").is_err());
        // beyond u64, so serde_json hands over an f64
        let err = parse("123456789012345678901234567890").unwrap_err();
        assert!(err.to_string().contains("send it as a string"));
    }
}
