//! String-encoded 64-bit integers.
//!
//! Several report counters (sample sizes, refresh timestamps, goal
//! comparison values, default view ids) are 64-bit integers that travel as
//! JSON strings. [`Int64`] always writes the string form and reads either a
//! string or an integral JSON number.
//!
//! # Example
//!
//! ```rust
//! use analytics_api::rest::Int64;
//! use serde::{Deserialize, Serialize};
//! use serde_with::serde_as;
//!
//! #[serde_as]
//! #[derive(Serialize, Deserialize)]
//! struct Sample {
//!     #[serde_as(as = "Option<Int64>")]
//!     #[serde(default, skip_serializing_if = "Option::is_none")]
//!     size: Option<i64>,
//! }
//!
//! let json = serde_json::to_string(&Sample { size: Some(9_007_199_254_740_993) }).unwrap();
//! assert_eq!(json, r#"{"size":"9007199254740993"}"#);
//! ```

use std::fmt;

use serde::de::{self, Unexpected, Visitor};
use serde::{Deserializer, Serializer};

/// `serde_with` adapter for `i64` values carried as JSON strings.
#[derive(Clone, Copy, Debug)]
pub struct Int64;

impl serde_with::SerializeAs<i64> for Int64 {
    fn serialize_as<S>(source: &i64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(source)
    }
}

impl<'de> serde_with::DeserializeAs<'de, i64> for Int64 {
    fn deserialize_as<D>(deserializer: D) -> Result<i64, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(Int64Visitor)
    }
}

struct Int64Visitor;

impl<'de> Visitor<'de> for Int64Visitor {
    type Value = i64;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a 64-bit signed integer or its decimal string form")
    }

    fn visit_i64<E>(self, value: i64) -> Result<i64, E>
    where
        E: de::Error,
    {
        Ok(value)
    }

    fn visit_u64<E>(self, value: u64) -> Result<i64, E>
    where
        E: de::Error,
    {
        i64::try_from(value).map_err(|_| E::invalid_value(Unexpected::Unsigned(value), &self))
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    fn visit_f64<E>(self, value: f64) -> Result<i64, E>
    where
        E: de::Error,
    {
        if value.fract() == 0.0 && value >= i64::MIN as f64 && value < i64::MAX as f64 {
            Ok(value as i64)
        } else {
            Err(E::invalid_value(Unexpected::Float(value), &self))
        }
    }

    fn visit_str<E>(self, value: &str) -> Result<i64, E>
    where
        E: de::Error,
    {
        value
            .trim()
            .parse::<i64>()
            .map_err(|_| E::invalid_value(Unexpected::Str(value), &self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use serde_with::{DeserializeAs, SerializeAs};

    #[test]
    fn test_serializes_as_string() {
        let value = Int64::serialize_as(&i64::MAX, serde_json::value::Serializer).unwrap();
        assert_eq!(value, json!("9223372036854775807"));

        let value = Int64::serialize_as(&-42, serde_json::value::Serializer).unwrap();
        assert_eq!(value, json!("-42"));
    }

    #[test]
    fn test_deserializes_strings_and_numbers() {
        let cases = [
            (json!("12345"), 12_345),
            (json!(12345), 12_345),
            (json!("-7"), -7),
            (json!(-7), -7),
            (json!(168.0), 168),
            (json!(i64::MIN.to_string()), i64::MIN),
            (json!(i64::MAX.to_string()), i64::MAX),
        ];

        for (input, want) in cases {
            let got = Int64::deserialize_as(input.clone()).unwrap();
            assert_eq!(got, want, "input {input}");
        }
    }

    #[test]
    fn test_rejects_non_integers() {
        let cases: [Value; 5] = [
            json!("abc"),
            json!(123.4),
            json!(u64::MAX),
            json!({}),
            json!("9223372036854775808"),
        ];

        for input in cases {
            assert!(
                Int64::deserialize_as(input.clone()).is_err(),
                "input {input} should fail"
            );
        }
    }
}
