use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::CurryError;

/// Argument count at which an accumulation call invokes the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct MinArgs(usize);

impl MinArgs {
    pub const fn new(count: usize) -> Self {
        Self(count)
    }

    pub const fn get(self) -> usize {
        self.0
    }

    pub(crate) fn is_met_by(self, count: usize) -> bool {
        count >= self.0
    }
}

impl fmt::Display for MinArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

macro_rules! impl_try_from_integer {
    ($($int:ty),*) => {
        $(
            impl TryFrom<$int> for MinArgs {
                type Error = CurryError;

                fn try_from(value: $int) -> Result<Self, Self::Error> {
                    usize::try_from(value)
                        .map(Self)
                        .map_err(|_| CurryError::configuration(value))
                }
            }
        )*
    };
}

impl_try_from_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl FromStr for MinArgs {
    type Err = CurryError;

    /// Accepts decimal digits only, so signs, whitespace and fractions are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.bytes().all(|byte| byte.is_ascii_digit()) {
            return Err(CurryError::configuration(format!("{s:?}")));
        }
        s.parse::<usize>()
            .map(Self)
            .map_err(|_| CurryError::configuration(format!("{s:?}")))
    }
}

impl TryFrom<&str> for MinArgs {
    type Error = CurryError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<&Value> for MinArgs {
    type Error = CurryError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        value
            .as_u64()
            .and_then(|count| usize::try_from(count).ok())
            .map(Self)
            .ok_or_else(|| CurryError::configuration(value))
    }
}

/// Per-factory configuration.
///
/// Deserializes from `{"min_args": 2, "unique_keys": false}`; both fields are
/// optional and `min_args` goes through the same validation as [`MinArgs`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawOptions")]
pub struct CurryOptions {
    pub min_args: Option<MinArgs>,
    pub unique_keys: bool,
}

impl CurryOptions {
    pub const fn new() -> Self {
        Self {
            min_args: None,
            unique_keys: true,
        }
    }

    #[must_use]
    pub fn with_min_args(mut self, min_args: MinArgs) -> Self {
        self.min_args = Some(min_args);
        self
    }

    #[must_use]
    pub fn with_unique_keys(mut self, unique_keys: bool) -> Self {
        self.unique_keys = unique_keys;
        self
    }
}

impl Default for CurryOptions {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawOptions {
    #[serde(default)]
    min_args: Option<Value>,
    #[serde(default)]
    unique_keys: Option<bool>,
}

impl TryFrom<RawOptions> for CurryOptions {
    type Error = CurryError;

    fn try_from(raw: RawOptions) -> Result<Self, Self::Error> {
        let min_args = match raw.min_args {
            None | Some(Value::Null) => None,
            Some(value) => Some(MinArgs::try_from(&value)?),
        };
        Ok(Self {
            min_args,
            unique_keys: raw.unique_keys.unwrap_or(true),
        })
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[rstest]
    #[case::zero(0, 0)]
    #[case::three(3, 3)]
    fn integers(#[case] input: i64, #[case] expected: usize) {
        assert_eq!(MinArgs::try_from(input), Ok(MinArgs::new(expected)));
    }

    #[test]
    fn negative_integers() {
        assert!(matches!(
            MinArgs::try_from(-1i32),
            Err(CurryError::Configuration { .. })
        ));
        assert!(MinArgs::try_from(i64::MIN).is_err());
    }

    #[rstest]
    #[case::letter("x")]
    #[case::empty("")]
    #[case::negative("-1")]
    #[case::signed("+1")]
    #[case::fraction("1.5")]
    #[case::padded(" 2")]
    fn invalid_strings(#[case] input: &str) {
        assert!(matches!(
            MinArgs::try_from(input),
            Err(CurryError::Configuration { .. })
        ));
    }

    #[test]
    fn strings() {
        assert_eq!("12".parse::<MinArgs>(), Ok(MinArgs::new(12)));
    }

    #[rstest]
    #[case::negative(json!(-1))]
    #[case::float(json!(2.5))]
    #[case::string(json!("2"))]
    #[case::boolean(json!(true))]
    fn invalid_json(#[case] value: Value) {
        assert!(MinArgs::try_from(&value).is_err());
    }

    #[test]
    fn deserialize() {
        let options: CurryOptions =
            serde_json::from_value(json!({"min_args": 2, "unique_keys": false}))
                .expect("valid options");
        assert_eq!(
            options,
            CurryOptions::new()
                .with_min_args(MinArgs::new(2))
                .with_unique_keys(false)
        );

        let options: CurryOptions = serde_json::from_value(json!({})).expect("valid options");
        assert_eq!(options, CurryOptions::default());

        let options: CurryOptions =
            serde_json::from_value(json!({"min_args": null})).expect("valid options");
        assert_eq!(options.min_args, None);
    }

    #[test]
    fn deserialize_rejects_invalid_min_args() {
        let error = serde_json::from_value::<CurryOptions>(json!({"min_args": "x"}))
            .expect_err("string threshold");
        assert!(error
            .to_string()
            .contains("min_args must be a non-negative integer"));

        assert!(serde_json::from_value::<CurryOptions>(json!({"min_args": -3})).is_err());
        assert!(serde_json::from_value::<CurryOptions>(json!({"max_args": 3})).is_err());
    }

    #[test]
    fn serialize() {
        let options = CurryOptions::new().with_min_args(MinArgs::new(4));
        assert_eq!(
            serde_json::to_value(options).expect("serializable"),
            json!({"min_args": 4, "unique_keys": true})
        );
    }
}
