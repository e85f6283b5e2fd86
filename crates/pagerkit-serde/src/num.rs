use std::fmt;

use serde::de::Visitor;
use serde::{de, Deserializer};

struct StrOrI64Visitor;

impl<'de> Visitor<'de> for StrOrI64Visitor {
    type Value = i64;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result { formatter.write_str("a string or an i64") }

    fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(value)
    }

    fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        i64::try_from(value).map_err(de::Error::custom)
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        value.trim().parse::<i64>().map_err(de::Error::custom)
    }
}

/// 将字符串或数字反序列化为 i64 类型
///
/// 页码、每页大小允许为负数或 0，这里只负责解析，不做范围校验。
///
/// # 示例
/// ```rust
/// use pagerkit_serde::num::de_str_or_num_to_i64;
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Example {
///     #[serde(deserialize_with = "de_str_or_num_to_i64")]
///     page: i64,
/// }
///
/// let example: Example = serde_json::from_str(r#"{"page": 3}"#).unwrap();
/// assert_eq!(example.page, 3);
///
/// let example: Example = serde_json::from_str(r#"{"page": "-1"}"#).unwrap();
/// assert_eq!(example.page, -1);
/// ```
pub fn de_str_or_num_to_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(StrOrI64Visitor)
}

/// 将字符串、数字、null 或空字符串反序列化为 `Option<i64>`
///
/// - null / 空字符串 => `None`
/// - 数字或数字字符串 => `Some(v)`
pub fn de_opt_str_or_num_to_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    struct OptVisitor;

    impl<'de> Visitor<'de> for OptVisitor {
        type Value = Option<i64>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("null, a string or an i64")
        }

        fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_any(self)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E> { Ok(None) }

        fn visit_unit<E>(self) -> Result<Self::Value, E> { Ok(None) }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            StrOrI64Visitor.visit_i64(value).map(Some)
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            StrOrI64Visitor.visit_u64(value).map(Some)
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            if value.trim().is_empty() {
                return Ok(None);
            }
            StrOrI64Visitor.visit_str(value).map(Some)
        }
    }

    deserializer.deserialize_option(OptVisitor)
}
