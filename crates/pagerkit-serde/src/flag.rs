use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use serde::de::Visitor;
use serde::{de, Deserializer};

/// 将布尔值、null 或字符串反序列化为枚举开关
///
/// - `true` / `false` / `"true"` / `"false"` => `T::from(Some(b))`
/// - null => `T::from(None)`
/// - 其它字符串按 [`FromStr`] 解析
///
/// 用于兼容旧的布尔字段被替换为多值枚举的场景。
///
/// # 示例
/// ```rust
/// use std::str::FromStr;
///
/// use pagerkit_serde::flag::de_bool_or_str;
/// use serde::Deserialize;
///
/// #[derive(Debug, PartialEq)]
/// enum Mode { Unset, On, Off }
///
/// impl From<Option<bool>> for Mode {
///     fn from(value: Option<bool>) -> Self {
///         match value {
///             Some(true) => Mode::On,
///             Some(false) => Mode::Off,
///             None => Mode::Unset,
///         }
///     }
/// }
///
/// impl FromStr for Mode {
///     type Err = String;
///
///     fn from_str(s: &str) -> Result<Self, Self::Err> {
///         match s {
///             "on" => Ok(Mode::On),
///             "off" => Ok(Mode::Off),
///             other => Err(format!("unknown mode: {other}")),
///         }
///     }
/// }
///
/// #[derive(Deserialize)]
/// struct Example {
///     #[serde(deserialize_with = "de_bool_or_str")]
///     mode: Mode,
/// }
///
/// let example: Example = serde_json::from_str(r#"{"mode": true}"#).unwrap();
/// assert_eq!(example.mode, Mode::On);
///
/// let example: Example = serde_json::from_str(r#"{"mode": "off"}"#).unwrap();
/// assert_eq!(example.mode, Mode::Off);
/// ```
pub fn de_bool_or_str<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + From<Option<bool>>,
    T::Err: fmt::Display,
{
    struct BoolOrStrVisitor<T>(PhantomData<fn() -> T>);

    impl<'de, T> Visitor<'de> for BoolOrStrVisitor<T>
    where
        T: FromStr + From<Option<bool>>,
        T::Err: fmt::Display,
    {
        type Value = T;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("null, a bool or a string")
        }

        fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_any(self)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E> { Ok(T::from(None)) }

        fn visit_unit<E>(self) -> Result<Self::Value, E> { Ok(T::from(None)) }

        fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> { Ok(T::from(Some(value))) }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            let text = value.trim();
            if text.eq_ignore_ascii_case("true") {
                return Ok(T::from(Some(true)));
            }
            if text.eq_ignore_ascii_case("false") {
                return Ok(T::from(Some(false)));
            }
            text.parse::<T>().map_err(de::Error::custom)
        }
    }

    deserializer.deserialize_any(BoolOrStrVisitor(PhantomData))
}
