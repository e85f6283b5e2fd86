use std::fmt::{self, Display};
use std::marker::PhantomData;
use std::str::FromStr;

use serde::de::{SeqAccess, Visitor};
use serde::{de, Deserializer, Serializer};

struct CommaSeparated<T>(PhantomData<T>);

impl<T> CommaSeparated<T>
where
    T: FromStr,
    T::Err: Display,
{
    fn parse_into<E: de::Error>(text: &str, out: &mut Vec<T>) -> Result<(), E> {
        for part in text.split(',').map(str::trim).filter(|part| !part.is_empty()) {
            out.push(part.parse::<T>().map_err(de::Error::custom)?);
        }
        Ok(())
    }
}

impl<'de, T> Visitor<'de> for CommaSeparated<T>
where
    T: FromStr,
    T::Err: Display,
{
    type Value = Vec<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a comma separated string or a sequence of strings")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        let mut out = Vec::new();
        Self::parse_into(value, &mut out)?;
        Ok(out)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut out = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element::<String>()? {
            Self::parse_into(&item, &mut out)?;
        }
        Ok(out)
    }

    fn visit_none<E>(self) -> Result<Self::Value, E> { Ok(Vec::new()) }

    fn visit_unit<E>(self) -> Result<Self::Value, E> { Ok(Vec::new()) }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(self)
    }
}

/// 将逗号分隔的字符串（或字符串数组）反序列化为 `Vec<T>`
///
/// 空白片段会被忽略，顺序保持不变；null 反序列化为空数组。
///
/// # 示例
/// ```rust
/// use pagerkit_serde::list::de_comma_separated;
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Example {
///     #[serde(deserialize_with = "de_comma_separated")]
///     ids: Vec<u32>,
/// }
///
/// let example: Example = serde_json::from_str(r#"{"ids": "3, 1,,2"}"#).unwrap();
/// assert_eq!(example.ids, vec![3, 1, 2]);
///
/// let example: Example = serde_json::from_str(r#"{"ids": ["3", "1,2"]}"#).unwrap();
/// assert_eq!(example.ids, vec![3, 1, 2]);
/// ```
pub fn de_comma_separated<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    deserializer.deserialize_any(CommaSeparated(PhantomData))
}

/// 将 `Vec<T>` 序列化为逗号分隔的字符串
#[allow(clippy::ptr_arg)]
pub fn ser_comma_separated<S, T>(items: &Vec<T>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: Display,
{
    let text = items.iter().map(ToString::to_string).collect::<Vec<_>>().join(",");
    serializer.serialize_str(&text)
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    use super::*;

    #[derive(Debug, PartialEq, Deserialize, Serialize)]
    struct Example {
        #[serde(default, deserialize_with = "de_comma_separated", serialize_with = "ser_comma_separated")]
        ids: Vec<i32>,
    }

    #[test]
    fn missing_or_null_is_empty() {
        assert_eq!(serde_json::from_str::<Example>("{}").unwrap(), Example { ids: vec![] });
        assert_eq!(serde_json::from_str::<Example>(r#"{"ids": null}"#).unwrap(), Example { ids: vec![] });
        assert_eq!(serde_json::from_str::<Example>(r#"{"ids": ""}"#).unwrap(), Example { ids: vec![] });
    }

    #[test]
    fn keeps_order_and_skips_blanks() {
        let example: Example = serde_json::from_str(r#"{"ids": " 5 ,, -1 , 9"}"#).unwrap();
        assert_eq!(example.ids, vec![5, -1, 9]);
    }

    #[test]
    fn reports_parse_errors() {
        assert!(serde_json::from_str::<Example>(r#"{"ids": "1,x"}"#).is_err());
    }

    #[test]
    fn serializes_as_single_string() {
        let json = serde_json::to_string(&Example { ids: vec![1, 2, 3] }).unwrap();
        assert_eq!(json, r#"{"ids":"1,2,3"}"#);
    }
}
