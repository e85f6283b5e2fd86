use std::fmt;
use std::str::FromStr;

use serde_with::{DeserializeFromStr, SerializeDisplay};
use snafu::{ensure, Location, Snafu};
use strum::{Display, EnumString};

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum OrderError {
    #[snafu(display("order property must not be empty: {text:?}"))]
    EmptyProperty {
        text: String,
        #[snafu(implicit)]
        location: Location,
    },
}

/// 排序方向
#[derive(
    Copy, Clone, Default, Debug, Eq, PartialEq, Hash, Display, EnumString, SerializeDisplay, DeserializeFromStr,
)]
#[strum(ascii_case_insensitive)]
pub enum Direction {
    #[default]
    #[strum(serialize = "ASC")]
    Ascending,
    #[strum(serialize = "DESC")]
    Descending,
}

/// 单列排序信息：列名 + 排序方向
///
/// 文本形式为 `property[.direction]`，例如 `age.desc`、`user.name.asc`、`created_at`。
/// 只有最后一个 `.` 之后能被识别为方向时才按方向处理，否则整段视为列名。
///
/// # 示例
/// ```rust
/// use pagerkit_core::order::{Direction, OrderSpec};
///
/// let order: OrderSpec = "u.age.desc".parse().unwrap();
/// assert_eq!(order.property(), "u.age");
/// assert_eq!(order.direction(), Direction::Descending);
/// assert_eq!(order.to_string(), "u.age.DESC");
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Hash, SerializeDisplay, DeserializeFromStr)]
pub struct OrderSpec {
    property: String,
    direction: Direction,
}

impl OrderSpec {
    pub fn new(property: impl Into<String>, direction: Direction) -> Result<Self, OrderError> {
        let property = property.into();
        let trimmed = property.trim();
        ensure!(!trimmed.is_empty(), EmptyPropertySnafu { text: property.clone() });

        Ok(Self { property: trimmed.to_string(), direction })
    }

    #[inline]
    pub fn asc(property: impl Into<String>) -> Result<Self, OrderError> { Self::new(property, Direction::Ascending) }

    #[inline]
    pub fn desc(property: impl Into<String>) -> Result<Self, OrderError> { Self::new(property, Direction::Descending) }

    #[inline]
    pub fn property(&self) -> &str { &self.property }

    #[inline]
    pub fn direction(&self) -> Direction { self.direction }
}

impl fmt::Display for OrderSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}.{}", self.property, self.direction) }
}

impl FromStr for OrderSpec {
    type Err = OrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        match text.rsplit_once('.') {
            Some((property, suffix)) => match Direction::from_str(suffix.trim()) {
                Ok(direction) => Self::new(property, direction),
                Err(_) => Self::new(text, Direction::Ascending),
            },
            None => Self::new(text, Direction::Ascending),
        }
    }
}

/// 解析逗号分隔的排序列表，例如 `age.desc, name`
///
/// 空白片段会被忽略，列表顺序即排序优先级。
pub fn parse_order_list(text: &str) -> Result<Vec<OrderSpec>, OrderError> {
    text.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(OrderSpec::from_str)
        .collect()
}
