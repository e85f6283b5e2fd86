use std::fmt;

use pagerkit_serde::flag::de_bool_or_str;
use pagerkit_serde::list::{de_comma_separated, ser_comma_separated};
use pagerkit_serde::num::de_str_or_num_to_i64;
use serde::{Deserialize, Serialize};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use strum::{Display, EnumString};

use crate::order::OrderSpec;
use crate::paginator::Paginator;

/// 未指定页码时使用的页码
pub const NO_PAGE: i64 = 1;
/// 不限制每页大小（只排序或查询全部）
pub const NO_ROW_LIMIT: i64 = i64::MAX;

/// 总记录数查询策略
///
/// `Unset` 表示由查询执行器自行决定。
#[derive(Copy, Clone, Default, Debug, Eq, PartialEq, Display, EnumString, SerializeDisplay, DeserializeFromStr)]
#[strum(ascii_case_insensitive)]
pub enum TotalCountMode {
    #[default]
    #[strum(serialize = "unset")]
    Unset,
    /// 先查数据，再查总数
    #[strum(serialize = "sync")]
    Sync,
    /// 数据与总数并发查询
    #[strum(serialize = "async")]
    Async,
}

/// 旧的布尔开关：`true` => 并发，`false` => 顺序，缺省 => 未指定
impl From<Option<bool>> for TotalCountMode {
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(true) => Self::Async,
            Some(false) => Self::Sync,
            None => Self::Unset,
        }
    }
}

/// 偏移量 + 条数的行窗口能力
pub trait OffsetLimit {
    /// 从 0 开始的偏移量
    fn offset(&self) -> i64;
    /// 最多返回的行数
    fn limit(&self) -> i64;
}

/// 外部的原始行窗口（offset, limit）
#[derive(Copy, Clone, Debug, Eq, PartialEq, derive_more::From)]
pub struct RowWindow {
    pub offset: i64,
    pub limit: i64,
}

impl RowWindow {
    #[inline]
    pub fn new(offset: i64, limit: i64) -> Self { Self { offset, limit } }
}

impl Default for RowWindow {
    fn default() -> Self { Self { offset: 0, limit: NO_ROW_LIMIT } }
}

impl OffsetLimit for RowWindow {
    #[inline]
    fn offset(&self) -> i64 { self.offset }

    #[inline]
    fn limit(&self) -> i64 { self.limit }
}

/// 分页查询请求
///
/// 页码、每页大小不做任何校验，越界的值在构造 [`Paginator`] 时统一修正。
///
/// # 字段
///
/// - `pageNumber`: 页码，从 1 开始
/// - `pageSize`: 每页大小，[`NO_ROW_LIMIT`] 表示不分页
/// - `orderItems`: 排序列表，顺序即优先级
/// - `wantTotalCount`: 是否查询总记录数
/// - `totalCountMode`: 总记录数查询策略，兼容旧字段 `totalCountAsync` 的布尔值
///
/// # 示例
/// ```rust
/// use pagerkit_core::request::PageRequest;
///
/// let json = r#"{"pageNumber": "3", "pageSize": 10, "orderItems": "age.desc,name"}"#;
/// let request: PageRequest = serde_json::from_str(json).unwrap();
/// assert_eq!(request.page_number(), 3);
/// assert_eq!(request.offset(), 20);
/// assert_eq!(request.order_items().len(), 2);
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageRequest {
    #[serde(deserialize_with = "de_str_or_num_to_i64")]
    page_number: i64,
    #[serde(deserialize_with = "de_str_or_num_to_i64")]
    page_size: i64,
    #[serde(deserialize_with = "de_comma_separated", serialize_with = "ser_comma_separated")]
    order_items: Vec<OrderSpec>,
    want_total_count: bool,
    #[serde(alias = "totalCountAsync", deserialize_with = "de_bool_or_str")]
    total_count_mode: TotalCountMode,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page_number: NO_PAGE,
            page_size: NO_ROW_LIMIT,
            order_items: Vec::new(),
            want_total_count: false,
            total_count_mode: TotalCountMode::Unset,
        }
    }
}

/// 构造
impl PageRequest {
    /// 分页查询，默认查询总记录数
    pub fn new(page_number: i64, page_size: i64) -> Self { Self::with_orders(page_number, page_size, Vec::new()) }

    /// 只查询前 N 条，不查询总记录数
    pub fn top(page_size: i64) -> Self { Self { page_size, ..Self::default() } }

    pub fn with_total_count(page_number: i64, page_size: i64, want_total_count: bool) -> Self {
        Self { want_total_count, ..Self::with_orders(page_number, page_size, Vec::new()) }
    }

    /// 只排序，不分页，不查询总记录数
    pub fn sorted(order_items: Vec<OrderSpec>) -> Self { Self { order_items, ..Self::default() } }

    /// 分页 + 排序，默认查询总记录数
    pub fn with_orders(page_number: i64, page_size: i64, order_items: Vec<OrderSpec>) -> Self {
        Self { page_number, page_size, order_items, want_total_count: true, total_count_mode: TotalCountMode::Unset }
    }

    /// 由外部的 offset/limit 推算页码
    ///
    /// `limit <= 0` 无法推算页码，退化为不分页请求。
    pub fn from_offset_limit<W>(window: &W) -> Self
    where
        W: OffsetLimit + ?Sized,
    {
        let limit = window.limit();
        if limit <= 0 {
            return Self::default();
        }
        Self { page_number: window.offset() / limit + 1, page_size: limit, ..Self::default() }
    }
}

/// 读取
impl PageRequest {
    #[inline]
    pub fn page_number(&self) -> i64 { self.page_number }

    #[inline]
    pub fn page_size(&self) -> i64 { self.page_size }

    #[inline]
    pub fn order_items(&self) -> &[OrderSpec] { &self.order_items }

    #[inline]
    pub fn want_total_count(&self) -> bool { self.want_total_count }

    #[inline]
    pub fn total_count_mode(&self) -> TotalCountMode { self.total_count_mode }

    #[inline]
    pub fn is_unlimited(&self) -> bool { self.page_size == NO_ROW_LIMIT }

    /// 查询总数之前的偏移量提示，页码小于 1 时为 0
    pub fn offset(&self) -> i64 {
        if self.page_number >= 1 {
            return (self.page_number - 1).saturating_mul(self.page_size);
        }
        0
    }

    /// 拿到总记录数之后构造分页器
    #[inline]
    pub fn paginator(&self, total_count: i64) -> Paginator {
        Paginator::new(self.page_number, self.page_size, total_count)
    }
}

/// 修改
impl PageRequest {
    pub fn set_page_number(&mut self, page_number: i64) { self.page_number = page_number; }

    pub fn set_page_size(&mut self, page_size: i64) { self.page_size = page_size; }

    pub fn set_order_items(&mut self, order_items: Vec<OrderSpec>) { self.order_items = order_items; }

    pub fn push_order(&mut self, order: OrderSpec) { self.order_items.push(order); }

    pub fn set_want_total_count(&mut self, want_total_count: bool) { self.want_total_count = want_total_count; }

    pub fn set_total_count_mode(&mut self, mode: TotalCountMode) { self.total_count_mode = mode; }

    #[must_use]
    pub fn order_by(mut self, order: OrderSpec) -> Self {
        self.push_order(order);
        self
    }

    #[must_use]
    pub fn with_count_mode(mut self, mode: TotalCountMode) -> Self {
        self.total_count_mode = mode;
        self
    }
}

impl OffsetLimit for PageRequest {
    #[inline]
    fn offset(&self) -> i64 { PageRequest::offset(self) }

    #[inline]
    fn limit(&self) -> i64 { self.page_size }
}

impl From<RowWindow> for PageRequest {
    fn from(window: RowWindow) -> Self { Self::from_offset_limit(&window) }
}

impl fmt::Display for PageRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let orders = self.order_items.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ");
        write!(
            f,
            "PageRequest {{pageNumber={}, pageSize={}, orderItems=[{}], wantTotalCount={}, totalCountMode={}}}",
            self.page_number, self.page_size, orders, self.want_total_count, self.total_count_mode
        )
    }
}

#[cfg(test)]
mod tests {
    use serde_test::{assert_tokens, Token};

    use super::*;

    mod construct {
        use super::*;

        #[test]
        fn default_is_unpaged() {
            let request = PageRequest::default();
            assert_eq!(request.page_number(), NO_PAGE);
            assert!(request.is_unlimited());
            assert!(!request.want_total_count());
            assert_eq!(request.total_count_mode(), TotalCountMode::Unset);
            assert!(request.order_items().is_empty());
        }

        #[test]
        fn paged_requests_count_by_default() {
            assert!(PageRequest::new(2, 10).want_total_count());
            assert!(!PageRequest::with_total_count(2, 10, false).want_total_count());
            assert!(!PageRequest::top(5).want_total_count());
            assert_eq!(PageRequest::top(5).page_size(), 5);
        }

        #[test]
        fn sorted_keeps_order_and_disables_paging() {
            let orders = vec![OrderSpec::desc("age").unwrap(), OrderSpec::asc("name").unwrap()];
            let request = PageRequest::sorted(orders.clone());
            assert_eq!(request.order_items(), orders.as_slice());
            assert!(request.is_unlimited());
            assert!(!request.want_total_count());
        }

        #[test]
        fn defaults_are_not_shared() {
            let mut a = PageRequest::new(1, 10);
            let b = PageRequest::new(1, 10);
            a.push_order(OrderSpec::asc("id").unwrap());
            assert_eq!(a.order_items().len(), 1);
            assert!(b.order_items().is_empty());
        }
    }

    mod window {
        use super::*;

        #[test]
        fn derives_page_from_offset() {
            let request = PageRequest::from(RowWindow::new(40, 20));
            assert_eq!(request.page_number(), 3);
            assert_eq!(request.page_size(), 20);
            assert_eq!(request.offset(), 40);
        }

        #[test]
        fn partial_offset_rounds_down() {
            let request = PageRequest::from(RowWindow::from((45, 20)));
            assert_eq!(request.page_number(), 3);
        }

        #[test]
        fn non_positive_limit_is_unpaged() {
            let request = PageRequest::from(RowWindow::new(10, 0));
            assert_eq!(request, PageRequest::default());
        }

        #[test]
        fn default_window_is_first_unlimited_page() {
            let request = PageRequest::from(RowWindow::default());
            assert_eq!(request.page_number(), 1);
            assert!(request.is_unlimited());
        }
    }

    #[test]
    fn offset_is_zero_below_first_page() {
        assert_eq!(PageRequest::new(0, 10).offset(), 0);
        assert_eq!(PageRequest::new(-4, 10).offset(), 0);
        assert_eq!(PageRequest::new(1, 10).offset(), 0);
        assert_eq!(PageRequest::new(4, 10).offset(), 30);
        assert_eq!(PageRequest::top(10).offset(), 0);
    }

    #[test]
    fn offset_limit_capability() {
        fn window_of(source: &dyn OffsetLimit) -> (i64, i64) { (source.offset(), source.limit()) }
        assert_eq!(window_of(&PageRequest::new(3, 25)), (50, 25));
    }

    #[test]
    fn setters_mutate_in_place() {
        let mut request = PageRequest::default();
        request.set_page_number(5);
        request.set_page_size(20);
        request.set_want_total_count(true);
        request.set_total_count_mode(TotalCountMode::Async);
        request.set_order_items(vec![OrderSpec::asc("id").unwrap()]);
        assert_eq!(request.offset(), 80);
        assert_eq!(request.total_count_mode(), TotalCountMode::Async);
        assert_eq!(
            request.to_string(),
            "PageRequest {pageNumber=5, pageSize=20, orderItems=[id.ASC], wantTotalCount=true, totalCountMode=async}"
        );
    }

    #[test]
    fn count_mode_serde() {
        assert_tokens(&TotalCountMode::Unset, &[Token::Str("unset")]);
        assert_tokens(&TotalCountMode::Sync, &[Token::Str("sync")]);
        assert_tokens(&TotalCountMode::Async, &[Token::Str("async")]);
    }

    #[test]
    fn deserialize_with_defaults() {
        let request: PageRequest = serde_json::from_str(r#"{"pageNumber": 2, "pageSize": "15"}"#).unwrap();
        assert_eq!(request.page_number(), 2);
        assert_eq!(request.page_size(), 15);
        assert!(!request.want_total_count());

        let request: PageRequest =
            serde_json::from_str(r#"{"orderItems": ["age.desc", "name"], "totalCountAsync": "async"}"#).unwrap();
        assert!(request.is_unlimited());
        assert_eq!(request.order_items()[0], OrderSpec::desc("age").unwrap());
        assert_eq!(request.total_count_mode(), TotalCountMode::Async);
    }

    #[test]
    fn legacy_bool_count_flag() {
        let mode_of = |json: &str| serde_json::from_str::<PageRequest>(json).unwrap().total_count_mode();

        assert_eq!(mode_of(r#"{"totalCountAsync": true}"#), TotalCountMode::Async);
        assert_eq!(mode_of(r#"{"totalCountAsync": false}"#), TotalCountMode::Sync);
        assert_eq!(mode_of(r#"{"totalCountAsync": null}"#), TotalCountMode::Unset);
        assert_eq!(mode_of(r#"{"totalCountAsync": "false"}"#), TotalCountMode::Sync);
        assert_eq!(mode_of(r#"{"totalCountMode": "SYNC"}"#), TotalCountMode::Sync);
        assert_eq!(mode_of(r#"{"totalCountMode": true}"#), TotalCountMode::Async);
        assert_eq!(mode_of("{}"), TotalCountMode::Unset);
    }

    #[test]
    fn rejects_unknown_count_mode() {
        assert!(serde_json::from_str::<PageRequest>(r#"{"totalCountMode": "later"}"#).is_err());
        assert!(serde_json::from_str::<PageRequest>(r#"{"totalCountAsync": 1}"#).is_err());
    }

    #[test]
    fn serialize_is_camel_case() {
        let request = PageRequest::new(2, 10).order_by(OrderSpec::desc("age").unwrap());
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "pageNumber": 2,
                "pageSize": 10,
                "orderItems": "age.DESC",
                "wantTotalCount": true,
                "totalCountMode": "unset",
            })
        );
    }
}
