use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::config::PaginationConfig;
use crate::paginator::{Paginator, DEFAULT_SLIDER_WINDOW};
use crate::result::PagedResult;

/// 分页结果的传输结构（扁平）
///
/// 字段固定为：`totalCount`、`totalPages`、`pageNumber`、`pageSize`、`rows`、`startRow`、`endRow`、
/// `offset`、`slider`、`prevPage`、`nextPage`、`isFirstPage`、`isLastPage`、`hasPrevPage`、`hasNextPage`。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedEnvelope<'a, T> {
    pub total_count: i64,
    pub total_pages: i64,
    pub page_number: i64,
    pub page_size: i64,
    pub rows: &'a [T],
    pub start_row: i64,
    pub end_row: i64,
    pub offset: i64,
    pub slider: Vec<i64>,
    pub prev_page: i64,
    pub next_page: i64,
    pub is_first_page: bool,
    pub is_last_page: bool,
    pub has_prev_page: bool,
    pub has_next_page: bool,
}

/// 将 [`PagedResult`] 展开为传输结构
///
/// 只持有滑动窗口大小，不修改输入。
///
/// # 示例
/// ```rust
/// use pagerkit_core::envelope::EnvelopeSerializer;
/// use pagerkit_core::paginator::Paginator;
/// use pagerkit_core::result::PagedResult;
///
/// let result = PagedResult::new(vec!["u21", "u22"], Paginator::new(3, 10, 22));
/// let map = EnvelopeSerializer::default().to_map(&result).unwrap();
/// assert_eq!(map["pageNumber"], 3);
/// assert_eq!(map["rows"], serde_json::json!(["u21", "u22"]));
/// ```
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct EnvelopeSerializer {
    slider_window: i64,
}

impl Default for EnvelopeSerializer {
    fn default() -> Self { Self { slider_window: DEFAULT_SLIDER_WINDOW } }
}

impl EnvelopeSerializer {
    pub fn new(slider_window: i64) -> Self { Self { slider_window } }

    pub fn from_config(config: &PaginationConfig) -> Self { Self::new(config.slider_window) }

    #[inline]
    pub fn slider_window(&self) -> i64 { self.slider_window }

    pub fn envelope<'a, T>(&self, result: &'a PagedResult<T>) -> PagedEnvelope<'a, T> {
        let paginator = result.paginator();
        PagedEnvelope {
            total_count: paginator.total_count(),
            total_pages: paginator.total_pages(),
            page_number: paginator.page_number(),
            page_size: paginator.page_size(),
            rows: result.rows(),
            start_row: paginator.start_row(),
            end_row: paginator.end_row(),
            offset: paginator.offset(),
            slider: paginator.slider_with(self.slider_window),
            prev_page: paginator.prev_page(),
            next_page: paginator.next_page(),
            is_first_page: paginator.is_first_page(),
            is_last_page: paginator.is_last_page(),
            has_prev_page: paginator.has_prev_page(),
            has_next_page: paginator.has_next_page(),
        }
    }

    /// 展开为键值结构，只有行数据序列化失败时返回错误
    pub fn to_map<T>(&self, result: &PagedResult<T>) -> Result<Map<String, Value>, serde_json::Error>
    where
        T: Serialize,
    {
        let paginator = result.paginator();
        let mut map = Map::with_capacity(15);
        map.insert("totalCount".into(), paginator.total_count().into());
        map.insert("totalPages".into(), paginator.total_pages().into());
        map.insert("pageNumber".into(), paginator.page_number().into());
        map.insert("pageSize".into(), paginator.page_size().into());
        map.insert("rows".into(), serde_json::to_value(result.rows())?);
        map.insert("startRow".into(), paginator.start_row().into());
        map.insert("endRow".into(), paginator.end_row().into());
        map.insert("offset".into(), paginator.offset().into());
        map.insert("slider".into(), paginator.slider_with(self.slider_window).into());
        map.insert("prevPage".into(), paginator.prev_page().into());
        map.insert("nextPage".into(), paginator.next_page().into());
        map.insert("isFirstPage".into(), paginator.is_first_page().into());
        map.insert("isLastPage".into(), paginator.is_last_page().into());
        map.insert("hasPrevPage".into(), paginator.has_prev_page().into());
        map.insert("hasNextPage".into(), paginator.has_next_page().into());
        Ok(map)
    }
}

impl<T> Serialize for PagedResult<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        EnvelopeSerializer::default().envelope(self).serialize(serializer)
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawEnvelope<T> {
    #[serde(default = "Vec::new")]
    rows: Vec<T>,
    page_number: i64,
    page_size: i64,
    total_count: i64,
}

/// 只读取 `rows`、`pageNumber`、`pageSize`、`totalCount`，其余字段由分页器重新计算
impl<'de, T> Deserialize<'de> for PagedResult<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawEnvelope::<T>::deserialize(deserializer)?;
        Ok(PagedResult::new(raw.rows, Paginator::new(raw.page_number, raw.page_size, raw.total_count)))
    }
}
