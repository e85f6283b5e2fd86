use pagerkit_core::config::PaginationConfig;
use pagerkit_core::order::{parse_order_list, OrderError};
use pagerkit_core::request::{PageRequest, NO_PAGE};
use pagerkit_serde::num::de_opt_str_or_num_to_i64;
use serde::{Deserialize, Serialize};

/// 分页查询参数（query string）
///
/// 支持字符串或数字类型的页码和大小，缺省值由 [`PaginationConfig`] 决定。
///
/// # 字段
///
/// - `page`: 页码，从 1 开始，默认 1
/// - `limit`: 每页大小
/// - `sort`: 排序，例如 `age.desc,name`
/// - `count`: 是否查询总记录数
///
/// # 示例
/// ```rust
/// use pagerkit_api::request::PageQuery;
/// use pagerkit_core::config::PaginationConfig;
///
/// let query: PageQuery = serde_json::from_str(r#"{"page": "2", "limit": 20, "sort": "age.desc"}"#).unwrap();
/// let request = query.into_request(&PaginationConfig::default()).unwrap();
/// assert_eq!(request.page_number(), 2);
/// assert_eq!(request.offset(), 20);
/// ```
#[derive(Clone, Debug, Default, Deserialize, Serialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// 请求的页码，从 1 开始
    #[serde(default, deserialize_with = "de_opt_str_or_num_to_i64")]
    pub page: Option<i64>,
    /// 每页大小
    #[serde(default, deserialize_with = "de_opt_str_or_num_to_i64")]
    pub limit: Option<i64>,
    /// 排序，逗号分隔
    #[serde(default)]
    pub sort: Option<String>,
    /// 是否查询总记录数
    #[serde(default)]
    pub count: Option<bool>,
}

impl PageQuery {
    /// 按配置补全缺省值，只有排序参数不合法时失败
    pub fn into_request(self, config: &PaginationConfig) -> Result<PageRequest, OrderError> {
        let orders = match self.sort.as_deref() {
            Some(sort) => parse_order_list(sort)?,
            None => Vec::new(),
        };

        let mut request = PageRequest::with_orders(
            self.page.unwrap_or(NO_PAGE),
            config.effective_page_size(self.limit),
            orders,
        );
        request.set_want_total_count(self.count.unwrap_or(config.want_total_count));
        request.set_total_count_mode(config.total_count_mode);
        Ok(request)
    }
}
