use serde::{Deserialize, Serialize};

use crate::paginator::DEFAULT_SLIDER_WINDOW;
use crate::request::TotalCountMode;

#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PaginationConfig {
    /// 未指定每页大小时使用
    pub default_page_size: i64,
    /// 每页大小上限，`None` 表示不限制
    pub max_page_size: Option<i64>,
    /// 页码滑动窗口大小
    pub slider_window: i64,
    /// 是否默认查询总记录数
    pub want_total_count: bool,
    /// 总记录数查询策略
    pub total_count_mode: TotalCountMode,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page_size: 10,
            max_page_size: None,
            slider_window: DEFAULT_SLIDER_WINDOW,
            want_total_count: true,
            total_count_mode: TotalCountMode::Unset,
        }
    }
}

impl PaginationConfig {
    /// 按配置修正每页大小：非正数取默认值，超过上限取上限
    pub fn effective_page_size(&self, requested: Option<i64>) -> i64 {
        let size = match requested {
            Some(size) if size > 0 => size,
            _ => self.default_page_size,
        };
        match self.max_page_size {
            Some(max) if max > 0 => size.min(max),
            _ => size,
        }
    }
}
