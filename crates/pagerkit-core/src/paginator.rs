use std::fmt;

use serde::{Deserialize, Serialize};

/// 默认页码滑动窗口大小
pub const DEFAULT_SLIDER_WINDOW: i64 = 7;

/// 分页器
///
/// 根据页码、每页大小、总记录数计算总页数、当前页偏移量、上下页及页码滑动窗口。
/// 页码只在构造时修正一次：小于 1 修正为 1，超过末页修正为末页，没有数据时为 1。
/// 所有计算都是纯函数，任意整数输入都有确定的输出。
///
/// # 示例
/// ```rust
/// use pagerkit_core::paginator::Paginator;
///
/// let paginator = Paginator::new(3, 10, 25);
/// assert_eq!(paginator.total_pages(), 3);
/// assert_eq!(paginator.start_row(), 21);
/// assert_eq!(paginator.end_row(), 25);
/// assert!(paginator.is_last_page());
/// ```
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawPaginator")]
pub struct Paginator {
    page_number: i64,
    page_size: i64,
    total_count: i64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPaginator {
    page_number: i64,
    page_size: i64,
    total_count: i64,
}

impl From<RawPaginator> for Paginator {
    fn from(raw: RawPaginator) -> Self { Paginator::new(raw.page_number, raw.page_size, raw.total_count) }
}

impl Paginator {
    pub fn new(page_number: i64, page_size: i64, total_count: i64) -> Self {
        let normalized = compute_page_number(page_number, page_size, total_count);
        if normalized != page_number {
            tracing::trace!(requested = page_number, normalized, page_size, total_count, "page number clamped");
        }
        Self { page_number: normalized, page_size, total_count }
    }

    /// 当前页码（修正后）
    #[inline]
    pub fn page_number(&self) -> i64 { self.page_number }

    #[inline]
    pub fn page_size(&self) -> i64 { self.page_size }

    #[inline]
    pub fn total_count(&self) -> i64 { self.total_count }

    /// 总页数，没有数据或每页大小不合法时为 0
    pub fn total_pages(&self) -> i64 {
        if self.total_count <= 0 || self.page_size <= 0 {
            return 0;
        }
        ceil_div(self.total_count, self.page_size)
    }

    #[inline]
    pub fn is_first_page(&self) -> bool { self.page_number <= 1 }

    /// 是否末页，没有数据时同样为末页
    #[inline]
    pub fn is_last_page(&self) -> bool { self.page_number >= self.total_pages() }

    #[inline]
    pub fn has_prev_page(&self) -> bool { self.page_number - 1 >= 1 }

    #[inline]
    pub fn has_next_page(&self) -> bool { self.page_number < self.total_pages() }

    pub fn prev_page(&self) -> i64 {
        if self.has_prev_page() {
            return self.page_number - 1;
        }
        self.page_number
    }

    pub fn next_page(&self) -> i64 {
        if self.has_next_page() {
            return self.page_number + 1;
        }
        self.page_number
    }

    /// 页码是否不可点击：越界或就是当前页
    pub fn is_disabled_page(&self, page_number: i64) -> bool {
        page_number < 1 || page_number > self.total_pages() || page_number == self.page_number
    }

    /// 开始行 (1-based)
    pub fn start_row(&self) -> i64 {
        if self.page_size <= 0 || self.total_count <= 0 || self.page_number <= 0 {
            return 0;
        }
        (self.page_number - 1).saturating_mul(self.page_size).saturating_add(1)
    }

    /// 结束行 (1-based)
    pub fn end_row(&self) -> i64 {
        if self.page_size <= 0 || self.total_count <= 0 || self.page_number <= 0 {
            return 0;
        }
        self.page_size.saturating_mul(self.page_number).min(self.total_count)
    }

    /// 偏移量 (0-based)
    pub fn offset(&self) -> i64 {
        if self.page_number <= 0 {
            return 0;
        }
        (self.page_number - 1).saturating_mul(self.page_size)
    }

    /// 默认窗口大小的页码滑动窗口
    #[inline]
    pub fn slider(&self) -> Vec<i64> { self.slider_with(DEFAULT_SLIDER_WINDOW) }

    /// 页码滑动窗口，当前页尽可能居中，窗口不超过 `window` 个页码，也不超过总页数
    pub fn slider_with(&self, window: i64) -> Vec<i64> {
        link_page_numbers(self.page_number, self.total_pages(), window)
    }
}

impl fmt::Display for Paginator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Paginator {{pageNumber={}, pageSize={}, totalCount={}}}",
            self.page_number, self.page_size, self.total_count
        )
    }
}

#[inline]
fn ceil_div(total: i64, size: i64) -> i64 { total / size + i64::from(total % size > 0) }

/// 末页页码，最小为 1
fn compute_last_page_number(total_count: i64, page_size: i64) -> i64 {
    if page_size <= 0 {
        return 1;
    }
    ceil_div(total_count, page_size).max(1)
}

fn compute_page_number(page_number: i64, page_size: i64, total_count: i64) -> i64 {
    if page_number <= 1 {
        return 1;
    }
    let last_page = compute_last_page_number(total_count, page_size);
    if page_number == i64::MAX || page_number > last_page {
        return last_page;
    }
    page_number
}

fn link_page_numbers(current: i64, last_page: i64, window: i64) -> Vec<i64> {
    if window <= 0 {
        return Vec::new();
    }

    let half = window / 2;
    let mut start = current.saturating_sub(half).max(1);
    let end = start.saturating_add(window - 1).min(last_page);

    // 靠近末页时窗口不足，向前补齐
    if end - start + 1 < window {
        start = end.saturating_sub(window - 1).max(1);
    }

    (start..=end).collect()
}
