use async_trait::async_trait;
use futures_util::future::try_join;
use pagerkit_core::order::OrderSpec;
use pagerkit_core::request::{PageRequest, TotalCountMode};
use pagerkit_core::result::PagedResult;

/// 分页查询执行器
///
/// 只负责按行窗口取数据和查询总记录数，分页计算由 [`fetch_page`] 完成。
#[async_trait]
pub trait PageSource: Send + Sync {
    /// 查询结果
    type Row: Send;
    /// 查询错误
    type Error: Send;

    /// 按偏移量、条数（`None` 为不限制）和排序取一页数据
    async fn fetch_rows(
        &self,
        offset: u64,
        limit: Option<u64>,
        orders: &[OrderSpec],
    ) -> Result<Vec<Self::Row>, Self::Error>;

    /// 查询总记录数
    async fn count(&self) -> Result<u64, Self::Error>;

    /// 请求未指定策略时使用的总记录数查询策略
    fn default_count_mode(&self) -> TotalCountMode { TotalCountMode::Sync }
}

/// 执行分页查询
///
/// - 不查询总记录数时，总记录数按 0 处理
/// - `Async` 策略下数据与总数并发查询，其余策略先查数据再查总数
/// - 不分页（或每页大小非正数）时不限制条数，偏移量为 0
pub async fn fetch_page<S>(source: &S, request: &PageRequest) -> Result<PagedResult<S::Row>, S::Error>
where
    S: PageSource + ?Sized,
{
    let (offset, limit) = row_window(request);
    let orders = request.order_items();

    let mode = match request.total_count_mode() {
        TotalCountMode::Unset => source.default_count_mode(),
        mode => mode,
    };

    let (rows, total_count) = if !request.want_total_count() {
        tracing::debug!(offset, ?limit, "fetch rows without total count");
        (source.fetch_rows(offset, limit, orders).await?, None)
    } else if mode == TotalCountMode::Async {
        tracing::debug!(offset, ?limit, "fetch rows and total count concurrently");
        let (rows, total) = try_join(source.fetch_rows(offset, limit, orders), source.count()).await?;
        (rows, Some(total))
    } else {
        tracing::debug!(offset, ?limit, "fetch rows then total count");
        let rows = source.fetch_rows(offset, limit, orders).await?;
        (rows, Some(source.count().await?))
    };

    let total_count = total_count.map(|total| i64::try_from(total).unwrap_or(i64::MAX));
    Ok(PagedResult::from_request(rows, request, total_count))
}

fn row_window(request: &PageRequest) -> (u64, Option<u64>) {
    if request.is_unlimited() || request.page_size() <= 0 {
        return (0, None);
    }
    let offset = u64::try_from(request.offset()).unwrap_or(0);
    let limit = u64::try_from(request.page_size()).ok();
    (offset, limit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_of_paged_request() {
        assert_eq!(row_window(&PageRequest::new(3, 10)), (20, Some(10)));
        assert_eq!(row_window(&PageRequest::new(-1, 10)), (0, Some(10)));
    }

    #[test]
    fn window_of_unpaged_request() {
        assert_eq!(row_window(&PageRequest::default()), (0, None));
        assert_eq!(row_window(&PageRequest::new(4, 0)), (0, None));
        assert_eq!(row_window(&PageRequest::new(2, -5)), (0, None));
    }
}
