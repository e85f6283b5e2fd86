use axum::response::{IntoResponse, Response};
use axum::Json;
use pagerkit_core::envelope::EnvelopeSerializer;
use pagerkit_core::result::PagedResult;
use serde::Serialize;

use crate::response::Reply;

/// 分页响应：`Reply { code: 0, message: "OK", data: <分页结构> }`
pub struct ApiPage<T> {
    result: PagedResult<T>,
    serializer: EnvelopeSerializer,
}

impl<T> ApiPage<T> {
    pub fn new(result: PagedResult<T>) -> Self { Self { result, serializer: EnvelopeSerializer::default() } }

    /// 使用指定的滑动窗口等配置渲染
    pub fn with_serializer(result: PagedResult<T>, serializer: EnvelopeSerializer) -> Self {
        Self { result, serializer }
    }
}

impl<T> From<PagedResult<T>> for ApiPage<T> {
    fn from(result: PagedResult<T>) -> Self { Self::new(result) }
}

impl<T> IntoResponse for ApiPage<T>
where
    T: Serialize,
{
    fn into_response(self) -> Response {
        let envelope = self.serializer.envelope(&self.result);
        Json(Reply::ok(envelope)).into_response()
    }
}
