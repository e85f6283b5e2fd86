use serde::{Deserialize, Serialize};

/// 统一响应结构
///
/// # 字段
///
/// - `code`: 响应状态码，0 表示成功
/// - `message`: 响应消息
/// - `data`: 响应数据，可选
#[derive(Debug, Deserialize, Serialize)]
pub struct Reply<T = ()> {
    /// 响应状态码
    pub code: i32,
    /// 响应消息
    pub message: String,
    /// 响应数据
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Reply<T> {
    pub fn ok(data: T) -> Self { Self { code: 0, message: "OK".to_string(), data: Some(data) } }

    pub fn err(code: i32, message: impl Into<String>) -> Self { Self { code, message: message.into(), data: None } }
}
