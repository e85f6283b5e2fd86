use std::ops::Deref;

use crate::paginator::Paginator;
use crate::request::PageRequest;

/// 分页查询结果：当前页数据 + 分页器
///
/// 数据条数与分页器的对应关系由调用方在构造时保证，这里不做校验。
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PagedResult<T> {
    rows: Vec<T>,
    paginator: Paginator,
}

impl<T> PagedResult<T> {
    pub fn new(rows: Vec<T>, paginator: Paginator) -> Self { Self { rows, paginator } }

    /// 未查询总记录数时 `total_count` 传 `None`，按 0 处理
    pub fn from_request(rows: Vec<T>, request: &PageRequest, total_count: Option<i64>) -> Self {
        Self::new(rows, request.paginator(total_count.unwrap_or(0)))
    }

    #[inline]
    pub fn rows(&self) -> &[T] { &self.rows }

    #[inline]
    pub fn paginator(&self) -> &Paginator { &self.paginator }

    pub fn into_parts(self) -> (Vec<T>, Paginator) { (self.rows, self.paginator) }

    /// 转换数据类型，分页信息保持不变
    pub fn map<U, F>(self, f: F) -> PagedResult<U>
    where
        F: FnMut(T) -> U,
    {
        PagedResult { rows: self.rows.into_iter().map(f).collect(), paginator: self.paginator }
    }
}

impl<T> Deref for PagedResult<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target { &self.rows }
}

impl<T> IntoIterator for PagedResult<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter { self.rows.into_iter() }
}

impl<'a, T> IntoIterator for &'a PagedResult<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter { self.rows.iter() }
}
