use std::marker::PhantomData;

use async_trait::async_trait;
use pagerkit_core::order::{Direction, OrderSpec};
use pagerkit_core::request::TotalCountMode;
use sea_orm::sea_query::{Alias, Order, SelectStatement};
use sea_orm::{ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QuerySelect, QueryTrait, Select};

use crate::source::PageSource;

/// 基于 SeaORM [`Select`] 的分页查询执行器
///
/// 排序列按名称拼入 `ORDER BY`（见 [`order_select`]），列名需由调用方保证可信。
pub struct SelectSource<'db, DB, Entity, Data, Error>
where
    Entity: EntityTrait,
{
    db: &'db DB,
    select: Select<Entity>,
    count_mode: TotalCountMode,
    phantom_data: PhantomData<fn() -> (Data, Error)>,
}

impl<'db, DB, Entity, Data, Error> SelectSource<'db, DB, Entity, Data, Error>
where
    Entity: EntityTrait,
{
    pub fn new(db: &'db DB, select: Select<Entity>) -> Self {
        Self { db, select, count_mode: TotalCountMode::Sync, phantom_data: PhantomData }
    }

    /// 请求未指定策略时使用的总记录数查询策略
    pub fn with_count_mode(mut self, mode: TotalCountMode) -> Self {
        self.count_mode = mode;
        self
    }
}

#[async_trait]
impl<'db, DB, Entity, Data, Error> PageSource for SelectSource<'db, DB, Entity, Data, Error>
where
    DB: ConnectionTrait + Send + Sync,
    Entity: EntityTrait,
    Entity::Model: Send + Sync + 'db,
    Data: From<Entity::Model> + Send,
    Error: From<DbErr> + Send,
{
    type Row = Data;
    type Error = Error;

    async fn fetch_rows(
        &self,
        offset: u64,
        limit: Option<u64>,
        orders: &[OrderSpec],
    ) -> Result<Vec<Self::Row>, Self::Error> {
        let select = order_select(self.select.clone(), orders);
        let models = select.offset((offset > 0).then_some(offset)).limit(limit).all(self.db).await?;
        tracing::debug!(offset, ?limit, rows = models.len(), "rows fetched");
        Ok(models.into_iter().map(Data::from).collect())
    }

    async fn count(&self) -> Result<u64, Self::Error> {
        let total = PaginatorTrait::count(self.select.clone(), self.db).await?;
        tracing::debug!(total, "total count fetched");
        Ok(total)
    }

    fn default_count_mode(&self) -> TotalCountMode { self.count_mode }
}

/// 按排序列表追加 `ORDER BY`，顺序即优先级
///
/// 列名中的 `.` 视为限定符：`age` => `"age"`，`u.age` => `"u"."age"`，`public.u.age` => `"public"."u"."age"`。
pub fn order_select<Entity>(mut select: Select<Entity>, orders: &[OrderSpec]) -> Select<Entity>
where
    Entity: EntityTrait,
{
    for order in orders {
        let direction = match order.direction() {
            Direction::Ascending => Order::Asc,
            Direction::Descending => Order::Desc,
        };
        order_by_property(QueryTrait::query(&mut select), order.property(), direction);
    }
    select
}

fn order_by_property(stmt: &mut SelectStatement, property: &str, direction: Order) {
    let parts: Vec<&str> = property.split('.').map(str::trim).collect();
    if parts.iter().any(|part| part.is_empty()) {
        stmt.order_by(Alias::new(property), direction);
        return;
    }

    match parts.as_slice() {
        [column] => stmt.order_by(Alias::new(*column), direction),
        [table, column] => stmt.order_by((Alias::new(*table), Alias::new(*column)), direction),
        [schema, table, column] => {
            stmt.order_by((Alias::new(*schema), Alias::new(*table), Alias::new(*column)), direction)
        }
        _ => stmt.order_by(Alias::new(property), direction),
    };
}
