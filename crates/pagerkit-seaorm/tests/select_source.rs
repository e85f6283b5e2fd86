use std::collections::BTreeMap;

use pagerkit_core::order::{parse_order_list, OrderSpec};
use pagerkit_core::request::PageRequest;
use pagerkit_seaorm::sea_orm::{DatabaseBackend, DbErr, EntityTrait, MockDatabase, QueryTrait, Value};
use pagerkit_seaorm::{fetch_page, order_select, SelectSource};

mod user {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "user")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        pub name: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

#[derive(Debug, PartialEq)]
struct UserName(String);

impl From<user::Model> for UserName {
    fn from(model: user::Model) -> Self { UserName(model.name) }
}

fn user(id: i32) -> user::Model { user::Model { id, name: format!("user-{id}") } }

#[tokio::test]
async fn fetches_rows_and_count_from_select() -> Result<(), DbErr> {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![user(21), user(22)]])
        .append_query_results([vec![BTreeMap::from([("num_items", Value::BigInt(Some(22)))])]])
        .into_connection();

    let request = PageRequest::new(3, 10).order_by(OrderSpec::desc("name").unwrap());
    let source = SelectSource::<_, user::Entity, UserName, DbErr>::new(&db, user::Entity::find());
    let result = fetch_page(&source, &request).await?;

    assert_eq!(result.rows(), &[UserName("user-21".into()), UserName("user-22".into())]);
    assert_eq!(result.paginator().total_count(), 22);
    assert_eq!(result.paginator().total_pages(), 3);
    assert_eq!(result.paginator().start_row(), 21);

    drop(source);
    let log = format!("{:?}", db.into_transaction_log());
    assert!(log.contains("ORDER BY"));
    assert!(log.contains("DESC"));
    assert!(log.contains("LIMIT"));
    assert!(log.contains("OFFSET"));
    assert!(log.contains("COUNT(*)"));
    Ok(())
}

#[tokio::test]
async fn skips_count_when_not_wanted() -> Result<(), DbErr> {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![user(1), user(2), user(3)]])
        .into_connection();

    let request = PageRequest::top(3);
    let source = SelectSource::<_, user::Entity, user::Model, DbErr>::new(&db, user::Entity::find());
    let result = fetch_page(&source, &request).await?;

    assert_eq!(result.len(), 3);
    assert_eq!(result.paginator().total_pages(), 0);

    drop(source);
    assert_eq!(db.into_transaction_log().len(), 1);
    Ok(())
}

#[test]
fn qualified_properties_become_column_references() {
    let orders = parse_order_list("u.age.desc, name, public.u.id").unwrap();
    let sql = order_select(user::Entity::find(), &orders).build(DatabaseBackend::Postgres).sql;

    assert!(sql.contains(r#"ORDER BY "u"."age" DESC, "name" ASC, "public"."u"."id" ASC"#), "{sql}");
    assert!(!sql.contains(r#""u.age""#), "{sql}");
}
