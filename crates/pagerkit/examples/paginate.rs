use std::path::PathBuf;

use pagerkit::log;
use pagerkit::paging::{EnvelopeSerializer, OrderSpec, PagedResult, PageRequest};
use pagerkit::settings::Settings;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = std::env::args().nth(1).map(PathBuf::from);
    let settings = Settings::load(path.as_deref())?;
    log::try_init(&settings.log)?;

    let users: Vec<String> = (1..=95).map(|id| format!("user-{id:03}")).collect();
    let request = PageRequest::new(i64::MAX, settings.pagination.default_page_size).order_by(OrderSpec::asc("id")?);

    // 模拟执行器：按请求的行窗口取数据
    let paginator = request.paginator(users.len() as i64);
    let rows = users
        .iter()
        .skip(paginator.offset() as usize)
        .take(paginator.page_size() as usize)
        .cloned()
        .collect();
    let result = PagedResult::new(rows, paginator);

    tracing::info!(%request, %paginator, "page computed");

    let envelope = EnvelopeSerializer::from_config(&settings.pagination).to_map(&result)?;
    println!("{}", serde_json::to_string_pretty(&envelope)?);
    Ok(())
}
