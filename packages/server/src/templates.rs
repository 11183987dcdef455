use sea_orm::ConnectionTrait;
use tera::{Context, Tera};

use crate::config::AppConfig;
use crate::error::AppError;
use crate::models::entry::HistoryItem;
use crate::utils::entry::entry_history;

pub const INDEX: &str = "index.html";
pub const ENTRY_DETAIL: &str = "blog/entry_detail.html";

/// Compile every page template. Names ending in `.html` are autoescaped.
pub fn build_templates() -> Result<Tera, tera::Error> {
    let mut tera = Tera::default();
    tera.add_raw_templates(vec![
        ("base.html", include_str!("../templates/base.html")),
        (
            "blog/entry_history.html",
            include_str!("../templates/blog/entry_history.html"),
        ),
        (INDEX, include_str!("../templates/index.html")),
        (
            ENTRY_DETAIL,
            include_str!("../templates/blog/entry_detail.html"),
        ),
    ])?;
    Ok(tera)
}

/// Context shared by every page: site title and the recent-entries sidebar.
pub async fn base_context<C: ConnectionTrait>(
    db: &C,
    config: &AppConfig,
) -> Result<Context, AppError> {
    let history: Vec<HistoryItem> = entry_history(db)
        .await?
        .iter()
        .map(HistoryItem::from)
        .collect();

    let mut ctx = Context::new();
    ctx.insert("site_title", &config.site.title);
    ctx.insert("history", &history);
    Ok(ctx)
}
