use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use server::cli::{Cli, Command};
use server::config::AppConfig;
use server::database::init_db;
use server::state::AppState;
use server::templates::build_templates;
use server::utils::authoring;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();
    let config = AppConfig::load().context("Failed to load config")?;
    let db = init_db(&config.database)
        .await
        .context("Failed to initialize database")?;

    match cli.into_command() {
        Command::Serve => {}
        Command::CreateUser { username, email } => {
            let user = authoring::create_user(&db, &username, &email).await?;
            println!("Created user {} (id {})", user.username, user.id);
            return Ok(());
        }
        Command::CreateEntry {
            author,
            title,
            body,
        } => {
            let author = authoring::find_user_by_username(&db, &author).await?;
            let entry = authoring::create_entry(&db, author.id, &title, &body).await?;
            println!("Created entry {} at {}", entry.id, entry.get_absolute_url());
            return Ok(());
        }
        Command::EditEntry { id, title, body } => {
            let entry = authoring::update_entry(&db, id, &title, &body).await?;
            println!("Updated entry {} at {}", entry.id, entry.get_absolute_url());
            return Ok(());
        }
    }

    let templates = build_templates().context("Failed to compile templates")?;
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .context("Invalid server address")?;

    let state = AppState {
        db,
        config,
        templates: Arc::new(templates),
    };
    let app = server::build_router(state);

    info!("Server running at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
