use topic_service::{fixtures, Config};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> anyhow::Result<()> {
    // Load config
    let config = Config::from_env()?;

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.service.log_level.clone()));
    if config.service.is_production() {
        tracing_subscriber::registry()
            .with(fmt::layer().json())
            .with(filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(fmt::layer())
            .with(filter)
            .init();
    }

    info!(
        "Starting {} (env={}, sort={}, page_size={})",
        config.service.service_name,
        config.service.env,
        config.feed.sort_mode,
        config.feed.page_size
    );

    let board = fixtures::seed_board()?;
    let feed = board.feed(config.feed.sort_mode, Some(config.feed.page_size));

    for (position, topic) in feed.iter().enumerate() {
        info!(
            rank = position + 1,
            topic_id = topic.id,
            likes = topic.likes,
            created_at = %topic.created_at.to_rfc3339(),
            messages = topic.messages,
            "{}",
            topic.title
        );
    }

    Ok(())
}
